//! Analysis results panel: summary, findings, metrics, quality, charts.

#[cfg(test)]
#[path = "analysis_panel_test.rs"]
mod analysis_panel_test;

use leptos::prelude::*;

use crate::net::types::{Analysis, VisualizationSuggestion};

/// Full rendering of an [`Analysis`] payload.
#[component]
pub fn AnalysisPanel(analysis: Analysis) -> impl IntoView {
    let metrics_section = (!analysis.key_metrics.is_empty()).then(|| {
        view! {
            <section class="analysis-card__section">
                <h3>"Métricas clave"</h3>
                <dl class="analysis-card__metrics">
                    {analysis
                        .key_metrics
                        .iter()
                        .map(|(name, value)| {
                            view! {
                                <div class="analysis-card__metric">
                                    <dt>{name.clone()}</dt>
                                    <dd>{value.to_string()}</dd>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
            </section>
        }
    });

    let overall = analysis.data_quality.overall.clone().map(|overall| {
        view! {
            <p>
                <span class="analysis-card__quality-label">"Calidad general: "</span>
                {overall}
            </p>
        }
    });
    let completeness = analysis.data_quality.completeness.as_ref().map(|completeness| {
        let rendered = completeness.to_string();
        view! {
            <p>
                <span class="analysis-card__quality-label">"Completitud: "</span>
                {rendered}
            </p>
        }
    });
    let issues = analysis.data_quality.issues.clone().unwrap_or_default();
    let issues_list = (!issues.is_empty()).then(|| {
        view! {
            <ul class="analysis-card__issues">
                {issues
                    .iter()
                    .map(|issue| view! { <li>{issue.clone()}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
    });

    let visualizations_section = (!analysis.visualizations_suggested.is_empty()).then(|| {
        view! {
            <section class="analysis-card__section">
                <h3>"Visualizaciones sugeridas"</h3>
                <ul>
                    {analysis
                        .visualizations_suggested
                        .iter()
                        .map(|suggestion| view! { <li>{visualization_line(suggestion)}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        }
    });

    let footer = footer_line(analysis.tokens_used, &analysis.timestamp);

    view! {
        <div class="analysis-card">
            <h2>"Resumen del Análisis"</h2>
            <p class="analysis-card__summary">{analysis.summary.clone()}</p>

            <div class="analysis-card__grid">
                <section class="analysis-card__section">
                    <h3>"Insights"</h3>
                    <ul>
                        {analysis
                            .insights
                            .iter()
                            .map(|insight| view! { <li>{insight.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
                <section class="analysis-card__section">
                    <h3>"Recomendaciones"</h3>
                    <ul>
                        {analysis
                            .recommendations
                            .iter()
                            .map(|recommendation| view! { <li>{recommendation.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
            </div>

            {metrics_section}

            <section class="analysis-card__section">
                <h3>"Calidad de datos"</h3>
                {overall}
                {completeness}
                {issues_list}
            </section>

            {visualizations_section}

            <p class="analysis-card__footer">{footer}</p>
        </div>
    }
}

fn visualization_line(suggestion: &VisualizationSuggestion) -> String {
    format!(
        "{} ({}): {}",
        suggestion.title,
        suggestion.kind,
        suggestion.columns.join(", ")
    )
}

fn footer_line(tokens_used: u64, timestamp: &str) -> String {
    format!("Tokens usados: {tokens_used} · {timestamp}")
}
