//! Structural preview card: counts, column list, and sample table.
//!
//! Column order comes from `preview.columns` verbatim; the row maps are
//! only looked up by name so the backend's ordering is never disturbed.

#[cfg(test)]
#[path = "preview_card_test.rs"]
mod preview_card_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::net::types::{CellValue, Preview};

/// Preview summary and bounded sample table for the current file.
#[component]
pub fn PreviewCard(preview: Preview) -> impl IntoView {
    let table = (!preview.sample_rows.is_empty()).then(|| {
        view! {
            <table class="preview-card__table">
                <thead>
                    <tr>
                        {preview
                            .columns
                            .iter()
                            .map(|column| {
                                let dtype = type_label(&preview.data_types, column);
                                view! {
                                    <th>
                                        {column.clone()}
                                        <span class="preview-card__dtype">{dtype}</span>
                                    </th>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {preview
                        .sample_rows
                        .iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    {preview
                                        .columns
                                        .iter()
                                        .map(|column| view! { <td>{cell_text(row, column)}</td> })
                                        .collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
    });

    view! {
        <div class="preview-card">
            <h3>"Vista Previa"</h3>
            <div class="preview-card__facts">
                <div class="preview-card__fact">
                    <span class="preview-card__fact-label">"Filas:"</span>
                    <span>{preview.total_rows.to_string()}</span>
                </div>
                <div class="preview-card__fact">
                    <span class="preview-card__fact-label">"Columnas:"</span>
                    <span>{preview.columns.join(", ")}</span>
                </div>
            </div>
            {table}
        </div>
    }
}

fn cell_text(row: &BTreeMap<String, CellValue>, column: &str) -> String {
    row.get(column).map(ToString::to_string).unwrap_or_default()
}

fn type_label(types: &BTreeMap<String, String>, column: &str) -> String {
    types.get(column).cloned().unwrap_or_default()
}
