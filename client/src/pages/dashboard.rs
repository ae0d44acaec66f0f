//! Dashboard page: token gate, CSV upload, preview, and AI analysis.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It sequences the two-step flow (select file,
//! fetch preview, on demand fetch analysis) and converts every failure
//! into the single current-error slot of the shared upload state.
//! Completions carry the generation they were started with; the state
//! machine drops the ones a newer selection has superseded.
//!
//! The file input element is the holder of the selected `File` handle;
//! dropped files are written back into it so the analyze step re-reads
//! the same bytes the preview step uploaded.

use leptos::prelude::*;

use crate::components::analysis_panel::AnalysisPanel;
use crate::components::error_banner::ErrorBanner;
use crate::components::preview_card::PreviewCard;
use crate::components::status_bar::StatusBar;
use crate::components::token_modal::TokenModal;
use crate::state::session::SessionState;
use crate::state::upload::UploadState;

/// Single-page dashboard. Gated behind the token modal until a credential
/// is present.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let upload = expect_context::<RwSignal<UploadState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_token_submit = Callback::new(move |token: String| {
        crate::util::auth::store_token(&token);
        session.update(|state| state.token = Some(token));
        upload.update(|state| state.error = None);
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            if let Some(file) = input_file(&ev) {
                start_preview(session, upload, file);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &ev;
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| ev.prevent_default();

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            // Mirror the drop into the input element so the analyze step
            // finds the same file there.
            if let Some(input) = file_input.get_untracked() {
                input.set_files(Some(&files));
            }
            start_preview(session, upload, file);
        }
    };

    let on_analyze = move |_| {
        #[cfg(feature = "csr")]
        start_analysis(session, upload, file_input);
    };

    view! {
        <Show
            when=move || session.get().authorized()
            fallback=move || {
                view! {
                    <div class="gate-screen">
                        <TokenModal on_submit=on_token_submit/>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Analytics Dashboard AI"</h1>
                    <StatusBar/>
                </header>

                <main class="dashboard-page__main">
                    <section class="upload-card">
                        <h2>"Carga tu archivo CSV"</h2>
                        <p class="upload-card__hint">"Sube tus datos y obtén insights automáticos"</p>

                        <div class="dropzone" on:dragover=on_drag_over on:drop=on_drop>
                            <label class="dropzone__label" for="file-upload">
                                "Haz clic o arrastra tu archivo CSV aquí"
                            </label>
                            <input
                                id="file-upload"
                                class="dropzone__input"
                                type="file"
                                accept=".csv"
                                node_ref=file_input
                                on:change=on_file_change
                            />
                        </div>

                        {move || {
                            upload
                                .get()
                                .file_name
                                .map(|name| view! { <div class="file-chip">{name}</div> })
                        }}

                        <Show when=move || upload.get().preview_pending>
                            <p class="loading-row">"Cargando preview..."</p>
                        </Show>

                        {move || {
                            upload.get().preview.map(|preview| view! { <PreviewCard preview=preview/> })
                        }}

                        <Show when=move || upload.get().preview.is_some()>
                            <div class="upload-card__actions">
                                <button
                                    class="btn btn--primary"
                                    on:click=on_analyze
                                    disabled=move || upload.get().analysis_pending
                                >
                                    {move || {
                                        if upload.get().analysis_pending {
                                            "Analizando con IA..."
                                        } else {
                                            "Analizar Datos"
                                        }
                                    }}
                                </button>
                            </div>
                        </Show>
                    </section>

                    {move || {
                        upload
                            .get()
                            .error_message()
                            .map(|message| view! { <ErrorBanner message=message/> })
                    }}

                    {move || {
                        upload
                            .get()
                            .analysis
                            .map(|analysis| view! { <AnalysisPanel analysis=analysis/> })
                    }}
                </main>
            </div>
        </Show>
    }
}

#[cfg(feature = "csr")]
fn input_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Validate the selection, then issue the preview upload for the returned
/// generation. Rejected selections never reach the network.
#[cfg(feature = "csr")]
fn start_preview(session: RwSignal<SessionState>, upload: RwSignal<UploadState>, file: web_sys::File) {
    let name = file.name();
    let authorized = session.get_untracked().authorized();
    let mut started = None;
    upload.update(|state| started = state.select_file(&name, authorized));
    let Some(generation) = started else {
        return;
    };

    let token = session.get_untracked().token.clone();
    leptos::task::spawn_local(async move {
        let result = crate::net::api::preview_csv(&file, token.as_deref()).await;
        upload.update(|state| match result {
            Ok(preview) => {
                if !state.preview_loaded(generation, preview) {
                    log::warn!("discarded stale preview response (generation {generation})");
                }
            }
            Err(error) => state.preview_failed(generation, error),
        });
    });
}

/// Issue the analysis upload for the current cycle, if the machine allows.
///
/// The file is re-read from the input element; a name mismatch with the
/// active cycle (a rejected selection left other bytes in the input) is a
/// no-op rather than an upload of the wrong file.
#[cfg(feature = "csr")]
fn start_analysis(
    session: RwSignal<SessionState>,
    upload: RwSignal<UploadState>,
    file_input: NodeRef<leptos::html::Input>,
) {
    let Some(file) = active_file(file_input, &upload.get_untracked()) else {
        return;
    };
    let authorized = session.get_untracked().authorized();
    let mut started = None;
    upload.update(|state| started = state.begin_analysis(authorized));
    let Some(generation) = started else {
        return;
    };

    let token = session.get_untracked().token.clone();
    leptos::task::spawn_local(async move {
        let result = crate::net::api::analyze_csv(&file, token.as_deref()).await;
        upload.update(|state| match result {
            Ok(analysis) => {
                if !state.analysis_loaded(generation, analysis) {
                    log::warn!("discarded stale analysis response (generation {generation})");
                }
            }
            Err(error) => state.analysis_failed(generation, error),
        });
    });
}

#[cfg(feature = "csr")]
fn active_file(file_input: NodeRef<leptos::html::Input>, state: &UploadState) -> Option<web_sys::File> {
    let file = file_input.get_untracked()?.files()?.get(0)?;
    let name = file.name();
    if state.file_name.as_deref() == Some(name.as_str()) {
        Some(file)
    } else {
        None
    }
}
