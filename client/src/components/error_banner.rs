//! Error banner for the current failure, if any.

use leptos::prelude::*;

/// Dismissal-free banner; each new failure overwrites the previous one and
/// a successful action clears it.
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-banner__text">{message}</span>
        </div>
    }
}
