//! Root component: context providers and initial credential resolution.
//!
//! The token store is read once here, at mount, and combined with the
//! build-time configured token according to the configured policy. After
//! that, the only writer is the token modal submission.

use leptos::prelude::*;

use crate::net::config;
use crate::pages::dashboard::DashboardPage;
use crate::state::session::{SessionState, TokenPolicy};
use crate::state::upload::UploadState;

/// Application root. Provides the session and upload state as context and
/// renders the dashboard.
#[component]
pub fn App() -> impl IntoView {
    let policy = config::token_policy_label()
        .and_then(TokenPolicy::from_label)
        .unwrap_or_default();
    let token = policy.resolve(
        crate::util::auth::stored_token(),
        config::configured_token().map(str::to_owned),
    );

    let session = RwSignal::new(SessionState { token });
    let upload = RwSignal::new(UploadState::default());
    provide_context(session);
    provide_context(upload);

    view! { <DashboardPage/> }
}
