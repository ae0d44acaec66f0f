//! Build-time configuration for the deployed client.
//!
//! The artifact is static WASM, so configuration is captured from the
//! build environment with `option_env!` rather than read at runtime:
//! `ANALYTICS_API_URL` for the backend address, `ANALYTICS_DEMO_TOKEN`
//! for an optional pre-provisioned credential, `ANALYTICS_TOKEN_POLICY`
//! for the token-source policy label.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Local development backend, used when no address is configured.
const DEFAULT_API_BASE: &str = "http://localhost:8002";

fn raw_api_base() -> &'static str {
    option_env!("ANALYTICS_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Normalized backend base address for URL construction.
#[must_use]
pub fn api_base() -> String {
    wire::endpoint::normalize_base(raw_api_base())
}

/// Build-time configured credential, if the deployment ships one.
#[must_use]
pub fn configured_token() -> Option<&'static str> {
    option_env!("ANALYTICS_DEMO_TOKEN")
}

/// Configured token-policy label, parsed by the session state.
#[must_use]
pub fn token_policy_label() -> Option<&'static str> {
    option_env!("ANALYTICS_TOKEN_POLICY")
}
