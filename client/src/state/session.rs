//! Access-credential state for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard is demo-token gated: every upload requires a credential,
//! which can come from the user prompt, from a build-time configured
//! token, or from the stored value of a previous visit. Which sources
//! apply is a named policy rather than parallel code paths.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Credential state provided via context.
///
/// A present token means the gate is open. The token is never expired or
/// cleared client-side; a backend 401 surfaces as an error and leaves the
/// stored value untouched.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// The active credential, trimmed and non-empty when present.
    pub token: Option<String>,
}

impl SessionState {
    /// Whether gated operations may be attempted.
    #[must_use]
    pub fn authorized(&self) -> bool {
        self.token.is_some()
    }
}

/// Trim a submitted token; empty or whitespace-only input reads as absent.
#[must_use]
pub fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Where the initial credential may come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenPolicy {
    /// Only a user-submitted token opens the gate.
    Prompt,
    /// Only the build-time configured token opens the gate.
    Env,
    /// Stored user token first, configured token as fallback.
    #[default]
    PromptWithEnvFallback,
}

impl TokenPolicy {
    /// Parse a policy label from configuration.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "prompt" => Some(Self::Prompt),
            "env" => Some(Self::Env),
            "prompt-env" => Some(Self::PromptWithEnvFallback),
            _ => None,
        }
    }

    /// Resolve the initial credential from the allowed sources.
    #[must_use]
    pub fn resolve(self, stored: Option<String>, configured: Option<String>) -> Option<String> {
        let stored = stored.as_deref().and_then(normalize_token);
        let configured = configured.as_deref().and_then(normalize_token);
        match self {
            Self::Prompt => stored,
            Self::Env => configured,
            Self::PromptWithEnvFallback => stored.or(configured),
        }
    }
}
