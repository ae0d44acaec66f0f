//! Client-side error taxonomy for backend operations.
//!
//! HTTP outcomes collapse into a small set of recoverable kinds; the
//! user-facing Spanish messages live here as a kind-to-message mapping so
//! call sites never hardcode display strings.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Which backend operation produced a failure.
///
/// Only used to pick the generic failure message; the taxonomy itself is
/// operation-independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Operation {
    /// Structural preview upload.
    #[default]
    Preview,
    /// Full analysis upload.
    Analyze,
}

/// Failure kinds surfaced to the presentation layer.
///
/// Every kind is recoverable; none aborts the session. A 401 does not
/// clear the stored credential, it only surfaces [`ApiError::Unauthorized`]
/// until the user submits a new token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// An authenticated operation was attempted with no credential present.
    #[error("token required")]
    TokenRequired,
    /// The selected file does not carry the `.csv` suffix.
    #[error("only .csv files are accepted")]
    InvalidFileType,
    /// Backend returned HTTP 401; the token is presumed invalid or expired.
    #[error("unauthorized (HTTP 401)")]
    Unauthorized,
    /// Backend returned HTTP 429.
    #[error("rate limited (HTTP 429)")]
    RateLimited,
    /// Any other non-2xx status, transport error, or body parse failure.
    #[error("request failed: {}", .detail.as_deref().unwrap_or("no detail"))]
    RequestFailed {
        /// Backend-provided detail text, when the error body carried one.
        detail: Option<String>,
    },
}

impl ApiError {
    /// Map a non-2xx HTTP status to an error kind.
    ///
    /// `detail` is the backend's error text when the response body carried
    /// one (FastAPI-style `{"detail": ...}`); it is only retained for the
    /// generic kind.
    #[must_use]
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            _ => Self::RequestFailed { detail },
        }
    }

    /// User-facing message for this kind, in the application locale.
    #[must_use]
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            Self::TokenRequired => "Debes introducir un token de acceso primero".to_owned(),
            Self::InvalidFileType => "Solo se aceptan archivos CSV".to_owned(),
            Self::Unauthorized => "No autorizado".to_owned(),
            Self::RateLimited => "Demasiadas peticiones, intenta más tarde".to_owned(),
            Self::RequestFailed { detail: Some(detail) } => detail.clone(),
            Self::RequestFailed { detail: None } => match operation {
                Operation::Preview => "Error al cargar preview".to_owned(),
                Operation::Analyze => "Error en el análisis".to_owned(),
            },
        }
    }
}
