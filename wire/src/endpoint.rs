//! Endpoint paths and base-address handling for the analysis backend.
//!
//! Both clients build request URLs through these helpers so the
//! normalization rule stays in one place: unscoped hostnames default to
//! `https://`, and trailing slashes are stripped before the path is
//! appended, which prevents double slashes in constructed URLs.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Liveness probe path.
pub const HEALTH_PATH: &str = "/health";
/// Structural preview path.
pub const PREVIEW_PATH: &str = "/preview/csv";
/// Full analysis path.
pub const ANALYZE_PATH: &str = "/analyze/csv";

/// Multipart form field carrying the CSV bytes on both POST endpoints.
pub const UPLOAD_FIELD: &str = "file";

/// Normalize a configured backend address.
///
/// Addresses without an `http://` or `https://` scheme are assumed to be
/// secure hosts and get `https://` prepended. Trailing slash characters
/// are stripped.
#[must_use]
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };
    with_scheme.trim_end_matches('/').to_owned()
}

/// Build the health probe URL for a normalized base address.
#[must_use]
pub fn health_url(base: &str) -> String {
    format!("{base}{HEALTH_PATH}")
}

/// Build the preview URL for a normalized base address.
#[must_use]
pub fn preview_url(base: &str) -> String {
    format!("{base}{PREVIEW_PATH}")
}

/// Build the analysis URL for a normalized base address.
#[must_use]
pub fn analyze_url(base: &str) -> String {
    format!("{base}{ANALYZE_PATH}")
}

/// Whether a file name satisfies the `.csv` suffix invariant.
///
/// The check mirrors the backend's own gate: suffix only, case-sensitive,
/// no content sniffing.
#[must_use]
pub fn is_csv_name(name: &str) -> bool {
    name.ends_with(".csv")
}
