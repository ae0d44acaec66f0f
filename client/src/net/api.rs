//! REST gateway client for the analysis backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`. Native: the probe stub
//! returns `None` so pure-logic tests compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Both upload calls map HTTP outcomes to the `wire::ApiError` taxonomy:
//! 401 to `Unauthorized`, 429 to `RateLimited`, everything else (including
//! transport failures and malformed bodies) to `RequestFailed`. When the
//! backend error body carries a `detail` string it is captured for the
//! generic kind. No retry or backoff happens here; failures surface once.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Health;
#[cfg(feature = "csr")]
use super::types::{Analysis, ApiError, Preview};

#[cfg(any(test, feature = "csr"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Probe `GET /health`. Returns `None` when the backend is unreachable or
/// reports a non-2xx status; never gates the upload operations.
pub async fn fetch_health() -> Option<Health> {
    #[cfg(feature = "csr")]
    {
        let url = wire::endpoint::health_url(&super::config::api_base());
        let response = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !response.ok() {
            return None;
        }
        response.json::<Health>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Upload a CSV to `POST /preview/csv` and decode the structural preview.
///
/// # Errors
///
/// Returns the mapped [`ApiError`] kind for any non-2xx status, transport
/// failure, or undecodable body.
#[cfg(feature = "csr")]
pub async fn preview_csv(file: &web_sys::File, token: Option<&str>) -> Result<Preview, ApiError> {
    let url = wire::endpoint::preview_url(&super::config::api_base());
    post_csv(&url, file, token).await
}

/// Upload a CSV to `POST /analyze/csv` and decode the AI analysis.
///
/// # Errors
///
/// Same mapping as [`preview_csv`].
#[cfg(feature = "csr")]
pub async fn analyze_csv(file: &web_sys::File, token: Option<&str>) -> Result<Analysis, ApiError> {
    let url = wire::endpoint::analyze_url(&super::config::api_base());
    post_csv(&url, file, token).await
}

#[cfg(feature = "csr")]
async fn post_csv<T: serde::de::DeserializeOwned>(
    url: &str,
    file: &web_sys::File,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| transport_failure())?;
    // The browser fills in the filename and content type from the File.
    form.append_with_blob(wire::endpoint::UPLOAD_FIELD, file)
        .map_err(|_| transport_failure())?;

    let mut builder = gloo_net::http::Request::post(url);
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer_value(token));
    }
    let response = builder
        .body(form)
        .map_err(|_| transport_failure())?
        .send()
        .await
        .map_err(|_| transport_failure())?;

    if !response.ok() {
        return Err(error_from_response(&response).await);
    }
    response.json::<T>().await.map_err(|_| transport_failure())
}

#[cfg(feature = "csr")]
fn transport_failure() -> ApiError {
    ApiError::RequestFailed { detail: None }
}

#[cfg(feature = "csr")]
async fn error_from_response(response: &gloo_net::http::Response) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ApiError::from_status(response.status(), detail)
}
