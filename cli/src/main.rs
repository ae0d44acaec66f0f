//! Terminal client for the analytics dashboard backend.
//!
//! Speaks the same HTTP contract as the browser client: multipart CSV
//! uploads with an optional bearer token, and the shared `wire` error
//! mapping for non-2xx statuses.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use wire::endpoint;
use wire::{Analysis, ApiError, Health, Preview};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not a .csv file: {0}")]
    NotCsv(String),
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "analytics-cli", about = "AI analytics dashboard API CLI")]
struct Cli {
    #[arg(long, env = "ANALYTICS_API_URL", default_value = "http://localhost:8002")]
    base_url: String,

    #[arg(long, env = "ANALYTICS_DEMO_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the backend health endpoint.
    Health,
    /// Upload a CSV and print its structural preview.
    Preview { file: PathBuf },
    /// Upload a CSV and print the AI analysis.
    Analyze { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let base = endpoint::normalize_base(&cli.base_url);
    let token = cli.token.as_deref();

    match cli.command {
        Command::Health => run_health(&base).await,
        Command::Preview { file } => run_preview(&base, token, &file).await,
        Command::Analyze { file } => run_analyze(&base, token, &file).await,
    }
}

async fn run_health(base: &str) -> Result<(), CliError> {
    let response = reqwest::Client::new()
        .get(endpoint::health_url(base))
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16(), None).into());
    }
    let health = response.json::<Health>().await?;
    println!("{} ({})", health.status, health.timestamp);
    Ok(())
}

async fn run_preview(base: &str, token: Option<&str>, file: &Path) -> Result<(), CliError> {
    let preview =
        upload_csv::<Preview>(&endpoint::preview_url(base), token, file).await?;
    print_json(&serde_json::to_value(&preview)?)
}

async fn run_analyze(base: &str, token: Option<&str>, file: &Path) -> Result<(), CliError> {
    let analysis =
        upload_csv::<Analysis>(&endpoint::analyze_url(base), token, file).await?;
    print_json(&serde_json::to_value(&analysis)?)
}

/// POST a CSV as multipart form data and decode the JSON response.
///
/// The `.csv` suffix gate runs before any bytes are read so invalid
/// selections never touch the network, matching the browser client.
async fn upload_csv<T: serde::de::DeserializeOwned>(
    url: &str,
    token: Option<&str>,
    path: &Path,
) -> Result<T, CliError> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_owned();
    if !endpoint::is_csv_name(&name) {
        return Err(CliError::NotCsv(path.display().to_string()));
    }

    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(name)
        .mime_str("text/csv")?;
    let form = reqwest::multipart::Form::new().part(endpoint::UPLOAD_FIELD, part);

    let request = reqwest::Client::new().post(url).multipart(form);
    let request = if let Some(token) = token {
        request.bearer_auth(token)
    } else {
        request
    };

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("detail").and_then(|d| d.as_str()).map(str::to_owned));
        return Err(ApiError::from_status(status.as_u16(), detail).into());
    }
    Ok(response.json::<T>().await?)
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
