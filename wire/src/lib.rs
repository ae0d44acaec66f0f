//! Shared wire schema for the analytics dashboard backend.
//!
//! This crate owns the JSON representation exchanged with the analysis
//! service so the browser client and the terminal client deserialize the
//! same shapes. Loosely-typed backend maps (metric values, sample-row
//! cells) are modeled as closed variant enums instead of open JSON values,
//! which keeps downstream handling exhaustive.


pub mod endpoint;
pub mod error;

pub use error::{ApiError, Operation};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a preview sample row.
///
/// The backend emits whatever the CSV parser produced for the cell, so the
/// wire value can be a number, a string, a boolean, or null for missing
/// data. Column order is carried by [`Preview::columns`], not by the row
/// maps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value in the source data.
    Null,
    /// Boolean cell.
    Bool(bool),
    /// Numeric cell (integers arrive as whole floats).
    Number(f64),
    /// Textual cell.
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

/// A key-metric value: the backend contract allows numbers or free text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Numeric metric.
    Number(f64),
    /// Textual metric.
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Liveness response from `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Backend-reported status label (e.g. `"healthy"`).
    pub status: String,
    /// ISO 8601 timestamp of the probe on the backend clock.
    pub timestamp: String,
}

/// Structural preview of an uploaded CSV, from `POST /preview/csv`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    /// Column names in source order. Order and spelling are authoritative;
    /// the client must not reorder or rename them.
    pub columns: Vec<String>,
    /// Bounded sample of rows, each a column-name to cell mapping.
    pub sample_rows: Vec<BTreeMap<String, CellValue>>,
    /// Total number of data rows in the file.
    pub total_rows: u64,
    /// Inferred type label per column (parser dtype strings).
    pub data_types: BTreeMap<String, String>,
}

/// Data-quality assessment attached to an analysis.
///
/// All fields are model-generated and optional; absence is not an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataQuality {
    /// Overall rating label (`"buena"` / `"media"` / `"baja"` or free text).
    #[serde(default, rename = "calidad_general")]
    pub overall: Option<String>,
    /// Detected issues, possibly empty.
    #[serde(default)]
    pub issues: Option<Vec<String>>,
    /// Completeness indicator. The backend asks for a percentage string but
    /// does not enforce it, so a bare number is tolerated too.
    #[serde(default, rename = "completitud")]
    pub completeness: Option<MetricValue>,
}

/// A suggested chart for the analyzed data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationSuggestion {
    /// Chart type label (e.g. `"bar_chart"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Columns involved in the chart.
    pub columns: Vec<String>,
    /// Suggested title.
    pub title: String,
}

/// Full AI analysis of an uploaded CSV, from `POST /analyze/csv`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Executive summary, plain text.
    pub summary: String,
    /// Key findings, in the order the model produced them.
    pub insights: Vec<String>,
    /// Actionable recommendations, ordered.
    pub recommendations: Vec<String>,
    /// Named metrics extracted from the data.
    pub key_metrics: BTreeMap<String, MetricValue>,
    /// Data-quality assessment.
    #[serde(default)]
    pub data_quality: DataQuality,
    /// Suggested visualizations, ordered.
    pub visualizations_suggested: Vec<VisualizationSuggestion>,
    /// Model tokens consumed while generating the analysis.
    pub tokens_used: u64,
    /// ISO 8601 generation timestamp on the backend clock.
    pub timestamp: String,
}
