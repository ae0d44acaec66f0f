//! Wire schema re-exports for the client/backend boundary.
//!
//! The shapes live in the `wire` crate so the terminal client deserializes
//! the same contract; this module keeps client-side imports short.

pub use wire::{Analysis, ApiError, CellValue, DataQuality, Health, MetricValue, Operation, Preview, VisualizationSuggestion};
