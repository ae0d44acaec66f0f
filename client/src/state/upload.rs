//! Upload/analysis state machine for the current file cycle.
//!
//! DESIGN
//! ======
//! One cycle spans: select file, fetch preview, optionally fetch analysis.
//! Selecting a new file starts a new cycle and bumps a generation counter;
//! completions that arrive for an older generation are discarded, which is
//! how in-flight requests superseded by a newer selection are ignored
//! without sending any cancellation to the backend.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::types::{Analysis, ApiError, Operation, Preview};

/// Derived position in the per-cycle state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadPhase {
    /// No file selected, or the last preview attempt failed.
    Idle,
    /// Preview request in flight.
    PreviewPending,
    /// Preview available, analysis not requested or failed.
    PreviewReady,
    /// Analysis request in flight.
    AnalysisPending,
    /// Analysis available.
    AnalysisReady,
}

/// Shared upload state backed by the gateway client.
///
/// At most one preview and one analysis result exist at any time; both
/// belong to the most recent selection.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    /// Name of the currently selected file, kept across preview failures
    /// so the user can retry.
    pub file_name: Option<String>,
    /// Monotonic selection counter used to discard stale completions.
    pub generation: u64,
    /// Structural preview of the current file, once loaded.
    pub preview: Option<Preview>,
    /// AI analysis of the current file, once loaded.
    pub analysis: Option<Analysis>,
    /// Preview request in flight.
    pub preview_pending: bool,
    /// Analysis request in flight.
    pub analysis_pending: bool,
    /// Current error; each new failure overwrites the previous one.
    pub error: Option<ApiError>,
    /// Operation the current error came from, for message selection.
    pub error_source: Operation,
}

impl UploadState {
    /// Current machine position, derived from the flags.
    #[must_use]
    pub fn phase(&self) -> UploadPhase {
        if self.analysis_pending {
            UploadPhase::AnalysisPending
        } else if self.preview_pending {
            UploadPhase::PreviewPending
        } else if self.analysis.is_some() {
            UploadPhase::AnalysisReady
        } else if self.preview.is_some() {
            UploadPhase::PreviewReady
        } else {
            UploadPhase::Idle
        }
    }

    /// User-facing message for the current error, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|error| error.user_message(self.error_source))
    }

    /// Begin a new cycle for a selected file.
    ///
    /// Returns the generation the caller must hand back with the preview
    /// completion, or `None` when the selection was rejected (no token, or
    /// not a `.csv` name) and no request must be issued. Rejections only
    /// set the error slot; prior results stay rendered.
    pub fn select_file(&mut self, name: &str, authorized: bool) -> Option<u64> {
        if !authorized {
            self.error = Some(ApiError::TokenRequired);
            self.error_source = Operation::Preview;
            return None;
        }
        if !wire::endpoint::is_csv_name(name) {
            self.error = Some(ApiError::InvalidFileType);
            self.error_source = Operation::Preview;
            return None;
        }
        self.generation += 1;
        self.file_name = Some(name.to_owned());
        self.preview = None;
        self.analysis = None;
        self.error = None;
        self.preview_pending = true;
        self.analysis_pending = false;
        Some(self.generation)
    }

    /// Store a completed preview. Returns `false` when the completion is
    /// stale (a newer file was selected while it was in flight).
    pub fn preview_loaded(&mut self, generation: u64, preview: Preview) -> bool {
        if generation != self.generation {
            return false;
        }
        self.preview_pending = false;
        self.preview = Some(preview);
        true
    }

    /// Surface a preview failure. The file selection is retained so the
    /// user can retry; stale failures are dropped silently.
    pub fn preview_failed(&mut self, generation: u64, error: ApiError) {
        if generation != self.generation {
            return;
        }
        self.preview_pending = false;
        self.error = Some(error);
        self.error_source = Operation::Preview;
    }

    /// Begin the analysis step for the current cycle.
    ///
    /// Only valid once a preview has completed; returns the generation for
    /// the completion callback, or `None` when rejected.
    pub fn begin_analysis(&mut self, authorized: bool) -> Option<u64> {
        if self.preview.is_none() || self.preview_pending || self.analysis_pending {
            return None;
        }
        if !authorized {
            self.error = Some(ApiError::TokenRequired);
            self.error_source = Operation::Analyze;
            return None;
        }
        self.analysis = None;
        self.error = None;
        self.analysis_pending = true;
        Some(self.generation)
    }

    /// Store a completed analysis. Returns `false` for stale completions.
    pub fn analysis_loaded(&mut self, generation: u64, analysis: Analysis) -> bool {
        if generation != self.generation {
            return false;
        }
        self.analysis_pending = false;
        self.analysis = Some(analysis);
        true
    }

    /// Surface an analysis failure; the prior preview stays intact, so the
    /// machine falls back to `PreviewReady`.
    pub fn analysis_failed(&mut self, generation: u64, error: ApiError) {
        if generation != self.generation {
            return;
        }
        self.analysis_pending = false;
        self.error = Some(error);
        self.error_source = Operation::Analyze;
    }
}
