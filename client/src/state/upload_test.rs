use super::*;

use std::collections::BTreeMap;

use wire::CellValue;

fn preview_fixture() -> Preview {
    let mut row = BTreeMap::new();
    row.insert("a".to_owned(), CellValue::Number(1.0));
    row.insert("b".to_owned(), CellValue::Text("x".to_owned()));
    let mut types = BTreeMap::new();
    types.insert("a".to_owned(), "int64".to_owned());
    types.insert("b".to_owned(), "object".to_owned());
    Preview {
        columns: vec!["a".to_owned(), "b".to_owned()],
        sample_rows: vec![row],
        total_rows: 10,
        data_types: types,
    }
}

fn analysis_fixture() -> Analysis {
    Analysis {
        summary: "resumen".to_owned(),
        insights: vec!["i1".to_owned()],
        recommendations: vec!["r1".to_owned()],
        key_metrics: BTreeMap::new(),
        data_quality: wire::DataQuality::default(),
        visualizations_suggested: Vec::new(),
        tokens_used: 100,
        timestamp: "2024-05-01T10:00:00".to_owned(),
    }
}

fn gated_with_preview() -> (UploadState, u64) {
    let mut state = UploadState::default();
    let generation = state.select_file("data.csv", true).unwrap();
    assert!(state.preview_loaded(generation, preview_fixture()));
    (state, generation)
}

// =============================================================
// Defaults and phase derivation
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = UploadState::default();
    assert_eq!(state.phase(), UploadPhase::Idle);
    assert!(state.file_name.is_none());
    assert!(state.error.is_none());
}

// =============================================================
// File selection
// =============================================================

#[test]
fn selecting_csv_enters_preview_pending() {
    let mut state = UploadState::default();
    let generation = state.select_file("data.csv", true);
    assert_eq!(generation, Some(1));
    assert_eq!(state.phase(), UploadPhase::PreviewPending);
    assert_eq!(state.file_name.as_deref(), Some("data.csv"));
    assert!(state.error.is_none());
}

#[test]
fn selecting_without_token_is_rejected_before_any_request() {
    let mut state = UploadState::default();
    assert_eq!(state.select_file("data.csv", false), None);
    assert_eq!(state.error, Some(ApiError::TokenRequired));
    assert_eq!(state.phase(), UploadPhase::Idle);
}

#[test]
fn selecting_non_csv_surfaces_invalid_file_type() {
    let mut state = UploadState::default();
    assert_eq!(state.select_file("data.txt", true), None);
    assert_eq!(state.error, Some(ApiError::InvalidFileType));
    assert_eq!(state.phase(), UploadPhase::Idle);
    assert!(state.file_name.is_none());
}

#[test]
fn selecting_non_csv_keeps_prior_results() {
    let (mut state, _) = gated_with_preview();
    assert_eq!(state.select_file("notes.txt", true), None);
    assert_eq!(state.error, Some(ApiError::InvalidFileType));
    assert!(state.preview.is_some());
    assert_eq!(state.phase(), UploadPhase::PreviewReady);
}

#[test]
fn new_selection_discards_prior_results() {
    let (mut state, first) = gated_with_preview();
    let second = state.select_file("other.csv", true).unwrap();
    assert!(second > first);
    assert!(state.preview.is_none());
    assert!(state.analysis.is_none());
    assert_eq!(state.phase(), UploadPhase::PreviewPending);
}

// =============================================================
// Preview completion
// =============================================================

#[test]
fn preview_success_is_reflected_verbatim() {
    let mut state = UploadState::default();
    let generation = state.select_file("data.csv", true).unwrap();
    assert!(state.preview_loaded(generation, preview_fixture()));
    let preview = state.preview.as_ref().unwrap();
    assert_eq!(preview.columns, vec!["a", "b"]);
    assert_eq!(preview.total_rows, 10);
    assert_eq!(state.phase(), UploadPhase::PreviewReady);
}

#[test]
fn preview_failure_returns_to_idle_and_keeps_selection() {
    let mut state = UploadState::default();
    let generation = state.select_file("data.csv", true).unwrap();
    state.preview_failed(generation, ApiError::RateLimited);
    assert_eq!(state.phase(), UploadPhase::Idle);
    assert_eq!(state.error, Some(ApiError::RateLimited));
    assert_eq!(state.file_name.as_deref(), Some("data.csv"));
    // No retry is scheduled: the machine stays put until a new selection.
    assert!(!state.preview_pending);
}

#[test]
fn stale_preview_completion_is_discarded() {
    let mut state = UploadState::default();
    let first = state.select_file("first.csv", true).unwrap();
    let second = state.select_file("second.csv", true).unwrap();

    let mut stale = preview_fixture();
    stale.total_rows = 1;
    assert!(!state.preview_loaded(first, stale));
    assert!(state.preview.is_none());
    assert_eq!(state.phase(), UploadPhase::PreviewPending);

    let mut fresh = preview_fixture();
    fresh.total_rows = 2;
    assert!(state.preview_loaded(second, fresh));
    assert_eq!(state.preview.as_ref().unwrap().total_rows, 2);
}

#[test]
fn stale_preview_failure_is_discarded() {
    let mut state = UploadState::default();
    let first = state.select_file("first.csv", true).unwrap();
    let _second = state.select_file("second.csv", true).unwrap();
    state.preview_failed(first, ApiError::Unauthorized);
    assert!(state.error.is_none());
    assert_eq!(state.phase(), UploadPhase::PreviewPending);
}

// =============================================================
// Analysis step
// =============================================================

#[test]
fn analysis_requires_a_completed_preview() {
    let mut state = UploadState::default();
    assert_eq!(state.begin_analysis(true), None);
    let _ = state.select_file("data.csv", true).unwrap();
    // Preview still pending.
    assert_eq!(state.begin_analysis(true), None);
}

#[test]
fn analysis_requires_a_token() {
    let (mut state, _) = gated_with_preview();
    assert_eq!(state.begin_analysis(false), None);
    assert_eq!(state.error, Some(ApiError::TokenRequired));
    assert_eq!(state.phase(), UploadPhase::PreviewReady);
}

#[test]
fn analysis_success_completes_the_cycle() {
    let (mut state, generation) = gated_with_preview();
    assert_eq!(state.begin_analysis(true), Some(generation));
    assert_eq!(state.phase(), UploadPhase::AnalysisPending);
    assert!(state.analysis_loaded(generation, analysis_fixture()));
    assert_eq!(state.phase(), UploadPhase::AnalysisReady);
}

#[test]
fn analysis_unauthorized_falls_back_to_preview_ready() {
    let (mut state, generation) = gated_with_preview();
    state.begin_analysis(true).unwrap();
    state.analysis_failed(generation, ApiError::Unauthorized);
    assert_eq!(state.phase(), UploadPhase::PreviewReady);
    assert_eq!(state.error, Some(ApiError::Unauthorized));
    // The prior preview survives the failure.
    assert_eq!(state.preview.as_ref().unwrap().columns, vec!["a", "b"]);
}

#[test]
fn rate_limited_analysis_schedules_no_retry() {
    let (mut state, generation) = gated_with_preview();
    state.begin_analysis(true).unwrap();
    state.analysis_failed(generation, ApiError::RateLimited);
    assert_eq!(state.error, Some(ApiError::RateLimited));
    assert!(!state.analysis_pending);
    // A second begin_analysis only happens on explicit user action.
    assert_eq!(state.phase(), UploadPhase::PreviewReady);
}

#[test]
fn double_begin_analysis_is_rejected_while_pending() {
    let (mut state, _) = gated_with_preview();
    assert!(state.begin_analysis(true).is_some());
    assert_eq!(state.begin_analysis(true), None);
}

#[test]
fn stale_analysis_completion_is_discarded() {
    let (mut state, generation) = gated_with_preview();
    state.begin_analysis(true).unwrap();
    let _newer = state.select_file("newer.csv", true).unwrap();
    assert!(!state.analysis_loaded(generation, analysis_fixture()));
    assert!(state.analysis.is_none());
    assert_eq!(state.phase(), UploadPhase::PreviewPending);
}

// =============================================================
// Error surfacing
// =============================================================

#[test]
fn new_failures_overwrite_the_previous_error() {
    let mut state = UploadState::default();
    let _ = state.select_file("data.txt", true);
    assert_eq!(state.error, Some(ApiError::InvalidFileType));
    let generation = state.select_file("data.csv", true).unwrap();
    assert!(state.error.is_none());
    state.preview_failed(generation, ApiError::Unauthorized);
    assert_eq!(state.error, Some(ApiError::Unauthorized));
}

#[test]
fn error_message_uses_the_failed_operation() {
    let (mut state, generation) = gated_with_preview();
    state.begin_analysis(true).unwrap();
    state.analysis_failed(generation, ApiError::RequestFailed { detail: None });
    assert_eq!(state.error_message().as_deref(), Some("Error en el análisis"));
}
