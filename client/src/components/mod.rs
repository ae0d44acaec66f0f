//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render results and chrome while the dashboard page owns the
//! orchestration; they receive data by prop or read shared state from
//! Leptos context providers.

pub mod analysis_panel;
pub mod error_banner;
pub mod preview_card;
pub mod status_bar;
pub mod token_modal;
