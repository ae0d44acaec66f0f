//! Application state shared through Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the access credential; `upload` owns the per-cycle
//! upload/analysis state machine. Both are plain structs with pure
//! transition methods so they test natively.

pub mod session;
pub mod upload;
