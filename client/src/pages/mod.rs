//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The dashboard page owns the upload/analysis orchestration and delegates
//! rendering details to `components`.

pub mod dashboard;
