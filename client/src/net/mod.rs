//! Networking modules for the backend HTTP surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `config` resolves the build-time backend
//! address and token sources, and `types` re-exports the shared wire
//! schema.

pub mod api;
pub mod config;
pub mod types;
