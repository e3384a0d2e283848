//! Shared types and models for the AgroNexo farm dashboard
//!
//! This crate contains the records served by the farm backend, the form
//! drafts the dashboard edits, and the pure values derived from them. It is
//! used by the native client and by the browser front-end (via WASM).

pub mod derived;
pub mod models;
pub mod types;
pub mod validation;

pub use derived::*;
pub use models::*;
pub use types::*;
pub use validation::*;
