//! Error handling module
//!
//! Defines the closed release-configuration error taxonomy and the
//! CLI-facing error type with exit codes

pub mod types;

pub use types::*;
