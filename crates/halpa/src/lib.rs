//! Validate JSON documents against JSON Schema with per-field error messages.
//!
//! This crate re-exports [`halpa_schema`] and, behind the `cli` feature,
//! ships the `halpa` command-line tool.
//!
//! # Crate Structure
//!
//! - [`schema`] — schema loading, validation, and error reduction

/// Re-export schema types.
pub mod schema {
    pub use halpa_schema::*;
}

pub use halpa_schema::{is_valid, validate, SchemaSource, Validation};
