//! # Technique Core
//!
//! Core library for Technique - an interactive editor for technique
//! (attack or procedure) records stored as JSON files.
//!
//! This crate provides the record model, edit semantics, and storage
//! independent of the terminal interface.
//!
//! ## Architecture
//!
//! - **record**: The record, its nested structures, and how edits apply
//! - **field**: Field names and their value kinds
//! - **store**: Validated, atomic writes of `<technique_id>.json`

pub mod error;
pub mod field;
pub mod record;
pub mod store;

pub use error::{Result, TechniqueError};
pub use field::{Field, FieldKind};
pub use record::{Detection, ExploitationSteps, FieldValue, Record};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
