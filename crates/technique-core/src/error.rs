//! Error types for technique core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for technique operations.
pub type Result<T> = std::result::Result<T, TechniqueError>;

/// Core error type for technique operations.
#[derive(Debug, Error)]
pub enum TechniqueError {
    /// Field name that is not part of the record
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Record failed a precondition check
    #[error("Validation error: {0}")]
    Validation(String),

    /// Value does not fit the field it was applied to
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON encoding error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for TechniqueError {
    fn from(err: std::io::Error) -> Self {
        TechniqueError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TechniqueError {
    fn from(err: serde_json::Error) -> Self {
        TechniqueError::Serialization(err.to_string())
    }
}
