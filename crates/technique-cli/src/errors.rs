//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; anything else exits with 1.

use std::fmt;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// The session was interrupted before anything was written
    Cancelled,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
            CliError::Cancelled => write!(f, "Aborted; nothing was written."),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Hint to show below the error message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::Cancelled => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Cancelled => exit_codes::CANCELLED,
        }
    }
}
