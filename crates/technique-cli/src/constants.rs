//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (I/O, unreadable config).
    pub const FAILURE: i32 = 1;

    /// Invalid user input (record failed validation).
    pub const INVALID_INPUT: i32 = 4;

    /// Interrupted by the user (128 + SIGINT).
    pub const CANCELLED: i32 = 130;
}
