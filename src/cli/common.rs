//! Shared CLI error type, exit codes and argument helpers.

use std::fmt;

use crate::config::{Config, MAX_SLOTS, MIN_SLOTS};
use crate::models::HexColor;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad color or option value
    ValidationError = 1,
    /// Filesystem, config or clipboard failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Which exit code the failure maps to
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the user configuration; a missing file yields defaults.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Parses a color argument, mapping failures to a validation error.
pub fn parse_color(text: &str) -> CliResult<HexColor> {
    HexColor::parse(text).map_err(|e| CliError::validation(format!("Invalid color: {e}")))
}

/// Checks a requested color count against the supported slot range.
pub fn check_count(count: usize) -> CliResult<usize> {
    if (MIN_SLOTS..=MAX_SLOTS).contains(&count) {
        Ok(count)
    } else {
        Err(CliError::validation(format!(
            "Count must be between {MIN_SLOTS} and {MAX_SLOTS}, got {count}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 1);
        assert_eq!(CliError::io("disk").exit_code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_parse_color_is_validation_error() {
        let err = parse_color("#12345").unwrap_err();
        assert_eq!(err.kind, ExitCode::ValidationError);
        assert!(err.message.contains("#12345"));
    }

    #[test]
    fn test_check_count_bounds() {
        assert!(check_count(0).is_err());
        assert_eq!(check_count(12), Ok(12));
        assert!(check_count(13).is_err());
    }
}
