//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyPalette";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "lazypalette";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "LAZYPALETTE_LOG";

/// Log file written in TUI mode, inside the config directory.
pub const LOG_FILE_NAME: &str = "lazypalette.log";
