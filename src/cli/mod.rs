//! CLI command handlers for LazyPalette.
//!
//! This module provides headless, scriptable access to palette generation,
//! color conversion and export for automation and testing.

pub mod common;
pub mod config;
pub mod convert;
pub mod export;
pub mod generate;
pub mod harmony;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use harmony::HarmonyArgs;
