//! LazyPalette Library
//!
//! This library provides the core of the LazyPalette application: validated
//! color types and format conversion, the palette state store, exporters,
//! configuration, and the terminal UI and CLI built on top of them.

// Module declarations
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;

pub use error::{ColorParseError, PaletteError};
