//! Data models for colors, palette slots and saved palettes.
//!
//! Models are independent of UI and storage; the palette store in
//! `services` is the only place that mutates them as application state.

pub mod format;
pub mod harmony;
pub mod hex;
pub mod rgb;
pub mod saved;
pub mod slot;

// Re-export all model types
pub use format::{format_color, parse_formatted, ColorFormat};
pub use harmony::{harmonize, HarmonyRule};
pub use hex::HexColor;
pub use rgb::RgbColor;
pub use saved::{PaletteId, SavedPalette};
pub use slot::ColorSlot;
