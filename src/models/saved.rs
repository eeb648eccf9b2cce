//! Saved palette snapshots.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::HexColor;

/// Identifier of a saved palette.
///
/// Issued from a counter that only moves forward, so deleting a palette never
/// changes or frees another palette's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteId(u64);

impl PaletteId {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PaletteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// An immutable snapshot of palette colors (lock flags are not kept).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    /// Unique id within the store's lifetime
    pub id: PaletteId,
    /// Display name
    pub name: String,
    /// Colors in slot order
    pub colors: Vec<HexColor>,
    /// When the snapshot was taken
    pub created_at: DateTime<Local>,
}

impl SavedPalette {
    /// Name given to a palette saved without an explicit one.
    #[must_use]
    pub fn default_name(id: PaletteId) -> String {
        format!("Palette {id}")
    }
}
