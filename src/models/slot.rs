//! Live palette slots.

use serde::{Deserialize, Serialize};

use super::HexColor;

/// One position in the live palette.
///
/// The slot's index in the palette identifies it; a locked slot keeps its
/// value when the palette is regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSlot {
    /// Current color
    pub value: HexColor,
    /// Whether regeneration must leave this slot alone
    pub locked: bool,
}

impl ColorSlot {
    /// Creates an unlocked slot.
    #[must_use]
    pub const fn new(value: HexColor) -> Self {
        Self {
            value,
            locked: false,
        }
    }
}
