//! Error types for the palette core.
//!
//! The store and converter report typed errors so the surrounding UI can decide
//! how to surface a rejected operation. Application code wraps these in
//! `anyhow` where it needs context.

use thiserror::Error;

use crate::models::PaletteId;

/// Failure to interpret text as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Text is not `#` followed by exactly 6 hex digits.
    #[error("malformed color '{0}': expected '#' followed by 6 hex digits")]
    Malformed(String),

    /// Text is not a hex, `rgb(...)` or `hsl(...)` rendering.
    #[error("unrecognized color notation '{0}'")]
    Unrecognized(String),
}

/// Rejected palette store operation.
///
/// The store is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A setter received a value that is not a valid hex color.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// No saved palette carries this id.
    #[error("saved palette {0} not found")]
    NotFound(PaletteId),

    /// The slot index does not exist in the live palette.
    #[error("slot {index} is out of range (palette has {len} slots)")]
    IndexOutOfRange {
        /// Requested slot index
        index: usize,
        /// Number of slots in the live palette
        len: usize,
    },

    /// A palette was constructed without any colors.
    #[error("a palette needs at least one color")]
    EmptyPalette,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = ColorParseError::Malformed("#12".to_string());
        assert!(err.to_string().contains("'#12'"));

        let err = PaletteError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "slot 7 is out of range (palette has 5 slots)");

        let err = PaletteError::NotFound(PaletteId::new(3));
        assert_eq!(err.to_string(), "saved palette 3 not found");
    }

    #[test]
    fn test_parse_error_converts_into_invalid_color() {
        let err: PaletteError = ColorParseError::Malformed("red".to_string()).into();
        assert!(matches!(err, PaletteError::InvalidColor(_)));
    }
}
