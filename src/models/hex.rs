//! Validated `#RRGGBB` color text.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::format::{render, ColorFormat};
use super::RgbColor;
use crate::error::ColorParseError;

/// Largest value a 24-bit color can take.
const MAX_COLOR: u32 = 0xFF_FF_FF;

/// A color stored as hex text that is known to be `#` + 6 hex digits.
///
/// The original text is kept verbatim (including letter case), so a color
/// entered as `#FF5733` is shown and copied as `#FF5733`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    text: String,
    rgb: RgbColor,
}

impl HexColor {
    /// Validates and wraps hex color text.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazypalette::models::HexColor;
    ///
    /// let color = HexColor::parse("#FF5733").unwrap();
    /// assert_eq!(color.as_str(), "#FF5733");
    /// assert!(HexColor::parse("#F53").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let rgb = RgbColor::from_hex(text)?;
        Ok(Self {
            text: text.to_string(),
            rgb,
        })
    }

    /// Builds the canonical lowercase text for an RGB value.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        Self {
            text: rgb.to_hex(),
            rgb,
        }
    }

    /// Samples a color uniformly from `#000000..=#ffffff`.
    ///
    /// Draws an integer directly, so there is no floating point bias at
    /// either end of the range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_rgb(RgbColor::from_u24(rng.random_range(0..=MAX_COLOR)))
    }

    /// The color text exactly as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parsed channel values.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// Renders the color in the requested display format.
    ///
    /// `Hex` returns the stored text unchanged.
    #[must_use]
    pub fn to_format(&self, target: ColorFormat) -> String {
        match target {
            ColorFormat::Hex => self.text.clone(),
            _ => render(self.rgb, target),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let rgb = RgbColor::from_hex(&value)?;
        Ok(Self { text: value, rgb })
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.text
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self::from_rgb(rgb)
    }
}
