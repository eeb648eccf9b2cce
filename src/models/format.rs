//! Display formats and the hex → hex/rgb/hsl converter.
//!
//! `format_color` is the single conversion used for on-screen swatches,
//! clipboard copy, CLI output and exports, so they can never disagree.

// Rounded HSL components always fit in u16
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::{HexColor, RgbColor};
use crate::error::ColorParseError;

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("rgb pattern is valid")
});

static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*(\d{1,3})\s*,\s*(\d{1,3})%\s*,\s*(\d{1,3})%\s*\)$")
        .expect("hsl pattern is valid")
});

/// Display/export projection of a color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl ColorFormat {
    /// All formats in display order.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// Short uppercase label for tabs and titles.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        }
    }

    /// The next format in display order, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Hex => Self::Rgb,
            Self::Rgb => Self::Hsl,
            Self::Hsl => Self::Hex,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(format!("unknown color format '{other}' (expected hex, rgb or hsl)")),
        }
    }
}

/// Converts a hex color string into the requested format.
///
/// # Examples
///
/// ```
/// use lazypalette::models::{format_color, ColorFormat};
///
/// assert_eq!(format_color("#FF0000", ColorFormat::Hsl).unwrap(), "hsl(0, 100%, 50%)");
/// assert_eq!(format_color("#808080", ColorFormat::Hsl).unwrap(), "hsl(0, 0%, 50%)");
/// assert_eq!(format_color("#FF5733", ColorFormat::Rgb).unwrap(), "rgb(255, 87, 51)");
/// assert!(format_color("#F53", ColorFormat::Hex).is_err());
/// ```
pub fn format_color(hex: &str, target: ColorFormat) -> Result<String, ColorParseError> {
    Ok(HexColor::parse(hex)?.to_format(target))
}

/// Renders channel values as text. `Hex` uses the canonical lowercase form.
pub(crate) fn render(rgb: RgbColor, target: ColorFormat) -> String {
    match target {
        ColorFormat::Hex => rgb.to_hex(),
        ColorFormat::Rgb => format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
        ColorFormat::Hsl => {
            let (h, s, l) = rgb.to_hsl();
            let hue = h.round() as u16 % 360;
            format!(
                "hsl({}, {}%, {}%)",
                hue,
                (s * 100.0).round() as u16,
                (l * 100.0).round() as u16
            )
        }
    }
}

/// Parses any of the three renderings back into channel values.
///
/// `rgb(...)` and hex are exact; `hsl(...)` goes through the HSL → RGB
/// conversion and is only exact up to the integer rounding of the text.
pub fn parse_formatted(text: &str) -> Result<RgbColor, ColorParseError> {
    let text = text.trim();
    if text.starts_with('#') {
        return RgbColor::from_hex(text);
    }

    let unrecognized = || ColorParseError::Unrecognized(text.to_string());

    if let Some(caps) = RGB_PATTERN.captures(text) {
        let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| unrecognized());
        return Ok(RgbColor::new(channel(1)?, channel(2)?, channel(3)?));
    }

    if let Some(caps) = HSL_PATTERN.captures(text) {
        let number = |i: usize| caps[i].parse::<u16>().map_err(|_| unrecognized());
        let (h, s, l) = (number(1)?, number(2)?, number(3)?);
        if h >= 360 || s > 100 || l > 100 {
            return Err(unrecognized());
        }
        return Ok(RgbColor::from_hsl(
            f64::from(h),
            f64::from(s) / 100.0,
            f64::from(l) / 100.0,
        ));
    }

    Err(unrecognized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_returned_unchanged() {
        assert_eq!(format_color("#FF5733", ColorFormat::Hex).unwrap(), "#FF5733");
        assert_eq!(format_color("#ff5733", ColorFormat::Hex).unwrap(), "#ff5733");
    }

    #[test]
    fn test_rgb_rendering() {
        assert_eq!(format_color("#000000", ColorFormat::Rgb).unwrap(), "rgb(0, 0, 0)");
        assert_eq!(format_color("#FFFFFF", ColorFormat::Rgb).unwrap(), "rgb(255, 255, 255)");
        assert_eq!(format_color("#3357FF", ColorFormat::Rgb).unwrap(), "rgb(51, 87, 255)");
    }

    #[test]
    fn test_hsl_reference_values() {
        let cases = [
            ("#FF0000", "hsl(0, 100%, 50%)"),
            ("#808080", "hsl(0, 0%, 50%)"),
            ("#00FF00", "hsl(120, 100%, 50%)"),
            ("#0000FF", "hsl(240, 100%, 50%)"),
            ("#FFFFFF", "hsl(0, 0%, 100%)"),
            ("#000000", "hsl(0, 0%, 0%)"),
            ("#FF5733", "hsl(11, 100%, 60%)"),
            ("#33FF57", "hsl(131, 100%, 60%)"),
            ("#FF33F3", "hsl(304, 100%, 60%)"),
        ];
        for (hex, expected) in cases {
            assert_eq!(format_color(hex, ColorFormat::Hsl).unwrap(), expected, "{hex}");
        }
    }

    #[test]
    fn test_hue_just_below_360_wraps_to_zero() {
        // Red-dominant with blue slightly above green: hue ≈ 359.8°
        assert_eq!(format_color("#FF0001", ColorFormat::Hsl).unwrap(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_malformed_input_is_rejected_in_every_format() {
        for target in ColorFormat::ALL {
            assert!(matches!(
                format_color("#12345", target),
                Err(ColorParseError::Malformed(_))
            ));
        }
    }

    #[test]
    fn test_rgb_roundtrip_is_exact() {
        for hex in ["#FF5733", "#00000a", "#7f7f80", "#123456"] {
            let text = format_color(hex, ColorFormat::Rgb).unwrap();
            assert_eq!(parse_formatted(&text).unwrap(), RgbColor::from_hex(hex).unwrap());
        }
    }

    #[test]
    fn test_hsl_roundtrip_is_close() {
        for hex in ["#FF5733", "#33FF57", "#3357FF", "#F3FF33", "#FF33F3"] {
            let original = RgbColor::from_hex(hex).unwrap();
            let text = format_color(hex, ColorFormat::Hsl).unwrap();
            let back = parse_formatted(&text).unwrap();
            for (a, b) in [(original.r, back.r), (original.g, back.g), (original.b, back.b)] {
                assert!((i16::from(a) - i16::from(b)).abs() <= 4, "{hex} -> {text} -> {back}");
            }
        }
    }

    #[test]
    fn test_parse_formatted_rejects_garbage() {
        assert!(parse_formatted("rgb(256, 0, 0)").is_err());
        assert!(parse_formatted("hsl(360, 10%, 10%)").is_err());
        assert!(parse_formatted("hsl(10, 101%, 10%)").is_err());
        assert!(parse_formatted("cmyk(0, 0, 0, 0)").is_err());
        assert!(parse_formatted("#12").is_err());
    }

    #[test]
    fn test_format_from_str_and_cycle() {
        assert_eq!("HSL".parse::<ColorFormat>().unwrap(), ColorFormat::Hsl);
        assert!("cmyk".parse::<ColorFormat>().is_err());
        assert_eq!(ColorFormat::Hsl.next(), ColorFormat::Hex);
        assert_eq!(ColorFormat::Rgb.to_string(), "rgb");
    }
}
