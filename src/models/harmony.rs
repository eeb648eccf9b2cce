//! Harmony rules and the standalone harmony helper.
//!
//! The palette store records the selected rule but generation ignores it:
//! every unlocked slot gets an independent uniform sample. `harmonize` is a
//! separate utility that really derives related colors from a base color; it
//! is only called from the `harmony` CLI command.

// Allow intentional casts for hue offsets
#![allow(clippy::cast_precision_loss)]

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{HexColor, RgbColor};

/// How a palette should relate its colors to each other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyRule {
    /// Base hue and its opposite (+180°)
    Complementary,
    /// Neighboring hues in ±30° steps
    Analogous,
    /// Three hues 120° apart
    Triadic,
    /// One hue at varying brightness
    Monochromatic,
    /// Independent random colors
    #[default]
    Random,
}

impl HarmonyRule {
    /// All rules in menu order.
    pub const ALL: [Self; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Monochromatic,
        Self::Random,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Monochromatic => "Monochromatic",
            Self::Random => "Random",
        }
    }

    /// The next rule in menu order, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Complementary => Self::Analogous,
            Self::Analogous => Self::Triadic,
            Self::Triadic => Self::Monochromatic,
            Self::Monochromatic => Self::Random,
            Self::Random => Self::Complementary,
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

impl FromStr for HarmonyRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|rule| rule.to_string() == wanted)
            .ok_or_else(|| format!("unknown harmony rule '{wanted}'"))
    }
}

/// Derives `count` colors related to `base` by `rule`.
///
/// The first color is always `base` itself. Hues wrap around the color wheel.
/// When a rule runs out of distinct hues, later colors repeat the hue cycle
/// at reduced brightness.
///
/// # Examples
///
/// ```
/// use lazypalette::models::{harmonize, HarmonyRule, RgbColor};
///
/// let red = RgbColor::new(255, 0, 0);
/// let colors = harmonize(red, HarmonyRule::Complementary, 2, &mut rand::rng());
/// assert_eq!(colors[1].rgb(), RgbColor::new(0, 255, 255));
/// ```
pub fn harmonize<R: Rng + ?Sized>(
    base: RgbColor,
    rule: HarmonyRule,
    count: usize,
    rng: &mut R,
) -> Vec<HexColor> {
    let (h, s, v) = base.to_hsv();
    let mut colors = Vec::with_capacity(count);

    for i in 0..count {
        if i == 0 {
            colors.push(HexColor::from_rgb(base));
            continue;
        }

        let color = match rule {
            HarmonyRule::Complementary => {
                shifted(h, s, v, 180.0 * (i % 2) as f32, i / 2)
            }
            HarmonyRule::Analogous => {
                let step = i.div_ceil(2) as f32 * 30.0;
                let offset = if i % 2 == 1 { step } else { -step };
                shifted(h, s, v, offset, 0)
            }
            HarmonyRule::Triadic => shifted(h, s, v, 120.0 * (i % 3) as f32, i / 3),
            HarmonyRule::Monochromatic => {
                let step = 0.8 / count as f32;
                let mut value = v - step * i as f32;
                if value < 0.15 {
                    value += 0.8;
                }
                RgbColor::from_hsv(h, s, value)
            }
            HarmonyRule::Random => HexColor::random(rng).rgb(),
        };

        colors.push(HexColor::from_rgb(color));
    }

    colors
}

/// Rotates the hue and darkens by 15% per completed cycle.
fn shifted(h: f32, s: f32, v: f32, offset: f32, cycle: usize) -> RgbColor {
    let hue = (h + offset).rem_euclid(360.0);
    let value = (v * (1.0 - 0.15 * cycle as f32)).max(0.2);
    RgbColor::from_hsv(hue, s, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn hue_of(color: &HexColor) -> f32 {
        color.rgb().to_hsv().0
    }

    #[test]
    fn test_first_color_is_base() {
        let base = RgbColor::new(18, 52, 86);
        for rule in HarmonyRule::ALL {
            let colors = harmonize(base, rule, 5, &mut rng());
            assert_eq!(colors.len(), 5);
            assert_eq!(colors[0].rgb(), base);
        }
    }

    #[test]
    fn test_complementary_is_opposite_hue() {
        let base = RgbColor::new(255, 0, 0);
        let colors = harmonize(base, HarmonyRule::Complementary, 2, &mut rng());
        assert!((hue_of(&colors[1]) - 180.0).abs() < 1.0);
    }

    #[test]
    fn test_triadic_hues() {
        let base = RgbColor::new(255, 0, 0);
        let colors = harmonize(base, HarmonyRule::Triadic, 3, &mut rng());
        assert!((hue_of(&colors[1]) - 120.0).abs() < 1.0);
        assert!((hue_of(&colors[2]) - 240.0).abs() < 1.0);
    }

    #[test]
    fn test_analogous_alternates_sides() {
        let base = RgbColor::new(0, 0, 255); // 240°
        let colors = harmonize(base, HarmonyRule::Analogous, 3, &mut rng());
        assert!((hue_of(&colors[1]) - 270.0).abs() < 1.0);
        assert!((hue_of(&colors[2]) - 210.0).abs() < 1.0);
    }

    #[test]
    fn test_monochromatic_keeps_hue() {
        let base = RgbColor::new(0, 200, 0);
        let colors = harmonize(base, HarmonyRule::Monochromatic, 5, &mut rng());
        for color in &colors[1..] {
            assert!((hue_of(color) - 120.0).abs() < 1.0);
            assert_ne!(color.rgb(), base);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(harmonize(RgbColor::default(), HarmonyRule::Triadic, 0, &mut rng()).is_empty());
    }

    #[test]
    fn test_rule_names_roundtrip() {
        for rule in HarmonyRule::ALL {
            assert_eq!(rule.to_string().parse::<HarmonyRule>().unwrap(), rule);
        }
        assert!("tetradic".parse::<HarmonyRule>().is_err());
        assert_eq!(HarmonyRule::Random.next(), HarmonyRule::Complementary);
    }
}
