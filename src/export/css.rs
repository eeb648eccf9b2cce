//! CSS custom-property export.

use std::fmt::Write as _;

use crate::models::{ColorFormat, HexColor};

/// Renders colors as a `:root` block of `--color-N` properties, N from 1.
///
/// # Examples
///
/// ```
/// use lazypalette::export::render_css;
/// use lazypalette::models::{ColorFormat, HexColor};
///
/// let colors = vec![HexColor::parse("#FF5733").unwrap()];
/// assert_eq!(
///     render_css(&colors, ColorFormat::Hex),
///     ":root {\n  --color-1: #FF5733;\n}\n"
/// );
/// ```
#[must_use]
pub fn render_css(colors: &[HexColor], format: ColorFormat) -> String {
    let mut output = String::from(":root {\n");
    for (index, color) in colors.iter().enumerate() {
        let _ = writeln!(output, "  --color-{}: {};", index + 1, color.to_format(format));
    }
    output.push_str("}\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_color_in_order() {
        let colors: Vec<HexColor> = ["#FF5733", "#33FF57", "#3357FF"]
            .iter()
            .map(|c| HexColor::parse(c).unwrap())
            .collect();

        let css = render_css(&colors, ColorFormat::Hsl);
        let lines: Vec<&str> = css.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "  --color-1: hsl(11, 100%, 60%);");
        assert_eq!(lines[2], "  --color-2: hsl(131, 100%, 60%);");
        assert!(lines[3].starts_with("  --color-3: hsl("));
        assert_eq!(lines[4], "}");
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(render_css(&[], ColorFormat::Hex), ":root {\n}\n");
    }
}
