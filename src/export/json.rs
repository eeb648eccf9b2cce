//! JSON palette documents.

use serde::Serialize;

use super::PaletteExport;
use crate::models::ColorFormat;

#[derive(Serialize)]
struct JsonPalette<'a> {
    name: &'a str,
    colors: Vec<String>,
}

impl<'a> JsonPalette<'a> {
    fn new(palette: &'a PaletteExport, format: ColorFormat) -> Self {
        Self {
            name: &palette.name,
            colors: palette.colors.iter().map(|c| c.to_format(format)).collect(),
        }
    }
}

/// Renders one palette as a pretty-printed `{ "name", "colors" }` object.
pub fn render_json(palette: &PaletteExport, format: ColorFormat) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonPalette::new(palette, format))
}

/// Renders several palettes as a JSON array of palette objects.
pub fn render_json_collection(
    palettes: &[PaletteExport],
    format: ColorFormat,
) -> serde_json::Result<String> {
    let items: Vec<JsonPalette<'_>> = palettes
        .iter()
        .map(|palette| JsonPalette::new(palette, format))
        .collect();
    serde_json::to_string_pretty(&items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HexColor;

    fn palette(name: &str, colors: &[&str]) -> PaletteExport {
        PaletteExport::new(
            name,
            colors.iter().map(|c| HexColor::parse(c).unwrap()).collect(),
        )
    }

    #[test]
    fn test_single_palette_shape() {
        let json = render_json(&palette("Warm", &["#FF5733", "#F3FF33"]), ColorFormat::Hex).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "name": "Warm", "colors": ["#FF5733", "#F3FF33"] })
        );
    }

    #[test]
    fn test_colors_use_requested_format() {
        let json = render_json(&palette("Red", &["#FF0000"]), ColorFormat::Rgb).unwrap();
        assert!(json.contains("\"rgb(255, 0, 0)\""));
    }

    #[test]
    fn test_collection_keeps_order() {
        let json = render_json_collection(
            &[palette("One", &["#000000"]), palette("Two", &["#FFFFFF"])],
            ColorFormat::Hex,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["name"], "One");
        assert_eq!(value[1]["colors"][0], "#FFFFFF");
    }
}
