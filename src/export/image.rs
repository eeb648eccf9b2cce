//! PNG swatch export.
//!
//! The image is a single row of square swatches, one per color.

use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;
use tracing::debug;

use crate::models::HexColor;

/// Rasterizes colors into a `len * size` by `size` image.
#[must_use]
pub fn render_swatches(colors: &[HexColor], size: u32) -> RgbImage {
    let count = u32::try_from(colors.len()).unwrap_or(u32::MAX);
    let width = count.saturating_mul(size);

    ImageBuffer::from_fn(width, size, |x, _| {
        let index = (x / size) as usize;
        let rgb = colors[index].rgb();
        Rgb([rgb.r, rgb.g, rgb.b])
    })
}

/// Writes the swatch image as PNG.
pub fn write_png(colors: &[HexColor], size: u32, path: &Path) -> Result<(), image::ImageError> {
    let img = render_swatches(colors, size);
    debug!(
        width = img.width(),
        height = img.height(),
        "Encoding swatch image"
    );
    img.save_with_format(path, image::ImageFormat::Png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn colors() -> Vec<HexColor> {
        ["#FF5733", "#33FF57", "#3357FF"]
            .iter()
            .map(|c| HexColor::parse(c).unwrap())
            .collect()
    }

    #[test]
    fn test_dimensions_and_pixels() {
        let img = render_swatches(&colors(), 10);

        assert_eq!(img.dimensions(), (30, 10));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0xFF, 0x57, 0x33]));
        assert_eq!(img.get_pixel(9, 9), &Rgb([0xFF, 0x57, 0x33]));
        assert_eq!(img.get_pixel(10, 0), &Rgb([0x33, 0xFF, 0x57]));
        assert_eq!(img.get_pixel(29, 5), &Rgb([0x33, 0x57, 0xFF]));
    }

    #[test]
    fn test_png_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("swatches.png");

        write_png(&colors(), 4, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (12, 4));
        assert_eq!(decoded.get_pixel(5, 2), &Rgb([0x33, 0xFF, 0x57]));
    }
}
