//! Export functionality for palettes.
//!
//! Palettes can be written as JSON (`{ name, colors }` objects), as a CSS
//! custom-property block, or as a PNG swatch strip.

pub mod css;
pub mod image;
pub mod json;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::models::{ColorFormat, HexColor, SavedPalette};

pub use css::render_css;
pub use self::image::{render_swatches, write_png};
pub use json::{render_json, render_json_collection};

/// Failure while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem failure.
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("failed to serialize palette: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG encoding failure.
    #[error("failed to encode image: {0}")]
    Image(#[from] ::image::ImageError),

    /// Nothing to export.
    #[error("palette '{0}' has no colors")]
    Empty(String),
}

/// Kind of file an export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExportFormat {
    /// PNG swatch image
    Image,
    /// JSON document
    Json,
    /// CSS custom properties
    Css,
}

impl ExportFormat {
    /// All export formats, in picker order.
    pub const ALL: [Self; 3] = [Self::Image, Self::Json, Self::Css];

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Image => "png",
            Self::Json => "json",
            Self::Css => "css",
        }
    }

    /// Short label for menus.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Image => "Image (PNG)",
            Self::Json => "JSON",
            Self::Css => "CSS variables",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Image => "image",
            Self::Json => "json",
            Self::Css => "css",
        };
        f.write_str(name)
    }
}

/// A named list of colors ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteExport {
    /// Palette name
    pub name: String,
    /// Colors in slot order
    pub colors: Vec<HexColor>,
}

impl PaletteExport {
    /// Creates an export from a name and colors.
    pub fn new(name: impl Into<String>, colors: Vec<HexColor>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}

impl From<&SavedPalette> for PaletteExport {
    fn from(palette: &SavedPalette) -> Self {
        Self::new(palette.name.clone(), palette.colors.clone())
    }
}

/// Writer settings shared by all formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Notation used for color values in JSON and CSS
    pub color_format: ColorFormat,
    /// Edge length of one PNG swatch in pixels
    pub swatch_size: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            color_format: ColorFormat::Hex,
            swatch_size: 120,
        }
    }
}

/// Builds `<name>_<YYYY-MM-DD>.<ext>`.
///
/// Characters that are awkward in file names are replaced with `_`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lazypalette::export::{default_file_name, ExportFormat};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(
///     default_file_name("Palette 1", ExportFormat::Css, date),
///     "Palette_1_2024-03-09.css"
/// );
/// ```
#[must_use]
pub fn default_file_name(name: &str, format: ExportFormat, date: NaiveDate) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "palette" } else { &stem };

    format!("{stem}_{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Writes a palette to `path` in the given format.
///
/// Parent directories are created as needed.
pub fn export_to_file(
    palette: &PaletteExport,
    format: ExportFormat,
    options: &ExportOptions,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    if palette.colors.is_empty() {
        return Err(ExportError::Empty(palette.name.clone()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    match format {
        ExportFormat::Json => fs::write(path, render_json(palette, options.color_format)?)?,
        ExportFormat::Css => fs::write(path, render_css(&palette.colors, options.color_format))?,
        ExportFormat::Image => write_png(&palette.colors, options.swatch_size, path)?,
    }

    info!(
        name = %palette.name,
        format = %format,
        path = %path.display(),
        "Exported palette"
    );
    Ok(path.to_path_buf())
}

/// Writes several palettes to `path` as one JSON array.
pub fn export_collection(
    palettes: &[PaletteExport],
    options: &ExportOptions,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, render_json_collection(palettes, options.color_format)?)?;

    info!(
        count = palettes.len(),
        path = %path.display(),
        "Exported saved palettes"
    );
    Ok(path.to_path_buf())
}
