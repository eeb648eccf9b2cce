//! Export command: writes a palette as JSON, CSS or PNG.

use chrono::Local;
use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{load_config, parse_color, CliError, CliResult};
use crate::export::{default_file_name, export_to_file, ExportFormat, ExportOptions, PaletteExport};
use crate::models::{ColorFormat, HexColor};

/// Export a palette to a file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Comma-separated colors, e.g. "#FF5733,#33FF57"
    #[arg(long, value_name = "HEX,...", value_delimiter = ',', required = true)]
    pub colors: Vec<String>,

    /// Palette name used in JSON output and the default file name
    #[arg(short, long, value_name = "NAME", default_value = "palette")]
    pub name: String,

    /// Output kind
    #[arg(long = "as", value_enum, value_name = "KIND")]
    pub kind: ExportFormat,

    /// Output path (defaults to <export.output_dir>/<name>_<date>.<ext>)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Color notation for JSON and CSS (defaults to export.css_format)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<ColorFormat>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let colors = self
            .colors
            .iter()
            .map(|text| parse_color(text.trim()))
            .collect::<CliResult<Vec<HexColor>>>()?;
        if colors.is_empty() {
            return Err(CliError::validation("At least one color is required"));
        }

        let config = load_config()?;
        let options = ExportOptions {
            color_format: self.format.unwrap_or(config.export.css_format),
            swatch_size: config.export.swatch_size,
        };

        let palette = PaletteExport::new(self.name.clone(), colors);
        let path = self.output.clone().unwrap_or_else(|| {
            config.export.output_dir.join(default_file_name(
                &palette.name,
                self.kind,
                Local::now().date_naive(),
            ))
        });

        let written = export_to_file(&palette, self.kind, &options, &path)
            .map_err(|e| CliError::io(format!("Failed to export palette: {e}")))?;

        println!("Exported {} to {}", self.kind, written.display());
        Ok(())
    }
}
