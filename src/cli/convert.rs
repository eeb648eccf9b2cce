//! Convert command: renders one color in another notation.

use clap::Args;

use crate::cli::common::{load_config, CliError, CliResult};
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::models::{format_color, ColorFormat};

/// Convert a hex color to hex, rgb or hsl notation
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Color as #RRGGBB
    #[arg(value_name = "HEX", allow_hyphen_values = true)]
    pub color: String,

    /// Target notation (defaults to ui.default_format)
    #[arg(short, long, value_enum, value_name = "FORMAT", conflicts_with = "all")]
    pub format: Option<ColorFormat>,

    /// Print every notation
    #[arg(long)]
    pub all: bool,

    /// Also copy the result to the system clipboard
    #[arg(long, conflicts_with = "all")]
    pub copy: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        if self.all {
            for format in ColorFormat::ALL {
                println!("{}: {}", format, self.convert(format)?);
            }
            return Ok(());
        }

        let format = match self.format {
            Some(format) => format,
            None => load_config()?.ui.default_format,
        };
        let text = self.convert(format)?;
        println!("{text}");

        if self.copy {
            let mut clipboard = SystemClipboard;
            clipboard
                .copy_text(&text)
                .map_err(|e| CliError::io(format!("Failed to copy to clipboard: {e}")))?;
            eprintln!("Copied to clipboard");
        }

        Ok(())
    }

    fn convert(&self, format: ColorFormat) -> CliResult<String> {
        format_color(&self.color, format)
            .map_err(|e| CliError::validation(format!("Invalid color: {e}")))
    }
}
