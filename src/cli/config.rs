//! Configuration management CLI commands.

use crate::cli::common::{check_count, load_config, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::{ColorFormat, HarmonyRule};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Number of palette slots (1-12)
    #[arg(long, value_name = "N")]
    slots: Option<usize>,

    /// Default display format
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<ColorFormat>,

    /// Default harmony rule
    #[arg(long, value_enum, value_name = "RULE")]
    harmony: Option<HarmonyRule>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_enum, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Export output directory
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    palette: PaletteOutput,
    ui: UiOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    slot_count: usize,
    initial_colors: Vec<String>,
    generate_on_start: bool,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    default_format: String,
    default_harmony: String,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    output_dir: String,
    swatch_size: u32,
    css_format: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.slots.is_none()
            && self.format.is_none()
            && self.harmony.is_none()
            && self.theme.is_none()
            && self.export_dir.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --slots, --format, --harmony, --theme, or --export-dir",
            ));
        }

        let mut config = load_config()?;

        if let Some(slots) = self.slots {
            config.palette.slot_count = check_count(slots)?;
        }
        if let Some(format) = self.format {
            config.ui.default_format = format;
        }
        if let Some(rule) = self.harmony {
            config.ui.default_harmony = rule;
        }
        if let Some(theme) = self.theme {
            config.ui.theme_mode = theme;
        }

        // Apply export_dir if provided (create if doesn't exist)
        if let Some(path) = &self.export_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create export directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config.export.output_dir.clone_from(path);
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        palette: PaletteOutput {
            slot_count: config.palette.slot_count,
            initial_colors: config.palette.initial_colors.clone(),
            generate_on_start: config.palette.generate_on_start,
        },
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            default_format: config.ui.default_format.to_string(),
            default_harmony: config.ui.default_harmony.to_string(),
        },
        export: ExportOutput {
            output_dir: config.export.output_dir.to_string_lossy().to_string(),
            swatch_size: config.export.swatch_size,
            css_format: config.export.css_format.to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("LazyPalette Configuration");
    println!("=========================");
    println!();

    println!("Palette:");
    println!("  Slots: {}", config.palette.slot_count);
    println!("  Initial Colors: {}", config.palette.initial_colors.join(" "));
    println!("  Generate On Start: {}", config.palette.generate_on_start);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!("  Default Format: {}", config.ui.default_format);
    println!("  Default Harmony: {}", config.ui.default_harmony);
    println!();

    println!("Export:");
    println!("  Output Directory: {}", config.export.output_dir.display());
    println!("  Swatch Size: {}px", config.export.swatch_size);
    println!("  CSS Format: {}", config.export.css_format);
    println!();
}
