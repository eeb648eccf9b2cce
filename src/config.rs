//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::{ColorFormat, HarmonyRule, HexColor};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "LAZYPALETTE_CONFIG_DIR";

/// Smallest allowed number of palette slots.
pub const MIN_SLOTS: usize = 1;

/// Largest allowed number of palette slots.
pub const MAX_SLOTS: usize = 12;

/// Colors shown before the first generation.
pub const DEFAULT_COLORS: [&str; 5] = ["#FF5733", "#33FF57", "#3357FF", "#F3FF33", "#FF33F3"];

/// Theme display mode preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Live palette settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Number of slots in the live palette
    pub slot_count: usize,
    /// Colors for the first slots; missing entries are sampled at random
    pub initial_colors: Vec<String>,
    /// Regenerate unlocked slots once when the TUI starts
    pub generate_on_start: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_COLORS.len(),
            initial_colors: DEFAULT_COLORS.iter().map(|c| (*c).to_string()).collect(),
            generate_on_start: true,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
    /// Format swatches are shown and copied in at startup
    pub default_format: ColorFormat,
    /// Harmony rule selected at startup
    pub default_harmony: HarmonyRule,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
            default_format: ColorFormat::default(),
            default_harmony: HarmonyRule::default(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory export files are written to
    pub output_dir: PathBuf,
    /// Edge length in pixels of one swatch in PNG exports
    pub swatch_size: u32,
    /// Color notation used for CSS custom properties
    pub css_format: ColorFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        // Use config directory for exports by default
        let output_dir = Self::default_output_dir().unwrap_or_else(|_| PathBuf::from("exports"));

        Self {
            output_dir,
            swatch_size: 120,
            css_format: ColorFormat::Hex,
        }
    }
}

impl ExportConfig {
    /// Gets the default export directory path.
    ///
    /// - Linux: `~/.config/LazyPalette/exports/`
    /// - macOS: `~/Library/Application Support/LazyPalette/exports/`
    /// - Windows: `%APPDATA%\LazyPalette\exports\`
    fn default_output_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("exports"))
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `LAZYPALETTE_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazyPalette/config.toml`
/// - macOS: `~/Library/Application Support/LazyPalette/config.toml`
/// - Windows: `%APPDATA%\LazyPalette\config.toml`
///
/// Setting `LAZYPALETTE_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - `slot_count` must be between 1 and 12
/// - every `initial_colors` entry must be a `#RRGGBB` color
/// - `swatch_size` must be non-zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Live palette settings
    pub palette: PaletteConfig,
    /// UI preferences
    pub ui: UiConfig,
    /// Export settings
    pub export: ExportConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/LazyPalette/`
    /// - macOS: `~/Library/Application Support/LazyPalette/`
    /// - Windows: `%APPDATA%\LazyPalette\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("LazyPalette");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to load config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `slot_count` is within 1..=12
    /// - `initial_colors` are valid hex colors
    /// - `swatch_size` is non-zero
    pub fn validate(&self) -> Result<()> {
        let slots = self.palette.slot_count;
        if !(MIN_SLOTS..=MAX_SLOTS).contains(&slots) {
            anyhow::bail!("palette.slot_count must be between {MIN_SLOTS} and {MAX_SLOTS}, got {slots}");
        }

        for (i, text) in self.palette.initial_colors.iter().enumerate() {
            HexColor::parse(text)
                .with_context(|| format!("palette.initial_colors[{i}] is not a valid color"))?;
        }

        if self.export.swatch_size == 0 {
            anyhow::bail!("export.swatch_size must be greater than 0");
        }

        Ok(())
    }
}
