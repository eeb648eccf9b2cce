//! LazyPalette - Terminal-based color palette generator
//!
//! Without a subcommand this launches the interactive TUI; subcommands give
//! headless access for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lazypalette::cli::{
    CliResult, ConfigArgs, ConvertArgs, ExitCode, ExportArgs, GenerateArgs, HarmonyArgs,
};
use lazypalette::config::Config;
use lazypalette::constants::{APP_BINARY_NAME, APP_NAME};
use lazypalette::{logging, tui};

/// LazyPalette - Terminal-based color palette generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr (CLI commands only)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random palette
    Generate(GenerateArgs),
    /// Convert a color between hex, rgb and hsl
    Convert(ConvertArgs),
    /// Derive a harmonious palette from a base color
    Harmony(HarmonyArgs),
    /// Export a palette as JSON, CSS or PNG
    Export(ExportArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Convert(args) => args.execute(),
            Self::Harmony(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    // Bad arguments are validation errors, not clap's default exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::ValidationError.code()
            } else {
                ExitCode::Success.code()
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Some(command) = cli.command {
        logging::init_cli(cli.verbose);
        if let Err(e) = command.execute() {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load configuration: {e:#}");
            if let Ok(path) = Config::config_file_path() {
                eprintln!();
                eprintln!("Fix or remove the config file at: {}", path.display());
            }
            std::process::exit(ExitCode::IoError.code());
        }
    };

    let log_path = logging::init_tui(&config)?;
    tracing::info!(log = %log_path.display(), "{} v{} starting", APP_NAME, env!("CARGO_PKG_VERSION"));

    tui::launch(config)
}
