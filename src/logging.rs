//! Tracing subscriber setup.
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a file
//! in the config directory instead.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::{LOG_ENV, LOG_FILE_NAME};

/// Builds the filter from `LAZYPALETTE_LOG`, falling back to `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs a stderr subscriber for CLI commands.
///
/// Defaults to `warn` so command output on stdout stays clean unless
/// `--verbose` or `LAZYPALETTE_LOG` asks for more.
pub fn init_cli(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    // A subscriber may already be installed when commands run in-process
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Installs a file subscriber for the TUI and returns the log file path.
pub fn init_tui(config: &Config) -> Result<PathBuf> {
    let dir = Config::config_dir()?;
    let path = log_file_path(&dir);

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(env_filter(&config.logging.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init();

    Ok(path)
}

fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_config_dir() {
        let path = log_file_path(Path::new("/tmp/lp"));
        assert_eq!(path, PathBuf::from("/tmp/lp/lazypalette.log"));
    }
}
