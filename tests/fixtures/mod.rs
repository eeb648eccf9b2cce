//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the lazypalette binary
pub fn lazypalette_bin() -> String {
    std::env::var("CARGO_BIN_EXE_lazypalette")
        .unwrap_or_else(|_| "target/debug/lazypalette".to_string())
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration
/// between them within one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(lazypalette_bin());
    cmd.env("LAZYPALETTE_CONFIG_DIR", config_dir);
    cmd.env_remove("LAZYPALETTE_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in a fresh, empty config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Writes `config.toml` into `config_dir`.
pub fn write_config(config_dir: &Path, toml: &str) -> PathBuf {
    fs::create_dir_all(config_dir).expect("Failed to create config dir");
    let path = config_dir.join("config.toml");
    fs::write(&path, toml).expect("Failed to write config");
    path
}

/// Stdout as trimmed lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// True for `#` followed by six lowercase hex digits.
pub fn is_lower_hex(text: &str) -> bool {
    text.len() == 7
        && text.starts_with('#')
        && text[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Asserts the exit code and includes stderr in the failure message.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
