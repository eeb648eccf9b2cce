//! End-to-end tests for `lazypalette convert`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn convert(args: &[&str]) -> Vec<String> {
    let mut full = vec!["convert"];
    full.extend_from_slice(args);
    let output = run_isolated(&full);
    assert_exit(&output, 0);
    stdout_lines(&output)
}

#[test]
fn test_convert_to_rgb() {
    assert_eq!(convert(&["#FF5733", "--format", "rgb"]), ["rgb(255, 87, 51)"]);
}

#[test]
fn test_convert_to_hsl() {
    assert_eq!(convert(&["#FF0000", "--format", "hsl"]), ["hsl(0, 100%, 50%)"]);
    assert_eq!(convert(&["#808080", "--format", "hsl"]), ["hsl(0, 0%, 50%)"]);
    assert_eq!(convert(&["#FF5733", "--format", "hsl"]), ["hsl(11, 100%, 60%)"]);
}

#[test]
fn test_convert_hex_is_unchanged() {
    assert_eq!(convert(&["#aBcDeF", "--format", "hex"]), ["#aBcDeF"]);
}

#[test]
fn test_convert_all() {
    assert_eq!(
        convert(&["#FF5733", "--all"]),
        [
            "hex: #FF5733",
            "rgb: rgb(255, 87, 51)",
            "hsl: hsl(11, 100%, 60%)"
        ]
    );
}

#[test]
fn test_convert_uses_configured_default_format() {
    let config_dir = TempDir::new().unwrap();
    write_config(config_dir.path(), "[ui]\ndefault_format = \"rgb\"\n");

    let output = isolated_command(&["convert", "#000000"], config_dir.path())
        .output()
        .unwrap();
    assert_exit(&output, 0);
    assert_eq!(stdout_lines(&output), ["rgb(0, 0, 0)"]);
}

#[test]
fn test_convert_rejects_malformed_colors() {
    for bad in ["FF5733", "#FFF", "#GGGGGG", "#FF57333", "#+F5733"] {
        let output = run_isolated(&["convert", bad, "--format", "rgb"]);
        assert_exit(&output, 1);
        assert!(
            String::from_utf8_lossy(&output.stderr).contains("Invalid color"),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_convert_format_conflicts_with_all() {
    let output = run_isolated(&["convert", "#FF5733", "--all", "--format", "rgb"]);
    assert_exit(&output, 1);
}
