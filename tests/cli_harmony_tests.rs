//! End-to-end tests for `lazypalette harmony`.

mod fixtures;
use fixtures::*;

#[test]
fn test_harmony_complementary() {
    let output = run_isolated(&["harmony", "#FF0000", "--rule", "complementary", "--count", "2"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_lines(&output), ["#ff0000", "#00ffff"]);
}

#[test]
fn test_harmony_count_and_format() {
    let output = run_isolated(&[
        "harmony", "#3357FF", "--rule", "triadic", "--count", "6", "--format", "rgb",
    ]);
    assert_exit(&output, 0);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "rgb(51, 87, 255)");
    assert!(lines.iter().all(|line| line.starts_with("rgb(")));
}

#[test]
fn test_harmony_random_with_seed_is_reproducible() {
    let args = ["harmony", "#3357FF", "--rule", "random", "--seed", "7"];
    let first = run_isolated(&args);
    let second = run_isolated(&args);

    assert_exit(&first, 0);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_harmony_requires_rule() {
    let output = run_isolated(&["harmony", "#3357FF"]);
    assert_exit(&output, 1);
}

#[test]
fn test_harmony_rejects_bad_base() {
    let output = run_isolated(&["harmony", "red", "--rule", "analogous"]);
    assert_exit(&output, 1);
}
