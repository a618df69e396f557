//! Behavioral specs for run output.
//!
//! Text output prints one dot-filled status line per hook followed by a
//! summary. JSON output is the serialized run result.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const CONFIG: &str = r#"
repos:
  - repo: meta
    hooks:
      - id: trailing-whitespace
        name: trim trailing whitespace
      - id: check-toml
        name: check toml
"#;

fn project() -> Project {
    let temp = Project::with_config(CONFIG);
    temp.file("notes.txt", "ok\n");
    temp
}

// =============================================================================
// Text Output Format
// =============================================================================

/// > `<name>....<Passed|Failed|Skipped>` with dots filling to a fixed width
#[test]
fn text_output_status_lines() {
    let temp = project();
    let expected = format!(
        "trim trailing whitespace{}Passed\ncheck toml{}(no files to check)Skipped\n1 hook passed, 0 failed, 1 skipped\n",
        ".".repeat(79 - 24 - 6),
        ".".repeat(79 - 10 - 19 - 7),
    );
    run()
        .pwd(temp.path())
        .args(&["--all-files", "--no-color"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn text_output_lists_findings() {
    let temp = project();
    temp.file("dirty.txt", "x \n");
    run()
        .pwd(temp.path())
        .args(&["--all-files", "--no-color"])
        .fails()
        .stdout_has(predicates::str::is_match(r"(?m)^trim trailing whitespace\.+Failed$").unwrap())
        .stdout_has(predicates::str::is_match(r"(?m)^  dirty\.txt: Fixing dirty\.txt$").unwrap())
        .stdout_has("0 hooks passed, 1 failed, 1 skipped");
}

// =============================================================================
// Color
// =============================================================================

#[test]
fn color_flag_forces_ansi() {
    let temp = project();
    run()
        .pwd(temp.path())
        .args(&["--all-files", "--color"])
        .passes()
        .stdout_has("\x1b[");
}

#[test]
fn piped_output_has_no_color_by_default() {
    let temp = project();
    run()
        .pwd(temp.path())
        .args(&["--all-files"])
        .passes()
        .stdout_lacks("\x1b[");
}

/// > NO_COLOR disables color output
#[test]
fn no_color_env_disables_color() {
    let temp = project();
    run()
        .pwd(temp.path())
        .args(&["--all-files"])
        .env("NO_COLOR", "1")
        .env("COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

/// > COLOR forces color output
#[test]
fn color_env_forces_color() {
    let temp = project();
    run()
        .pwd(temp.path())
        .args(&["--all-files"])
        .env("COLOR", "1")
        .passes()
        .stdout_has("\x1b[");
}

#[test]
fn no_color_flag_beats_color_env() {
    let temp = project();
    run()
        .pwd(temp.path())
        .args(&["--all-files", "--no-color"])
        .env("COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

// =============================================================================
// JSON Output Format
// =============================================================================

#[test]
fn json_output_shape() {
    let temp = project();
    let json = run().json().pwd(temp.path()).args(&["--all-files"]).passes();
    let value = json.value();

    assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    assert_eq!(value["passed"], true);

    let hook = json.hook("trailing-whitespace");
    assert_eq!(hook["name"], "trim trailing whitespace");
    assert_eq!(hook["source"], "meta");
    assert_eq!(hook["files"], 2);
    assert!(hook["duration_ms"].is_u64());
}

#[test]
fn json_output_has_no_color() {
    let temp = project();
    run()
        .json()
        .pwd(temp.path())
        .args(&["--all-files", "--color"])
        .passes();
}
