//! Behavioral specs for config discovery and loading.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const MINIMAL: &str = "repos:\n  - repo: meta\n    hooks:\n      - id: identity\n";

#[test]
fn no_config_is_an_error() {
    let temp = Project::empty();
    std::fs::create_dir(temp.path().join(".git")).unwrap();

    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no config file found"));
}

#[test]
fn config_is_found_from_a_subdirectory() {
    let temp = Project::with_config(MINIMAL);
    temp.file("src/deep/file.txt", "x\n");

    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path().join("src/deep"))
        .assert()
        .success()
        .stdout("1 source, 1 hook\n");
}

#[test]
fn toml_config_is_supported() {
    let temp = Project::empty();
    temp.file(
        "hookline.toml",
        r#"
[[repos]]
repo = "https://github.com/pre-commit/pre-commit-hooks"
rev = "v4.5.0"

[[repos.hooks]]
id = "check-yaml"

[[repos.hooks]]
id = "check-json"
"#,
    );

    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("1 source, 2 hooks\n");
}

/// > -c <FILE> specifies config file (short for --config)
#[test]
fn config_flag_selects_file() {
    let temp = Project::empty();
    temp.file("ci/hooks.yaml", MINIMAL);

    hookline_cmd()
        .args(["-c", "ci/hooks.yaml", "validate"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn config_flag_with_missing_file_fails() {
    let temp = Project::empty();
    hookline_cmd()
        .args(["--config", "missing.yaml", "validate"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

/// > HOOKLINE_CONFIG sets config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::empty();
    temp.file("custom.yaml", MINIMAL);

    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .env("HOOKLINE_CONFIG", temp.path().join("custom.yaml"))
        .assert()
        .success();
}

/// > Unknown keys are warnings (forward compatibility)
#[test]
fn unknown_config_key_warns() {
    let temp = Project::with_config(&format!("minimum_version: 3\n{}", MINIMAL));

    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("warning"))
        .stderr(predicates::str::contains("minimum_version"));
}

#[test]
fn valid_config_has_no_warnings() {
    let temp = Project::with_config(MINIMAL);
    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let temp = Project::with_config("repos: [\n");
    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::starts_with("hookline: config error:"));
}

/// > An unquoted numeric revision pin is refused rather than rewritten
#[test]
fn unquoted_numeric_rev_is_a_config_error() {
    let temp = Project::with_config(
        r#"
repos:
  - repo: https://example.com/hooks
    rev: 1.10
    hooks:
      - id: check-json
"#,
    );
    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("repos[0].rev"))
        .stderr(predicates::str::contains("quote the value"));
}

/// > A blank revision pin counts as missing
#[test]
fn blank_rev_is_a_config_error() {
    let temp = Project::with_config(
        "repos:\n  - repo: https://example.com/hooks\n    rev: ''\n    hooks:\n      - id: check-json\n",
    );
    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("missing required field `rev`"));
}

#[test]
fn duplicate_hook_identity_is_rejected() {
    let temp = Project::with_config(
        r#"
repos:
  - repo: local
    hooks:
      - { id: lint, entry: "true" }
      - { id: lint, entry: "true" }
"#,
    );
    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .code(2);
}

/// > HOOKLINE_LOG enables debug logging to stderr
#[test]
fn env_log_enables_debug() {
    let temp = Project::with_config(MINIMAL);

    hookline_cmd()
        .arg("validate")
        .current_dir(temp.path())
        .env("HOOKLINE_LOG", "debug")
        .assert()
        .success()
        .stderr(predicates::str::contains("loading config from"));
}
