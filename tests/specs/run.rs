//! Behavioral specs for `hookline run`.
//!
//! Hooks run sequentially in declaration order (source-major, entry-minor),
//! each producing Passed, Failed or Skipped; any failure fails the run.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const HYGIENE: &str = r#"
repos:
  - repo: meta
    hooks:
      - id: trailing-whitespace
      - id: end-of-file-fixer
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
      - id: check-json
      - id: check-toml
"#;

// =============================================================================
// Ordering and Outcomes
// =============================================================================

/// > Execution order is source-major, entry-minor
#[test]
fn hooks_run_in_declaration_order() {
    let temp = Project::with_config(HYGIENE);
    temp.file("data.json", "{}\n");

    let json = run().json().pwd(temp.path()).args(&["--all-files"]).passes();

    assert_eq!(
        json.ids(),
        vec!["trailing-whitespace", "end-of-file-fixer", "check-json", "check-toml"]
    );
    assert_eq!(json.value()["passed"], true);
}

/// > Skipped hooks never fail a run
#[test]
fn hooks_without_matching_files_are_skipped() {
    let temp = Project::with_config(HYGIENE);
    temp.file("data.json", "{}\n");

    let json = run().json().pwd(temp.path()).args(&["--all-files"]).passes();

    assert_eq!(json.status("check-toml"), "skipped");
    assert_eq!(json.hook("check-toml")["reason"], "no_files");
    assert_eq!(json.status("check-json"), "passed");
}

/// > A fixer that rewrites a file fails the run; the next run passes
#[test]
fn fixers_fail_then_pass() {
    let temp = Project::with_config(HYGIENE);
    temp.file("notes.txt", "hello   \nworld");

    run()
        .pwd(temp.path())
        .args(&["--all-files"])
        .fails()
        .stdout_has("Fixing notes.txt");
    assert_eq!(temp.read("notes.txt"), "hello\nworld\n");

    run().pwd(temp.path()).args(&["--all-files"]).passes();
}

#[test]
fn invalid_json_reports_a_finding() {
    let temp = Project::with_config(HYGIENE);
    temp.file("bad.json", "{\"a\": }\n");

    let json = run().json().pwd(temp.path()).args(&["--all-files"]).fails();

    assert_eq!(json.status("check-json"), "failed");
    let finding = &json.hook("check-json")["findings"][0];
    assert_eq!(finding["file"], "bad.json");
    assert_eq!(finding["type"], "syntax");
}

/// > Hooks with no implementation are skipped as unavailable
#[test]
fn unknown_remote_hooks_are_unavailable() {
    let temp = Project::with_config(
        r#"
repos:
  - repo: https://github.com/psf/black
    rev: 24.1.0
    hooks:
      - id: black
"#,
    );
    temp.file("app.py", "x = 1\n");

    let json = run().json().pwd(temp.path()).args(&["--all-files"]).passes();

    assert_eq!(json.status("black"), "skipped");
    assert_eq!(json.hook("black")["reason"], "unavailable");
}

#[test]
fn unavailable_hooks_are_logged_at_warn() {
    let temp = Project::with_config(
        "repos:\n  - repo: https://github.com/psf/black\n    rev: 24.1.0\n    hooks:\n      - id: black\n",
    );
    temp.file("app.py", "x = 1\n");

    run()
        .pwd(temp.path())
        .args(&["--all-files"])
        .env("HOOKLINE_LOG", "warn")
        .passes()
        .stderr_has("no built-in implementation");
}

// =============================================================================
// Command Hooks
// =============================================================================

#[cfg(unix)]
#[test]
fn failing_command_fails_the_run() {
    let temp = Project::with_config(
        r#"
repos:
  - repo: local
    hooks:
      - id: complain
        entry: sh -c 'echo "bad things in $0"; exit 3'
        files: '\.txt$'
"#,
    );
    temp.file("a.txt", "a\n");

    run()
        .pwd(temp.path())
        .args(&["--all-files"])
        .fails()
        .stdout_has("exit code: 3")
        .stdout_has("    bad things in a.txt");
}

#[cfg(unix)]
#[test]
fn later_hooks_run_after_a_failure() {
    let temp = Project::with_config(
        r#"
repos:
  - repo: local
    hooks:
      - { id: first, entry: "false", always_run: true, pass_filenames: false }
      - { id: second, entry: "true", always_run: true, pass_filenames: false }
"#,
    );

    let json = run().json().pwd(temp.path()).args(&["--all-files"]).fails();

    assert_eq!(json.status("first"), "failed");
    assert_eq!(json.status("second"), "passed");
    assert!(json.value().get("stopped_early").is_none());
}

#[cfg(unix)]
#[test]
fn fail_fast_stops_after_first_failure() {
    let temp = Project::with_config(
        r#"
repos:
  - repo: local
    hooks:
      - { id: first, entry: "false", always_run: true, pass_filenames: false }
      - { id: second, entry: "true", always_run: true, pass_filenames: false }
"#,
    );

    let json = run()
        .json()
        .pwd(temp.path())
        .args(&["--all-files", "--fail-fast"])
        .fails();

    assert_eq!(json.ids(), vec!["first"]);
    assert_eq!(json.value()["stopped_early"], true);
}

#[cfg(unix)]
#[test]
fn fail_fast_text_output_says_so() {
    let temp = Project::with_config(
        r#"
fail_fast: true
repos:
  - repo: local
    hooks:
      - { id: first, entry: "false", always_run: true, pass_filenames: false }
      - { id: second, entry: "true", always_run: true, pass_filenames: false }
"#,
    );

    run()
        .pwd(temp.path())
        .args(&["--all-files"])
        .fails()
        .stdout_has("fail-fast")
        .stdout_lacks("second");
}

// =============================================================================
// Selection
// =============================================================================

#[cfg(unix)]
#[test]
fn hook_flag_runs_one_hook() {
    let temp = Project::with_config(
        r#"
repos:
  - repo: local
    hooks:
      - { id: broken, entry: "false", always_run: true, pass_filenames: false }
      - { id: fine, entry: "true", always_run: true, pass_filenames: false }
"#,
    );

    let json = run()
        .json()
        .pwd(temp.path())
        .args(&["--all-files", "--hook", "fine"])
        .passes();
    assert_eq!(json.ids(), vec!["fine"]);
}

#[test]
fn unknown_hook_flag_is_an_error() {
    let temp = Project::with_config(HYGIENE);
    run()
        .pwd(temp.path())
        .args(&["--all-files", "--hook", "nope"])
        .exits(2)
        .stderr_has("no hook named `nope`");
}

#[test]
fn stage_flag_selects_stage_hooks() {
    let temp = Project::with_config(
        r#"
default_stages: [pre-commit]
repos:
  - repo: meta
    hooks:
      - id: identity
        always_run: true
        stages: [manual]
      - id: trailing-whitespace
"#,
    );
    temp.file("a.txt", "a\n");

    let json = run()
        .json()
        .pwd(temp.path())
        .args(&["--all-files", "--stage", "manual"])
        .passes();
    assert_eq!(json.ids(), vec!["identity"]);

    let json = run().json().pwd(temp.path()).args(&["--all-files"]).passes();
    assert_eq!(json.ids(), vec!["trailing-whitespace"]);
}

#[test]
fn files_flag_limits_targets() {
    let temp = Project::with_config(HYGIENE);
    temp.file("clean.txt", "ok\n");
    temp.file("dirty.txt", "trailing \n");

    run()
        .pwd(temp.path())
        .args(&["--files", "clean.txt"])
        .passes();
    assert_eq!(temp.read("dirty.txt"), "trailing \n");
}

#[test]
fn files_flag_rejects_missing_paths() {
    let temp = Project::with_config(HYGIENE);
    run()
        .pwd(temp.path())
        .args(&["--files", "ghost.txt"])
        .exits(2)
        .stderr_has("file not found: ghost.txt");
}

#[test]
fn staged_mode_needs_git() {
    let temp = Project::with_config(HYGIENE);
    run()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("requires a git repository");
}

#[test]
fn staged_mode_checks_only_staged_files() {
    let temp = Project::with_config(HYGIENE);
    git_init(&temp);
    temp.file("staged.txt", "fine\n");
    temp.file("unstaged.txt", "dirty \n");
    git_add(&temp, &["staged.txt"]);

    let json = run().json().pwd(temp.path()).passes();

    assert_eq!(json.hook("trailing-whitespace")["files"], 1);
    assert_eq!(temp.read("unstaged.txt"), "dirty \n");
}

#[test]
fn all_files_in_git_uses_tracked_files() {
    let temp = Project::with_config(HYGIENE);
    git_init(&temp);
    temp.file("tracked.txt", "fine\n");
    git_add_all(&temp);
    git_commit(&temp, "initial");
    temp.file("untracked.txt", "dirty \n");

    run().pwd(temp.path()).args(&["--all-files"]).passes();
    assert_eq!(temp.read("untracked.txt"), "dirty \n");
}

#[test]
fn base_mode_checks_changes_since_ref() {
    let temp = Project::with_config(HYGIENE);
    git_init(&temp);
    temp.file("old.txt", "old  \n");
    git_add_all(&temp);
    git_commit(&temp, "initial");
    temp.file("new.txt", "new  \n");
    git_add(&temp, &["new.txt"]);

    run()
        .pwd(temp.path())
        .args(&["--base", "HEAD"])
        .fails()
        .stdout_has("Fixing new.txt")
        .stdout_lacks("old.txt");
}

#[test]
fn base_mode_rejects_unknown_ref() {
    let temp = Project::with_config(HYGIENE);
    git_init(&temp);
    temp.file("a.txt", "a\n");
    git_add_all(&temp);
    git_commit(&temp, "initial");

    run()
        .pwd(temp.path())
        .args(&["--base", "no-such-branch"])
        .exits(2)
        .stderr_has("cannot resolve base `no-such-branch`");
}

#[test]
fn merge_conflict_markers_fail_with_assume_in_merge() {
    let temp = Project::with_config(
        r#"
repos:
  - repo: meta
    hooks:
      - id: check-merge-conflict
        args: [--assume-in-merge]
"#,
    );
    temp.file("a.txt", "ok\n<<<<<<< HEAD\nmine\n=======\ntheirs\n>>>>>>> branch\n");

    run()
        .pwd(temp.path())
        .args(&["--all-files"])
        .fails()
        .stdout_has("a.txt:2: merge conflict string `<<<<<<<` found");
}
