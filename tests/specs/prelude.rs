//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing hookline CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the hookline binary
pub fn hookline_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hookline"));
    // Keep the caller's environment from leaking into assertions
    cmd.env_remove("HOOKLINE_CONFIG")
        .env_remove("HOOKLINE_LOG")
        .env_remove("NO_COLOR")
        .env_remove("COLOR");
    cmd
}

/// Create a `hookline run` builder
pub fn run() -> RunBuilder<Text> {
    RunBuilder::new()
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// High-level run builder for fluent test assertions
pub struct RunBuilder<Mode = Text> {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl RunBuilder<Text> {
    fn new() -> Self {
        Self {
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> RunBuilder<Json> {
        RunBuilder {
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }

    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    pub fn fails(self) -> RunAssert {
        run_exits(self.command(), 1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }
}

#[allow(dead_code)]
impl RunBuilder<Json> {
    pub fn passes(self) -> RunJson {
        RunJson::new(&run_exits(self.command(), 0).output.stdout)
    }

    pub fn fails(self) -> RunJson {
        RunJson::new(&run_exits(self.command(), 1).output.stdout)
    }
}

#[allow(dead_code)]
impl<Mode: 'static> RunBuilder<Mode> {
    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Build the command without running it
    fn command(self) -> Command {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();
        let mut cmd = hookline_cmd();
        cmd.arg("run");

        if is_json {
            cmd.args(["-o", "json"]);
        }

        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Parsed JSON output of `hookline run -o json`
pub struct RunJson {
    value: serde_json::Value,
}

#[allow(dead_code)]
impl RunJson {
    fn new(stdout: &[u8]) -> Self {
        let value = serde_json::from_slice(stdout).unwrap_or_else(|e| {
            panic!(
                "output should be valid JSON ({}):\n{}",
                e,
                String::from_utf8_lossy(stdout)
            )
        });
        Self { value }
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    /// Hook results in execution order
    pub fn hooks(&self) -> &Vec<serde_json::Value> {
        self.value["hooks"].as_array().expect("hooks should be an array")
    }

    /// Hook ids in execution order
    pub fn ids(&self) -> Vec<&str> {
        self.hooks()
            .iter()
            .filter_map(|h| h["id"].as_str())
            .collect()
    }

    /// Result for the hook with `id`
    pub fn hook(&self, id: &str) -> &serde_json::Value {
        self.hooks()
            .iter()
            .find(|h| h["id"] == id)
            .unwrap_or_else(|| panic!("no hook `{}` in output", id))
    }

    /// Status of the hook with `id`
    pub fn status(&self, id: &str) -> &str {
        self.hook(id)["status"].as_str().expect("status should be a string")
    }
}

/// Result of a command run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        check_stream("stdout", &self.output.stdout, predicate.into_predicate(), true);
        self
    }

    pub fn stdout_lacks<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        check_stream("stdout", &self.output.stdout, predicate.into_predicate(), false);
        self
    }

    pub fn stderr_has<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        check_stream("stderr", &self.output.stderr, predicate.into_predicate(), true);
        self
    }

    pub fn stderr_lacks<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        check_stream("stderr", &self.output.stderr, predicate.into_predicate(), false);
        self
    }
}

fn check_stream(stream: &str, bytes: &[u8], predicate: impl Predicate<str>, expected: bool) {
    let text = String::from_utf8_lossy(bytes);
    assert_eq!(
        predicate.eval(&text),
        expected,
        "{} {} the predicate:\n{}",
        stream,
        if expected { "does not match" } else { "unexpectedly matches" },
        text
    );
}

// =============================================================================
// Project
// =============================================================================

/// Temporary test project directory with helper methods.
///
/// ```ignore
/// let temp = Project::empty();
/// temp.config("repos: []\n");
/// temp.file("src/app.py", "print(1)\n");
/// run().pwd(temp.path()).args(&["--all-files"]).passes();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project with the given `.hookline.yaml`
    pub fn with_config(config: &str) -> Self {
        let temp = Self::empty();
        temp.config(config);
        temp
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write .hookline.yaml
    pub fn config(&self, content: &str) {
        self.file(".hookline.yaml", content);
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Read a file back
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(path.as_ref())).unwrap()
    }
}

// =============================================================================
// GIT TEST HELPERS
// =============================================================================

fn git(project: &Project, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(project.path())
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initialize a git repo with minimal config
#[allow(dead_code)]
pub fn git_init(project: &Project) {
    git(project, &["init", "-b", "main"]);
    git(project, &["config", "user.email", "test@example.com"]);
    git(project, &["config", "user.name", "Test User"]);
    git(project, &["config", "commit.gpgsign", "false"]);
}

/// Stage specific paths
#[allow(dead_code)]
pub fn git_add(project: &Project, paths: &[&str]) {
    let mut args = vec!["add", "--"];
    args.extend_from_slice(paths);
    git(project, &args);
}

/// Stage all changes
#[allow(dead_code)]
pub fn git_add_all(project: &Project) {
    git(project, &["add", "-A"]);
}

/// Commit whatever is staged
#[allow(dead_code)]
pub fn git_commit(project: &Project, message: &str) {
    git(project, &["commit", "--no-verify", "-m", message]);
}
