// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook trait and result types.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Context passed to a hook when it runs.
pub struct HookContext<'a> {
    /// Repository root. Hooks read and write files relative to it.
    pub root: &'a Path,
    /// Repo-relative paths the hook applies to, in order.
    pub files: &'a [String],
    /// Arguments declared in the config.
    pub args: &'a [String],
    /// Whether the user asked for verbose output.
    pub verbose: bool,
}

impl HookContext<'_> {
    /// Absolute path for a repo-relative file.
    pub fn path(&self, rel_path: &str) -> PathBuf {
        self.root.join(rel_path)
    }

    /// Value of a `--name=value` argument, if present.
    pub fn arg_value(&self, name: &str) -> Option<&str> {
        self.args.iter().find_map(|arg| {
            arg.strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
    }
}

/// A single runnable hook.
pub trait Hook {
    /// Identifier shown in logs.
    fn name(&self) -> &str;

    /// Tags a file must carry when the config declares no `types`.
    fn default_types(&self) -> &'static [&'static str] {
        crate::filter::DEFAULT_TYPES
    }

    /// Run against `ctx.files`.
    ///
    /// Implementations must not panic on bad input files; unreadable files
    /// are reported as findings.
    fn run(&self, ctx: &HookContext) -> HookOutcome;
}

/// A single problem reported by a hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// File path (None for findings not tied to a file).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Line number (None if not applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Finding category (hook-specific).
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable detail.
    pub message: String,
}

impl Finding {
    /// Create a finding at a file and line.
    pub fn at_line(
        file: impl Into<PathBuf>,
        line: u32,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line),
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create a finding for a whole file.
    pub fn file(
        file: impl Into<PathBuf>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: Some(file.into()),
            line: None,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create a finding not tied to a file.
    pub fn general(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: None,
            line: None,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// A fixer rewrote this file.
    pub fn fixed(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let message = format!("Fixing {}", file.display());
        Self::file(file, "fixed", message)
    }
}

/// Why a hook did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No target file matched the hook's filters.
    NoFiles,
    /// No built-in implementation and no `entry` to execute.
    Unavailable,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::NoFiles => "no files to check",
            SkipReason::Unavailable => "unavailable",
        }
    }
}

/// Result of running one hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HookOutcome {
    Passed {
        /// Captured output worth showing (verbose hooks).
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<String>,
    },
    Failed {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        findings: Vec<Finding>,
        /// Captured diagnostic text.
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<String>,
    },
    Skipped { reason: SkipReason },
}

impl HookOutcome {
    pub fn passed() -> Self {
        HookOutcome::Passed { output: None }
    }

    /// Failed with findings and no captured output.
    pub fn failed(findings: Vec<Finding>) -> Self {
        HookOutcome::Failed {
            findings,
            output: None,
        }
    }

    /// Failed with captured diagnostic text.
    pub fn failed_with_output(output: impl Into<String>) -> Self {
        HookOutcome::Failed {
            findings: Vec::new(),
            output: Some(output.into()),
        }
    }

    /// Passed when there are no findings, otherwise failed.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        if findings.is_empty() {
            Self::passed()
        } else {
            Self::failed(findings)
        }
    }

    pub fn skipped(reason: SkipReason) -> Self {
        HookOutcome::Skipped { reason }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, HookOutcome::Failed { .. })
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, HookOutcome::Passed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, HookOutcome::Skipped { .. })
    }

    /// Findings, if the hook failed.
    pub fn findings(&self) -> &[Finding] {
        match self {
            HookOutcome::Failed { findings, .. } => findings,
            _ => &[],
        }
    }

    /// Captured output, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            HookOutcome::Passed { output } | HookOutcome::Failed { output, .. } => {
                output.as_deref()
            }
            HookOutcome::Skipped { .. } => None,
        }
    }
}

/// Result of one planned hook within a run.
#[derive(Debug, Clone, Serialize)]
pub struct HookResult {
    /// Hook id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// `repo@rev` of the declaring source.
    pub source: String,

    /// Number of files the hook was run against.
    pub files: usize,

    #[serde(flatten)]
    pub outcome: HookOutcome,

    /// Whether the hook asked for its output to be shown on success.
    #[serde(skip)]
    pub verbose: bool,

    /// Wall time spent in the hook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Aggregated results of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// False if any hook failed. Skips never fail a run.
    pub passed: bool,

    /// True if a failure stopped the run before every hook ran.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stopped_early: bool,

    /// Results in execution order.
    pub hooks: Vec<HookResult>,
}

impl RunOutput {
    pub fn new(timestamp: String, hooks: Vec<HookResult>, stopped_early: bool) -> Self {
        let passed = !hooks.iter().any(|h| h.outcome.is_failed());
        Self {
            timestamp,
            passed,
            stopped_early,
            hooks,
        }
    }

    pub fn count_passed(&self) -> usize {
        self.hooks.iter().filter(|h| h.outcome.is_passed()).count()
    }

    pub fn count_failed(&self) -> usize {
        self.hooks.iter().filter(|h| h.outcome.is_failed()).count()
    }

    pub fn count_skipped(&self) -> usize {
        self.hooks.iter().filter(|h| h.outcome.is_skipped()).count()
    }
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
