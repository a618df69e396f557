// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Starter config generation for `hookline init`.
//!
//! The starter always enables the text hygiene hooks. Syntax checks are
//! added for the data formats found in the project.

use std::path::Path;

/// File name `init` writes.
pub const STARTER_FILE: &str = ".hookline.yaml";

/// Data formats that can be detected in a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectedFormat {
    Yaml,
    Toml,
    Json,
}

impl DetectedFormat {
    /// Built-in hook that validates this format.
    pub fn hook_id(self) -> &'static str {
        match self {
            DetectedFormat::Yaml => "check-yaml",
            DetectedFormat::Toml => "check-toml",
            DetectedFormat::Json => "check-json",
        }
    }

    fn extensions(self) -> &'static [&'static str] {
        match self {
            DetectedFormat::Yaml => &["yaml", "yml"],
            DetectedFormat::Toml => &["toml"],
            DetectedFormat::Json => &["json"],
        }
    }
}

/// Directories searched besides the root, one level deep.
const MARKER_DIRS: &[&str] = &["config", ".github/workflows", "scripts"];

/// Detect data formats present in a project.
///
/// Detection is additive: a project with Cargo.toml and package.json returns
/// both Toml and Json.
pub fn detect_formats(root: &Path) -> Vec<DetectedFormat> {
    [DetectedFormat::Yaml, DetectedFormat::Toml, DetectedFormat::Json]
        .into_iter()
        .filter(|format| {
            has_files_with(root, format.extensions())
                || MARKER_DIRS.iter().any(|dir| {
                    let dir = root.join(dir);
                    dir.is_dir() && has_files_with(&dir, format.extensions())
                })
        })
        .collect()
}

/// Check if a directory directly contains a file with one of `extensions`.
fn has_files_with(dir: &Path, extensions: &[&str]) -> bool {
    dir.read_dir()
        .ok()
        .map(|entries| {
            entries.filter_map(|e| e.ok()).any(|entry| {
                let path = entry.path();
                path.is_file()
                    && path
                        .extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|ext| extensions.contains(&ext))
            })
        })
        .unwrap_or(false)
}

const STARTER_HEADER: &str = "\
# hookline configuration
#
# Hooks run in the order listed: every hook of the first repo, then the
# second, and so on. Remote repos must pin a `rev`.
fail_fast: false
repos:
  - repo: meta
    hooks:
      - id: trailing-whitespace
      - id: end-of-file-fixer
      - id: mixed-line-ending
      - id: check-merge-conflict
      - id: detect-private-key
      - id: check-added-large-files
";

const LOCAL_EXAMPLE: &str = "\
  # - repo: local
  #   hooks:
  #     - id: lint
  #       name: Run the linter
  #       entry: make lint
  #       types: [python]
";

/// Render the starter config for the detected formats.
pub fn starter_config(formats: &[DetectedFormat]) -> String {
    let mut config = STARTER_HEADER.to_string();
    for format in formats {
        config.push_str("      - id: ");
        config.push_str(format.hook_id());
        config.push('\n');
    }
    config.push_str(LOCAL_EXAMPLE);
    config
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
