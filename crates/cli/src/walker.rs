// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File walking with gitignore support.
//!
//! Used for `--all-files` when the project is not a git repository. Uses the
//! `ignore` crate so `.gitignore` and `.ignore` files still apply.

use std::path::Path;

use ignore::WalkBuilder;

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories to skip entirely during walking.
/// These are filtered during traversal, not after discovery.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &[".git", ".hg", ".svn"];

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            git_ignore: true,
            // Dotfiles like `.hookline.yaml` are valid targets
            hidden: false,
        }
    }
}

/// Statistics from a walk operation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Total files discovered.
    pub files_found: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// Sequential file walker.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root`, returning sorted root-relative paths of regular files.
    pub fn walk(&self, root: &Path) -> (Vec<String>, WalkStats) {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            // Honor .gitignore even before `git init`
            .require_git(false)
            .max_depth(self.config.max_depth)
            .filter_entry(|entry| {
                !entry.file_type().is_some_and(|t| t.is_dir())
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
            });

        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }
                    let Ok(rel) = entry.path().strip_prefix(root) else {
                        continue;
                    };
                    match rel.to_str() {
                        Some(rel) => {
                            files.push(rel.replace('\\', "/"));
                            stats.files_found += 1;
                        }
                        None => tracing::warn!("skipping non-UTF-8 path {}", rel.display()),
                    }
                }
                Err(err) => {
                    if is_loop_error(&err) {
                        tracing::warn!("Symlink loop detected: {}", err);
                        stats.symlink_loops += 1;
                    } else {
                        tracing::warn!("Walk error: {}", err);
                        stats.errors += 1;
                    }
                }
            }
        }

        files.sort();
        (files, stats)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
