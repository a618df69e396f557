// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Target file selection for a run.
//!
//! Every selection yields repo-relative paths with `/` separators, sorted
//! and without duplicates.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::git;
use crate::walker::{FileWalker, WalkerConfig};

/// Which files a run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Files staged for commit. Requires git.
    Staged,
    /// Every tracked file, or every non-ignored file outside git.
    All,
    /// Explicit paths relative to the working directory. Directories expand
    /// to the files under them.
    Paths(Vec<PathBuf>),
    /// Files changed since a git ref. Requires git.
    Since(String),
}

/// The project root a run operates on and whether it is a git work tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub root: PathBuf,
    pub is_git: bool,
}

impl Project {
    /// Enclosing git work tree of `cwd`, or `cwd` itself outside git.
    pub fn locate(cwd: &Path) -> Self {
        match git::repo_root(cwd) {
            Some(root) => Self { root, is_git: true },
            None => Self {
                root: cwd.to_path_buf(),
                is_git: false,
            },
        }
    }

    /// Resolve a selection to repo-relative file paths.
    pub fn select(&self, selection: &Selection, cwd: &Path) -> Result<Vec<String>> {
        let files = match selection {
            Selection::Staged => git::staged_files(&self.require_git("staged files")?.root)?,
            Selection::Since(base) => {
                git::changed_files(&self.require_git("--base")?.root, base)?
            }
            Selection::All if self.is_git => git::tracked_files(&self.root)?,
            Selection::All => walk(&self.root),
            Selection::Paths(paths) => self.explicit(paths, cwd)?,
        };
        tracing::debug!("selected {} target files", files.len());
        Ok(files)
    }

    fn require_git(&self, what: &str) -> Result<&Self> {
        if self.is_git {
            Ok(self)
        } else {
            Err(Error::Argument(format!(
                "{} requires a git repository; use --all-files or --files outside git",
                what
            )))
        }
    }

    fn explicit(&self, paths: &[PathBuf], cwd: &Path) -> Result<Vec<String>> {
        let root = canonical(&self.root)?;
        let mut files = BTreeSet::new();
        for path in paths {
            let absolute = cwd.join(path);
            if !absolute.exists() {
                return Err(Error::Argument(format!(
                    "file not found: {}",
                    path.display()
                )));
            }
            let absolute = canonical(&absolute)?;
            let Ok(relative) = absolute.strip_prefix(&root) else {
                return Err(Error::Argument(format!(
                    "{} is outside the project root {}",
                    path.display(),
                    root.display()
                )));
            };
            let relative = slash_path(relative);
            if absolute.is_dir() {
                files.extend(walk(&absolute).into_iter().map(|f| join(&relative, &f)));
            } else {
                files.insert(relative);
            }
        }
        Ok(files.into_iter().collect())
    }
}

fn walk(dir: &Path) -> Vec<String> {
    let (files, stats) = FileWalker::new(WalkerConfig::default()).walk(dir);
    if stats.errors > 0 || stats.symlink_loops > 0 {
        tracing::debug!(
            "walk of {}: {} errors, {} symlink loops",
            dir.display(),
            stats.errors,
            stats.symlink_loops
        );
    }
    files
}

fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|e| Error::io(path, e))
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn join(dir: &str, file: &str) -> String {
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}

#[cfg(test)]
#[path = "targets_tests.rs"]
mod tests;
