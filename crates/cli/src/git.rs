// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git utilities for target file selection.
//!
//! Uses git2 (libgit2) for all git operations to avoid subprocess overhead.
//!
//! ## File Detection
//!
//! Paths are returned relative to the repository root, sorted, without
//! duplicates. Deleted files are never targets:
//! - Added, modified, copied files: path from `new_file()`
//! - Renamed files: path from `new_file()` (the new location)
//! - Deleted files: dropped

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use git2::{Delta, Diff, Repository, RepositoryState, TreeWalkMode, TreeWalkResult};

use crate::error::{Error, Result};

/// Repository-relative path of a diff delta, or `None` for deletions.
fn target_path(delta: &git2::DiffDelta<'_>) -> Option<String> {
    if delta.status() == Delta::Deleted {
        return None;
    }
    let path = delta.new_file().path()?;
    match path.to_str() {
        Some(p) => Some(p.to_string()),
        None => {
            tracing::warn!("skipping non-UTF-8 path {}", path.display());
            None
        }
    }
}

fn collect(diff: &Diff<'_>, into: &mut BTreeSet<String>) {
    into.extend(diff.deltas().filter_map(|d| target_path(&d)));
}

fn open(root: &Path) -> Result<Repository> {
    Repository::open(root).map_err(|e| Error::Git(format!("{}: {}", root.display(), e.message())))
}

/// Work tree root of the repository containing `start`, if any.
pub fn repo_root(start: &Path) -> Option<PathBuf> {
    let repo = Repository::discover(start).ok()?;
    repo.workdir().map(Path::to_path_buf)
}

/// Whether a merge, rebase, cherry-pick or revert is in progress.
pub fn is_merging(root: &Path) -> bool {
    Repository::open(root)
        .map(|repo| repo.state() != RepositoryState::Clean)
        .unwrap_or(false)
}

/// HEAD tree, or `None` on an unborn branch.
fn head_tree(repo: &Repository) -> Result<Option<git2::Tree<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_tree()?)),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Files staged for commit (index vs HEAD).
pub fn staged_files(root: &Path) -> Result<Vec<String>> {
    let repo = open(root)?;
    let head = head_tree(&repo)?;
    let index = repo.index()?;

    let diff = repo.diff_tree_to_index(head.as_ref(), Some(&index), None)?;
    let mut files = BTreeSet::new();
    collect(&diff, &mut files);
    Ok(files.into_iter().collect())
}

/// Files that differ between `base` and the working tree, staged or not.
pub fn changed_files(root: &Path, base: &str) -> Result<Vec<String>> {
    let repo = open(root)?;
    let base_tree = repo
        .revparse_single(base)
        .and_then(|obj| obj.peel_to_tree())
        .map_err(|e| Error::Argument(format!("cannot resolve base `{}`: {}", base, e.message())))?;

    let mut opts = git2::DiffOptions::new();
    opts.include_untracked(false);
    let diff = repo.diff_tree_to_workdir_with_index(Some(&base_tree), Some(&mut opts))?;

    let mut files = BTreeSet::new();
    collect(&diff, &mut files);
    Ok(files.into_iter().collect())
}

/// Every file in the index that still exists in the working tree.
pub fn tracked_files(root: &Path) -> Result<Vec<String>> {
    let repo = open(root)?;
    let index = repo.index()?;

    let files: BTreeSet<String> = index
        .iter()
        .filter_map(|entry| String::from_utf8(entry.path).ok())
        .filter(|path| root.join(path).exists())
        .collect();
    Ok(files.into_iter().collect())
}

/// Paths of every blob in the HEAD tree. Empty outside a repository.
pub fn files_in_head(root: &Path) -> HashSet<String> {
    let mut files = HashSet::new();
    let Ok(repo) = Repository::open(root) else {
        return files;
    };
    let Ok(Some(tree)) = head_tree(&repo) else {
        return files;
    };
    let walked = tree.walk(TreeWalkMode::PreOrder, |dir, entry| {
        if entry.kind() == Some(git2::ObjectType::Blob)
            && let Some(name) = entry.name()
        {
            files.insert(format!("{}{}", dir, name));
        }
        TreeWalkResult::Ok
    });
    if let Err(e) = walked {
        tracing::warn!("failed to walk HEAD tree: {}", e);
    }
    files
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
