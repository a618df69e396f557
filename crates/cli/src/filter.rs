// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Applicable-file selection for a hook.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::config::{Config, HookEntry};
use crate::tags;

/// Tags applied when neither the config nor the hook implementation says otherwise.
pub const DEFAULT_TYPES: &[&str] = &["file"];

/// Lazily computed tags for the run's target files.
///
/// Each file is identified at most once per run.
pub struct TagCache<'a> {
    root: &'a Path,
    cache: HashMap<String, BTreeSet<&'static str>>,
}

impl<'a> TagCache<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            cache: HashMap::new(),
        }
    }

    pub fn get(&mut self, rel_path: &str) -> &BTreeSet<&'static str> {
        self.cache
            .entry(rel_path.to_string())
            .or_insert_with(|| tags::tags_for_file(self.root, rel_path))
    }
}

/// Type constraints resolved for one hook.
#[derive(Debug, Clone, Copy)]
pub struct TypeFilter<'a> {
    pub types: &'a [String],
    pub types_or: &'a [String],
    pub exclude_types: &'a [String],
}

impl TypeFilter<'_> {
    pub fn matches(&self, tags: &BTreeSet<&'static str>, default_types: &[&str]) -> bool {
        let has = |t: &String| tags.contains(t.as_str());

        let types_ok = if self.types.is_empty() && default_types.is_empty() {
            true
        } else if self.types.is_empty() {
            default_types.iter().all(|t| tags.contains(t))
        } else {
            self.types.iter().all(has)
        };

        types_ok
            && (self.types_or.is_empty() || self.types_or.iter().any(has))
            && !self.exclude_types.iter().any(has)
    }
}

/// Select the files a hook applies to, preserving order.
///
/// `default_types` applies when the hook declares no `types` of its own.
pub fn applicable_files(
    config: &Config,
    hook: &HookEntry,
    default_types: &[&str],
    files: &[String],
    tags: &mut TagCache<'_>,
) -> Vec<String> {
    let type_filter = TypeFilter {
        types: hook.types.as_deref().unwrap_or(&[]),
        types_or: &hook.types_or,
        exclude_types: &hook.exclude_types,
    };
    // Explicit `types` replace the default entirely
    let default_types = if hook.types.is_some() {
        &[][..]
    } else {
        default_types
    };

    files
        .iter()
        .filter(|path| {
            config.files.as_ref().is_none_or(|p| p.is_match(path))
                && !config.exclude.as_ref().is_some_and(|p| p.is_match(path))
                && hook.files.as_ref().is_none_or(|p| p.is_match(path))
                && !hook.exclude.as_ref().is_some_and(|p| p.is_match(path))
        })
        .filter(|path| type_filter.matches(tags.get(path), default_types))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
