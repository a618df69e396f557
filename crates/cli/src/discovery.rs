// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for a config.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file names, in lookup order within one directory.
pub const CONFIG_NAMES: &[&str] = &[".hookline.yaml", ".hookline.yml", "hookline.toml"];

/// Find a config starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = CONFIG_NAMES
            .iter()
            .map(|name| current.join(name))
            .find(|path| path.is_file())
        {
            tracing::debug!("found config at {}", found.display());
            return Some(found);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-c`/`--config` (handled by clap with env = "HOOKLINE_CONFIG")
/// 2. Discovery from current directory up to git root
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            if path.is_file() {
                Ok(path)
            } else {
                Err(Error::parse(
                    format!("config file not found: {}", path.display()),
                    &path,
                ))
            }
        }
        None => find_config(cwd).ok_or_else(|| {
            Error::Argument(format!(
                "no config file found (looked for {} from {} up to the git root)",
                CONFIG_NAMES.join(", "),
                cwd.display()
            ))
        }),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
