// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook registry and resolution.
//!
//! Built-in hooks run in process. Anything with an `entry` runs as a
//! subprocess through [`command::CommandHook`].

pub mod command;
pub mod conflict;
pub mod eof;
pub mod identity;
pub mod large_files;
pub mod line_endings;
pub mod private_key;
pub mod syntax;
pub mod whitespace;

use crate::config::HookEntry;
use crate::hook::{Finding, Hook, HookContext};

/// All built-in hook ids in canonical order.
pub const BUILTIN_IDS: &[&str] = &[
    "trailing-whitespace",
    "end-of-file-fixer",
    "mixed-line-ending",
    "check-merge-conflict",
    "detect-private-key",
    "check-added-large-files",
    "check-yaml",
    "check-toml",
    "check-json",
    "identity",
];

/// Whether `id` names a built-in hook.
pub fn is_builtin(id: &str) -> bool {
    BUILTIN_IDS.contains(&id)
}

/// Create a built-in hook by id.
pub fn builtin(id: &str) -> Option<Box<dyn Hook>> {
    let hook: Box<dyn Hook> = match id {
        "trailing-whitespace" => Box::new(whitespace::TrailingWhitespace),
        "end-of-file-fixer" => Box::new(eof::EndOfFileFixer),
        "mixed-line-ending" => Box::new(line_endings::MixedLineEnding),
        "check-merge-conflict" => Box::new(conflict::MergeConflict),
        "detect-private-key" => Box::new(private_key::DetectPrivateKey),
        "check-added-large-files" => Box::new(large_files::LargeFiles),
        "check-yaml" => Box::new(syntax::SyntaxCheck::Yaml),
        "check-toml" => Box::new(syntax::SyntaxCheck::Toml),
        "check-json" => Box::new(syntax::SyntaxCheck::Json),
        "identity" => Box::new(identity::Identity),
        _ => return None,
    };
    Some(hook)
}

/// Pick the implementation for a declared hook.
///
/// An `entry` always wins, so a config can shadow a built-in id with its own
/// command. Returns `None` when nothing can run the hook.
pub fn resolve(entry: &HookEntry) -> Option<Box<dyn Hook>> {
    if let Some(command) = &entry.entry {
        return Some(Box::new(command::CommandHook::new(
            entry.identity(),
            command,
            entry.pass_filenames,
        )));
    }
    builtin(&entry.id)
}

/// Read a target file, reporting failures as a finding.
pub(crate) fn read_target(ctx: &HookContext, rel_path: &str) -> Result<Vec<u8>, Finding> {
    std::fs::read(ctx.path(rel_path))
        .map_err(|e| Finding::file(rel_path, "read_error", format!("failed to read: {}", e)))
}

/// Rewrite a target file if its content changed.
///
/// Returns the finding to report: `fixed` on success, an error otherwise.
pub(crate) fn rewrite_target(
    ctx: &HookContext,
    rel_path: &str,
    original: &[u8],
    updated: &[u8],
) -> Option<Finding> {
    if original == updated {
        return None;
    }
    match std::fs::write(ctx.path(rel_path), updated) {
        Ok(()) => Some(Finding::fixed(rel_path)),
        Err(e) => Some(Finding::file(
            rel_path,
            "write_error",
            format!("failed to write: {}", e),
        )),
    }
}

/// 1-based line number of a byte offset.
pub(crate) fn line_of(content: &[u8], offset: usize) -> u32 {
    let end = offset.min(content.len());
    memchr::memchr_iter(b'\n', &content[..end]).count() as u32 + 1
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
