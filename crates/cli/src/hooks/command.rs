// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-backed hooks.
//!
//! The `entry` is split like a shell would, followed by the configured
//! `args` and then the target files. Long file lists are split into batches
//! so a single invocation stays under the platform's argument limit. The
//! hook fails if any batch exits nonzero or if it rewrote a target file.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::hook::{Finding, Hook, HookContext, HookOutcome};

/// Upper bound on the combined length of a batch's arguments.
///
/// Windows caps a command line at 32 KiB; the same bound is used everywhere
/// so batching is predictable.
pub const MAX_COMMAND_BYTES: usize = 32 * 1024;

/// A hook that runs an external command.
pub struct CommandHook {
    name: String,
    entry: String,
    pass_filenames: bool,
}

impl CommandHook {
    pub fn new(name: &str, entry: &str, pass_filenames: bool) -> Self {
        Self {
            name: name.to_string(),
            entry: entry.to_string(),
            pass_filenames,
        }
    }
}

/// Split `files` into batches whose length plus `fixed_len` fits in `budget`.
///
/// Every batch holds at least one file, even one that alone exceeds the
/// budget. Order is preserved.
pub fn partition<'f>(files: &'f [String], fixed_len: usize, budget: usize) -> Vec<&'f [String]> {
    let mut batches = Vec::new();
    let mut start = 0;
    let mut len = fixed_len;

    for (i, file) in files.iter().enumerate() {
        let arg_len = file.len() + 1;
        if i > start && len + arg_len > budget {
            batches.push(&files[start..i]);
            start = i;
            len = fixed_len;
        }
        len += arg_len;
    }
    if start < files.len() {
        batches.push(&files[start..]);
    }
    batches
}

/// Content fingerprints taken before a command runs.
struct Snapshot(HashMap<String, Option<u64>>);

impl Snapshot {
    fn take(root: &Path, files: &[String]) -> Self {
        Self(
            files
                .iter()
                .map(|f| (f.clone(), fingerprint(&root.join(f))))
                .collect(),
        )
    }

    /// Files whose content differs from the snapshot, in `files` order.
    fn modified<'f>(&self, root: &Path, files: &'f [String]) -> Vec<&'f str> {
        files
            .iter()
            .filter(|f| self.0.get(f.as_str()).copied().flatten() != fingerprint(&root.join(f)))
            .map(String::as_str)
            .collect()
    }
}

fn fingerprint(path: &Path) -> Option<u64> {
    let content = std::fs::read(path).ok()?;
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    Some(hasher.finish())
}

impl Hook for CommandHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &HookContext) -> HookOutcome {
        let argv = match shell_words::split(&self.entry) {
            Ok(argv) => argv,
            Err(e) => {
                return HookOutcome::failed_with_output(format!(
                    "invalid entry `{}`: {}",
                    self.entry, e
                ));
            }
        };
        let Some((program, entry_args)) = argv.split_first() else {
            return HookOutcome::failed_with_output("entry is empty");
        };

        let mut fixed_args: Vec<&str> = entry_args.iter().map(String::as_str).collect();
        fixed_args.extend(ctx.args.iter().map(String::as_str));
        let fixed_len = program.len() + fixed_args.iter().map(|a| a.len() + 1).sum::<usize>();

        let batches = if self.pass_filenames && !ctx.files.is_empty() {
            partition(ctx.files, fixed_len, MAX_COMMAND_BYTES)
        } else {
            vec![&ctx.files[..0]]
        };

        let snapshot = Snapshot::take(ctx.root, ctx.files);
        let mut output = String::new();
        let mut findings = Vec::new();

        for batch in batches {
            tracing::debug!("{}: running {} with {} files", self.name, program, batch.len());
            let result = Command::new(program)
                .args(&fixed_args)
                .args(batch)
                .current_dir(ctx.root)
                .stdin(Stdio::null())
                .output();

            let out = match result {
                Ok(out) => out,
                Err(e) => {
                    return HookOutcome::failed_with_output(format!(
                        "failed to execute `{}`: {}",
                        program, e
                    ));
                }
            };
            output.push_str(&String::from_utf8_lossy(&out.stdout));
            output.push_str(&String::from_utf8_lossy(&out.stderr));

            if !out.status.success() {
                let code = out
                    .status
                    .code()
                    .map_or_else(|| "signal".to_string(), |c| c.to_string());
                let message = format!("exit code: {}", code);
                if !findings.iter().any(|f: &Finding| f.message == message) {
                    findings.push(Finding::general("exit_code", message));
                }
            }
        }

        let modified = snapshot.modified(ctx.root, ctx.files);
        if !modified.is_empty() {
            findings.push(Finding::general(
                "modified",
                "files were modified by this hook",
            ));
            findings.extend(
                modified
                    .into_iter()
                    .map(|f| Finding::file(f, "modified", "modified by this hook")),
            );
        }

        let output = output.trim_end();
        let output = (!output.is_empty()).then(|| output.to_string());
        if findings.is_empty() {
            HookOutcome::Passed { output }
        } else {
            HookOutcome::Failed { findings, output }
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
