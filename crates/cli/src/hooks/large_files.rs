// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! check-added-large-files: block new files over a size limit.
//!
//! Files already committed at HEAD are exempt unless `--enforce-all` is set.
//! The limit is `--maxkb=N` kilobytes (default 500).

use crate::hook::{Finding, Hook, HookContext, HookOutcome};

/// Default size limit in kilobytes.
pub const DEFAULT_MAX_KB: u64 = 500;

pub struct LargeFiles;

impl Hook for LargeFiles {
    fn name(&self) -> &str {
        "check-added-large-files"
    }

    fn run(&self, ctx: &HookContext) -> HookOutcome {
        let max_kb = match ctx.arg_value("--maxkb") {
            None => DEFAULT_MAX_KB,
            Some(value) => match value.parse::<u64>() {
                Ok(kb) => kb,
                Err(_) => {
                    return HookOutcome::failed_with_output(format!(
                        "invalid --maxkb value `{}`",
                        value
                    ));
                }
            },
        };
        let enforce_all = ctx.args.iter().any(|a| a == "--enforce-all");
        let committed = if enforce_all {
            Default::default()
        } else {
            crate::git::files_in_head(ctx.root)
        };

        let mut findings = Vec::new();
        for rel_path in ctx.files {
            if committed.contains(rel_path) {
                continue;
            }
            let size = match std::fs::metadata(ctx.path(rel_path)) {
                Ok(meta) => meta.len(),
                Err(e) => {
                    findings.push(Finding::file(
                        rel_path.as_str(),
                        "read_error",
                        format!("failed to read: {}", e),
                    ));
                    continue;
                }
            };
            let kb = size.div_ceil(1024);
            if kb > max_kb {
                findings.push(Finding::file(
                    rel_path.as_str(),
                    "large_file",
                    format!("{} KB exceeds {} KB", kb, max_kb),
                ));
            }
        }
        HookOutcome::from_findings(findings)
    }
}

#[cfg(test)]
#[path = "large_files_tests.rs"]
mod tests;
