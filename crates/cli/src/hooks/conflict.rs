// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! check-merge-conflict: find leftover conflict markers.
//!
//! Only runs while a merge or rebase is in progress, unless
//! `--assume-in-merge` is passed.

use std::sync::OnceLock;

use aho_corasick::AhoCorasick;

use super::{line_of, read_target};
use crate::hook::{Finding, Hook, HookContext, HookOutcome};

const MARKERS: &[&str] = &["<<<<<<< ", "======= ", "=======\r\n", "=======\n", ">>>>>>> "];

pub struct MergeConflict;

fn matcher() -> Option<&'static AhoCorasick> {
    static MATCHER: OnceLock<Option<AhoCorasick>> = OnceLock::new();
    MATCHER
        .get_or_init(|| match AhoCorasick::new(MARKERS) {
            Ok(ac) => Some(ac),
            Err(e) => {
                tracing::error!("failed to build conflict marker matcher: {}", e);
                None
            }
        })
        .as_ref()
}

/// Line numbers of conflict markers that start a line.
pub fn find_markers(content: &[u8]) -> Vec<(u32, &'static str)> {
    let Some(ac) = matcher() else {
        return Vec::new();
    };
    ac.find_iter(content)
        .filter(|m| m.start() == 0 || content[m.start() - 1] == b'\n')
        .map(|m| {
            let marker = MARKERS[m.pattern().as_usize()];
            (line_of(content, m.start()), marker.trim_end())
        })
        .collect()
}

impl Hook for MergeConflict {
    fn name(&self) -> &str {
        "check-merge-conflict"
    }

    fn default_types(&self) -> &'static [&'static str] {
        &["text"]
    }

    fn run(&self, ctx: &HookContext) -> HookOutcome {
        let assume = ctx.args.iter().any(|a| a == "--assume-in-merge");
        if !assume && !crate::git::is_merging(ctx.root) {
            tracing::debug!("not in a merge, skipping conflict marker scan");
            return HookOutcome::passed();
        }

        let mut findings = Vec::new();
        for rel_path in ctx.files {
            let content = match read_target(ctx, rel_path) {
                Ok(content) => content,
                Err(finding) => {
                    findings.push(finding);
                    continue;
                }
            };
            for (line, marker) in find_markers(&content) {
                findings.push(Finding::at_line(
                    rel_path.as_str(),
                    line,
                    "merge_conflict",
                    format!("merge conflict string `{}` found", marker),
                ));
            }
        }
        HookOutcome::from_findings(findings)
    }
}

#[cfg(test)]
#[path = "conflict_tests.rs"]
mod tests;
