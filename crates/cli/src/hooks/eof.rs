// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! end-of-file-fixer: files end in exactly one newline.

use super::{read_target, rewrite_target};
use crate::hook::{Hook, HookContext, HookOutcome};

pub struct EndOfFileFixer;

impl Hook for EndOfFileFixer {
    fn name(&self) -> &str {
        "end-of-file-fixer"
    }

    fn default_types(&self) -> &'static [&'static str] {
        &["text"]
    }

    fn run(&self, ctx: &HookContext) -> HookOutcome {
        let mut findings = Vec::new();
        for rel_path in ctx.files {
            match read_target(ctx, rel_path) {
                Ok(original) => {
                    let fixed = fix_end_of_file(&original);
                    findings.extend(rewrite_target(ctx, rel_path, &original, &fixed));
                }
                Err(finding) => findings.push(finding),
            }
        }
        HookOutcome::from_findings(findings)
    }
}

/// Normalize the end of a file to a single line ending.
///
/// Empty files and files holding only newlines become empty. The kept line
/// ending is `\r\n` when the file's trailing run starts with one.
pub fn fix_end_of_file(content: &[u8]) -> Vec<u8> {
    let body_len = content
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    if body_len == 0 {
        return Vec::new();
    }

    let tail = &content[body_len..];
    let eol: &[u8] = if tail.starts_with(b"\r\n") { b"\r\n" } else { b"\n" };

    let mut fixed = Vec::with_capacity(body_len + eol.len());
    fixed.extend_from_slice(&content[..body_len]);
    fixed.extend_from_slice(eol);
    fixed
}

#[cfg(test)]
#[path = "eof_tests.rs"]
mod tests;
