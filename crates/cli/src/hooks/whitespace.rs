// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trailing-whitespace: strip whitespace at the end of lines.
//!
//! `--markdown-linebreak-ext=md,markdown` keeps a two-space hard line break
//! in files with those extensions.

use std::path::Path;

use super::{read_target, rewrite_target};
use crate::hook::{Hook, HookContext, HookOutcome};

pub struct TrailingWhitespace;

impl Hook for TrailingWhitespace {
    fn name(&self) -> &str {
        "trailing-whitespace"
    }

    fn default_types(&self) -> &'static [&'static str] {
        &["text"]
    }

    fn run(&self, ctx: &HookContext) -> HookOutcome {
        let markdown_exts = markdown_extensions(ctx);
        let mut findings = Vec::new();

        for rel_path in ctx.files {
            let original = match read_target(ctx, rel_path) {
                Ok(content) => content,
                Err(finding) => {
                    findings.push(finding);
                    continue;
                }
            };
            let keep_breaks = Path::new(rel_path)
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| markdown_exts.iter().any(|m| m.eq_ignore_ascii_case(ext)));

            let fixed = strip_trailing(&original, keep_breaks);
            findings.extend(rewrite_target(ctx, rel_path, &original, &fixed));
        }

        HookOutcome::from_findings(findings)
    }
}

fn markdown_extensions(ctx: &HookContext) -> Vec<String> {
    ctx.arg_value("--markdown-linebreak-ext")
        .map(|list| {
            list.split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn is_trailing_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\x0b' | b'\x0c')
}

/// Strip trailing whitespace from every line, keeping line endings intact.
pub fn strip_trailing(content: &[u8], keep_markdown_breaks: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len());

    for line in content.split_inclusive(|&b| b == b'\n') {
        let eol_len = if line.ends_with(b"\r\n") {
            2
        } else if line.ends_with(b"\n") {
            1
        } else {
            0
        };
        let (body, eol) = line.split_at(line.len() - eol_len);

        let trimmed_len = body
            .iter()
            .rposition(|&b| !is_trailing_space(b))
            .map_or(0, |i| i + 1);
        out.extend_from_slice(&body[..trimmed_len]);

        // A hard break is two trailing spaces after real content
        if keep_markdown_breaks && trimmed_len > 0 && body.ends_with(b"  ") {
            out.extend_from_slice(b"  ");
        }
        out.extend_from_slice(eol);
    }

    out
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
