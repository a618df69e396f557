// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mixed-line-ending: detect or normalize mixed line endings.
//!
//! `--fix=auto` (default) converts to the most common ending in the file.
//! `--fix=lf` and `--fix=crlf` force an ending. `--fix=no` only reports.

use super::{read_target, rewrite_target};
use crate::hook::{Finding, Hook, HookContext, HookOutcome};

pub struct MixedLineEnding;

/// Requested normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    Auto,
    Lf,
    Crlf,
    No,
}

impl FixMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(FixMode::Auto),
            "lf" => Some(FixMode::Lf),
            "crlf" => Some(FixMode::Crlf),
            "no" => Some(FixMode::No),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Lf,
    Crlf,
    Cr,
}

impl Ending {
    fn bytes(self) -> &'static [u8] {
        match self {
            Ending::Lf => b"\n",
            Ending::Crlf => b"\r\n",
            Ending::Cr => b"\r",
        }
    }
}

/// Split content into (line body, ending) pairs.
fn split_lines(content: &[u8]) -> Vec<(&[u8], Option<Ending>)> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < content.len() {
        match content[i] {
            b'\n' => {
                lines.push((&content[start..i], Some(Ending::Lf)));
                i += 1;
                start = i;
            }
            b'\r' if content.get(i + 1) == Some(&b'\n') => {
                lines.push((&content[start..i], Some(Ending::Crlf)));
                i += 2;
                start = i;
            }
            b'\r' => {
                lines.push((&content[start..i], Some(Ending::Cr)));
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < content.len() {
        lines.push((&content[start..], None));
    }
    lines
}

/// Counts of (lf, crlf, cr) endings.
fn count_endings(lines: &[(&[u8], Option<Ending>)]) -> [usize; 3] {
    let mut counts = [0; 3];
    for (_, ending) in lines {
        match ending {
            Some(Ending::Lf) => counts[0] += 1,
            Some(Ending::Crlf) => counts[1] += 1,
            Some(Ending::Cr) => counts[2] += 1,
            None => {}
        }
    }
    counts
}

fn rewrite(lines: &[(&[u8], Option<Ending>)], target: Ending) -> Vec<u8> {
    let mut out = Vec::new();
    for (body, ending) in lines {
        out.extend_from_slice(body);
        if ending.is_some() {
            out.extend_from_slice(target.bytes());
        }
    }
    out
}

/// What normalizing a file produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Unchanged,
    Fixed(Vec<u8>),
    /// Mixed endings found with [`FixMode::No`].
    Mixed,
}

/// Normalize `content` according to `mode`.
pub fn normalize(content: &[u8], mode: FixMode) -> Normalized {
    let lines = split_lines(content);
    let counts = count_endings(&lines);
    let kinds = counts.iter().filter(|&&c| c > 0).count();

    let target = match mode {
        FixMode::Lf => Ending::Lf,
        FixMode::Crlf => Ending::Crlf,
        FixMode::No if kinds > 1 => return Normalized::Mixed,
        FixMode::No => return Normalized::Unchanged,
        FixMode::Auto if kinds <= 1 => return Normalized::Unchanged,
        FixMode::Auto => {
            // Ties go to the first in lf, crlf, cr order
            let [lf, crlf, cr] = counts;
            if lf >= crlf && lf >= cr {
                Ending::Lf
            } else if crlf >= cr {
                Ending::Crlf
            } else {
                Ending::Cr
            }
        }
    };

    let fixed = rewrite(&lines, target);
    if fixed == content {
        Normalized::Unchanged
    } else {
        Normalized::Fixed(fixed)
    }
}

impl Hook for MixedLineEnding {
    fn name(&self) -> &str {
        "mixed-line-ending"
    }

    fn default_types(&self) -> &'static [&'static str] {
        &["text"]
    }

    fn run(&self, ctx: &HookContext) -> HookOutcome {
        let mode = match ctx.arg_value("--fix") {
            None => FixMode::Auto,
            Some(value) => match FixMode::parse(value) {
                Some(mode) => mode,
                None => {
                    return HookOutcome::failed_with_output(format!(
                        "invalid --fix value `{}` (valid: auto, lf, crlf, no)",
                        value
                    ));
                }
            },
        };

        let mut findings = Vec::new();
        for rel_path in ctx.files {
            let original = match read_target(ctx, rel_path) {
                Ok(content) => content,
                Err(finding) => {
                    findings.push(finding);
                    continue;
                }
            };
            match normalize(&original, mode) {
                Normalized::Fixed(fixed) => {
                    findings.extend(rewrite_target(ctx, rel_path, &original, &fixed));
                }
                Normalized::Unchanged => {}
                Normalized::Mixed => findings.push(Finding::file(
                    rel_path.as_str(),
                    "mixed_line_endings",
                    "mixed line endings",
                )),
            }
        }
        HookOutcome::from_findings(findings)
    }
}

#[cfg(test)]
#[path = "line_endings_tests.rs"]
mod tests;
