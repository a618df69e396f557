// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! detect-private-key: refuse files that embed private key material.

use std::sync::OnceLock;

use aho_corasick::AhoCorasick;

use super::{line_of, read_target};
use crate::hook::{Finding, Hook, HookContext, HookOutcome};

const BANNERS: &[&str] = &[
    "BEGIN RSA PRIVATE KEY",
    "BEGIN DSA PRIVATE KEY",
    "BEGIN EC PRIVATE KEY",
    "BEGIN OPENSSH PRIVATE KEY",
    "BEGIN PRIVATE KEY",
    "PuTTY-User-Key-File-2",
    "BEGIN SSH2 ENCRYPTED PRIVATE KEY",
    "BEGIN PGP PRIVATE KEY BLOCK",
    "BEGIN ENCRYPTED PRIVATE KEY",
    "BEGIN OpenVPN Static key V1",
];

pub struct DetectPrivateKey;

fn matcher() -> Option<&'static AhoCorasick> {
    static MATCHER: OnceLock<Option<AhoCorasick>> = OnceLock::new();
    MATCHER
        .get_or_init(|| match AhoCorasick::new(BANNERS) {
            Ok(ac) => Some(ac),
            Err(e) => {
                tracing::error!("failed to build private key matcher: {}", e);
                None
            }
        })
        .as_ref()
}

/// Line of the first private key banner, if any.
pub fn find_private_key(content: &[u8]) -> Option<u32> {
    let ac = matcher()?;
    ac.find(content).map(|m| line_of(content, m.start()))
}

impl Hook for DetectPrivateKey {
    fn name(&self) -> &str {
        "detect-private-key"
    }

    fn default_types(&self) -> &'static [&'static str] {
        &["text"]
    }

    fn run(&self, ctx: &HookContext) -> HookOutcome {
        let mut findings = Vec::new();
        for rel_path in ctx.files {
            match read_target(ctx, rel_path) {
                Ok(content) => {
                    if let Some(line) = find_private_key(&content) {
                        findings.push(Finding::at_line(
                            rel_path.as_str(),
                            line,
                            "private_key",
                            "private key found",
                        ));
                    }
                }
                Err(finding) => findings.push(finding),
            }
        }
        HookOutcome::from_findings(findings)
    }
}

#[cfg(test)]
#[path = "private_key_tests.rs"]
mod tests;
