// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! check-yaml, check-toml, check-json: files must parse.

use serde::Deserialize;

use super::{line_of, read_target};
use crate::hook::{Finding, Hook, HookContext, HookOutcome};

/// Which document format to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxCheck {
    Yaml,
    Toml,
    Json,
}

/// A parse failure with an optional 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: Option<u32>,
    pub message: String,
}

impl SyntaxCheck {
    /// Validate `text`. `allow_multiple` only affects YAML.
    pub fn check(self, text: &str, allow_multiple: bool) -> Result<(), SyntaxError> {
        match self {
            SyntaxCheck::Yaml => check_yaml(text, allow_multiple),
            SyntaxCheck::Toml => toml::from_str::<toml::Table>(text).map(|_| ()).map_err(|e| {
                SyntaxError {
                    line: e.span().map(|span| line_of(text.as_bytes(), span.start)),
                    message: e.message().to_string(),
                }
            }),
            SyntaxCheck::Json => serde_json::from_str::<serde_json::Value>(text)
                .map(|_| ())
                .map_err(|e| SyntaxError {
                    line: (e.line() > 0).then(|| e.line() as u32),
                    message: e.to_string(),
                }),
        }
    }
}

fn check_yaml(text: &str, allow_multiple: bool) -> Result<(), SyntaxError> {
    let mut documents = 0;
    for document in serde_yaml::Deserializer::from_str(text) {
        serde_yaml::Value::deserialize(document).map_err(|e| SyntaxError {
            line: e.location().map(|loc| loc.line() as u32),
            message: e.to_string(),
        })?;
        documents += 1;
    }
    if documents > 1 && !allow_multiple {
        return Err(SyntaxError {
            line: None,
            message: "expected a single document (pass --allow-multiple-documents)".to_string(),
        });
    }
    Ok(())
}

impl Hook for SyntaxCheck {
    fn name(&self) -> &str {
        match self {
            SyntaxCheck::Yaml => "check-yaml",
            SyntaxCheck::Toml => "check-toml",
            SyntaxCheck::Json => "check-json",
        }
    }

    fn default_types(&self) -> &'static [&'static str] {
        match self {
            SyntaxCheck::Yaml => &["yaml"],
            SyntaxCheck::Toml => &["toml"],
            SyntaxCheck::Json => &["json"],
        }
    }

    fn run(&self, ctx: &HookContext) -> HookOutcome {
        let allow_multiple = ctx
            .args
            .iter()
            .any(|a| a == "--allow-multiple-documents" || a == "-m");

        let mut findings = Vec::new();
        for rel_path in ctx.files {
            let bytes = match read_target(ctx, rel_path) {
                Ok(bytes) => bytes,
                Err(finding) => {
                    findings.push(finding);
                    continue;
                }
            };
            let Ok(text) = std::str::from_utf8(&bytes) else {
                findings.push(Finding::file(rel_path.as_str(), "syntax", "not valid UTF-8"));
                continue;
            };
            if let Err(error) = self.check(text, allow_multiple) {
                findings.push(Finding {
                    file: Some(rel_path.into()),
                    line: error.line,
                    kind: "syntax".to_string(),
                    message: error.message,
                });
            }
        }
        HookOutcome::from_findings(findings)
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
