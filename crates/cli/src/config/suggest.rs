// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key name suggestions for config validation.

/// Suggest a known key for a likely typo.
pub fn suggest_key(unknown: &str, known: &[&'static str]) -> Option<&'static str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    // Common misspellings and synonyms
    let suggestion = match unknown {
        "revision" | "version" | "tag" | "ref" => Some("rev"),
        "repository" | "url" | "source" => Some("repo"),
        "hook" => Some("hooks"),
        "arguments" | "argv" | "arg" => Some("args"),
        "dependencies" | "deps" | "additional_deps" => Some("additional_dependencies"),
        "command" | "cmd" | "run" => Some("entry"),
        "include" => Some("files"),
        "excludes" | "ignore" => Some("exclude"),
        "type" | "file_types" => Some("types"),
        "stage" => Some("stages"),
        "failfast" | "fail-fast" => Some("fail_fast"),
        _ => None,
    };

    if let Some(s) = suggestion
        && known.contains(&s)
    {
        return Some(s);
    }

    // Try prefix matching (require at least 2 chars to avoid false positives)
    if unknown.len() >= 2 {
        for &name in known {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
