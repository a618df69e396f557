// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File type identification.
//!
//! Hooks select files by tag (`text`, `python`, `yaml`, ...). Tags come from
//! the file's metadata, its first bytes, and its name.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use globset::{Glob, GlobSet, GlobSetBuilder};

/// Bytes sniffed when deciding text vs binary.
const SNIFF_LEN: usize = 8 * 1024;

/// Tags derived from file metadata and content.
const STRUCTURAL_TAGS: &[&str] = &["file", "text", "binary", "executable", "symlink"];

/// Extension and well-known filename rules, matched on the file name.
const NAME_RULES: &[(&str, &[&str])] = &[
    ("*.py", &["python"]),
    ("*.pyi", &["python", "pyi"]),
    ("*.{yaml,yml}", &["yaml"]),
    ("*.toml", &["toml"]),
    ("*.json", &["json"]),
    ("*.{md,markdown}", &["markdown"]),
    ("*.rs", &["rust"]),
    ("*.{sh,bash}", &["shell"]),
    ("*.{js,mjs,cjs}", &["javascript"]),
    ("*.{ts,tsx}", &["ts"]),
    ("*.{html,htm}", &["html"]),
    ("*.css", &["css"]),
    ("*.{ini,cfg}", &["ini"]),
    ("*.xml", &["xml"]),
    ("{Makefile,makefile,GNUmakefile,*.mk}", &["makefile"]),
    ("{Dockerfile,*.dockerfile,Dockerfile.*}", &["dockerfile"]),
];

struct NameMatcher {
    set: GlobSet,
    tags: Vec<&'static [&'static str]>,
}

fn name_matcher() -> &'static NameMatcher {
    static MATCHER: OnceLock<NameMatcher> = OnceLock::new();
    MATCHER.get_or_init(|| {
        let mut builder = GlobSetBuilder::new();
        let mut tags = Vec::with_capacity(NAME_RULES.len());
        for (pattern, rule_tags) in NAME_RULES {
            // Rules are static; a bad one is dropped rather than taking down the run
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                    tags.push(*rule_tags);
                }
                Err(e) => tracing::error!("invalid tag rule {}: {}", pattern, e),
            }
        }
        let set = builder.build().unwrap_or_else(|e| {
            tracing::error!("failed to build tag rules: {}", e);
            GlobSet::empty()
        });
        NameMatcher { set, tags }
    })
}

/// Whether `tag` is a tag hookline can assign.
pub fn is_known_tag(tag: &str) -> bool {
    STRUCTURAL_TAGS.contains(&tag)
        || NAME_RULES
            .iter()
            .any(|(_, tags)| tags.contains(&tag))
}

/// Tags implied by a file name alone.
pub fn tags_from_name(name: &str) -> BTreeSet<&'static str> {
    let matcher = name_matcher();
    matcher
        .set
        .matches(name)
        .into_iter()
        .flat_map(|i| matcher.tags[i].iter().copied())
        .collect()
}

/// Whether a byte prefix looks like text (no NUL bytes).
pub fn is_text(prefix: &[u8]) -> bool {
    memchr::memchr(0, prefix).is_none()
}

/// Identify a file. `rel_path` is relative to `root`.
///
/// Returns an empty set for paths that do not exist.
pub fn tags_for_file(root: &Path, rel_path: &str) -> BTreeSet<&'static str> {
    let full = root.join(rel_path);
    let Ok(meta) = std::fs::symlink_metadata(&full) else {
        return BTreeSet::new();
    };

    let file_name = Path::new(rel_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(rel_path);
    let mut tags = tags_from_name(file_name);

    if meta.file_type().is_symlink() {
        tags.insert("symlink");
        return tags;
    }
    if !meta.is_file() {
        return BTreeSet::new();
    }

    tags.insert("file");
    if is_executable(&meta) {
        tags.insert("executable");
    }

    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    let text = match std::fs::File::open(&full) {
        Ok(file) => file
            .take(SNIFF_LEN as u64)
            .read_to_end(&mut prefix)
            .map(|_| is_text(&prefix))
            .unwrap_or(false),
        Err(_) => false,
    };
    tags.insert(if text { "text" } else { "binary" });

    if text {
        if ["sh", "bash", "zsh", "dash"]
            .iter()
            .any(|shell| shebang_names(&prefix, shell))
        {
            tags.insert("shell");
        }
        if shebang_names(&prefix, "python") {
            tags.insert("python");
        }
    }

    tags
}

/// Whether the shebang line's interpreter (or `env` target) starts with `name`.
fn shebang_names(prefix: &[u8], name: &str) -> bool {
    if !prefix.starts_with(b"#!") {
        return false;
    }
    let line_end = memchr::memchr(b'\n', prefix).unwrap_or(prefix.len());
    let Ok(line) = std::str::from_utf8(&prefix[2..line_end]) else {
        return false;
    };
    let mut parts = line.split_whitespace();
    let Some(interpreter) = parts.next() else {
        return false;
    };
    let program = interpreter.rsplit('/').next().unwrap_or(interpreter);
    let program = if program == "env" {
        parts.find(|p| !p.starts_with('-')).unwrap_or("")
    } else {
        program
    };
    program == name
        || program
            .strip_prefix(name)
            .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit() || c == '.'))
}

#[cfg(unix)]
fn is_executable(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &std::fs::Metadata) -> bool {
    false
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
