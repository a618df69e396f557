// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and validation.
//!
//! A config is an ordered list of hook groups. Each group names a source
//! repository, a revision pin, and the hooks it contributes. YAML and TOML
//! documents share one shape and one validation path.

mod parse;
mod suggest;

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

pub use suggest::suggest_key;

/// Sentinel `repo` value for hooks defined in the config itself.
pub const LOCAL_REPO: &str = "local";

/// Sentinel `repo` value for hooks provided by hookline.
pub const META_REPO: &str = "meta";

/// Document format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Anything unrecognized is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Git event a run represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    PreCommit,
    PrePush,
    CommitMsg,
    Manual,
}

impl Stage {
    /// All stages, in declaration order.
    pub const ALL: [Stage; 4] = [
        Stage::PreCommit,
        Stage::PrePush,
        Stage::CommitMsg,
        Stage::Manual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::PreCommit => "pre-commit",
            Stage::PrePush => "pre-push",
            Stage::CommitMsg => "commit-msg",
            Stage::Manual => "manual",
        }
    }

    /// Parse a stage name. Accepts the legacy `commit`/`push` spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pre-commit" | "commit" => Some(Stage::PreCommit),
            "pre-push" | "push" => Some(Stage::PrePush),
            "commit-msg" => Some(Stage::CommitMsg),
            "manual" => Some(Stage::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled path filter.
///
/// Two patterns are equal when their source text is equal.
#[derive(Clone)]
pub struct FilePattern(Regex);

impl FilePattern {
    pub fn new(pattern: &str) -> std::result::Result<Self, regex::Error> {
        Regex::new(pattern).map(FilePattern)
    }

    /// Search the pattern anywhere in a repo-relative path.
    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for FilePattern {}

impl fmt::Debug for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FilePattern({:?})", self.as_str())
    }
}

/// Where a hook group comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// An external repository pinned to a revision.
    Remote,
    /// Hooks defined inline in the config.
    Local,
    /// Hooks provided by hookline itself.
    Meta,
}

/// A versioned collection of hooks from one origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookGroupSource {
    /// Repository reference (URL, path, `local` or `meta`).
    pub repo: String,
    /// Revision pin. Always present for remote sources.
    pub rev: Option<String>,
    /// Hooks in declaration order.
    pub hooks: Vec<HookEntry>,
}

impl HookGroupSource {
    pub fn kind(&self) -> SourceKind {
        match self.repo.as_str() {
            LOCAL_REPO => SourceKind::Local,
            META_REPO => SourceKind::Meta,
            _ => SourceKind::Remote,
        }
    }

    /// `repo@rev` for remote sources, bare repo otherwise.
    pub fn label(&self) -> String {
        match &self.rev {
            Some(rev) => format!("{}@{}", self.repo, rev),
            None => self.repo.clone(),
        }
    }
}

/// A single declared hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookEntry {
    pub id: String,
    pub alias: Option<String>,
    pub name: Option<String>,
    pub args: Vec<String>,
    /// Recorded for provenance; never installed.
    pub additional_dependencies: Vec<String>,
    /// Command line to execute, if the hook is command-backed.
    pub entry: Option<String>,
    /// Recorded for provenance; hookline only runs commands as-is.
    pub language: Option<String>,
    pub files: Option<FilePattern>,
    pub exclude: Option<FilePattern>,
    /// Explicit `types`. `None` means the hook's default applies.
    pub types: Option<Vec<String>>,
    pub types_or: Vec<String>,
    pub exclude_types: Vec<String>,
    /// Explicit `stages`. `None` means the config's `default_stages` apply.
    pub stages: Option<Vec<Stage>>,
    pub always_run: bool,
    pub pass_filenames: bool,
    pub fail_fast: bool,
    pub verbose: bool,
}

impl HookEntry {
    /// Create an entry with defaults for everything but the id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alias: None,
            name: None,
            args: Vec::new(),
            additional_dependencies: Vec::new(),
            entry: None,
            language: None,
            files: None,
            exclude: None,
            types: None,
            types_or: Vec::new(),
            exclude_types: Vec::new(),
            stages: None,
            always_run: false,
            pass_filenames: true,
            fail_fast: false,
            verbose: false,
        }
    }

    /// Identity used for uniqueness and selection: alias, else id.
    pub fn identity(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.id)
    }

    /// Display name: name, else id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Whether `selector` names this hook by id or alias.
    pub fn matches_selector(&self, selector: &str) -> bool {
        self.id == selector || self.alias.as_deref() == Some(selector)
    }
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Hook groups in declaration order.
    pub repos: Vec<HookGroupSource>,
    /// Stop the run after the first failing hook.
    pub fail_fast: bool,
    /// Global include filter.
    pub files: Option<FilePattern>,
    /// Global exclude filter.
    pub exclude: Option<FilePattern>,
    /// Stages for hooks that do not declare their own.
    pub default_stages: Vec<Stage>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repos: Vec::new(),
            fail_fast: false,
            files: None,
            exclude: None,
            default_stages: Stage::ALL.to_vec(),
        }
    }
}

/// One step of the execution plan.
#[derive(Debug, Clone, Copy)]
pub struct PlannedHook<'a> {
    /// Index of the source in `Config::repos`.
    pub source_index: usize,
    /// Index of the hook within its source.
    pub hook_index: usize,
    pub source: &'a HookGroupSource,
    pub hook: &'a HookEntry,
}

impl PlannedHook<'_> {
    /// Stages this hook runs in.
    pub fn stages<'c>(&'c self, config: &'c Config) -> &'c [Stage] {
        self.hook.stages.as_deref().unwrap_or(&config.default_stages)
    }
}

impl Config {
    /// Hooks in execution order: source-major, entry-minor.
    pub fn hooks(&self) -> impl Iterator<Item = PlannedHook<'_>> {
        self.repos
            .iter()
            .enumerate()
            .flat_map(|(source_index, source)| {
                source
                    .hooks
                    .iter()
                    .enumerate()
                    .map(move |(hook_index, hook)| PlannedHook {
                        source_index,
                        hook_index,
                        source,
                        hook,
                    })
            })
    }

    /// Total number of declared hook entries.
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|r| r.hooks.len()).sum()
    }
}

/// Load config from a file, ignoring unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&content, path, ConfigFormat::from_path(path))
}

/// Load config from a file, warning on unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_with_warnings(&content, path, ConfigFormat::from_path(path))
}

/// Parse config from string content.
///
/// Structural problems are errors. Unknown keys and tags are dropped
/// silently; use [`parse_with_warnings`] to report them.
pub fn parse(content: &str, path: &Path, format: ConfigFormat) -> Result<Config> {
    let (config, _warnings) = parse::parse_document(content, path, format)?;
    Ok(config)
}

/// Parse config, warning on unknown keys instead of failing.
pub fn parse_with_warnings(content: &str, path: &Path, format: ConfigFormat) -> Result<Config> {
    let (config, warnings) = parse::parse_document(content, path, format)?;
    for warning in &warnings {
        eprintln!("hookline: warning: {}: {}", path.display(), warning);
    }
    Ok(config)
}

/// Category of a non-fatal parse finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A key hookline does not recognize.
    UnknownKey,
    /// A file type tag hookline never assigns.
    UnknownTag,
}

/// Non-fatal finding produced while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
