// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document parsing and validation.
//!
//! Both formats are first read into a `serde_json::Value` tree, then walked
//! by hand so that errors can name the exact source and hook at fault.

use std::collections::HashSet;
use std::path::Path;

use serde_json::{Map, Value};

use super::{
    Config, ConfigFormat, FilePattern, HookEntry, HookGroupSource, ParseWarning, SourceKind,
    Stage, WarningKind,
};
use crate::error::{Error, Result};
use crate::{hooks, tags};

const TOP_LEVEL_KEYS: &[&str] = &["repos", "fail_fast", "files", "exclude", "default_stages"];

/// Keys other runners understand that hookline accepts and ignores.
const IGNORED_TOP_LEVEL_KEYS: &[&str] = &[
    "ci",
    "default_install_hook_types",
    "default_language_version",
    "minimum_pre_commit_version",
];

const SOURCE_KEYS: &[&str] = &["repo", "rev", "hooks"];

const HOOK_KEYS: &[&str] = &[
    "id",
    "alias",
    "name",
    "args",
    "additional_dependencies",
    "entry",
    "language",
    "files",
    "exclude",
    "types",
    "types_or",
    "exclude_types",
    "stages",
    "always_run",
    "pass_filenames",
    "fail_fast",
    "verbose",
];

const IGNORED_HOOK_KEYS: &[&str] = &[
    "description",
    "language_version",
    "log_file",
    "minimum_pre_commit_version",
    "require_serial",
];

/// Parse a document into a config plus any non-fatal warnings.
pub(super) fn parse_document(
    content: &str,
    path: &Path,
    format: ConfigFormat,
) -> Result<(Config, Vec<ParseWarning>)> {
    let root: Value = match format {
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| Error::parse(e.to_string(), path))?
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| Error::parse(e.to_string(), path))?
        }
    };

    let mut parser = Parser {
        path,
        warnings: Vec::new(),
    };
    let config = parser.config(&root)?;
    Ok((config, parser.warnings))
}

struct Parser<'p> {
    path: &'p Path,
    warnings: Vec<ParseWarning>,
}

impl Parser<'_> {
    fn error(&self, location: &str, message: impl std::fmt::Display) -> Error {
        if location.is_empty() {
            Error::parse(message.to_string(), self.path)
        } else {
            Error::parse(format!("{}: {}", location, message), self.path)
        }
    }

    fn warn_unknown_keys(
        &mut self,
        table: &Map<String, Value>,
        location: &str,
        known: &[&'static str],
        ignored: &[&str],
    ) {
        for key in table.keys() {
            if known.contains(&key.as_str()) || ignored.contains(&key.as_str()) {
                continue;
            }
            let qualified = if location.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", location, key)
            };
            let message = match super::suggest_key(key, known) {
                Some(suggested) => {
                    format!("unknown field `{}`. Did you mean `{}`?", qualified, suggested)
                }
                None => format!("unknown field `{}`", qualified),
            };
            self.warnings.push(ParseWarning {
                kind: WarningKind::UnknownKey,
                message,
            });
        }
    }

    fn warn_unknown_tags(&mut self, tags_list: &[String], location: &str, key: &str) {
        for tag in tags_list {
            if !tags::is_known_tag(tag) {
                self.warnings.push(ParseWarning {
                    kind: WarningKind::UnknownTag,
                    message: format!("{}.{}: unknown file type `{}`", location, key, tag),
                });
            }
        }
    }

    fn config(&mut self, root: &Value) -> Result<Config> {
        let Value::Object(top) = root else {
            return Err(self.error("", "expected a mapping at the top level"));
        };

        self.warn_unknown_keys(top, "", TOP_LEVEL_KEYS, IGNORED_TOP_LEVEL_KEYS);

        let repos_value = top
            .get("repos")
            .ok_or_else(|| self.error("", "missing required field `repos`"))?;
        let Value::Array(repos) = repos_value else {
            return Err(self.error("repos", "expected a list of sources"));
        };

        let mut sources = Vec::with_capacity(repos.len());
        for (index, value) in repos.iter().enumerate() {
            sources.push(self.source(value, &format!("repos[{}]", index))?);
        }

        let default_stages = match self.string_list(top, "default_stages", "")? {
            Some(names) => self.stages(&names, "default_stages")?,
            None => Stage::ALL.to_vec(),
        };

        Ok(Config {
            repos: sources,
            fail_fast: self.bool(top, "fail_fast", "")?.unwrap_or(false),
            files: self.pattern(top, "files", "")?,
            exclude: self.pattern(top, "exclude", "")?,
            default_stages,
        })
    }

    fn source(&mut self, value: &Value, location: &str) -> Result<HookGroupSource> {
        let Value::Object(table) = value else {
            return Err(self.error(location, "expected a mapping with `repo`, `rev` and `hooks`"));
        };

        self.warn_unknown_keys(table, location, SOURCE_KEYS, &[]);

        let repo = self
            .identifier(table, "repo", location)?
            .ok_or_else(|| self.error(location, "missing required field `repo`"))?;
        let rev = self.identifier(table, "rev", location)?;

        let mut source = HookGroupSource {
            repo,
            rev,
            hooks: Vec::new(),
        };
        let kind = source.kind();

        // Remote sources must be pinned
        if kind == SourceKind::Remote && source.rev.is_none() {
            return Err(self.error(
                location,
                format!("missing required field `rev` for `{}`", source.repo),
            ));
        }

        let hooks_value = table
            .get("hooks")
            .ok_or_else(|| self.error(location, "missing required field `hooks`"))?;
        let Value::Array(hooks) = hooks_value else {
            return Err(self.error(&format!("{}.hooks", location), "expected a list of hooks"));
        };

        let mut seen = HashSet::new();
        for (index, value) in hooks.iter().enumerate() {
            let hook_location = format!("{}.hooks[{}]", location, index);
            let hook = self.hook(value, &hook_location)?;

            if kind == SourceKind::Local && hook.entry.is_none() && !hooks::is_builtin(&hook.id) {
                return Err(self.error(
                    &hook_location,
                    format!("local hook `{}` must declare `entry`", hook.id),
                ));
            }

            if !seen.insert(hook.identity().to_string()) {
                return Err(self.error(
                    &hook_location,
                    format!(
                        "duplicate hook `{}` in `{}` (use `alias` to declare it twice)",
                        hook.identity(),
                        source.repo
                    ),
                ));
            }
            source.hooks.push(hook);
        }

        Ok(source)
    }

    fn hook(&mut self, value: &Value, location: &str) -> Result<HookEntry> {
        let Value::Object(table) = value else {
            return Err(self.error(location, "expected a mapping with an `id`"));
        };

        self.warn_unknown_keys(table, location, HOOK_KEYS, IGNORED_HOOK_KEYS);

        let id = self
            .identifier(table, "id", location)?
            .ok_or_else(|| self.error(location, "missing required field `id`"))?;

        let mut hook = HookEntry::new(id);
        hook.alias = self.identifier(table, "alias", location)?;
        hook.name = self.string(table, "name", location)?;
        hook.args = self.string_list(table, "args", location)?.unwrap_or_default();
        hook.additional_dependencies = self
            .string_list(table, "additional_dependencies", location)?
            .unwrap_or_default();
        hook.entry = self.identifier(table, "entry", location)?;
        hook.language = self.string(table, "language", location)?;
        hook.files = self.pattern(table, "files", location)?;
        hook.exclude = self.pattern(table, "exclude", location)?;

        hook.types = self.string_list(table, "types", location)?;
        hook.types_or = self.string_list(table, "types_or", location)?.unwrap_or_default();
        hook.exclude_types = self
            .string_list(table, "exclude_types", location)?
            .unwrap_or_default();
        if let Some(types) = hook.types.clone() {
            self.warn_unknown_tags(&types, location, "types");
        }
        let (types_or, exclude_types) = (hook.types_or.clone(), hook.exclude_types.clone());
        self.warn_unknown_tags(&types_or, location, "types_or");
        self.warn_unknown_tags(&exclude_types, location, "exclude_types");

        if let Some(names) = self.string_list(table, "stages", location)? {
            hook.stages = Some(self.stages(&names, &format!("{}.stages", location))?);
        }

        hook.always_run = self.bool(table, "always_run", location)?.unwrap_or(false);
        hook.pass_filenames = self.bool(table, "pass_filenames", location)?.unwrap_or(true);
        hook.fail_fast = self.bool(table, "fail_fast", location)?.unwrap_or(false);
        hook.verbose = self.bool(table, "verbose", location)?.unwrap_or(false);

        Ok(hook)
    }

    fn stages(&self, names: &[String], location: &str) -> Result<Vec<Stage>> {
        names
            .iter()
            .map(|name| {
                Stage::from_name(name).ok_or_else(|| {
                    let valid: Vec<_> = Stage::ALL.iter().map(|s| s.as_str()).collect();
                    self.error(
                        location,
                        format!("unknown stage `{}` (valid: {})", name, valid.join(", ")),
                    )
                })
            })
            .collect()
    }

    /// A field naming something exactly: a repo, a revision pin, a hook.
    ///
    /// Numbers are refused: YAML and TOML read `rev: 1.10` or `rev: 1234e56`
    /// as numbers whose text cannot be recovered. Booleans keep their text
    /// (`entry: true`). Blank values count as absent.
    fn identifier(
        &self,
        table: &Map<String, Value>,
        key: &str,
        location: &str,
    ) -> Result<Option<String>> {
        match table.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(_) => Err(self.error(
                &join(location, key),
                "expected a string (quote the value to keep it verbatim)",
            )),
        }
    }

    fn string(
        &self,
        table: &Map<String, Value>,
        key: &str,
        location: &str,
    ) -> Result<Option<String>> {
        match table.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => scalar_to_string(value)
                .map(Some)
                .ok_or_else(|| {
                    self.error(&join(location, key), expected_string(value, "expected a string"))
                }),
        }
    }

    fn string_list(
        &self,
        table: &Map<String, Value>,
        key: &str,
        location: &str,
    ) -> Result<Option<Vec<String>>> {
        match table.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    scalar_to_string(item).ok_or_else(|| {
                        let message = expected_string(item, "expected a list of strings");
                        self.error(&join(location, key), message)
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(_) => Err(self.error(&join(location, key), "expected a list of strings")),
        }
    }

    fn bool(&self, table: &Map<String, Value>, key: &str, location: &str) -> Result<Option<bool>> {
        match table.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(self.error(&join(location, key), "expected true or false")),
        }
    }

    fn pattern(
        &self,
        table: &Map<String, Value>,
        key: &str,
        location: &str,
    ) -> Result<Option<FilePattern>> {
        let Some(source) = self.string(table, key, location)? else {
            return Ok(None);
        };
        FilePattern::new(&source)
            .map(Some)
            .map_err(|e| self.error(&join(location, key), format!("invalid regex: {}", e)))
    }
}

fn join(location: &str, key: &str) -> String {
    if location.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", location, key)
    }
}

/// Render a scalar as a string. Integers and booleans keep their text,
/// floats do not (`1.10` reads back as `1.1`) and are refused.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if !n.is_f64() => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn expected_string(value: &Value, otherwise: &'static str) -> &'static str {
    match value {
        Value::Number(_) => "expected a string (quote the value to keep it verbatim)",
        _ => otherwise,
    }
}
