// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution plan listing for `hookline list`.

use std::io::Write;

use serde::Serialize;

use crate::config::{Config, PlannedHook, Stage};

/// One planned hook as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    /// 1-based position in execution order.
    pub position: usize,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub name: String,
    /// `repo@rev` of the declaring source.
    pub source: String,
    pub stages: Vec<Stage>,
}

/// Flatten a config's execution plan into listable entries.
pub fn plan_entries(config: &Config) -> Vec<PlanEntry> {
    config
        .hooks()
        .enumerate()
        .map(|(index, planned)| entry(config, index + 1, &planned))
        .collect()
}

fn entry(config: &Config, position: usize, planned: &PlannedHook<'_>) -> PlanEntry {
    PlanEntry {
        position,
        id: planned.hook.id.clone(),
        alias: planned.hook.alias.clone(),
        name: planned.hook.display_name().to_string(),
        source: planned.source.label(),
        stages: planned.stages(config).to_vec(),
    }
}

/// Write entries as aligned text, one per line.
pub fn write_text(out: &mut impl Write, entries: &[PlanEntry]) -> std::io::Result<()> {
    let width = entries
        .iter()
        .map(|e| identity(e).len())
        .max()
        .unwrap_or(0);
    for e in entries {
        let stages: Vec<_> = e.stages.iter().map(|s| s.as_str()).collect();
        writeln!(
            out,
            "{:>3}. {:<width$}  {}  [{}]",
            e.position,
            identity(e),
            e.source,
            stages.join(", "),
        )?;
    }
    Ok(())
}

fn identity(entry: &PlanEntry) -> &str {
    entry.alias.as_deref().unwrap_or(&entry.id)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
