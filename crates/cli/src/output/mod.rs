// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for run results and execution plans.

pub mod json;
pub mod list;
pub mod text;

use chrono::{SecondsFormat, Utc};

/// Current time as an ISO 8601 timestamp with second precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Output formatting options.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Show captured output of every hook, not only failing ones.
    pub verbose: bool,
}
