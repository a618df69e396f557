//! hookline: run declarative hook pipelines against repository files.
//!
//! A config declares ordered hook groups, each pinned to a source revision.
//! The [`executor`] runs the flattened plan sequentially and aggregates a
//! pass/fail result.

pub mod cli;
pub mod cmd_init;
pub mod color;
pub mod completions;
pub mod config;
pub mod discovery;
pub mod error;
pub mod executor;
pub mod filter;
pub mod git;
pub mod hook;
pub mod hooks;
pub mod init;
pub mod output;
pub mod tags;
pub mod targets;
pub mod walker;

pub use cli::{Cli, Command, InitArgs, ListArgs, OutputFormat, RunArgs};
pub use config::{Config, HookEntry, HookGroupSource, Stage};
pub use error::{Error, ExitCode, Result};
pub use executor::{Executor, ExecutorConfig};
pub use hook::{Finding, Hook, HookContext, HookOutcome, HookResult, RunOutput, SkipReason};
pub use walker::{FileWalker, WalkStats, WalkerConfig};

#[cfg(test)]
pub mod test_utils;
