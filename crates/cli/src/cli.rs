// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Stage;

/// Run declarative hook pipelines against the files of a repository
#[derive(Parser)]
#[command(name = "hookline")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'c', long = "config", global = true, env = "HOOKLINE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run hooks against staged, changed or all files
    Run(RunArgs),
    /// Parse the config and report what it declares
    Validate,
    /// List planned hooks in execution order
    List(ListArgs),
    /// Write a starter .hookline.yaml
    Init(InitArgs),
    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Args, Default)]
pub struct RunArgs {
    /// Run on every tracked file
    #[arg(long, conflicts_with_all = ["files", "base"])]
    pub all_files: bool,

    /// Run on these files only
    #[arg(long, num_args = 1.., value_name = "PATH", conflicts_with = "base")]
    pub files: Vec<PathBuf>,

    /// Run on files changed since a git ref (e.g., main, HEAD~1)
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Run only the hook with this id or alias
    #[arg(long, value_name = "ID")]
    pub hook: Option<String>,

    /// Stage this run represents
    #[arg(long, value_enum, default_value = "pre-commit")]
    pub stage: StageArg,

    /// Stop after the first failing hook
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Show output of passing hooks
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args, Default)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args, Default)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Stage names accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StageArg {
    #[default]
    PreCommit,
    PrePush,
    CommitMsg,
    Manual,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::PreCommit => Stage::PreCommit,
            StageArg::PrePush => Stage::PrePush,
            StageArg::CommitMsg => Stage::CommitMsg,
            StageArg::Manual => Stage::Manual,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
