// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `validate` and `list` command implementations.

use hookline::cli::{Cli, ListArgs, OutputFormat};
use hookline::config::{self, Config};
use hookline::discovery;
use hookline::error::ExitCode;
use hookline::output::json::JsonFormatter;
use hookline::output::list;

fn load(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    let path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    tracing::debug!("loading config from {}", path.display());
    Ok(config::load_with_warnings(&path)?)
}

/// Parse the config and report what it declares.
pub fn validate(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load(cli)?;
    let sources = config.repos.len();
    let hooks = config.hook_count();
    println!(
        "{} source{}, {} hook{}",
        sources,
        if sources == 1 { "" } else { "s" },
        hooks,
        if hooks == 1 { "" } else { "s" }
    );
    Ok(ExitCode::Success)
}

/// Print planned hooks in execution order.
pub fn list(cli: &Cli, args: &ListArgs) -> anyhow::Result<ExitCode> {
    let config = load(cli)?;
    let entries = list::plan_entries(&config);
    let stdout = std::io::stdout();
    match args.output {
        OutputFormat::Text => list::write_text(&mut stdout.lock(), &entries)?,
        OutputFormat::Json => JsonFormatter::new(stdout.lock()).write_value(&entries)?,
    }
    Ok(ExitCode::Success)
}
