// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run command implementation.

use std::time::Instant;

use hookline::cli::{Cli, OutputFormat, RunArgs};
use hookline::color::resolve_color;
use hookline::config;
use hookline::discovery;
use hookline::error::ExitCode;
use hookline::executor::{Executor, ExecutorConfig};
use hookline::output::FormatOptions;
use hookline::output::json::JsonFormatter;
use hookline::output::text::TextFormatter;
use hookline::targets::{Project, Selection};

fn selection(args: &RunArgs) -> Selection {
    if args.all_files {
        Selection::All
    } else if !args.files.is_empty() {
        Selection::Paths(args.files.clone())
    } else if let Some(base) = &args.base {
        Selection::Since(base.clone())
    } else {
        Selection::Staged
    }
}

/// Run the run command.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<ExitCode> {
    let start = Instant::now();
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    tracing::debug!("loading config from {}", config_path.display());
    let config = config::load_with_warnings(&config_path)?;

    let project = Project::locate(&cwd);
    tracing::debug!(
        "project root {} (git: {})",
        project.root.display(),
        project.is_git
    );
    let files = project.select(&selection(args), &cwd)?;

    let executor = Executor::new(ExecutorConfig {
        fail_fast: args.fail_fast,
        stage: args.stage.into(),
        hook_selector: args.hook.clone(),
        verbose: args.verbose,
    });

    if let Some(selector) = &args.hook
        && executor.plan(&config).is_empty()
    {
        eprintln!("hookline: no hook named `{}` for this stage", selector);
        return Ok(ExitCode::ConfigError);
    }

    let output = executor.run(&config, &project.root, &files);

    match args.output {
        OutputFormat::Text => {
            let color = resolve_color(args.color, args.no_color);
            let options = FormatOptions {
                verbose: args.verbose,
            };
            TextFormatter::stdout(color, options).write(&output)?;
        }
        OutputFormat::Json => JsonFormatter::new(std::io::stdout().lock()).write(&output)?,
    }

    tracing::debug!("run finished in {:?}", start.elapsed());

    Ok(if output.passed {
        ExitCode::Success
    } else {
        ExitCode::HookFailed
    })
}
