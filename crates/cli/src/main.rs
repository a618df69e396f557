// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hookline CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use hookline::cli::{Cli, Command};
use hookline::error::ExitCode;

mod cmd_list;
mod cmd_run;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("HOOKLINE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("hookline: {}", e);
            match e.downcast_ref::<hookline::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Run(args)) => cmd_run::run(&cli, args),
        Some(Command::Validate) => cmd_list::validate(&cli),
        Some(Command::List(args)) => cmd_list::list(&cli, args),
        Some(Command::Init(args)) => {
            let cwd = std::env::current_dir()?;
            hookline::cmd_init::run(args, &cwd)
        }
        Some(Command::Completions { shell }) => {
            hookline::completions::write(*shell, &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}
