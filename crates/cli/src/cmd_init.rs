// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `hookline init` command.

use std::path::Path;

use anyhow::Result;

use crate::cli::InitArgs;
use crate::error::ExitCode;
use crate::init::{STARTER_FILE, detect_formats, starter_config};

/// Write a starter config into `dir`.
pub fn run(args: &InitArgs, dir: &Path) -> Result<ExitCode> {
    let config_path = dir.join(STARTER_FILE);

    if config_path.exists() && !args.force {
        eprintln!("{} already exists. Use --force to overwrite.", STARTER_FILE);
        return Ok(ExitCode::ConfigError);
    }

    let detected = detect_formats(dir);
    tracing::debug!("detected formats: {:?}", detected);
    std::fs::write(&config_path, starter_config(&detected))?;

    if detected.is_empty() {
        println!("Created {}", STARTER_FILE);
    } else {
        let hooks: Vec<_> = detected.iter().map(|f| f.hook_id()).collect();
        println!("Created {} (with {})", STARTER_FILE, hooks.join(", "));
    }
    Ok(ExitCode::Success)
}
