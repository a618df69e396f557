// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! trim trailing whitespace.................................................Failed
//!   notes.txt: Fixing notes.txt
//! check json...............................................................Passed
//! check toml.........................................(no files to check)Skipped
//! 1 hook passed, 1 failed, 1 skipped
//! ```

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::hook::{Finding, HookOutcome, HookResult, RunOutput};

/// Width of a status line, dots included.
pub const LINE_WIDTH: usize = 79;

const PASSED: &str = "Passed";
const FAILED: &str = "Failed";
const SKIPPED: &str = "Skipped";

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self { out, options }
    }

    /// Write every hook result followed by the summary.
    pub fn write(&mut self, output: &RunOutput) -> std::io::Result<()> {
        for result in &output.hooks {
            self.write_hook(result)?;
        }
        if output.stopped_early {
            writeln!(self.out, "Stopped after the first failing hook (fail-fast).")?;
        }
        self.write_summary(output)?;
        self.out.flush()
    }

    /// Write one hook's status line and, where relevant, its details.
    pub fn write_hook(&mut self, result: &HookResult) -> std::io::Result<()> {
        let (suffix, status, spec) = match &result.outcome {
            HookOutcome::Passed { .. } => (String::new(), PASSED, scheme::passed()),
            HookOutcome::Failed { .. } => (String::new(), FAILED, scheme::failed()),
            HookOutcome::Skipped { reason } => {
                (format!("({})", reason.describe()), SKIPPED, scheme::skipped())
            }
        };

        self.out.set_color(&scheme::hook_name())?;
        write!(self.out, "{}", result.name)?;
        self.out.reset()?;
        write!(self.out, "{}{}", dots(&result.name, &suffix, status), suffix)?;
        self.write_colored(&spec, status)?;
        writeln!(self.out)?;

        match &result.outcome {
            HookOutcome::Failed { findings, output } => {
                for finding in findings {
                    self.write_finding(finding)?;
                }
                if let Some(output) = output {
                    self.write_output(output)?;
                }
            }
            HookOutcome::Passed {
                output: Some(output),
            } if result.verbose || self.options.verbose => {
                self.write_output(output)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn write_finding(&mut self, finding: &Finding) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        match &finding.file {
            Some(file) => {
                self.write_colored(&scheme::path(), &file.display().to_string())?;
                if let Some(line) = finding.line {
                    write!(self.out, ":")?;
                    self.write_colored(&scheme::line_number(), &line.to_string())?;
                }
                write!(self.out, ": ")?;
            }
            None => write!(self.out, "- ")?,
        }
        writeln!(self.out, "{}", finding.message)
    }

    fn write_output(&mut self, output: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::output())?;
        for line in output.lines() {
            if line.is_empty() {
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "    {}", line)?;
            }
        }
        self.out.reset()
    }

    fn write_colored(&mut self, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, output: &RunOutput) -> std::io::Result<()> {
        let passed = output.count_passed();
        writeln!(
            self.out,
            "{} hook{} passed, {} failed, {} skipped",
            passed,
            if passed == 1 { "" } else { "s" },
            output.count_failed(),
            output.count_skipped()
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Dots between a hook name and its status. Always at least one.
fn dots(name: &str, suffix: &str, status: &str) -> String {
    let used = name.chars().count() + suffix.chars().count() + status.len();
    ".".repeat(LINE_WIDTH.saturating_sub(used).max(1))
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
