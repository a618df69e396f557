// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential hook executor with error isolation.
//!
//! Hooks run one at a time in plan order (source-major, entry-minor). A
//! panicking hook is reported as failed and does not stop the run unless
//! fail-fast applies.

use std::path::Path;
use std::time::Instant;

use crate::config::{Config, HookEntry, PlannedHook, Stage};
use crate::filter::{self, TagCache};
use crate::hook::{Hook, HookContext, HookOutcome, HookResult, RunOutput, SkipReason};
use crate::hooks;

/// Options for one run.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Stop after the first failing hook (in addition to config `fail_fast`).
    pub fail_fast: bool,
    /// Stage this run represents.
    pub stage: Stage,
    /// Run only hooks whose id or alias matches.
    pub hook_selector: Option<String>,
    /// Show output of passing hooks.
    pub verbose: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            stage: Stage::PreCommit,
            hook_selector: None,
            verbose: false,
        }
    }
}

/// Resolves a declared hook to something runnable.
type Resolver<'r> = &'r dyn Fn(&HookEntry) -> Option<Box<dyn Hook>>;

/// Runs a config's hooks against a set of target files.
pub struct Executor {
    config: ExecutorConfig,
}

impl Executor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Hooks this run will consider, in execution order.
    pub fn plan<'c>(&self, config: &'c Config) -> Vec<PlannedHook<'c>> {
        config
            .hooks()
            .filter(|planned| {
                self.config
                    .hook_selector
                    .as_deref()
                    .is_none_or(|selector| planned.hook.matches_selector(selector))
            })
            .filter(|planned| planned.stages(config).contains(&self.config.stage))
            .collect()
    }

    /// Run every planned hook against `files` (repo-relative paths).
    pub fn run(&self, config: &Config, root: &Path, files: &[String]) -> RunOutput {
        self.run_with_resolver(config, root, files, &hooks::resolve)
    }

    pub(crate) fn run_with_resolver(
        &self,
        config: &Config,
        root: &Path,
        files: &[String],
        resolve: Resolver<'_>,
    ) -> RunOutput {
        let plan = self.plan(config);
        tracing::debug!(
            "running {} of {} hooks for stage {} on {} files",
            plan.len(),
            config.hook_count(),
            self.config.stage,
            files.len()
        );

        let mut tags = TagCache::new(root);
        let mut results = Vec::with_capacity(plan.len());
        let mut stopped_early = false;

        for (position, planned) in plan.iter().enumerate() {
            let result = self.run_hook(config, root, files, planned, &mut tags, resolve);
            let failed = result.outcome.is_failed();
            results.push(result);

            let fail_fast = self.config.fail_fast || config.fail_fast || planned.hook.fail_fast;
            if failed && fail_fast {
                stopped_early = position + 1 < plan.len();
                if stopped_early {
                    tracing::debug!("fail-fast: stopping after {}", planned.hook.identity());
                }
                break;
            }
        }

        RunOutput::new(crate::output::timestamp(), results, stopped_early)
    }

    fn run_hook(
        &self,
        config: &Config,
        root: &Path,
        files: &[String],
        planned: &PlannedHook<'_>,
        tags: &mut TagCache<'_>,
        resolve: Resolver<'_>,
    ) -> HookResult {
        let entry = planned.hook;
        let span = tracing::trace_span!("hook", id = %entry.identity());
        let _guard = span.enter();

        let implementation = resolve(entry);
        let default_types = implementation
            .as_ref()
            .map_or(filter::DEFAULT_TYPES, |hook| hook.default_types());
        let applicable = filter::applicable_files(config, entry, default_types, files, tags);

        let mut result = HookResult {
            id: entry.id.clone(),
            name: entry.display_name().to_string(),
            source: planned.source.label(),
            files: applicable.len(),
            outcome: HookOutcome::skipped(SkipReason::NoFiles),
            verbose: entry.verbose || self.config.verbose,
            duration_ms: None,
        };

        if applicable.is_empty() && !entry.always_run {
            tracing::trace!("no applicable files");
            return result;
        }

        let Some(implementation) = implementation else {
            tracing::warn!(
                "hook `{}` from {} has no built-in implementation and no `entry`; skipping",
                entry.identity(),
                planned.source.label()
            );
            result.outcome = HookOutcome::skipped(SkipReason::Unavailable);
            return result;
        };

        let ctx = HookContext {
            root,
            files: &applicable,
            args: &entry.args,
            verbose: result.verbose,
        };

        tracing::trace!("running on {} files", applicable.len());
        let start = Instant::now();
        result.outcome = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            implementation.run(&ctx)
        })) {
            Ok(outcome) => outcome,
            Err(_) => HookOutcome::failed_with_output("internal error: hook panicked"),
        };
        result.duration_ms = Some(start.elapsed().as_millis() as u64);
        tracing::trace!(
            "{} in {}ms",
            if result.outcome.is_failed() { "failed" } else { "passed" },
            result.duration_ms.unwrap_or(0)
        );

        result
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
