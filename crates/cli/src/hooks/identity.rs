// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! identity: print the files the hook received. Useful for debugging filters.

use crate::hook::{Hook, HookContext, HookOutcome};

pub struct Identity;

impl Hook for Identity {
    fn name(&self) -> &str {
        "identity"
    }

    fn run(&self, ctx: &HookContext) -> HookOutcome {
        let listing = ctx.files.join("\n");
        HookOutcome::Passed {
            output: (!listing.is_empty()).then_some(listing),
        }
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
