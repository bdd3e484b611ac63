//! Code-style checks: fixer dry run and standard conformance.

use crate::checks::{Check, CheckContext, CheckResult};
use crate::classify;
use crate::error::Error;
use crate::process;

/// Runs the style fixer in dry-run mode over every staged PHP file; any
/// file the fixer would touch fails the check.
pub struct StyleFix;

impl Check for StyleFix {
    fn name(&self) -> &'static str {
        "style fix"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult, Error> {
        let rule = classify::php();
        let rules_arg = format!("--rules=@{}", ctx.config.style.standard);
        let mut diagnostics = Vec::new();

        for file in ctx.staged.iter().filter(|f| rule.matches(f)) {
            let outcome = process::run(
                &ctx.config.tools.cs_fixer,
                &["fix", "--dry-run", "--verbose", &rules_arg, file],
                &ctx.repo_root,
            )?;
            if !outcome.success() {
                diagnostics.push(format!("{file} needs fixing"));
                diagnostics.extend(
                    outcome
                        .combined_output()
                        .lines()
                        .map(|line| format!("  {line}")),
                );
            }
        }

        if diagnostics.is_empty() {
            Ok(CheckResult::pass())
        } else {
            Ok(CheckResult::fail(diagnostics))
        }
    }
}

/// Runs the style checker against the fixed standard over every staged
/// PHP file under the source directory.
pub struct StyleStandard;

impl Check for StyleStandard {
    fn name(&self) -> &'static str {
        "style standard"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult, Error> {
        let rule = classify::php_in_src();
        let standard_arg = format!("--standard={}", ctx.config.style.standard);
        let encoding_arg = format!("--encoding={}", ctx.config.style.encoding);
        let mut diagnostics = Vec::new();

        for file in ctx.staged.iter().filter(|f| rule.matches(f)) {
            let outcome = process::run(
                &ctx.config.tools.phpcs,
                &[&standard_arg, &encoding_arg, file],
                &ctx.repo_root,
            )?;
            if !outcome.success() {
                diagnostics.push(format!("{file} violates {}", ctx.config.style.standard));
                diagnostics.extend(
                    outcome
                        .combined_output()
                        .lines()
                        .map(|line| format!("  {line}")),
                );
            }
        }

        if diagnostics.is_empty() {
            Ok(CheckResult::pass())
        } else {
            Ok(CheckResult::fail(diagnostics))
        }
    }
}
