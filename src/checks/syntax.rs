//! PHP syntax linting.

use crate::checks::{Check, CheckContext, CheckResult};
use crate::classify;
use crate::error::Error;
use crate::process;

/// Runs the PHP linter (`php -l`) over every staged `.php`/`.inc` file.
pub struct PhpLint;

impl Check for PhpLint {
    fn name(&self) -> &'static str {
        "php lint"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult, Error> {
        let rule = classify::php_or_inc();
        let mut diagnostics = Vec::new();

        for file in ctx.staged.iter().filter(|f| rule.matches(f)) {
            let outcome = process::run(&ctx.config.tools.php, &["-l", file], &ctx.repo_root)?;
            if !outcome.success() {
                diagnostics.push(format!("syntax error in {file}"));
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
