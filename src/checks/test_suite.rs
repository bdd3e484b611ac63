//! Whole-project unit test execution.

use crate::checks::{Check, CheckContext, CheckResult};
use crate::error::Error;
use crate::process;

/// Runs the project test suite and scans its combined output for
/// failure tokens. The token scan, not the exit code, is the verdict:
/// some runner wrappers swallow the status but the report text is
/// reliable.
pub struct TestSuite;

impl Check for TestSuite {
    fn name(&self) -> &'static str {
        "unit tests"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult, Error> {
        let outcome = process::run(&ctx.config.tools.phpunit, &[], &ctx.repo_root)?;
        let combined = outcome.combined_output();

        if combined.contains("FAILURES") || combined.contains("Fatal") {
            let mut diagnostics = vec!["test suite failed".to_string()];
            diagnostics.extend(combined.lines().map(str::to_string));
            Ok(CheckResult::fail(diagnostics))
        } else {
            Ok(CheckResult::pass())
        }
    }
}
