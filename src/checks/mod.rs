//! Check modules for the pre-commit pipeline.

pub mod debug_code;
pub mod lockfile;
pub mod style;
pub mod syntax;
pub mod test_suite;

use std::path::PathBuf;

use crate::classify::FilePatternRule;
use crate::config::Config;
use crate::error::Error;

/// Outcome of one check module.
#[derive(Debug)]
pub struct CheckResult {
    pub passed: bool,
    pub diagnostics: Vec<String>,
}

impl CheckResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            diagnostics: Vec::new(),
        }
    }

    /// A failed result. Callers must hand over at least one diagnostic
    /// line; a check never fails silently.
    pub fn fail(diagnostics: Vec<String>) -> Self {
        debug_assert!(!diagnostics.is_empty());
        Self {
            passed: false,
            diagnostics,
        }
    }
}

/// Shared read-only inputs for every check, built once per run.
pub struct CheckContext {
    pub repo_root: PathBuf,
    /// Added and modified staged files, in git's order.
    pub staged: Vec<String>,
    pub config: Config,
    /// Forbidden debug statement table, in fixed scan order.
    pub debug_rules: Vec<FilePatternRule>,
}

/// One pipeline check.
///
/// Policy violations come back as a failed `CheckResult`; an `Err`
/// means the environment is broken (or the lockfile rule tripped) and
/// aborts the whole run.
pub trait Check {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &CheckContext) -> Result<CheckResult, Error>;
}

/// All checks in their fixed execution order.
pub fn all() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(lockfile::ComposerLockfile),
        Box::new(syntax::PhpLint),
        Box::new(style::StyleFix),
        Box::new(style::StyleStandard),
        Box::new(debug_code::DebugCode),
        Box::new(test_suite::TestSuite),
    ]
}
