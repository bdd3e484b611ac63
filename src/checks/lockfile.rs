//! Composer lockfile consistency.

use crate::checks::{Check, CheckContext, CheckResult};
use crate::error::Error;

/// A staged `composer.json` must be accompanied by `composer.lock`.
///
/// A missing lockfile breaks every downstream install, so this is the
/// one check that aborts the run instead of aggregating.
pub struct ComposerLockfile;

impl Check for ComposerLockfile {
    fn name(&self) -> &'static str {
        "composer lockfile"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult, Error> {
        let json_staged = ctx.staged.iter().any(|f| f == "composer.json");
        let lock_staged = ctx.staged.iter().any(|f| f == "composer.lock");

        if json_staged && !lock_staged {
            return Err(Error::LockfileMissing);
        }
        Ok(CheckResult::pass())
    }
}
