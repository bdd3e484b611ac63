//! Forbidden debug statement scanning.
//!
//! Scans the staged content (the index, not the working tree) of files
//! matching each configured language group for that group's forbidden
//! snippets. All matches across all snippets are collected before
//! reporting, so one commit surfaces every leftover statement at once.

use colored::Colorize;

use crate::checks::{Check, CheckContext, CheckResult};
use crate::error::Error;
use crate::git;

pub struct DebugCode;

impl Check for DebugCode {
    fn name(&self) -> &'static str {
        "debug statements"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult, Error> {
        let mut diagnostics = Vec::new();

        for rule in &ctx.debug_rules {
            let files = git::staged_names_matching(&ctx.repo_root, rule)?;
            for file in &files {
                let content = git::staged_content(&ctx.repo_root, file)?;
                for (idx, line) in content.lines().enumerate() {
                    for snippet in rule.forbidden() {
                        if let Some(found) = snippet.find(line) {
                            diagnostics.push(format!(
                                "[{}] {}:{}: {}",
                                rule.name(),
                                file,
                                idx + 1,
                                highlight(line, found.start(), found.end()),
                            ));
                        }
                    }
                }
            }
        }

        if diagnostics.is_empty() {
            Ok(CheckResult::pass())
        } else {
            Ok(CheckResult::fail(diagnostics))
        }
    }
}

/// Render a line with the matched span highlighted.
fn highlight(line: &str, start: usize, end: usize) -> String {
    format!(
        "{}{}{}",
        &line[..start],
        line[start..end].red().bold(),
        &line[end..]
    )
    .trim_end()
    .to_string()
}
