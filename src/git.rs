//! Staged-index queries against the git CLI.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classify::FilePatternRule;
use crate::error::Error;
use crate::process::{self, ProcessOutcome};

/// Object id of the empty tree: the diff base for a repository with no
/// commits yet.
const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// Run git, treating a failure to launch the binary as a broken VCS
/// toolchain rather than a failed check.
fn git(repo_root: &Path, args: &[&str]) -> Result<ProcessOutcome, Error> {
    process::run("git", args, repo_root).map_err(|e| match e {
        Error::ToolLaunch { source, .. } => Error::Vcs {
            command: format!("git {}", args.join(" ")),
            detail: source.to_string(),
        },
        other => other,
    })
}

/// Run git and require a zero exit.
fn git_ok(repo_root: &Path, args: &[&str]) -> Result<ProcessOutcome, Error> {
    let outcome = git(repo_root, args)?;
    if !outcome.success() {
        return Err(Error::Vcs {
            command: format!("git {}", args.join(" ")),
            detail: outcome.stderr.trim().to_string(),
        });
    }
    Ok(outcome)
}

/// Repository root of the current working directory.
pub fn repo_root() -> Result<PathBuf, Error> {
    let cwd = std::env::current_dir()?;
    discover_root(&cwd)
}

/// Repository root containing the given directory.
pub fn discover_root(dir: &Path) -> Result<PathBuf, Error> {
    let outcome = git_ok(dir, &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(outcome.stdout.trim()))
}

/// Diff base for the staged index: HEAD when it resolves, the empty
/// tree for a repository with no commits.
fn diff_base(repo_root: &Path) -> Result<String, Error> {
    let head = git(repo_root, &["rev-parse", "--verify", "HEAD"])?;
    if head.success() {
        Ok("HEAD".to_string())
    } else {
        Ok(EMPTY_TREE.to_string())
    }
}

/// Added and modified files in the staged index, in the order git
/// reports them. Deleted files never appear.
pub fn staged_files(repo_root: &Path) -> Result<Vec<String>, Error> {
    let base = diff_base(repo_root)?;
    let outcome = git_ok(repo_root, &["diff-index", "--cached", "--name-status", &base])?;

    let files: Vec<String> = outcome
        .stdout
        .lines()
        .filter_map(|line| {
            let mut cols = line.split('\t');
            match (cols.next(), cols.next()) {
                (Some("A"), Some(path)) | (Some("M"), Some(path)) => Some(path.to_string()),
                _ => None,
            }
        })
        .collect();

    debug!(count = files.len(), base = %base, "collected staged files");
    Ok(files)
}

/// Names of staged files whose path matches the rule. Deletions are
/// skipped so every returned name has staged content.
pub fn staged_names_matching(
    repo_root: &Path,
    rule: &FilePatternRule,
) -> Result<Vec<String>, Error> {
    let outcome = git_ok(
        repo_root,
        &["diff", "--cached", "--name-only", "--diff-filter=ACM"],
    )?;
    Ok(outcome
        .stdout
        .lines()
        .filter(|name| rule.matches(name))
        .map(str::to_string)
        .collect())
}

/// Content of a path as staged in the index, not as it sits in the
/// working tree.
pub fn staged_content(repo_root: &Path, path: &str) -> Result<String, Error> {
    let object = format!(":{path}");
    let outcome = git_ok(repo_root, &["show", &object])?;
    Ok(outcome.stdout)
}
