//! The ordered check pipeline.

use std::path::Path;

use colored::Colorize;
use tracing::info;

use crate::checks::{self, CheckContext};
use crate::config::{self, Config};
use crate::error::Error;
use crate::git;

/// Run every check against the staged index of the repository
/// containing the current working directory.
pub fn run() -> Result<(), Error> {
    let repo_root = git::repo_root()?;
    run_in(&repo_root)
}

/// Run the pipeline against a specific repository root.
///
/// Checks execute in fixed order and do not short-circuit each other;
/// the lockfile rule and broken-environment conditions abort
/// immediately, everything else aggregates into one end-of-run verdict.
pub fn run_in(repo_root: &Path) -> Result<(), Error> {
    let config = Config::load(repo_root)?;
    let staged = git::staged_files(repo_root)?;
    info!(files = staged.len(), "collected staged file set");

    let ctx = CheckContext {
        repo_root: repo_root.to_path_buf(),
        staged,
        config,
        debug_rules: config::debug_rules(),
    };

    println!("Checking staged files before commit");

    let checks = checks::all();
    let total = checks.len();
    let mut failed: Vec<&'static str> = Vec::new();

    for check in &checks {
        let result = check.run(&ctx)?;
        if result.passed {
            println!("  {} {}", "●".green(), check.name());
        } else {
            println!("  {} {}", "●".red(), check.name());
            for line in &result.diagnostics {
                println!("    {line}");
            }
            failed.push(check.name());
        }
    }

    if failed.is_empty() {
        println!("{}", "All checks passed, commit away!".green());
        Ok(())
    } else {
        Err(Error::ChecksFailed {
            failed: failed.len(),
            total,
            names: failed.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::process::Command;
    use tempfile::TempDir;

    fn git_in(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {args:?} failed");
    }

    fn init_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        git_in(dir.path(), &["init", "-q"]);
        git_in(dir.path(), &["config", "user.email", "dev@example.com"]);
        git_in(dir.path(), &["config", "user.name", "Dev"]);
        dir
    }

    fn stage(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        git_in(dir, &["add", name]);
    }

    fn stub_tools(dir: &Path, phpunit: &str) {
        fs::write(
            dir.join("precheck.toml"),
            format!(
                "[tools]\nphp = \"true\"\ncs_fixer = \"true\"\nphpcs = \"true\"\nphpunit = \"{phpunit}\"\n"
            ),
        )
        .unwrap();
    }

    fn stub_runner(dir: &Path, body: &str) -> String {
        let path = dir.join("fake_phpunit.sh");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_clean_staged_set_passes() {
        let repo = init_repo();
        stub_tools(repo.path(), "true");
        stage(repo.path(), "src/Foo.php", "<?php\nclass Foo\n{\n}\n");

        assert!(run_in(repo.path()).is_ok());
    }

    #[test]
    fn test_missing_lockfile_aborts_the_run() {
        let repo = init_repo();
        stub_tools(repo.path(), "true");
        stage(repo.path(), "composer.json", "{}\n");

        let err = run_in(repo.path()).unwrap_err();
        assert!(matches!(err, Error::LockfileMissing));
    }

    #[test]
    fn test_failing_suite_aggregates_into_checks_failed() {
        let repo = init_repo();
        let runner = stub_runner(repo.path(), "echo 'FAILURES!'");
        stub_tools(repo.path(), &runner);
        stage(repo.path(), "src/Foo.php", "<?php\nclass Foo\n{\n}\n");

        let err = run_in(repo.path()).unwrap_err();
        match err {
            Error::ChecksFailed { failed, names, .. } => {
                assert_eq!(failed, 1);
                assert!(names.contains("unit tests"));
            }
            other => panic!("expected ChecksFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_failures_are_all_reported() {
        let repo = init_repo();
        let runner = stub_runner(repo.path(), "echo 'FAILURES!'");
        stub_tools(repo.path(), &runner);
        stage(repo.path(), "src/Foo.php", "<?php\nvar_dump(1);\n");

        let err = run_in(repo.path()).unwrap_err();
        match err {
            Error::ChecksFailed { failed, names, total } => {
                assert_eq!(failed, 2);
                assert_eq!(total, 6);
                assert!(names.contains("debug statements"));
                assert!(names.contains("unit tests"));
            }
            other => panic!("expected ChecksFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_staged_set_passes() {
        let repo = init_repo();
        stub_tools(repo.path(), "true");

        assert!(run_in(repo.path()).is_ok());
    }
}
