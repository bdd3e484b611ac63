//! External process invocation.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::Error;

/// Captured outcome of a single external invocation.
#[derive(Debug)]
pub struct ProcessOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Both streams concatenated, stdout first.
    pub fn combined_output(&self) -> String {
        let mut combined = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&self.stderr);
        }
        combined
    }
}

/// Run an external command to completion, capturing both streams.
///
/// A non-zero exit is a normal outcome reported through the returned
/// `ProcessOutcome`. Failing to launch the program at all (missing
/// binary, permission error) is fatal.
pub fn run(program: &str, args: &[&str], cwd: &Path) -> Result<ProcessOutcome, Error> {
    debug!(program, ?args, "running external command");

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|source| Error::ToolLaunch {
            tool: program.to_string(),
            source,
        })?;

    // code() is None when the child was killed by a signal
    let exit_code = output.status.code().unwrap_or(-1);
    debug!(program, exit_code, "external command finished");

    Ok(ProcessOutcome {
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::temp_dir()
    }

    #[test]
    fn test_captures_stdout() {
        let outcome = run("echo", &["hello"], &cwd()).unwrap();
        assert!(outcome.success());
        assert_eq!(outcome.stdout.trim(), "hello");
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_captures_stderr_and_exit_code() {
        let outcome = run("sh", &["-c", "echo oops >&2; exit 3"], &cwd()).unwrap();
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code, 3);
        assert_eq!(outcome.stderr.trim(), "oops");
    }

    #[test]
    fn test_nonzero_exit_is_not_an_error() {
        let outcome = run("sh", &["-c", "exit 1"], &cwd()).unwrap();
        assert_eq!(outcome.exit_code, 1);
    }

    #[test]
    fn test_missing_binary_is_fatal() {
        let err = run("definitely-not-a-real-binary", &[], &cwd()).unwrap_err();
        match err {
            Error::ToolLaunch { tool, .. } => {
                assert_eq!(tool, "definitely-not-a-real-binary");
            }
            other => panic!("expected ToolLaunch, got {other:?}"),
        }
    }

    #[test]
    fn test_combined_output_orders_stdout_first() {
        let outcome = run("sh", &["-c", "echo out; echo err >&2"], &cwd()).unwrap();
        let combined = outcome.combined_output();
        let out_pos = combined.find("out").unwrap();
        let err_pos = combined.find("err").unwrap();
        assert!(out_pos < err_pos);
    }
}
