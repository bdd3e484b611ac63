//! Error types for the precheck pipeline.

use thiserror::Error;

/// Fatal pipeline error.
///
/// Policy violations (syntax errors, style drift, leftover debug
/// statements, failing tests) are not errors; they are collected as
/// failed check results and aggregated at the end of the run. The
/// variants here abort the run on the spot.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{command} failed: {detail}")]
    Vcs { command: String, detail: String },

    #[error("could not launch {tool}: {source}")]
    ToolLaunch {
        tool: String,
        source: std::io::Error,
    },

    #[error("composer.lock must be commited if composer.json is modified!")]
    LockfileMissing,

    #[error("could not parse {path}: {detail}")]
    ConfigParse { path: String, detail: String },

    #[error("{failed} of {total} checks failed: {names}")]
    ChecksFailed {
        failed: usize,
        total: usize,
        names: String,
    },
}
