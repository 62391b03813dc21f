use std::io;
use thiserror::Error;

/// Errors raised by [`att_fst_minimize`](crate::minimize::att_fst_minimize).
#[derive(Debug, Error)]
pub enum MinimizationError {
    #[error("failed to launch `{0}`: {1}")]
    Spawn(&'static str, #[source] io::Error),
    #[error("`{0}` exited with status {1}: {2}")]
    NonZeroExit(&'static str, std::process::ExitStatus, String),
    #[error("failed to create temporary working directory: {0}")]
    TempDir(#[source] io::Error),
    #[error("failed to read intermediate file {0}: {1}")]
    Io(&'static str, #[source] io::Error),
}
