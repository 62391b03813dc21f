//! # FST-based DFA minimization (§4.7)
//!
//! Minimization is not reimplemented here: it's delegated to the `fstcompile` / `fstminimize` /
//! `fstprint` command-line tools from OpenFst, the same external toolchain the reference
//! implementation shelled out to. This module is the adapter: it writes the AT&T listing to a
//! scratch directory, drives the three subprocesses in sequence, and reads the minimized listing
//! back.
//!
//! Each call gets its own [`tempfile::TempDir`], so concurrent callers never collide and the
//! scratch files are removed on drop even if a step fails partway through.

pub mod error;

pub use error::MinimizationError;

use log::{debug, warn};
use std::fs;
use std::io;
use std::process::{Command, Output};

/// Minimizes the DFA described by `att_text` (§6.1) via `fstcompile | fstminimize | fstprint`,
/// returning the minimized listing in the same AT&T format.
///
/// Requires `fstcompile`, `fstminimize` and `fstprint` (OpenFst's command-line tools) to be on
/// `PATH`. Each of the three failure modes — missing binary, nonzero exit, unreadable output — is
/// reported as a distinct [`MinimizationError`] variant rather than a single opaque I/O error.
pub fn att_fst_minimize(att_text: &str) -> Result<String, MinimizationError> {
    let dir = tempfile::tempdir().map_err(MinimizationError::TempDir)?;
    debug!("minimizing DFA in scratch dir {:?}", dir.path());

    let input_path = dir.path().join("input.att");
    let compiled_path = dir.path().join("compiled.fst");
    let minimized_path = dir.path().join("minimized.fst");
    let output_path = dir.path().join("output.att");

    fs::write(&input_path, att_text).map_err(|e| MinimizationError::Io("input.att", e))?;

    run("fstcompile", &[&input_path, &compiled_path])?;
    run("fstminimize", &[&compiled_path, &minimized_path])?;
    run("fstprint", &[&minimized_path, &output_path])?;

    let result =
        fs::read_to_string(&output_path).map_err(|e| MinimizationError::Io("output.att", e))?;

    debug!(
        "minimization finished: {} -> {} lines",
        att_text.lines().count(),
        result.lines().count()
    );
    Ok(result)
}

fn run(program: &'static str, args: &[&std::path::Path]) -> Result<(), MinimizationError> {
    let cmdline = command_line(program, args);
    debug!("running: {cmdline}");

    let Output {
        status,
        stdout: _,
        stderr,
    } = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| spawn_error(program, e))?;

    debug!("{program} exited with status {status}");

    if !status.success() {
        let stderr = String::from_utf8_lossy(&stderr).into_owned();
        warn!("command failed: {cmdline}\nstderr: {}", stderr_tail(&stderr));
        return Err(MinimizationError::NonZeroExit(program, status, stderr));
    }
    Ok(())
}

/// Renders a command and its arguments for logging, without shell-interpreting them (arguments
/// are `Debug`-quoted so embedded spaces are visible rather than silently concatenated).
fn command_line(program: &str, args: &[&std::path::Path]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| format!("{a:?}")));
    parts.join(" ")
}

/// The last few lines of a subprocess's stderr, to keep a failed-command warning short.
fn stderr_tail(stderr: &str) -> String {
    const MAX_LINES: usize = 20;
    let lines: Vec<&str> = stderr.lines().collect();
    let start = lines.len().saturating_sub(MAX_LINES);
    lines[start..].join("\n")
}

fn spawn_error(program: &'static str, e: io::Error) -> MinimizationError {
    if e.kind() == io::ErrorKind::NotFound {
        warn!("`{program}` not found on PATH; is OpenFst installed?");
    }
    MinimizationError::Spawn(program, e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_reported_distinctly() {
        // This test only exercises the error path and does not require OpenFst to be installed:
        // redirecting PATH to an empty directory guarantees `fstcompile` is not found.
        let empty_path_dir = tempfile::tempdir().unwrap();
        let original_path = std::env::var_os("PATH");
        std::env::set_var("PATH", empty_path_dir.path());
        let result = att_fst_minimize("0\t0\t1\t1\n0\n");
        if let Some(path) = original_path {
            std::env::set_var("PATH", path);
        }
        assert!(matches!(result, Err(MinimizationError::Spawn("fstcompile", _))));
    }
}
