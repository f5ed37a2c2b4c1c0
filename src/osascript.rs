//! Running generated scripts.
//!
//! The script is written to a temporary file and handed to the interpreter
//! (`osascript` by default). The interpreter inherits stdout and stderr, and
//! the temporary file is removed once it exits.

use crate::error::{GridError, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tempfile::TempPath;
use tracing::{debug, info};

/// Write `script` to a fresh temporary file.
///
/// The file is deleted when the returned [`TempPath`] is dropped.
pub fn write_script(script: &str) -> Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix("it2grid")
        .suffix(".applescript")
        .tempfile()?;
    file.write_all(script.as_bytes())?;
    file.flush()?;
    let path = file.into_temp_path();
    debug!(path = %path.display(), bytes = script.len(), "wrote script");
    Ok(path)
}

/// Run `interpreter` on the script at `path` and wait for it.
///
/// # Errors
///
/// - [`GridError::Spawn`] if the interpreter cannot be started
/// - [`GridError::ExecutionFailed`] if it exits unsuccessfully
pub fn run_file(interpreter: &str, path: &Path) -> Result<()> {
    info!(interpreter, path = %path.display(), "running script");
    let status = Command::new(interpreter)
        .arg(path)
        .status()
        .map_err(|source| GridError::Spawn {
            program: interpreter.to_string(),
            source,
        })?;
    check_status(interpreter, status)
}

/// Write `script` to a temporary file and run it with `interpreter`.
pub fn run(interpreter: &str, script: &str) -> Result<()> {
    let path = write_script(script)?;
    let result = run_file(interpreter, &path);
    let closed = path.close();
    result?;
    closed?;
    Ok(())
}

fn check_status(interpreter: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    Err(GridError::ExecutionFailed {
        program: interpreter.to_string(),
        code: status.code(),
    })
}
