//! One run of it2grid: lay out the commands, then print or execute the script.

use crate::applescript;
use crate::config::Settings;
use crate::error::Result;
use crate::osascript;
use crate::script;
use std::io::Write;
use tracing::warn;

/// Build the script for `commands` and run it with the configured interpreter.
///
/// In debug mode the script is written to `out` instead and the interpreter
/// is never started. With no commands nothing is written or run.
///
/// # Errors
///
/// - [`crate::GridError::InvalidDelay`] if the delay is unusable
/// - [`crate::GridError::IoError`] if writing to `out` or the temp file fails
/// - [`crate::GridError::Spawn`] / [`crate::GridError::ExecutionFailed`] if the interpreter fails
pub fn run<W: Write>(settings: &Settings, commands: &[String], out: &mut W) -> Result<()> {
    if commands.is_empty() {
        warn!("no commands on stdin, nothing to do");
        return Ok(());
    }

    let ops = script::plan(commands, settings)?;
    let rendered = applescript::render(&ops);

    if settings.debug {
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    osascript::run(&settings.interpreter, &rendered)
}
