//! Error types for it2grid.
//!
//! All errors are represented by [`GridError`], which covers reading the
//! command list, configuration problems, and failures of the external
//! script interpreter.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in it2grid.
#[derive(Error, Debug)]
pub enum GridError {
    /// Stdin is an interactive terminal, so there are no piped commands.
    #[error("expecting lines on stdin")]
    InteractiveInput,

    /// Reading stdin or writing the temporary script failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The per-step delay is negative or not a finite number.
    #[error("Invalid delay: {0} (expected a non-negative number of seconds)")]
    InvalidDelay(f64),

    /// Config file passed with `--config` does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Could not determine the user's config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// TOML parsing failed.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The script interpreter could not be started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Interpreter that was invoked.
        program: String,
        /// Underlying spawn error.
        source: std::io::Error,
    },

    /// The script interpreter ran but exited unsuccessfully.
    #[error("{program} exited with {}", describe_code(.code))]
    ExecutionFailed {
        /// Interpreter that was invoked.
        program: String,
        /// Exit code, or `None` when killed by a signal.
        code: Option<i32>,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "a signal".to_string(),
    }
}

impl GridError {
    /// Process exit code to report for this error.
    ///
    /// A failing interpreter propagates its own status; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            GridError::ExecutionFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Convenient Result type alias for it2grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_propagates_interpreter_status() {
        let err = GridError::ExecutionFailed {
            program: "osascript".into(),
            code: Some(3),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "osascript exited with status 3");
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        let killed = GridError::ExecutionFailed {
            program: "osascript".into(),
            code: None,
        };
        assert_eq!(killed.exit_code(), 1);
        assert_eq!(killed.to_string(), "osascript exited with a signal");
        assert_eq!(GridError::InteractiveInput.exit_code(), 1);
    }

    #[test]
    fn test_interactive_input_message() {
        let err = GridError::InteractiveInput;
        assert_eq!(format!("it2grid: {}", err), "it2grid: expecting lines on stdin");
    }
}
