//! Reading the command list.
//!
//! Commands arrive one per line on stdin. Lines are kept verbatim (including
//! blank ones, which become panes where only return is pressed).

use crate::error::{GridError, Result};
use std::io::{BufRead, IsTerminal};

/// Read one command per line from `reader`.
pub fn read_commands<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let commands = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    Ok(commands)
}

/// Read commands from stdin.
///
/// # Errors
///
/// - [`GridError::InteractiveInput`] if stdin is a terminal
/// - [`GridError::IoError`] if reading fails
pub fn read_stdin() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(GridError::InteractiveInput);
    }
    read_commands(stdin.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_commands_splits_lines() {
        let cmds = read_commands(Cursor::new("make\ncargo test\r\n\ntail -f log")).unwrap();
        assert_eq!(cmds, vec!["make", "cargo test", "", "tail -f log"]);
    }

    #[test]
    fn test_read_commands_empty() {
        assert!(read_commands(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_read_commands_invalid_utf8() {
        let err = read_commands(Cursor::new(vec![0xff, 0xfe, b'\n'])).unwrap_err();
        assert!(matches!(err, GridError::IoError(_)));
    }
}
