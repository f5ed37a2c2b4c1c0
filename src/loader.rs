//! Config file discovery and loading.
//!
//! The search order is:
//!
//! 1. `$XDG_CONFIG_HOME/it2grid/config.toml`
//! 2. `~/.config/it2grid/config.toml`
//! 3. Platform default (e.g., `~/Library/Application Support` on macOS)
//!
//! A missing config file is not an error; built-in defaults apply.

use crate::config::Config;
use crate::error::{GridError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "it2grid";
const CONFIG_FILE: &str = "config.toml";

/// Determine the config file path.
///
/// Returns the first existing candidate, or `~/.config/it2grid/config.toml`
/// when none exists.
///
/// # Errors
///
/// Returns [`GridError::NoConfigDir`] if the home directory cannot be determined.
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join(APP_DIR).join(CONFIG_FILE);
        if path.exists() {
            return Ok(path);
        }
    }

    let home = dirs::home_dir().ok_or(GridError::NoConfigDir)?;
    let dot_config = home.join(".config").join(APP_DIR).join(CONFIG_FILE);
    if dot_config.exists() {
        return Ok(dot_config);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(APP_DIR).join(CONFIG_FILE);
        if path.exists() {
            return Ok(path);
        }
    }

    Ok(dot_config)
}

/// Load and parse a config file from the given path.
///
/// # Errors
///
/// - [`GridError::ConfigNotFound`] if the file doesn't exist
/// - [`GridError::IoError`] if reading fails
/// - [`GridError::ParseError`] if TOML parsing fails
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(GridError::ConfigNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    let config: Config = contents.parse()?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from the default path, or defaults if there is none.
pub fn load_default_config() -> Result<Config> {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(GridError::NoConfigDir) => {
            debug!("no home directory, using built-in defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(e),
    };
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using built-in defaults");
        return Ok(Config::default());
    }
    load_config(&path)
}

/// Load the config named on the command line, or the default one.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => load_default_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\ncols = 6").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.defaults.cols.map(|c| c.get()), Some(6));
    }

    #[test]
    fn test_load_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            load_config(&path),
            Err(GridError::ConfigNotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_load_config_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults\ncols = ").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(GridError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\ntab = false").unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.defaults.tab, Some(false));
    }
}
