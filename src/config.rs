//! Configuration types for it2grid.
//!
//! Settings come from three places, in order of precedence: command-line
//! flags, the `[defaults]` table of the config file, and built-in defaults.
//! The config file is optional.
//!
//! # Config Format
//!
//! ```toml
//! [defaults]
//! cols = 3
//! tab = false
//! delay = 0.5
//! fill = "column"
//! debug = false
//! interpreter = "osascript"
//! ```

use crate::error::Result;
use crate::layout::FillOrder;
use crate::script::ScriptOptions;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Built-in column count.
pub const DEFAULT_COLUMNS: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Built-in delay between steps, in seconds.
pub const DEFAULT_DELAY: f64 = 0.25;

/// Built-in script interpreter.
pub const DEFAULT_INTERPRETER: &str = "osascript";

/// Values from the config file's `[defaults]` table. Unset keys fall through.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Number of columns.
    pub cols: Option<NonZeroUsize>,
    /// Whether to open a new tab.
    pub tab: Option<bool>,
    /// Delay between steps, in seconds.
    pub delay: Option<f64>,
    /// How commands are distributed across the grid.
    pub fill: Option<FillOrder>,
    /// Print the script instead of running it.
    pub debug: Option<bool>,
    /// Program that runs the generated script.
    pub interpreter: Option<String>,
}

/// Top-level configuration file structure.
///
/// Parsed from `~/.config/it2grid/config.toml` (or XDG equivalent).
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: Defaults,
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(toml_str: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(toml_str)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Maximum number of columns.
    pub columns: NonZeroUsize,
    /// Open a new tab instead of splitting the current one.
    pub new_tab: bool,
    /// Delay between steps, in seconds.
    pub delay: f64,
    /// How commands are distributed across the grid.
    pub fill: FillOrder,
    /// Print the script instead of running it.
    pub debug: bool,
    /// Program that runs the generated script.
    pub interpreter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            new_tab: true,
            delay: DEFAULT_DELAY,
            fill: FillOrder::default(),
            debug: false,
            interpreter: DEFAULT_INTERPRETER.to_string(),
        }
    }
}

impl Settings {
    /// Settings with the config file's defaults applied over the built-in ones.
    pub fn from_config(config: &Config) -> Self {
        let d = &config.defaults;
        let base = Settings::default();
        Self {
            columns: d.cols.unwrap_or(base.columns),
            new_tab: d.tab.unwrap_or(base.new_tab),
            delay: d.delay.unwrap_or(base.delay),
            fill: d.fill.unwrap_or(base.fill),
            debug: d.debug.unwrap_or(base.debug),
            interpreter: d.interpreter.clone().unwrap_or(base.interpreter),
        }
    }

    /// Options for the script generator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::InvalidDelay`] if the delay is negative or not finite.
    pub fn script_options(&self) -> Result<ScriptOptions> {
        ScriptOptions::new(self.delay, self.new_tab)
    }
}
