//! Command-line interface for it2grid.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::config::{Config, Settings};
use crate::layout::FillOrder;
use clap::{ArgAction, Parser};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Command-line arguments for it2grid.
///
/// # Examples
///
/// ```bash
/// # Run three builds side by side
/// printf 'make a\nmake b\nmake c\n' | it2grid
///
/// # Two columns in the current tab
/// cat cmds.txt | it2grid --cols 2 --tab false
///
/// # Print the AppleScript instead of running it
/// cat cmds.txt | it2grid --debug
/// ```
#[derive(Parser, Debug)]
#[command(name = "it2grid")]
#[command(version)]
#[command(about = "Run commands from stdin in a grid of iTerm2 panes")]
#[command(long_about = "it2grid reads one shell command per line from stdin and runs each\n\
    in its own iTerm2 pane, arranged in columns.\n\n\
    Flags override the [defaults] table of ~/.config/it2grid/config.toml.")]
pub struct Cli {
    /// Number of columns [default: 4].
    #[arg(short, long, value_name = "N")]
    pub cols: Option<NonZeroUsize>,

    /// Open a new tab instead of using the current one [default: true].
    #[arg(
        short,
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub tab: Option<bool>,

    /// Delay between steps, in seconds [default: 0.25].
    #[arg(short, long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub delay: Option<f64>,

    /// How commands fill the grid [default: row].
    #[arg(short, long, value_enum, value_name = "ORDER")]
    pub fill: Option<FillOrder>,

    /// Print the AppleScript instead of running it.
    #[arg(long)]
    pub debug: bool,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve settings: flags override the config file, which overrides
    /// built-in defaults.
    pub fn settings(&self, config: &Config) -> Settings {
        let base = Settings::from_config(config);
        Settings {
            columns: self.cols.unwrap_or(base.columns),
            new_tab: self.tab.unwrap_or(base.new_tab),
            delay: self.delay.unwrap_or(base.delay),
            fill: self.fill.unwrap_or(base.fill),
            debug: self.debug || base.debug,
            interpreter: base.interpreter,
        }
    }

    /// Default log filter for the requested verbosity.
    ///
    /// `--debug` raises the floor to `info` so the grid dimensions are shown.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 if self.debug => "info",
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
