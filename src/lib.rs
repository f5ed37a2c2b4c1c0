//! # it2grid
//!
//! Runs a list of shell commands side by side in a grid of iTerm2 panes.
//!
//! Pipe commands in, one per line, and it2grid opens a tab, splits it into
//! columns and rows, and types each command into its own pane:
//!
//! ```bash
//! printf 'make api\nmake web\nmake worker\n' | it2grid --cols 2
//! ```
//!
//! ## Pipeline
//!
//! 1. [`layout`] places the commands on a grid.
//! 2. [`script`] turns the grid into an ordered list of [`Operation`]s
//!    (split, focus next pane, type text, pause).
//! 3. [`applescript`] renders the operations as AppleScript.
//! 4. [`osascript`] runs the script ([`app::run`] ties the steps together).
//!
//! Steps 1 to 3 are pure and deterministic.
//!
//! ## Modules
//!
//! - [`cli`]: Command-line argument parsing with clap
//! - [`config`]: Config file format and resolved settings
//! - [`loader`]: Config file discovery and loading
//! - [`input`]: Reading commands from stdin
//! - [`error`]: Error types

pub mod app;
pub mod applescript;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod loader;
pub mod osascript;
pub mod script;

pub use config::{Config, Settings};
pub use error::{GridError, Result};
pub use layout::{Cell, FillOrder, GridSpec, PaneAssignment};
pub use script::{Operation, ScriptOptions};
