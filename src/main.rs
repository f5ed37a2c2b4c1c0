//! it2grid CLI entry point.
//!
//! Reads commands from stdin and runs them in a grid of iTerm2 panes.

use clap::Parser;
use it2grid::cli::Cli;
use it2grid::error::Result;
use it2grid::{app, input, loader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("it2grid: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load settings and commands, then hand off to [`app::run`].
fn run(cli: &Cli) -> Result<()> {
    let config = loader::load(cli.config.as_deref())?;
    let settings = cli.settings(&config);
    debug!(?settings, "resolved settings");

    let commands = input::read_stdin()?;
    app::run(&settings, &commands, &mut std::io::stdout().lock())
}
