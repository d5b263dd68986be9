/// wire3d - rotating wireframes in the terminal
///
/// Examples:
///   wire3d --shape cube --theme neon
///   wire3d --shape sphere --theme matrix --fit
///   wire3d --list
///
/// Ctrl-C (SIGINT) or SIGTERM stops the animation and prints a farewell.
use std::io;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wire3d_terminal::{write_catalog, Cli, Interrupt, Settings, TerminalApp};

/// Environment variable holding the default log filter.
const LOG_ENV: &str = "WIRE3D_LOG";

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid --log-level `{directives}`"))?,
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // stdout carries the frames; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    if cli.list {
        write_catalog(&mut io::stdout())?;
        return Ok(());
    }

    let terminal = crossterm::terminal::size().ok();
    let settings = Settings::from_cli(&cli, terminal)?;
    let interrupt = Interrupt::install().context("failed to install signal handlers")?;

    let mut app = TerminalApp::new(&settings, interrupt)?;
    let reason = app.run()?;
    info!(?reason, frames = app.animation().frame(), "done");
    Ok(())
}
