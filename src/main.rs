//! ttt_console - play tic-tac-toe against the computer on the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ttt_console::{GameConfig, LineConsole, Orchestrator};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let config = load_config(&cli)?;
    let console = LineConsole::stdio(*config.clear_screen());
    let mut session = Orchestrator::new(config, console)?;
    let summary = session.run().context("Game session failed")?;

    info!(?summary, "Exiting");
    Ok(())
}

/// Logs go to a file so they never interleave with the board.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Reads the config file, if any, and applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(first) = cli.first {
        config = config.with_first_mover(first);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.no_clear {
        config = config.with_clear_screen(false);
    }

    info!(?config, "Configuration resolved");
    Ok(config)
}
