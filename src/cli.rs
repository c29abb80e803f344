//! Command-line interface for ttt_console.

use clap::Parser;
use std::path::PathBuf;
use ttt_console::FirstMover;

/// Tic Tac Toe against the computer, first to five points wins the set
#[derive(Parser, Debug)]
#[command(name = "ttt_console")]
#[command(about = "Play tic-tac-toe against the computer in sets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who opens each round (overrides the config file)
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't clear the screen between boards
    #[arg(long)]
    pub no_clear: bool,

    /// File that receives log output
    #[arg(long, default_value = "ttt_console.log")]
    pub log_file: PathBuf,
}
