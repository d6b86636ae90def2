//! Command-line interface for timeline.

use std::path::PathBuf;

use clap::Parser;

/// Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug, Clone)]
#[command(name = "timeline")]
#[command(about = "Tic-tac-toe in the terminal with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "timeline.toml")]
    pub config: PathBuf,

    /// Start with the move list in descending order
    #[arg(long)]
    pub descending: bool,

    /// Hide key hints in empty cells
    #[arg(long)]
    pub no_hints: bool,

    /// Override the log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
