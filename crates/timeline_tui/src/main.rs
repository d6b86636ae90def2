//! Timeline - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use timeline_tui::{Cli, TuiConfig, logging};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?.with_overrides(&cli);
    logging::init(&config)?;

    timeline_tui::run(&config)
}
