//! Terminal UI for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **Game logic**: [`timeline_tictactoe::GameSession`], owned by [`App`]
//! - **Rendering**: [`ui::draw`] redraws every panel from a fresh
//!   [`timeline_tictactoe::GameView`] after each event
//! - **Input**: keys and mouse clicks become [`Action`]s carrying their index
//! - **Ambient**: [`Cli`] and [`TuiConfig`] for settings, [`logging`] for
//!   file-based tracing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
pub mod input;
pub mod logging;
pub mod ui;

pub use app::{App, Flow};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, Focus};

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{error, info, instrument};

/// Sets up the terminal, runs the game until the user quits, and restores
/// the terminal even when the loop fails.
#[instrument(skip(config))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Timeline TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Event loop: draw, wait for one event, handle it.
///
/// Blocks on input; nothing changes between events.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let frame = terminal.draw(|f| ui::draw(f, &app))?;
        app.set_viewport(frame.area);

        let flow = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => Flow::Continue,
        };
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}
