//! Stateless UI rendering for the game screen.
//!
//! Every frame is drawn from a fresh [`GameView`]; nothing here keeps game
//! state between frames.

pub mod board;
pub mod cell;
pub mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as Point, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use timeline_tictactoe::{GameView, Status};

use crate::{Action, App, Focus};

/// Help line shown at the bottom of the screen.
pub const HELP: &str =
    "Click/1-9: Move | Arrows+Enter: Select | Tab: Focus | s: Sort | q: Quit";

/// Screen areas of every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered board panel.
    pub board: Rect,
    /// Board panel inside its border; cells are laid out here.
    pub board_inner: Rect,
    /// Status line.
    pub status: Rect,
    /// Sort toggle button.
    pub sort: Rect,
    /// Move-history list.
    pub moves: Rect,
    /// Help bar.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into panels.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                      // Title
                Constraint::Min(board::GRID_HEIGHT + 2),    // Body
                Constraint::Length(3),                      // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(board::GRID_WIDTH + 6),
                Constraint::Min(30),
            ])
            .split(rows[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(3), // Sort button
                Constraint::Min(4),    // Moves
            ])
            .split(body[1]);

        let board = body[0];
        Self {
            title: rows[0],
            board,
            board_inner: Block::default().borders(Borders::ALL).inner(board),
            status: info[0],
            sort: info[1],
            moves: info[2],
            help: rows[2],
        }
    }

    /// Action for a left click at the terminal coordinate, if any.
    ///
    /// `list_cursor` is the focused move-list cursor, as passed to [`draw`].
    pub fn action_at(
        &self,
        view: &GameView,
        list_cursor: Option<usize>,
        column: u16,
        row: u16,
    ) -> Option<Action> {
        if self.sort.contains(Point::new(column, row)) {
            return Some(Action::ToggleSort);
        }
        board::click_at(self.board_inner, view, column, row)
            .or_else(|| moves::click_at(self.moves, view, list_cursor, column, row))
    }
}

/// Renders the whole game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let view = app.view();

    let title = Paragraph::new("Timeline - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let board_title = if *app.focus() == Focus::Board {
        "Board (focused)"
    } else {
        "Board"
    };
    frame.render_widget(
        Block::default().borders(Borders::ALL).title(board_title),
        layout.board,
    );
    let cursor = (*app.focus() == Focus::Board).then_some(*app.cursor());
    board::render_board(frame, layout.board_inner, &view, cursor, *app.show_hints());

    let status = Paragraph::new(view.status().to_string())
        .style(status_style(view.status()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    moves::render_sort_button(frame, layout.sort, &view);

    moves::render_moves(frame, layout.moves, &view, app.focused_list_cursor());

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn status_style(status: &Status) -> Style {
    match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    }
}
