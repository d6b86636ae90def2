//! Input vocabulary and keyboard helpers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use timeline_tictactoe::Position;

/// A user intent, carrying any index it needs explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at the given board cell (0-8).
    ClickCell(usize),
    /// View the given history step.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleSort,
    /// Leave the application.
    Quit,
}

/// Which panel receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move over the board.
    #[default]
    Board,
    /// Up/Down move over the move list.
    Moves,
}

impl Focus {
    /// Toggles between the board and the move list.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Moves the board cursor one cell in the arrow direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Cell index for a `1`-`9` key press.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(d @ 1..=9) => Some(d as usize - 1),
            _ => None,
        },
        _ => None,
    }
}

/// Returns true for the keys that quit from anywhere.
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
