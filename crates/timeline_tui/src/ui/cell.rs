//! Single board cell rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use timeline_tictactoe::{CellView, Player, Square};

use crate::Action;

/// Per-frame presentation flags that are not part of the game view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellDecor {
    /// Keyboard cursor is on this cell.
    pub cursor: bool,
    /// Show the 1-9 key in an empty cell.
    pub hint: bool,
}

/// Action emitted when the cell is activated.
pub fn click(cell: &CellView) -> Action {
    Action::ClickCell(cell.index())
}

/// Text and style for a cell.
pub fn cell_style(cell: &CellView, decor: CellDecor) -> (String, Style) {
    let (text, mut style) = match cell.square() {
        Square::Empty if decor.hint => (
            (cell.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if *cell.highlighted() {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    if decor.cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    (text, style)
}

/// Renders one cell, filling its whole area with the cell style.
pub fn render_cell(frame: &mut Frame, area: Rect, cell: &CellView, decor: CellDecor) {
    let (text, style) = cell_style(cell, decor);

    let pad = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); pad as usize];
    lines.push(Line::from(text));

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
