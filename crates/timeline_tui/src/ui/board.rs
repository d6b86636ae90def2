//! Tic-tac-toe board rendering and hit testing.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position as Point, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use timeline_tictactoe::{GameView, Position};

use super::cell::{self, CellDecor};
use crate::Action;

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the whole grid including separators.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the whole grid including separators.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen areas of the nine cells, in board index order.
///
/// Drawing and mouse hit testing both use this layout, so a click lands on
/// the cell drawn under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    cells: [Rect; 9],
}

impl BoardLayout {
    /// Centers the grid in `area` and splits it into cells.
    pub fn new(area: Rect) -> Self {
        let grid = center_rect(area, GRID_WIDTH, GRID_HEIGHT);
        let mut cells = [Rect::default(); 9];
        for pos in Position::ALL {
            let x = grid.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = grid.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            cells[pos.index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid);
        }
        Self { cells }
    }

    /// Area of the cell at `index`.
    pub fn cell(&self, index: usize) -> Option<Rect> {
        self.cells.get(index).copied()
    }

    /// Cell under the terminal coordinate, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let point = Point::new(column, row);
        self.cells.iter().position(|rect| rect.contains(point))
    }

    /// Separator lines between cells.
    fn separators(&self) -> ([Rect; 2], [Rect; 2]) {
        let top = self.cells[0];
        let width = self.cells[2].right().saturating_sub(top.x);
        let height = self.cells[6].bottom().saturating_sub(top.y);
        let horizontal = [
            Rect::new(top.x, self.cells[0].bottom(), width, 1),
            Rect::new(top.x, self.cells[3].bottom(), width, 1),
        ];
        let vertical = [
            Rect::new(self.cells[0].right(), top.y, 1, height),
            Rect::new(self.cells[1].right(), top.y, 1, height),
        ];
        (horizontal, vertical)
    }
}

/// Action for a mouse click at the terminal coordinate, if it hits a cell.
pub fn click_at(area: Rect, view: &GameView, column: u16, row: u16) -> Option<Action> {
    let index = BoardLayout::new(area).hit(column, row)?;
    view.cells().get(index).map(cell::click)
}

/// Renders the board: nine cells in three rows with grid separators.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Option<Position>,
    hints: bool,
) {
    let layout = BoardLayout::new(area);
    let sep_style = Style::default().fg(Color::DarkGray);

    let (horizontal, vertical) = layout.separators();
    for rect in horizontal {
        let line = Paragraph::new("─".repeat(rect.width as usize)).style(sep_style);
        frame.render_widget(line, rect.intersection(area));
    }
    for rect in vertical {
        let lines: Vec<&str> = vec!["│"; rect.height as usize];
        let line = Paragraph::new(lines.join("\n")).style(sep_style);
        frame.render_widget(line, rect.intersection(area));
    }

    for row in 0..3 {
        for cell in view.row(row) {
            let Some(rect) = layout.cell(cell.index()) else {
                continue;
            };
            let decor = CellDecor {
                cursor: cursor == Some(*cell.position()),
                hint: hints,
            };
            cell::render_cell(frame, rect, cell, decor);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
