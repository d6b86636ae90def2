//! Render model: everything the UI shows, derived from a session snapshot.
//!
//! [`GameView::new`] is a pure function of [`GameSession`]. Frontends redraw
//! from a fresh view after every handled event and never keep their own copy
//! of game state.

use derive_getters::Getters;

use crate::{GameSession, Outcome, Player, Position, Square};

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// The viewed board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The viewed board is full without a line.
    #[display("Draw")]
    Draw,
    /// The viewed board is still open.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One board cell as the cell renderer needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct CellView {
    /// Cell position; clicks on the cell report this index.
    position: Position,
    /// Mark shown in the cell.
    square: Square,
    /// Whether the cell belongs to the winning line.
    highlighted: bool,
}

impl CellView {
    /// Board index reported when the cell is clicked.
    pub fn index(&self) -> usize {
        self.position.index()
    }
}

/// One entry of the move-history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveItem {
    /// History step this item jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Whether this is the viewed step.
    selected: bool,
}

/// Complete render model for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    /// Outcome of the viewed board.
    outcome: Outcome,
    /// Status line.
    status: Status,
    /// The nine cells in index order.
    cells: [CellView; 9],
    /// Move list in display order.
    moves: Vec<MoveItem>,
    /// Label of the sort toggle: the order a toggle switches to.
    #[getter(skip)]
    sort_label: &'static str,
}

impl GameView {
    /// Derives the view of `session`.
    pub fn new(session: &GameSession) -> Self {
        let outcome = session.outcome();
        let board = session.board();

        let status = match outcome {
            Outcome::Winner { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(session.next_player()),
        };

        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: outcome.highlights(position),
        });

        let mut moves: Vec<MoveItem> = session
            .history()
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveItem {
                step,
                label: entry.label(step),
                selected: step == session.step(),
            })
            .collect();
        if !session.is_ascending() {
            moves.reverse();
        }

        let sort_label = if session.is_ascending() {
            "Descending"
        } else {
            "Ascending"
        };

        Self {
            outcome,
            status,
            cells,
            moves,
            sort_label,
        }
    }

    /// Cells of one board row (0-based), left to right.
    pub fn row(&self, row: usize) -> &[CellView] {
        let start = row.min(2) * 3;
        &self.cells[start..start + 3]
    }

    /// Label of the sort toggle: the order a toggle switches to.
    pub fn sort_label(&self) -> &'static str {
        self.sort_label
    }

    /// Winning line as board indices, if any.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.outcome.line().map(|line| line.map(Position::index))
    }
}
