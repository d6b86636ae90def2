//! Branching move history.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Board, Player, Position};

/// One immutable snapshot in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Move that produced this board; `None` for the game start.
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Entry produced by `player` moving at `pos` from `previous`.
    pub fn after(previous: &HistoryEntry, pos: Position, player: Player) -> Self {
        Self {
            board: previous.board.with_mark(pos, player),
            last_move: Some(pos),
        }
    }

    /// Move-list label for the entry at `step`.
    ///
    /// Rows and columns are 1-based.
    pub fn label(&self, step: usize) -> String {
        match self.last_move {
            Some(pos) if step > 0 => {
                format!("Go to move #{} ({},{})", step, pos.row() + 1, pos.col() + 1)
            }
            _ => "Go to game start".to_string(),
        }
    }
}

/// Ordered, never-empty sequence of snapshots starting at the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// History holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
        }
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: history always holds the start entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Most recent entry.
    pub fn latest(&self) -> &HistoryEntry {
        // Never empty: constructed with the start entry and only truncated to step + 1.
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Discards every entry after `step`.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn truncate_after(&mut self, step: usize) {
        let keep = step.saturating_add(1).min(self.entries.len());
        if keep < self.entries.len() {
            debug!(discarded = self.entries.len() - keep, "Dropping future entries");
        }
        self.entries.truncate(keep);
    }

    /// Appends the entry produced by `player` moving at `pos`.
    pub fn push_move(&mut self, pos: Position, player: Player) {
        let next = HistoryEntry::after(self.latest(), pos, player);
        self.entries.push(next);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
