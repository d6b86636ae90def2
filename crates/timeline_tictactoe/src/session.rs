//! Game session: the single owner of mutable game state.
//!
//! All mutation goes through [`GameSession::handle_click`],
//! [`GameSession::jump_to`] and [`GameSession::toggle_sort`]. Every other
//! method is a read of the current snapshot.

use tracing::{debug, info, instrument};

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::{
    Board, History, HistoryEntry, JumpError, MoveError, Outcome, Player, Position,
    calculate_winner,
};

/// History, viewed step and move-list ordering for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: History,
    step: usize,
    ascending: bool,
}

impl GameSession {
    /// Creates a session at the empty board with the move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort(true)
    }

    /// Creates a session with the given initial move-list order.
    #[instrument]
    pub fn with_sort(ascending: bool) -> Self {
        Self {
            history: History::new(),
            step: 0,
            ascending,
        }
    }

    /// Full history, including entries after the viewed step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the viewed history entry.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The viewed history entry.
    pub fn current(&self) -> &HistoryEntry {
        // `step < history.len()` is maintained by every mutator.
        self.history.get(self.step).unwrap_or_else(|| self.history.latest())
    }

    /// The viewed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player who moves next from the viewed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Outcome of the viewed board.
    pub fn outcome(&self) -> Outcome {
        calculate_winner(self.board())
    }

    /// Plays the current player's mark at cell `index`, reporting rejections.
    ///
    /// Entries after the viewed step are discarded before the new one is
    /// appended, and the view advances to the new entry.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without changing any state when the index is
    /// off the board, the viewed board already has a winner, or the cell is
    /// occupied.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn try_click(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if self.outcome().winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        self.history.truncate_after(self.step);
        self.history.push_move(pos, player);
        self.step = self.history.len() - 1;

        debug_assert!(
            HistoryInvariants::check_all(&self.history).is_ok(),
            "history invariants violated after move at {pos}"
        );

        let outcome = self.outcome();
        info!(position = %pos, step = self.step, ?outcome, "Move accepted");
        Ok(outcome)
    }

    /// Click handler: plays at `index` or silently ignores an illegal click.
    ///
    /// Returns true if the move was accepted.
    pub fn handle_click(&mut self, index: usize) -> bool {
        match self.try_click(index) {
            Ok(_) => true,
            Err(e) => {
                debug!(index, reason = %e, "Click ignored");
                false
            }
        }
    }

    /// Views history entry `step`, reporting out-of-range requests.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] without changing state when `step` is not a
    /// valid history index.
    #[instrument(skip(self), fields(from = self.step, len = self.history.len()))]
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!(next = %self.next_player(), "Jumped");
        Ok(())
    }

    /// History navigation handler; out-of-range steps are ignored.
    ///
    /// Returns true if the viewed step changed to `step`.
    pub fn jump_to(&mut self, step: usize) -> bool {
        match self.try_jump_to(step) {
            Ok(()) => true,
            Err(e) => {
                debug!(reason = %e, "Jump ignored");
                false
            }
        }
    }

    /// Flips the move-list order. Game state is untouched.
    #[instrument(skip(self), fields(ascending = self.ascending))]
    pub fn toggle_sort(&mut self) {
        self.ascending = !self.ascending;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
