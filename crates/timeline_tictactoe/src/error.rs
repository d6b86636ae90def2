//! Rejections reported by the session's checked operations.

use crate::Position;

/// Why a click did not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index does not name a board cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The viewed board already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// Why a history jump was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Step {} is outside history of length {}", step, len)]
pub struct JumpError {
    /// Requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}
