//! Tic-tac-toe with a branching move history.
//!
//! A [`GameSession`] owns the history of board snapshots, the viewed step and
//! the move-list ordering. Clicking a cell plays the next mark from the
//! viewed step, dropping any later entries; jumping only moves the view.
//! [`GameView`] derives everything a frontend draws from a session.
//!
//! ```
//! use timeline_tictactoe::{GameSession, GameView, Status, Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     session.handle_click(cell);
//! }
//! let view = GameView::new(&session);
//! assert_eq!(*view.status(), Status::Winner(Player::X));
//! assert_eq!(view.winning_line(), Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

pub use error::{JumpError, MoveError};
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::{LINES, Outcome, calculate_winner};
pub use session::GameSession;
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, MoveItem, Status};
