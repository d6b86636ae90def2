//! Invariants over the move history.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The session checks them in debug builds; tests check them directly.

use crate::{History, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation {
                description: I1::description(),
            });
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation {
                description: I2::description(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: each entry differs from its predecessor by exactly its move.
pub struct SingleCellDelta;

impl Invariant<History> for SingleCellDelta {
    fn holds(history: &History) -> bool {
        let entries = history.entries();
        if entries.first().and_then(|e| *e.last_move()).is_some() {
            return false;
        }
        entries.windows(2).all(|pair| {
            let changed = pair[0].board().diff(pair[1].board());
            match *pair[1].last_move() {
                Some(pos) => changed == [pos] && pair[0].board().is_empty(pos),
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark at its move position"
    }
}

/// Invariant: marks alternate X, O, X, ... along the history.
pub struct AlternatingMarks;

impl Invariant<History> for AlternatingMarks {
    fn holds(history: &History) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| match *entry.last_move() {
                Some(pos) => entry.board().get(pos) == Square::Occupied(Player::for_step(step - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Every history invariant.
pub type HistoryInvariants = (SingleCellDelta, AlternatingMarks);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_fresh_history_holds() {
        assert!(HistoryInvariants::check_all(&History::new()).is_ok());
    }

    #[test]
    fn test_alternating_moves_hold() {
        let mut history = History::new();
        history.push_move(Position::TopLeft, Player::X);
        history.push_move(Position::Center, Player::O);
        history.push_move(Position::TopRight, Player::X);
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_repeated_player_violates() {
        let mut history = History::new();
        history.push_move(Position::TopLeft, Player::X);
        history.push_move(Position::Center, Player::X);

        assert!(SingleCellDelta::holds(&history));
        assert!(!AlternatingMarks::holds(&history));
        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, AlternatingMarks::description());
    }

    #[test]
    fn test_overwriting_a_cell_violates() {
        let mut history = History::new();
        history.push_move(Position::Center, Player::X);
        history.push_move(Position::Center, Player::O);
        assert!(!SingleCellDelta::holds(&history));
    }
}
