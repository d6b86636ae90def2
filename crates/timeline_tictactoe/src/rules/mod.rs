//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the session so the view and the controller evaluate boards the same way.

pub mod win;

pub use win::{LINES, Outcome, calculate_winner};
