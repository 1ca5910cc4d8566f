//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage and history so they can be reused by invariants and views.

mod win;

pub use win::{evaluate_winner, winning_line, LINES};
