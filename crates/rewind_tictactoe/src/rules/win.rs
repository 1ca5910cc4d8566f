//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The 8 winning triples, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line on the board.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.get(a);
        cell != Cell::Empty && cell == board.get(b) && cell == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if three equal marks share a line,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[first, _, _]| board.get(first).mark())
}
