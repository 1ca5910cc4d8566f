//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 snapshots of [`Mark`]s
//! - **Rules**: pure winner evaluation over the 8 winning lines
//! - **History**: [`GameHistory`] owns the snapshot sequence and a cursor;
//!   moves append (or branch), jumps move the cursor
//! - **View**: [`GameView`] derives status text and the move list for a frontend
//! - **Invariants**: checkable properties the history maintains
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{DisplayOrder, GameHistory};
//!
//! let mut history = GameHistory::new();
//! history.apply_move(4);
//! history.apply_move(0);
//! history.jump_to(1);
//! history.set_display_order(DisplayOrder::Descending);
//!
//! let view = history.current_view();
//! assert_eq!(view.status_text(), "Next player: O");
//! assert_eq!(view.move_labels()[0], "Goto move 2 [x=1, y=1]");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

pub use history::{DisplayOrder, GameHistory, HistoryEntry, MoveOutcome, MoveRejection};
pub use invariants::{
    CursorInBounds, EmptyRoot, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleCellSteps,
};
pub use position::Position;
pub use rules::{evaluate_winner, winning_line, LINES};
pub use types::{Board, Cell, Mark};
pub use view::{GameView, MoveDescriptor, Status};
