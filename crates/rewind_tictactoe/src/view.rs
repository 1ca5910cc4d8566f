//! Derived, render-ready view of a game history.

use super::history::{DisplayOrder, GameHistory};
use super::{rules, Board, Mark, Position};
use derive_getters::Getters;

/// Status line for the displayed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// The displayed board has a completed line.
    #[display("Winner: {_0}")]
    Winner(Mark),
    /// Play continues with this mark.
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
}

/// One clickable row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescriptor {
    step: usize,
    position: Option<Position>,
}

impl MoveDescriptor {
    /// Step this row jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Position played to reach the step.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Text shown for the row.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) if self.step > 0 => {
                let (x, y) = pos.coordinates();
                write!(f, "Goto move {} [x={x}, y={y}]", self.step)
            }
            _ => f.write_str("Goto start"),
        }
    }
}

/// Everything a frontend needs to draw the displayed step.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    /// Board at the cursor.
    board: Board,
    /// Winner or next player.
    status: Status,
    /// Move list in display order.
    moves: Vec<MoveDescriptor>,
    /// Cell highlighted after an explicit jump.
    selected: Option<Position>,
    /// Completed line on the board, if any.
    winning_line: Option<[Position; 3]>,
    /// Step currently displayed.
    cursor: usize,
    /// Order `moves` is in.
    order: DisplayOrder,
}

impl GameView {
    pub(crate) fn from_history(history: &GameHistory) -> Self {
        let board = *history.current().board();
        let status = match board.winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(history.to_move()),
        };

        let mut moves: Vec<_> = history
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveDescriptor {
                step,
                position: entry.last_played(),
            })
            .collect();
        if history.display_order() == DisplayOrder::Descending {
            moves.reverse();
        }

        Self {
            board,
            status,
            moves,
            selected: history.selected(),
            winning_line: rules::winning_line(&board),
            cursor: history.cursor(),
            order: history.display_order(),
        }
    }

    /// Status line text, e.g. `"Next player: O"`.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Move-list labels in display order.
    pub fn move_labels(&self) -> Vec<String> {
        self.moves.iter().map(MoveDescriptor::label).collect()
    }
}
