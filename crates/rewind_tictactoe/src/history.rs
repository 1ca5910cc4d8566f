//! Time-travel move history for tic-tac-toe.
//!
//! [`GameHistory`] owns an ordered sequence of immutable board snapshots
//! and a cursor into it. Playing a move after travelling back discards
//! every later snapshot and starts a new branch from the cursor.

use super::invariants::{HistoryInvariants, InvariantSet};
use super::view::GameView;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One snapshot in the history: a board and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) last_played: Option<Position>,
}

impl HistoryEntry {
    /// The initial entry: empty board, no move played.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_played: None,
        }
    }

    /// Board as it stood at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position played to reach this step, `None` for the start.
    pub fn last_played(&self) -> Option<Position> {
        self.last_played
    }
}

/// Order in which the move list is presented.
///
/// Only affects presentation, never the canonical sequence.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum DisplayOrder {
    /// Oldest move first.
    #[default]
    #[serde(rename = "ASC", alias = "asc", alias = "ascending")]
    #[strum(to_string = "ASC", serialize = "ascending")]
    Ascending,
    /// Newest move first.
    #[serde(rename = "DESC", alias = "desc", alias = "descending")]
    #[strum(to_string = "DESC", serialize = "descending")]
    Descending,
}

impl DisplayOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            DisplayOrder::Ascending => DisplayOrder::Descending,
            DisplayOrder::Descending => DisplayOrder::Ascending,
        }
    }

    /// Human-readable label for toggle controls.
    pub fn label(self) -> &'static str {
        match self {
            DisplayOrder::Ascending => "Ascending",
            DisplayOrder::Descending => "Descending",
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The index does not name a cell.
    #[display("cell index {_0} is outside the board")]
    OutOfRange(usize),
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The displayed board already has a winner.
    #[display("game already won by {_0}")]
    GameOver(Mark),
}

/// Result of offering a move to the history.
///
/// Rejections are silent no-ops; the outcome only tells the caller
/// what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was placed and a new step appended.
    #[display("{mark} played {position} (step {step})")]
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Step the new snapshot occupies.
        step: usize,
    },
    /// Nothing changed.
    #[display("move ignored: {_0}")]
    Ignored(MoveRejection),
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Canonical game history with a time-travel cursor.
///
/// Invariants:
/// - the cursor always indexes an existing entry
/// - entry 0 is the empty board with no move
/// - entry `p` differs from entry `p - 1` in exactly one cell,
///   marks alternating from X at `p = 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(crate) entries: Vec<HistoryEntry>,
    pub(crate) cursor: usize,
    order: DisplayOrder,
    /// Set by `jump_to`, cleared by a played move. Presentation only.
    jumped: bool,
}

impl GameHistory {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_display_order(DisplayOrder::default())
    }

    /// Creates a fresh history presenting moves in `order`.
    #[instrument]
    pub fn with_display_order(order: DisplayOrder) -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
            cursor: 0,
            order,
            jumped: false,
        }
    }

    /// All snapshots in canonical (ascending) order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of snapshots, including the starting board.
    pub fn step_count(&self) -> usize {
        self.entries.len()
    }

    /// Step currently displayed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Mark that moves next from the displayed step.
    pub fn to_move(&self) -> Mark {
        Mark::to_move_at(self.cursor)
    }

    /// Winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.current().board().winner()
    }

    /// Current move-list order.
    pub fn display_order(&self) -> DisplayOrder {
        self.order
    }

    /// Cell to highlight: the move that produced the displayed step,
    /// but only when the step was reached by an explicit jump.
    pub fn selected(&self) -> Option<Position> {
        if self.jumped {
            self.current().last_played()
        } else {
            None
        }
    }

    /// Plays the cell at `index` (0-8) for whoever is to move.
    ///
    /// Out-of-range indices, occupied cells and won boards leave the
    /// history untouched.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.play(position),
            None => {
                let outcome = MoveOutcome::Ignored(MoveRejection::OutOfRange(index));
                debug!(%outcome, "Rejected move");
                outcome
            }
        }
    }

    /// Plays `position` for whoever is to move.
    ///
    /// Entries after the cursor are discarded before the new snapshot
    /// is appended.
    #[instrument(skip(self), fields(cursor = self.cursor, to_move = %self.to_move()))]
    pub fn play(&mut self, position: Position) -> MoveOutcome {
        let current = *self.current();

        if let Some(winner) = current.board().winner() {
            let outcome = MoveOutcome::Ignored(MoveRejection::GameOver(winner));
            debug!(%outcome, "Rejected move");
            return outcome;
        }

        if !current.board().is_empty(position) {
            let outcome = MoveOutcome::Ignored(MoveRejection::Occupied(position));
            debug!(%outcome, "Rejected move");
            return outcome;
        }

        let mark = self.to_move();
        let discarded = self.entries.len() - (self.cursor + 1);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            board: current.board().with_mark(position, mark),
            last_played: Some(position),
        });
        self.cursor = self.entries.len() - 1;
        self.jumped = false;

        debug!(%mark, %position, step = self.cursor, discarded, "Move applied");
        self.debug_check_invariants();

        MoveOutcome::Placed {
            mark,
            position,
            step: self.cursor,
        }
    }

    /// Moves the cursor to `step` without altering the sequence.
    ///
    /// Returns false (and does nothing) if `step` does not exist.
    #[instrument(skip(self), fields(cursor = self.cursor, steps = self.entries.len()))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.entries.len() {
            debug!("Ignoring jump past the end of history");
            return false;
        }
        self.cursor = step;
        self.jumped = true;
        debug!("Jumped");
        true
    }

    /// Sets the move-list order.
    #[instrument(skip(self))]
    pub fn set_display_order(&mut self, order: DisplayOrder) {
        self.order = order;
    }

    /// Flips the move-list order and returns the new one.
    pub fn toggle_display_order(&mut self) -> DisplayOrder {
        self.set_display_order(self.order.toggled());
        self.order
    }

    /// Starts over from the empty board, keeping the display order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_display_order(self.order);
    }

    /// Derives everything a frontend needs to draw the displayed step.
    pub fn current_view(&self) -> GameView {
        GameView::from_history(self)
    }

    fn debug_check_invariants(&self) {
        debug_assert_eq!(
            <HistoryInvariants as InvariantSet<GameHistory>>::check_all(self),
            Ok(()),
            "history invariants violated"
        );
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
