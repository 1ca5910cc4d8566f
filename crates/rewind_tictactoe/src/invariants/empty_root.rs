//! Root invariant: history starts from the empty board.

use super::Invariant;
use crate::{GameHistory, HistoryEntry};

/// Invariant: entry 0 is the empty board with no move played.
pub struct EmptyRoot;

impl Invariant<GameHistory> for EmptyRoot {
    fn holds(history: &GameHistory) -> bool {
        history.entries.first() == Some(&HistoryEntry::start())
    }

    fn description() -> &'static str {
        "First history entry is the empty board"
    }
}
