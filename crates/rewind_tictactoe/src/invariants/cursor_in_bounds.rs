//! Cursor invariant: the cursor always names an existing entry.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `0 <= cursor < entries.len()`.
pub struct CursorInBounds;

impl Invariant<GameHistory> for CursorInBounds {
    fn holds(history: &GameHistory) -> bool {
        history.cursor < history.entries.len()
    }

    fn description() -> &'static str {
        "Cursor indexes an existing history entry"
    }
}
