//! Step invariant: each entry adds exactly one alternating mark.

use super::Invariant;
use crate::{Cell, GameHistory, Mark};

/// Invariant: entry `p` differs from entry `p - 1` in exactly one cell.
///
/// The changed cell is the entry's last-played position, went from
/// empty to X on odd steps and to O on even steps, and entry `p`
/// holds exactly `p` marks.
pub struct SingleCellSteps;

impl Invariant<GameHistory> for SingleCellSteps {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries
            .windows(2)
            .enumerate()
            .all(|(index, pair)| {
                let [prev, next] = pair else {
                    return false;
                };
                let step = index + 1;
                let Some(pos) = next.last_played() else {
                    return false;
                };
                prev.board().diff(next.board()) == [pos]
                    && prev.board().get(pos) == Cell::Empty
                    && next.board().get(pos) == Cell::Occupied(Mark::to_move_at(step - 1))
                    && next.board().occupied_count() == step
            })
    }

    fn description() -> &'static str {
        "Each step places one alternating mark on an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_full_game_holds() {
        let mut history = GameHistory::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            history.apply_move(index);
        }
        assert_eq!(history.step_count(), 10);
        assert!(SingleCellSteps::holds(&history));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut history = GameHistory::new();
        history.apply_move(4);
        history.entries[1].board = history.entries[0].board.with_mark(Position::Center, Mark::O);
        assert!(!SingleCellSteps::holds(&history));
    }

    #[test]
    fn test_skipped_cell_violates() {
        let mut history = GameHistory::new();
        history.apply_move(4);
        history.entries[1].board = history.entries[1].board.with_mark(Position::TopLeft, Mark::O);
        assert!(!SingleCellSteps::holds(&history));
    }

    #[test]
    fn test_missing_last_played_violates() {
        let mut history = GameHistory::new();
        history.apply_move(4);
        history.entries[1].last_played = None;
        assert!(!SingleCellSteps::holds(&history));
    }
}
