//! Keyboard input mapping.

use crate::app::{Action, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_tictactoe::{DisplayOrder, Position};

/// Arrow-key direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match direction {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => (row + 1, column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, column + 1),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}

/// Maps a key press to an action given which pane has focus.
pub fn action_for_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match (key.code, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Tab | KeyCode::BackTab, _) => Action::SwitchFocus,
        (KeyCode::Char('r'), _) => Action::Reset,
        (KeyCode::Char('a'), _) => Action::SetOrder(DisplayOrder::Ascending),
        (KeyCode::Char('d'), _) => Action::SetOrder(DisplayOrder::Descending),
        (KeyCode::Char('o'), _) => Action::ToggleOrder,
        (KeyCode::Char(c @ '1'..='9'), _) => {
            let index = c.to_digit(10)? as usize - 1;
            Action::Play(Position::from_index(index)?)
        }

        (KeyCode::Up, Focus::Board) => Action::MoveCursor(Direction::Up),
        (KeyCode::Down, Focus::Board) => Action::MoveCursor(Direction::Down),
        (KeyCode::Left, Focus::Board) => Action::MoveCursor(Direction::Left),
        (KeyCode::Right, Focus::Board) => Action::MoveCursor(Direction::Right),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Action::PlayAtCursor,

        (KeyCode::Up, Focus::History) => Action::SelectPreviousRow,
        (KeyCode::Down, Focus::History) => Action::SelectNextRow,
        (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => Action::JumpToSelectedRow,

        _ => return None,
    };
    Some(action)
}
