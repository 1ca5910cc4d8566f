//! Application state and logic.

use crate::input::{self, Direction};
use crate::layout::{Hit, Regions};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use rewind_tictactoe::{DisplayOrder, GameHistory, GameView, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Pane receiving arrow keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play a specific cell.
    Play(Position),
    /// Play the cell under the board cursor.
    PlayAtCursor,
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Switch focus between board and history.
    SwitchFocus,
    /// Highlight the move-list row above.
    SelectPreviousRow,
    /// Highlight the move-list row below.
    SelectNextRow,
    /// Jump to the highlighted move-list row.
    JumpToSelectedRow,
    /// Jump to a history step.
    JumpTo(usize),
    /// Set the move-list order.
    SetOrder(DisplayOrder),
    /// Flip the move-list order.
    ToggleOrder,
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    history: GameHistory,
    board_cursor: Position,
    focus: Focus,
    /// Highlighted move-list row, as displayed.
    selected_row: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application presenting moves in `order`.
    pub fn new(order: DisplayOrder) -> Self {
        Self {
            history: GameHistory::with_display_order(order),
            board_cursor: Position::Center,
            focus: Focus::Board,
            selected_row: 0,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// View of the displayed step.
    pub fn view(&self) -> GameView {
        self.history.current_view()
    }

    /// Cell under the keyboard cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Pane receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list row.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::action_for_key(key, self.focus) {
            self.apply(action);
        }
    }

    /// Handles a mouse event on a frame of size `area`.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let view = self.view();
        let regions = Regions::new(area);
        let move_count = view.moves().len();
        let offset = regions.moves_offset(move_count, self.selected_row);
        let hit = regions.hit(event.column, event.row, move_count, offset);
        debug!(?hit, column = event.column, row = event.row, "Mouse click");

        let action = match hit {
            Some(Hit::Cell(pos)) => Action::Play(pos),
            Some(Hit::MoveRow(row)) => {
                self.focus = Focus::History;
                self.selected_row = row;
                Action::JumpTo(view.moves()[row].step())
            }
            Some(Hit::Order(order)) => Action::SetOrder(order),
            None => return,
        };
        self.apply(action);
    }

    /// Applies an action to the game and frontend state.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(pos) => self.play(pos),
            Action::PlayAtCursor => self.play(self.board_cursor),
            Action::MoveCursor(direction) => {
                self.board_cursor = input::move_cursor(self.board_cursor, direction);
            }
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected_row = self.row_of_step(self.history.cursor());
            }
            Action::SelectPreviousRow => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            Action::SelectNextRow => {
                let last = self.history.step_count() - 1;
                self.selected_row = (self.selected_row + 1).min(last);
            }
            Action::JumpToSelectedRow => {
                let step = self.step_of_row(self.selected_row);
                self.jump_to(step);
            }
            Action::JumpTo(step) => self.jump_to(step),
            Action::SetOrder(order) => self.set_order(order),
            Action::ToggleOrder => self.set_order(self.history.display_order().toggled()),
            Action::Reset => {
                info!("Restarting game");
                self.history.reset();
                self.board_cursor = Position::Center;
                self.selected_row = 0;
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        self.board_cursor = pos;
        match self.history.play(pos) {
            MoveOutcome::Placed { mark, position, step } => {
                info!(%mark, %position, step, "Move played");
                self.selected_row = self.row_of_step(step);
            }
            MoveOutcome::Ignored(reason) => debug!(%reason, "Move ignored"),
        }
    }

    fn jump_to(&mut self, step: usize) {
        if self.history.jump_to(step) {
            info!(step, "Jumped to step");
            self.selected_row = self.row_of_step(step);
        }
    }

    fn set_order(&mut self, order: DisplayOrder) {
        let step = self.step_of_row(self.selected_row);
        self.history.set_display_order(order);
        self.selected_row = self.row_of_step(step);
        debug!(%order, "Display order changed");
    }

    /// Displayed row showing `step`.
    fn row_of_step(&self, step: usize) -> usize {
        match self.history.display_order() {
            DisplayOrder::Ascending => step,
            DisplayOrder::Descending => self.history.step_count() - 1 - step,
        }
    }

    /// Step shown on displayed `row`; the mapping is its own inverse.
    fn step_of_row(&self, row: usize) -> usize {
        self.row_of_step(row)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DisplayOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Cell, Mark};

    fn app_after(moves: &[Position]) -> App {
        let mut app = App::default();
        for &pos in moves {
            app.apply(Action::Play(pos));
        }
        app
    }

    #[test]
    fn test_play_at_cursor_after_moving() {
        let mut app = App::default();
        app.apply(Action::MoveCursor(Direction::Up));
        app.apply(Action::MoveCursor(Direction::Left));
        app.apply(Action::PlayAtCursor);

        let view = app.view();
        assert_eq!(view.board().get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(view.status_text(), "Next player: O");
    }

    #[test]
    fn test_history_selection_jumps() {
        let mut app = app_after(&[Position::Center, Position::TopLeft, Position::BottomRight]);
        app.apply(Action::SwitchFocus);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected_row(), 3);

        app.apply(Action::SelectPreviousRow);
        app.apply(Action::SelectPreviousRow);
        app.apply(Action::JumpToSelectedRow);

        assert_eq!(app.history().cursor(), 1);
        assert_eq!(app.history().step_count(), 4);
        assert_eq!(*app.view().selected(), Some(Position::Center));
    }

    #[test]
    fn test_order_change_keeps_selected_step() {
        let mut app = app_after(&[Position::Center, Position::TopLeft]);
        app.apply(Action::SwitchFocus);
        app.apply(Action::SelectPreviousRow);
        assert_eq!(app.selected_row(), 1);

        app.apply(Action::SetOrder(DisplayOrder::Descending));
        // Step 1 of 0..=2 sits in the middle either way.
        assert_eq!(app.selected_row(), 1);

        app.apply(Action::SelectPreviousRow);
        app.apply(Action::JumpToSelectedRow);
        assert_eq!(app.history().cursor(), 2);
    }

    #[test]
    fn test_select_next_row_stops_at_end() {
        let mut app = app_after(&[Position::Center]);
        app.apply(Action::SwitchFocus);
        for _ in 0..5 {
            app.apply(Action::SelectNextRow);
        }
        assert_eq!(app.selected_row(), 1);
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = app_after(&[Position::Center, Position::TopLeft]);
        app.apply(Action::ToggleOrder);
        app.apply(Action::Reset);
        assert_eq!(app.history().step_count(), 1);
        assert_eq!(app.history().display_order(), DisplayOrder::Descending);
        assert!(!app.should_quit());

        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
