//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position as ScreenPosition, Rect};
use rewind_tictactoe::{DisplayOrder, Position};

/// Width of one board cell, borders included.
const CELL_WIDTH: u16 = 7;
/// Height of one board cell, borders included.
const CELL_HEIGHT: u16 = 3;

/// What a screen coordinate lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// A row of the move list, counted from the top as displayed.
    MoveRow(usize),
    /// One of the order toggle options.
    Order(DisplayOrder),
}

/// Rectangles of every interactive and decorative region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// Bordered board pane.
    pub board: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// Bordered history pane.
    pub history: Rect,
    /// Order toggle options.
    pub order_options: [(DisplayOrder, Rect); 2],
    /// Move list rows start at the top of this area, one line each.
    pub moves: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub footer: Rect,
}

impl Regions {
    /// Lays out a frame of the given size.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(13),   // Board and history
                Constraint::Length(3), // Status
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(3 * CELL_WIDTH + 6), Constraint::Min(30)])
            .split(chunks[1]);

        let board = body[0];
        let grid = center_rect(inner(board), 3 * CELL_WIDTH, 3 * CELL_HEIGHT);
        let cells = std::array::from_fn(|index| {
            let (row, column) = (index / 3, index % 3);
            Rect::new(
                grid.x + column as u16 * CELL_WIDTH,
                grid.y + row as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        let history = body[1];
        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Order toggle
                Constraint::Length(1), // Spacer
                Constraint::Min(0),    // Move list
            ])
            .split(inner(history));

        let toggle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Length(17), Constraint::Min(0)])
            .split(panes[0]);

        Self {
            title: chunks[0],
            board,
            cells,
            history,
            order_options: [
                (DisplayOrder::Ascending, toggle[0]),
                (DisplayOrder::Descending, toggle[1]),
            ],
            moves: panes[2],
            status: chunks[2],
            footer: chunks[3],
        }
    }

    /// First move-list row drawn when `anchor` must stay on screen.
    ///
    /// Scrolls only as far as needed to bring `anchor` into the last
    /// visible line, so short lists are never scrolled.
    pub fn moves_offset(&self, move_count: usize, anchor: usize) -> usize {
        let visible = usize::from(self.moves.height).max(1);
        anchor
            .min(move_count.saturating_sub(1))
            .saturating_sub(visible - 1)
    }

    /// Finds the interactive region under `(column, row)`.
    ///
    /// Move rows are counted from `offset`, the first row drawn; rows
    /// beyond `move_count` do not hit.
    pub fn hit(&self, column: u16, row: u16, move_count: usize, offset: usize) -> Option<Hit> {
        let point = ScreenPosition::new(column, row);

        if let Some(index) = self.cells.iter().position(|cell| cell.contains(point)) {
            return Position::from_index(index).map(Hit::Cell);
        }

        if let Some((order, _)) = self
            .order_options
            .iter()
            .find(|(_, rect)| rect.contains(point))
        {
            return Some(Hit::Order(*order));
        }

        if self.moves.contains(point) {
            let index = offset + usize::from(row - self.moves.y);
            return (index < move_count).then_some(Hit::MoveRow(index));
        }

        None
    }
}

/// Area inside a one-cell border.
fn inner(area: Rect) -> Rect {
    area.inner(ratatui::layout::Margin::new(1, 1))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
