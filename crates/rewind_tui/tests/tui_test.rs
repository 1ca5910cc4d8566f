//! Tests for the terminal frontend: rendering, mouse input and config files.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use rewind_tictactoe::{Cell, DisplayOrder, Mark, Position};
use rewind_tui::{draw, Action, App, Cli, Regions, TuiConfig};
use std::io::Write;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 24;

fn area() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

fn render(app: &App) -> String {
    render_at(app, WIDTH, HEIGHT)
}

fn render_at(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn click(app: &mut App, column: u16, row: u16) {
    click_at(app, column, row, area());
}

fn click_at(app: &mut App, column: u16, row: u16, area: Rect) {
    let event = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(event, area);
}

fn click_cell(app: &mut App, pos: Position) {
    let cell = Regions::new(area()).cells[pos.index()];
    click(app, cell.x + cell.width / 2, cell.y + 1);
}

#[test]
fn test_renders_status_and_move_list() {
    let mut app = App::default();
    app.apply(Action::Play(Position::MiddleRight));

    let screen = render(&app);
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("Goto start"));
    assert!(screen.contains("> Goto move 1 [x=3, y=2]"));
    assert!(screen.contains("(*) Ascending"));
}

#[test]
fn test_renders_winner() {
    let mut app = App::default();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        app.apply(Action::Play(pos));
    }

    assert!(render(&app).contains("Winner: X"));
}

#[test]
fn test_clicking_cells_plays_moves() {
    let mut app = App::default();
    click_cell(&mut app, Position::Center);
    click_cell(&mut app, Position::BottomLeft);
    click_cell(&mut app, Position::Center);

    let board = *app.view().board();
    assert_eq!(app.history().step_count(), 3);
    assert_eq!(board.get(Position::Center), Cell::Occupied(Mark::X));
    assert_eq!(board.get(Position::BottomLeft), Cell::Occupied(Mark::O));
}

#[test]
fn test_clicking_move_row_jumps() {
    let mut app = App::default();
    click_cell(&mut app, Position::Center);
    click_cell(&mut app, Position::TopLeft);

    let moves = Regions::new(area()).moves;
    click(&mut app, moves.x + 3, moves.y + 1);

    assert_eq!(app.history().cursor(), 1);
    assert_eq!(app.history().step_count(), 3);
    assert_eq!(*app.view().selected(), Some(Position::Center));
}

#[test]
fn test_clicking_order_option_reverses_list() {
    let mut app = App::default();
    click_cell(&mut app, Position::Center);

    let (order, rect) = Regions::new(area()).order_options[1];
    assert_eq!(order, DisplayOrder::Descending);
    click(&mut app, rect.x + 1, rect.y);

    assert_eq!(app.history().display_order(), DisplayOrder::Descending);
    let labels = app.view().move_labels();
    assert_eq!(labels, vec!["Goto move 1 [x=2, y=2]", "Goto start"]);

    // The second displayed row is now the start.
    let moves = Regions::new(area()).moves;
    click(&mut app, moves.x + 3, moves.y + 1);
    assert_eq!(app.history().cursor(), 0);
}

/// Nine moves ending in a draw: ten history entries.
fn full_game() -> App {
    let mut app = App::default();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        app.apply(Action::Play(Position::from_index(index).unwrap()));
    }
    app
}

#[test]
fn test_short_terminal_scrolls_to_current_move() {
    let short = Rect::new(0, 0, 80, 20);
    let mut app = full_game();
    assert_eq!(app.history().step_count(), 10);

    let screen = render_at(&app, short.width, short.height);
    assert!(screen.contains("> Goto move 9 [x=3, y=3]"));
    assert!(screen.contains("Goto move 8"));
    assert!(!screen.contains("Goto start"));

    // The top visible row is step 1 once the list has scrolled by one.
    let moves = Regions::new(short).moves;
    click_at(&mut app, moves.x + 3, moves.y, short);
    assert_eq!(app.history().cursor(), 1);
    assert_eq!(app.history().step_count(), 10);

    let screen = render_at(&app, short.width, short.height);
    assert!(screen.contains("Goto start"));
    assert!(screen.contains("> Goto move 1 [x=1, y=1]"));
}

#[test]
fn test_short_terminal_keeps_selected_row_visible() {
    let short = Rect::new(0, 0, 80, 20);
    let mut app = full_game();
    app.apply(Action::SetOrder(DisplayOrder::Descending));

    // Newest first: the current step is row 0 and the start is off screen.
    let screen = render_at(&app, short.width, short.height);
    assert!(screen.contains("> Goto move 9 [x=3, y=3]"));
    assert!(!screen.contains("Goto start"));

    app.apply(Action::SwitchFocus);
    for _ in 0..9 {
        app.apply(Action::SelectNextRow);
    }
    assert_eq!(app.selected_row(), 9);
    assert!(render_at(&app, short.width, short.height).contains("Goto start"));

    app.apply(Action::JumpToSelectedRow);
    assert_eq!(app.history().cursor(), 0);
}

#[test]
fn test_keyboard_session() {
    let mut app = App::default();
    let press = |app: &mut App, code| app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('d'));

    assert_eq!(app.history().cursor(), 1);
    assert_eq!(app.history().display_order(), DisplayOrder::Descending);
    assert!(render(&app).contains("(*) Descending"));

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_config_file_with_cli_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "display_order = \"DESC\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        no_mouse: true,
        ..Cli::default()
    };
    let config = TuiConfig::resolve(&cli).unwrap();

    assert_eq!(*config.display_order(), DisplayOrder::Descending);
    assert_eq!(config.log_filter(), "debug");
    assert!(!config.mouse());
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "display_order = \"sideways\"").unwrap();

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
