//! Rewind - tic-tac-toe with time travel in the terminal.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use rewind_tui::{draw, init_logging, App, Cli, TerminalGuard, TuiConfig};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::resolve(&cli)?;
    init_logging(&config)?;

    info!(
        config_file = ?cli.config,
        order = %config.display_order(),
        mouse = config.mouse(),
        log_filter = %config.log_filter(),
        "Starting rewind"
    );

    let mut guard = TerminalGuard::enter(*config.mouse())?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| {
            let res = run_app(&mut terminal, App::new(*config.display_order()));
            terminal.show_cursor()?;
            res
        });
    guard.restore()?;

    if let Err(err) = &res {
        error!(error = ?err, "Application error");
    }
    info!("Exiting rewind");
    res
}

/// Draws, waits for one event, applies it; until the user quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        let area = terminal.draw(|frame| draw(frame, &app))?.area;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            _ => {}
        }
    }

    Ok(())
}
