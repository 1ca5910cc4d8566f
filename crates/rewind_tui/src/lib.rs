//! Terminal frontend for rewind.
//!
//! Renders a [`rewind_tictactoe::GameHistory`] with ratatui and routes
//! key presses and mouse clicks into it.
//!
//! # Architecture
//!
//! - **Cli / Config**: command-line flags layered over an optional TOML file
//! - **App**: frontend state (focus, board cursor, selected history row)
//! - **Input**: key events to [`Action`]s
//! - **Layout**: screen geometry shared by rendering and mouse hit-testing
//! - **Ui**: stateless drawing of an [`App`]
//! - **Terminal**: raw-mode session restored on drop and on panic

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod layout;
mod logging;
mod terminal;
mod ui;

pub use app::{Action, App, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig, DEFAULT_CONFIG_PATH};
pub use input::{action_for_key, move_cursor, Direction};
pub use layout::{Hit, Regions};
pub use logging::init_logging;
pub use terminal::TerminalGuard;
pub use ui::draw;
