//! Raw-mode terminal session management.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use tracing::{debug, info, warn};

/// Guard for terminal modes entered by the TUI. Restores them on drop.
///
/// Only the steps that succeeded are undone, so a failure half way
/// through [`TerminalGuard::enter`] still leaves the terminal usable.
#[derive(Debug, Default)]
pub struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
    mouse_capture: bool,
}

impl TerminalGuard {
    /// Enables raw mode, the alternate screen and optionally mouse capture.
    ///
    /// Also installs a panic hook that restores the terminal before the
    /// panic message is printed.
    pub fn enter(mouse: bool) -> Result<Self> {
        install_panic_hook();

        let mut guard = Self::default();
        enable_raw_mode().context("Failed to enable raw mode")?;
        guard.raw_mode = true;

        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        guard.alternate_screen = true;

        if mouse {
            execute!(io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
            guard.mouse_capture = true;
        }

        debug!(?guard, "Terminal prepared");
        Ok(guard)
    }

    /// Whether any terminal mode is still held.
    pub fn is_active(&self) -> bool {
        self.raw_mode || self.alternate_screen || self.mouse_capture
    }

    /// Undoes every mode entered so far, in reverse order.
    ///
    /// Calling it again is a no-op.
    pub fn restore(&mut self) -> Result<()> {
        if self.mouse_capture {
            self.mouse_capture = false;
            execute!(io::stdout(), DisableMouseCapture).context("Failed to disable mouse capture")?;
        }
        if self.alternate_screen {
            self.alternate_screen = false;
            execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
        }
        if self.raw_mode {
            self.raw_mode = false;
            disable_raw_mode().context("Failed to disable raw mode")?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.is_active() {
            info!("Restoring terminal");
            if let Err(err) = self.restore() {
                warn!(error = ?err, "Terminal restore failed");
            }
        }
    }
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        previous(panic_info);
    }));
}
