//! Command-line interface for rewind.

use clap::Parser;
use rewind_tictactoe::DisplayOrder;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe in the terminal and jump back to any move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Move list order: ASC or DESC
    #[arg(long)]
    pub order: Option<DisplayOrder>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_order_case_insensitively() {
        let cli = Cli::try_parse_from(["rewind", "--order", "desc", "--no-mouse"]).unwrap();
        assert_eq!(cli.order, Some(DisplayOrder::Descending));
        assert!(cli.no_mouse);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_rejects_unknown_order() {
        assert!(Cli::try_parse_from(["rewind", "--order", "sideways"]).is_err());
    }
}
