//! Frontend configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::DisplayOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "rewind.toml";

/// Configuration for the terminal frontend.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Initial move-list order.
    #[serde(default)]
    display_order: DisplayOrder,

    /// File receiving tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Whether to capture mouse clicks.
    #[serde(default = "default_mouse")]
    mouse: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_mouse() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            display_order: DisplayOrder::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            mouse: default_mouse(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Runs before logging is installed, so failures are reported only
    /// through the returned error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the config named on the command line, falling back to
    /// [`DEFAULT_CONFIG_PATH`] when present and defaults otherwise.
    ///
    /// An explicitly named file must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Loads the config and applies command-line overrides.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self::load(cli.config.as_deref())?.with_overrides(cli))
    }

    /// Command-line flags take precedence over file values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(order) = cli.order {
            self.display_order = order;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.no_mouse {
            self.mouse = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
