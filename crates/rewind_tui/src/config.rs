//! Front-end configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::MoveOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Initial move-list order.
    #[serde(default)]
    move_order: MoveOrder,

    /// File that receives log output while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Whether move-list entries show `(X: row, col)`.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tui.log")
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            move_order: MoveOrder::default(),
            log_file: default_log_file(),
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(move_order = config.move_order.label(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the initial move-list order.
    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TuiConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, TuiConfig::default());
        assert_eq!(*config.move_order(), MoveOrder::Ascending);
        assert!(*config.show_coordinates());
    }

    #[test]
    fn test_full_file() {
        let config = TuiConfig::from_toml(
            r#"
            move_order = "descending"
            log_file = "/tmp/rewind.log"
            show_coordinates = false
            "#,
        )
        .expect("valid config");
        assert_eq!(*config.move_order(), MoveOrder::Descending);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind.log"));
        assert!(!*config.show_coordinates());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = TuiConfig::from_toml("board_size = 4").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_bad_order_rejected() {
        assert!(TuiConfig::from_toml("move_order = \"sideways\"").is_err());
    }

    #[test]
    fn test_missing_file_reports_location() {
        let err = TuiConfig::from_file("/nonexistent/rewind.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_cli_override() {
        let config = TuiConfig::default().with_move_order(MoveOrder::Descending);
        assert_eq!(*config.move_order(), MoveOrder::Descending);
    }
}
