//! Game configuration loaded from TOML.

use crate::tictactoe::Symbol;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Delay before the AI's move is applied, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Symbol the human plays. The AI takes the other one.
    #[serde(default = "default_human_symbol")]
    human_symbol: Symbol,

    /// File the interactive UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_think_delay_ms() -> u64 {
    1000
}

fn default_human_symbol() -> Symbol {
    Symbol::X
}

fn default_log_file() -> PathBuf {
    PathBuf::from("unbeatable.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
            human_symbol: default_human_symbol(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human_symbol, think_ms = config.think_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Symbol the AI plays.
    pub fn ai_symbol(&self) -> Symbol {
        self.human_symbol.opponent()
    }

    /// The AI's thinking delay.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Overrides the thinking delay.
    pub fn with_think_delay_ms(mut self, ms: u64) -> Self {
        self.think_delay_ms = ms;
        self
    }

    /// Overrides the human's symbol.
    pub fn with_human_symbol(mut self, symbol: Symbol) -> Self {
        self.human_symbol = symbol;
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
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.think_delay_ms(), 1000);
        assert_eq!(*config.human_symbol(), Symbol::X);
        assert_eq!(config.ai_symbol(), Symbol::O);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("human_symbol = \"O\"").unwrap();
        assert_eq!(config.ai_symbol(), Symbol::X);
        assert_eq!(config.think_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<GameConfig>("difficulty = 3").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default()
            .with_think_delay_ms(0)
            .with_human_symbol(Symbol::O);
        assert_eq!(config.think_delay(), Duration::ZERO);
        assert_eq!(config.ai_symbol(), Symbol::X);
    }
}
