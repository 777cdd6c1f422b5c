//! Tests for loading the TOML game configuration.

use std::io::Write;
use std::time::Duration;
use unbeatable_tictactoe::{GameConfig, Symbol};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "think_delay_ms = 250\nhuman_symbol = \"O\"\nlog_file = \"game.log\""
    )
    .expect("write config");

    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.think_delay(), Duration::from_millis(250));
    assert_eq!(*config.human_symbol(), Symbol::O);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_malformed_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "think_delay_ms = \"soon\"").expect("write config");

    let err = GameConfig::from_file(file.path()).expect_err("bad value");
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    assert!(GameConfig::from_file(&path).is_err());
    assert_eq!(
        GameConfig::load_or_default(&path).expect("defaults"),
        GameConfig::default()
    );
}
