//! Tests for config loading and command-line overrides.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use strictly_guess::DigitChoice;
use strictly_guess_tui::{Cli, Command, GuessConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_defaults_when_file_missing() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = GuessConfig::load(dir.path().join("missing.toml")).expect("Defaults");

    assert_eq!(config, GuessConfig::new());
    assert_eq!(*config.digits(), DigitChoice::DEFAULT);
    assert_eq!(*config.seed(), None);
    assert_eq!(config.log_file(), &PathBuf::from("strictly_guess.log"));
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
digits = 7
seed = 99
log_file = "/tmp/guess.log"
"#,
    );
    let config = GuessConfig::load(file.path()).expect("Valid config");

    assert_eq!(config.digits().get(), 7);
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/guess.log"));
}

#[test]
fn test_partial_file_uses_field_defaults() {
    let file = write_config("seed = 5\n");
    let config = GuessConfig::from_file(file.path()).expect("Valid config");

    assert_eq!(*config.digits(), DigitChoice::DEFAULT);
    assert_eq!(*config.seed(), Some(5));
}

#[test]
fn test_out_of_range_digits_rejected() {
    let file = write_config("digits = 12\n");
    let err = GuessConfig::from_file(file.path()).expect_err("Digits out of range");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_malformed_file_rejected() {
    let file = write_config("digits = [\n");
    assert!(GuessConfig::from_file(file.path()).is_err());
}

#[test]
fn test_overrides_take_precedence() {
    let file = write_config("digits = 5\nseed = 1\n");
    let config = GuessConfig::from_file(file.path())
        .and_then(|config| config.with_overrides(Some(9), Some(2)))
        .expect("Valid overrides");

    assert_eq!(config.digits().get(), 9);
    assert_eq!(*config.seed(), Some(2));

    let untouched = GuessConfig::new()
        .with_overrides(None, None)
        .expect("No overrides");
    assert_eq!(untouched, GuessConfig::new());

    assert!(GuessConfig::new().with_overrides(Some(3), None).is_err());
}

#[test]
fn test_toml_round_trip() {
    let config = GuessConfig::new()
        .with_overrides(Some(6), Some(11))
        .expect("Valid overrides");
    let rendered = config.to_toml().expect("Serializable");
    assert!(rendered.contains("digits = 6"));

    let file = write_config(&rendered);
    assert_eq!(GuessConfig::from_file(file.path()).expect("Parses"), config);
}

#[test]
fn test_cli_defaults_to_play() {
    let cli = Cli::parse_from(["strictly_guess_tui"]);
    assert_eq!(cli.config, PathBuf::from("strictly_guess.toml"));
    assert_eq!(
        cli.command(),
        Command::Play {
            digits: None,
            seed: None
        }
    );
}

#[test]
fn test_cli_play_flags() {
    let cli = Cli::parse_from([
        "strictly_guess_tui",
        "play",
        "--digits",
        "8",
        "--seed",
        "3",
        "--config",
        "other.toml",
    ]);
    assert_eq!(cli.config, PathBuf::from("other.toml"));
    assert_eq!(
        cli.command(),
        Command::Play {
            digits: Some(8),
            seed: Some(3)
        }
    );
}

#[test]
fn test_cli_rejects_out_of_range_digits() {
    let result = Cli::try_parse_from(["strictly_guess_tui", "play", "--digits", "11"]);
    assert!(result.is_err());
}
