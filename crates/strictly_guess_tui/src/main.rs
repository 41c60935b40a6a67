//! Strictly Guess - terminal pinpad game.

use anyhow::Result;
use clap::Parser;
use strictly_guess::RandomTarget;
use strictly_guess_tui::{App, Cli, Command, GuessConfig, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GuessConfig::load(&cli.config)?;

    match cli.command() {
        Command::Play { digits, seed } => play(config.with_overrides(digits, seed)?),
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Runs one interactive session.
fn play(config: GuessConfig) -> Result<()> {
    initialize_tracing(&config)?;
    info!(digits = %config.digits(), seed = ?config.seed(), "Starting game");

    let source = match config.seed() {
        Some(seed) => RandomTarget::seeded(*seed),
        None => RandomTarget::from_entropy(),
    };
    run_tui(App::new(*config.digits(), source))
}

/// Sends tracing output to the log file; the terminal belongs to the UI.
#[instrument(skip(config), fields(log_file = %config.log_file().display()))]
fn initialize_tracing(config: &GuessConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,strictly_guess=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
