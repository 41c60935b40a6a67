//! Command-line interface for strictly_guess_tui.

use clap::{Parser, Subcommand};

/// Strictly Guess - memorize a number, then key it in on the pinpad
#[derive(Parser, Debug)]
#[command(name = "strictly_guess_tui")]
#[command(about = "Number memory game with a terminal pinpad", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "strictly_guess.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Digit count to preselect (4-10)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(4..=10))]
        digits: Option<u8>,

        /// Seed for reproducible targets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// The command to run, `play` with no overrides when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            digits: None,
            seed: None,
        })
    }
}
