//! Terminal front end for Strictly Guess.
//!
//! A number is revealed, the player memorizes it, then keys it back in on
//! an on-screen pinpad. Game rules live in [`strictly_guess`]; this crate
//! only maps keys to game operations and draws the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod pinpad;
mod tui;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, GuessConfig};
pub use input::{Action, action_for};
pub use pinpad::{PinpadKey, move_cursor};
pub use tui::run_tui;
pub use ui::draw;
