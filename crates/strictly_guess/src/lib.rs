//! Pure number-guessing game logic.
//!
//! A round picks a digit count, draws a target with that many digits,
//! reveals it, and then judges the digits the player keys back in.
//!
//! # Example
//!
//! ```
//! use strictly_guess::{Digit, FixedTarget, GameLevel, GameState, Verdict};
//!
//! let mut game = GameState::new();
//! game.set_digit_choice(4);
//! game.start_game_with(&mut FixedTarget(4321));
//! game.advance_level();
//! assert_eq!(game.level(), GameLevel::Guessing);
//!
//! for c in "4321".chars() {
//!     game.append_digit(Digit::from_char(c).unwrap());
//! }
//! assert!(game.is_ready_for_submission());
//! assert_eq!(game.submit(), Some(Verdict::Correct));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alert;
mod digits;
mod guess;
mod level;
mod state;
mod target;

pub use alert::{Alert, Verdict};
pub use digits::{Digit, DigitChoice, DigitChoiceError};
pub use guess::GuessBuffer;
pub use level::GameLevel;
pub use state::{GameState, UNSET_TARGET};
pub use target::{FixedTarget, RandomTarget, TargetNumber, TargetSource};
