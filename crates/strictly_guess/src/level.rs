//! Round phases.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Phase of one game round.
///
/// Levels are ordered by declaration. A round moves strictly forward
/// through them; only a restart returns to [`GameLevel::Start`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum GameLevel {
    /// Choosing a digit count. No target exists yet.
    #[default]
    Start,
    /// The target is revealed for the player to memorize.
    Collecting,
    /// The player keys the target back in on the pinpad.
    Guessing,
    /// The round is over.
    Finished,
}

impl GameLevel {
    /// Returns the level that follows this one, or `None` at the terminal level.
    #[instrument]
    pub fn next(self) -> Option<Self> {
        Self::iter().skip_while(|level| *level != self).nth(1)
    }

    /// Returns true for the last level of a round.
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Choose digits",
            Self::Collecting => "Memorize",
            Self::Guessing => "Enter the number",
            Self::Finished => "Round over",
        }
    }
}
