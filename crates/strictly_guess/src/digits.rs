//! Digit count choice and single pinpad digits.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of decimal digits the target will have.
///
/// Any value in `MIN..=MAX` is accepted; the player is offered
/// the narrower [`DigitChoice::ALLOWED`] set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DigitChoice(u8);

impl DigitChoice {
    /// Smallest accepted digit count.
    pub const MIN: u8 = 4;
    /// Largest accepted digit count.
    pub const MAX: u8 = 10;
    /// Choice used for a fresh or restarted game.
    pub const DEFAULT: Self = Self(4);
    /// Choices offered to the player.
    pub const ALLOWED: [Self; 5] = [Self(4), Self(5), Self(6), Self(7), Self(8)];

    /// Returns the choice for `n` digits if it is within bounds.
    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Self(n))
    }

    /// Returns the digit count.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the digit count as a length.
    pub fn digits(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for DigitChoice {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Digit count outside `DigitChoice::MIN..=DigitChoice::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "digit count {} is outside {}..={}",
    _0,
    DigitChoice::MIN,
    DigitChoice::MAX
)]
pub struct DigitChoiceError(#[error(not(source))] pub u8);

impl TryFrom<u8> for DigitChoice {
    type Error = DigitChoiceError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(DigitChoiceError(n))
    }
}

impl From<DigitChoice> for u8 {
    fn from(choice: DigitChoice) -> Self {
        choice.0
    }
}

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct Digit(u8);

impl Digit {
    /// Returns the digit for `value` if it is below ten.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Returns the digit for an ASCII digit character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self)
    }

    /// Returns the numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}
