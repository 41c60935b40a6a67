//! The in-progress guess.

use super::Digit;
use serde::Serialize;

/// Digits the player is composing before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuessBuffer {
    digits: String,
}

impl GuessBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `digit` unless the buffer already holds `limit` digits.
    ///
    /// Returns true if the digit was appended.
    pub fn push(&mut self, digit: Digit, limit: usize) -> bool {
        if self.digits.len() >= limit {
            return false;
        }
        self.digits.push(digit.as_char());
        true
    }

    /// Removes and returns the last digit, if any.
    pub fn pop(&mut self) -> Option<Digit> {
        self.digits.pop().and_then(Digit::from_char)
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Number of digits entered.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if nothing has been entered.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The digits as a string.
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}
