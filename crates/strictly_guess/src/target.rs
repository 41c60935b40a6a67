//! Target numbers and the random sources that draw them.

use super::DigitChoice;
use derive_more::Display;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// The number the player has to key in.
///
/// Always has exactly as many decimal digits as the choice it was drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub struct TargetNumber(u64);

impl TargetNumber {
    /// Inclusive range of numbers with exactly `choice` decimal digits.
    pub fn range(choice: DigitChoice) -> RangeInclusive<u64> {
        let n = u32::from(choice.get());
        10u64.pow(n - 1)..=10u64.pow(n) - 1
    }

    /// Draws a target for `choice` from `source`.
    ///
    /// Values outside the digit range are clamped into it.
    #[instrument(skip(source))]
    pub fn draw(choice: DigitChoice, source: &mut impl TargetSource) -> Self {
        let range = Self::range(choice);
        let (low, high) = (*range.start(), *range.end());
        let value = source.draw(range).clamp(low, high);
        debug!(value, low, high, "Target drawn");
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Length of the decimal representation.
    pub fn digits(self) -> usize {
        self.0.checked_ilog10().map_or(1, |log| log as usize + 1)
    }

    /// Returns true if `guess` spells out this number exactly.
    pub fn matches(self, guess: &str) -> bool {
        self.0.to_string() == guess
    }
}

/// Source of target values.
///
/// This is the seam that lets callers pin the target, e.g. in tests.
pub trait TargetSource {
    /// Returns a value from `range`.
    fn draw(&mut self, range: RangeInclusive<u64>) -> u64;
}

impl<S: TargetSource + ?Sized> TargetSource for Box<S> {
    fn draw(&mut self, range: RangeInclusive<u64>) -> u64 {
        (**self).draw(range)
    }
}

/// Uniform draws from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomTarget<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomTarget<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTarget<StdRng> {
    /// Reproducible source: the same seed yields the same targets.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TargetSource for RandomTarget<R> {
    fn draw(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.rng.gen_range(range)
    }
}

/// Always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTarget(pub u64);

impl TargetSource for FixedTarget {
    fn draw(&mut self, _range: RangeInclusive<u64>) -> u64 {
        self.0
    }
}
