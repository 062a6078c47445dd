//! Core domain types for the guessing game.

use serde::{Deserialize, Serialize};

/// A closed integer interval `[low, high]` of candidate secrets.
///
/// An interval with `low > high` is empty. Narrowing only ever moves
/// one bound past the other by a single step, so `low <= high + 1`
/// holds for every interval the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Smallest candidate still possible.
    pub low: i64,
    /// Largest candidate still possible.
    pub high: i64,
}

impl Interval {
    /// Creates an interval from its bounds.
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Returns true if no candidate remains.
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    /// Returns the number of candidates (`high - low + 1`, 0 when empty).
    pub fn width(&self) -> u128 {
        super::rules::width(self.low, self.high)
    }

    /// Returns true if `value` is still a candidate.
    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
