//! Bisection rules for the guessing game.
//!
//! Pure functions over interval bounds. Kept apart from the engine so
//! contracts and invariants can reason about them directly.

use tracing::instrument;

/// Returns the bisection midpoint `floor((low + high) / 2)`.
///
/// Computed in `i128` so extreme bounds cannot overflow, and with
/// Euclidean division so negative sums round toward negative infinity.
#[instrument]
pub fn midpoint(low: i64, high: i64) -> i64 {
    let sum = i128::from(low) + i128::from(high);
    // The floor of the mean of two i64 values is itself an i64.
    sum.div_euclid(2) as i64
}

/// Returns the number of integers in `[low, high]`, or 0 if empty.
pub fn width(low: i64, high: i64) -> u128 {
    if low > high {
        0
    } else {
        (i128::from(high) - i128::from(low) + 1) as u128
    }
}

/// Returns the most guesses honest bisection can need for `width` candidates.
///
/// This is `floor(log2(width)) + 1`, the bit length of `width`, and 0
/// for an empty interval.
pub fn worst_case_attempts(width: u128) -> u32 {
    u128::BITS - width.leading_zeros()
}
