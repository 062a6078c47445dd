//! Contract-based validation for the guessing game.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Feedback, StartError, StepError};
use super::invariants::{GuessInvariants, GuessWithinInterval, Invariant, InvariantSet};
use super::typestate::{GuessInProgress, GuessSetup};
use super::types::Interval;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error reported when the contract is broken.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

// ─────────────────────────────────────────────────────────────
//  Start Contract
// ─────────────────────────────────────────────────────────────

/// Precondition: the requested range is not inverted.
pub struct RangeOrdered;

impl RangeOrdered {
    /// Rejects an interval whose bounds are inverted.
    #[instrument]
    pub fn check(interval: &Interval) -> Result<(), StartError> {
        if interval.is_empty() {
            warn!(low = interval.low, high = interval.high, "Inverted range rejected");
            Err(StartError::RangeInverted {
                low: interval.low,
                high: interval.high,
            })
        } else {
            Ok(())
        }
    }
}

/// Contract for starting a game from setup.
///
/// Preconditions:
/// - `low <= high`
///
/// Setup carries no state, so there is no postcondition between setups.
pub struct StartContract;

impl Contract<GuessSetup, Interval> for StartContract {
    type Error = StartError;

    fn pre(_setup: &GuessSetup, interval: &Interval) -> Result<(), StartError> {
        RangeOrdered::check(interval)
    }

    fn post(_before: &GuessSetup, _after: &GuessSetup) -> Result<(), StartError> {
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Feedback Contract
// ─────────────────────────────────────────────────────────────

/// Postcondition: each answered guess strictly shrinks the interval.
pub struct IntervalShrinks;

impl IntervalShrinks {
    /// Returns true if `after` has fewer candidates than `before`.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GuessInProgress, after: &GuessInProgress) -> bool {
        let (was, now) = (before.interval().width(), after.interval().width());
        let valid = now < was;
        if !valid {
            warn!(%was, %now, "Interval did not shrink");
        }
        valid
    }
}

/// Contract for feedback actions.
///
/// Preconditions:
/// - The outstanding guess lies in the interval
///
/// Postconditions:
/// - The interval strictly shrinks
/// - All game invariants hold
pub struct FeedbackContract;

impl Contract<GuessInProgress, Feedback> for FeedbackContract {
    type Error = StepError;

    fn pre(game: &GuessInProgress, _feedback: &Feedback) -> Result<(), StepError> {
        if GuessWithinInterval::holds(game) {
            Ok(())
        } else {
            Err(StepError::InvariantViolation(format!(
                "Precondition failed: {}",
                GuessWithinInterval::description()
            )))
        }
    }

    fn post(before: &GuessInProgress, after: &GuessInProgress) -> Result<(), StepError> {
        if !IntervalShrinks::holds(before, after) {
            return Err(StepError::InvariantViolation(
                "Postcondition failed: interval must shrink after feedback".to_string(),
            ));
        }

        GuessInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            StepError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
