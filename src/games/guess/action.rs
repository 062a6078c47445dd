//! First-class feedback and error types for the guessing game.
//!
//! Feedback is a domain event: the user's verdict on the current guess.
//! It can be recorded, replayed and checked against the interval.

use super::phases::Phase;
use serde::{Deserialize, Serialize};

/// The user's verdict that the current guess is wrong.
///
/// Confirmation is not a variant: it ends the game instead of narrowing it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Feedback {
    /// The secret is strictly greater than the guess.
    #[strum(to_string = "higher")]
    TooHigh,
    /// The secret is strictly less than the guess.
    #[strum(to_string = "lower")]
    TooLow,
}

/// One answered guess in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    /// The guess that was shown.
    pub guess: i64,
    /// The verdict it received.
    pub feedback: Feedback,
}

impl Round {
    /// Creates a new round.
    pub fn new(guess: i64, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Returns true if `secret` is compatible with this round's verdict.
    pub fn admits(&self, secret: i64) -> bool {
        match self.feedback {
            Feedback::TooHigh => secret > self.guess,
            Feedback::TooLow => secret < self.guess,
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.guess, self.feedback)
    }
}

/// Error returned when a game cannot be started.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StartError {
    /// The lower bound exceeds the upper bound.
    #[display("Start must be less than or equal to End ({} > {})", low, high)]
    RangeInverted {
        /// Requested lower bound.
        low: i64,
        /// Requested upper bound.
        high: i64,
    },

    /// A bound was not an integer.
    #[display("Not a valid number: {:?}", _0)]
    InvalidInput(String),
}

impl std::error::Error for StartError {}

/// Error returned when feedback or confirmation is not legal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StepError {
    /// No game is running.
    #[display("No game is running (phase: {})", _0)]
    NotRunning(Phase),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for StepError {}

/// Any error the guessing game can raise.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GuessError {
    /// Starting failed.
    #[display("{}", _0)]
    Start(StartError),
    /// A step failed.
    #[display("{}", _0)]
    Step(StepError),
}

impl std::error::Error for GuessError {}
