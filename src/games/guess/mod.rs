//! Bisection number-guessing game.
//!
//! The user picks a secret in a range; the engine guesses by halving
//! the range and narrows it on each "higher" or "lower" answer.

mod action;
mod contracts;
mod engine;
mod invariants;
mod phases;
mod rules;
mod types;
mod typestate;

pub use action::{Feedback, GuessError, Round, StartError, StepError};
pub use contracts::{Contract, FeedbackContract, IntervalShrinks, RangeOrdered, StartContract};
pub use engine::{GameState, GuessEngine};
pub use invariants::{
    AttemptsMatchHistory, GuessInvariants, GuessWithinInterval, HistoryConsistent, Invariant,
    InvariantSet, InvariantViolation,
};
pub use phases::{GameOver, GuessIssued, Phase, Step};
pub use rules::{midpoint, width, worst_case_attempts};
pub use types::Interval;
pub use typestate::{GuessFinished, GuessInProgress, GuessResult, GuessSetup};
