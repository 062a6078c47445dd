//! Phase-specific typestate structs for the guessing game.
//!
//! Each phase is its own type with phase-specific fields. A
//! `GuessFinished` ALWAYS has an outcome, and only `GuessInProgress`
//! accepts feedback, so illegal transitions do not type-check.

use super::action::{Feedback, GuessError, Round, StartError, StepError};
use super::contracts::{Contract, FeedbackContract, StartContract};
use super::phases::{GameOver, GuessIssued};
use super::rules;
use super::types::Interval;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - waiting for a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessSetup;

impl GuessSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self
    }

    /// Starts the game over `[low, high]` and issues the first guess.
    ///
    /// # Errors
    ///
    /// Returns `StartError::RangeInverted` if `low > high`.
    #[instrument(skip(self))]
    pub fn start(self, low: i64, high: i64) -> Result<GuessInProgress, StartError> {
        let interval = Interval::new(low, high);
        StartContract::pre(&self, &interval)?;

        match guess_step(interval, 0, Vec::new()) {
            GuessResult::InProgress(game) => Ok(game),
            // A validated interval is never empty.
            GuessResult::Finished(_) => Err(StartError::RangeInverted { low, high }),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - a guess awaits feedback.
///
/// Invariants:
/// - `interval.low <= guess <= interval.high`
/// - `attempts == history.len() + 1`
/// - every round in `history` admits every value in `interval`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessInProgress {
    pub(super) interval: Interval,
    pub(super) guess: i64,
    pub(super) attempts: u32,
    pub(super) history: Vec<Round>,
}

impl GuessInProgress {
    /// Applies feedback, consuming self and transitioning to next state.
    ///
    /// Returns either a new in-progress game with the next guess, or a
    /// finished game when the feedback empties the interval.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(guess = self.guess, interval = %self.interval))]
    pub fn answer(self, feedback: Feedback) -> Result<GuessResult, StepError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        FeedbackContract::pre(&self, &feedback)?;

        let GuessInProgress {
            interval,
            guess,
            attempts,
            mut history,
        } = self;
        history.push(Round::new(guess, feedback));

        // No i64 lies beyond the extremes, so stepping past one is a contradiction.
        let narrowed = match feedback {
            Feedback::TooHigh => guess
                .checked_add(1)
                .map(|low| Interval::new(low, interval.high)),
            Feedback::TooLow => guess
                .checked_sub(1)
                .map(|high| Interval::new(interval.low, high)),
        };

        let Some(narrowed) = narrowed else {
            debug!("Feedback points outside the integer range");
            return Ok(GuessResult::Finished(GuessFinished {
                interval,
                last_guess: guess,
                attempts,
                history,
                outcome: GameOver::Contradiction,
            }));
        };

        let result = guess_step(narrowed, attempts, history);

        #[cfg(debug_assertions)]
        if let GuessResult::InProgress(after) = &result {
            FeedbackContract::post(&before, after)?;
        }

        Ok(result)
    }

    /// Confirms the current guess, ending the game in success.
    #[instrument(skip(self), fields(guess = self.guess, attempts = self.attempts))]
    pub fn confirm(self) -> GuessFinished {
        GuessFinished {
            interval: self.interval,
            last_guess: self.guess,
            attempts: self.attempts,
            history: self.history,
            outcome: GameOver::Success {
                attempts: self.attempts,
            },
        }
    }

    /// Returns the candidate interval the current guess was drawn from.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the current guess.
    pub fn guess(&self) -> i64 {
        self.guess
    }

    /// Returns the number of guesses issued so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the answered rounds.
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Returns the current guess as an emitted record.
    pub fn issued(&self) -> GuessIssued {
        GuessIssued::new(self.guess, self.attempts)
    }

    /// Replays a feedback log from a fresh start over `[low, high]`.
    ///
    /// Stops early if the log finishes the game.
    #[instrument(skip(log), fields(rounds = log.len()))]
    pub fn replay(low: i64, high: i64, log: &[Feedback]) -> Result<GuessResult, GuessError> {
        let mut game = GuessSetup::new().start(low, high)?;

        for feedback in log {
            match game.answer(*feedback)? {
                GuessResult::InProgress(g) => game = g,
                GuessResult::Finished(g) => return Ok(GuessResult::Finished(g)),
            }
        }

        Ok(GuessResult::InProgress(game))
    }
}

/// Issues the next guess from `interval`, or ends the game if it is empty.
#[instrument(skip(history))]
fn guess_step(interval: Interval, attempts: u32, history: Vec<Round>) -> GuessResult {
    if interval.is_empty() {
        debug!("Interval emptied by feedback");
        let last_guess = history.last().map(|round| round.guess).unwrap_or(interval.low);
        return GuessResult::Finished(GuessFinished {
            interval,
            last_guess,
            attempts,
            history,
            outcome: GameOver::Contradiction,
        });
    }

    let guess = rules::midpoint(interval.low, interval.high);
    let attempts = attempts.saturating_add(1);
    debug!(guess, attempts, "Issuing guess");

    GuessResult::InProgress(GuessInProgress {
        interval,
        guess,
        attempts,
        history,
    })
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessFinished {
    interval: Interval,
    last_guess: i64,
    attempts: u32,
    history: Vec<Round>,
    outcome: GameOver,
}

impl GuessFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &GameOver {
        &self.outcome
    }

    /// Returns the interval as it stood when the game ended.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the last guess shown to the user.
    pub fn last_guess(&self) -> i64 {
        self.last_guess
    }

    /// Returns the number of guesses issued.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the answered rounds.
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GuessSetup {
        GuessSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of answering a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// Game continues with a new guess.
    InProgress(GuessInProgress),
    /// Game finished.
    Finished(GuessFinished),
}
