//! Lifecycle phases and step outcomes for the guessing game.

use serde::{Deserialize, Serialize};

/// Lifecycle marker of the engine.
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
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// No game has been started, or the last one was reset.
    Idle,
    /// A guess is on the table awaiting feedback.
    Running,
    /// The game ended; only start or reset leave this phase.
    Finished,
}

/// A guess emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessIssued {
    /// The guessed number.
    pub value: i64,
    /// Guesses issued so far in this game, this one included.
    pub attempts: u32,
}

impl GuessIssued {
    /// Creates a new guess record.
    pub fn new(value: i64, attempts: u32) -> Self {
        Self { value, attempts }
    }
}

impl std::fmt::Display for GuessIssued {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Is it {}?", self.value)
    }
}

/// Terminal outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOver {
    /// The user confirmed the last guess.
    Success {
        /// Guesses it took.
        attempts: u32,
    },
    /// The feedback emptied the interval.
    Contradiction,
}

impl GameOver {
    /// Returns the attempt count if the game was won.
    pub fn attempts(&self) -> Option<u32> {
        match self {
            GameOver::Success { attempts } => Some(*attempts),
            GameOver::Contradiction => None,
        }
    }

    /// Returns true if the feedback was inconsistent.
    pub fn is_contradiction(&self) -> bool {
        matches!(self, GameOver::Contradiction)
    }
}

impl std::fmt::Display for GameOver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOver::Success { attempts } => write!(f, "Guessed in {} attempts!", attempts),
            GameOver::Contradiction => write!(f, "Inconsistent answers detected!"),
        }
    }
}

/// What a narrowing step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// The game continues with a new guess.
    Guess(GuessIssued),
    /// The game ended.
    Over(GameOver),
}

impl Step {
    /// Returns the new guess, if the game continues.
    pub fn guess(&self) -> Option<GuessIssued> {
        match self {
            Step::Guess(guess) => Some(*guess),
            Step::Over(_) => None,
        }
    }
}
