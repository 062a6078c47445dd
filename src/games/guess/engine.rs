//! Mutable engine over the typestate phases.
//!
//! Callers that hold one long-lived game (an event loop, a console)
//! cannot thread consuming transitions through their own state, so
//! the engine owns the current phase and swaps it in place. Legality
//! is checked here at runtime and reported as `StepError::NotRunning`.

use super::action::{Feedback, Round, StartError, StepError};
use super::phases::{GameOver, GuessIssued, Phase, Step};
use super::types::Interval;
use super::typestate::{GuessFinished, GuessInProgress, GuessResult, GuessSetup};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The one live game, in whichever phase it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for a range.
    Idle(GuessSetup),
    /// A guess awaits feedback.
    Running(GuessInProgress),
    /// The game ended.
    Finished(GuessFinished),
}

impl GameState {
    /// Returns the lifecycle marker for this state.
    pub fn phase(&self) -> Phase {
        match self {
            GameState::Idle(_) => Phase::Idle,
            GameState::Running(_) => Phase::Running,
            GameState::Finished(_) => Phase::Finished,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Idle(GuessSetup::new())
    }
}

impl From<GuessResult> for GameState {
    fn from(result: GuessResult) -> Self {
        match result {
            GuessResult::InProgress(game) => GameState::Running(game),
            GuessResult::Finished(game) => GameState::Finished(game),
        }
    }
}

/// Bisection guessing engine.
///
/// Each instance owns exactly one game. Instances are independent, and
/// every operation completes synchronously; wrap the engine in a mutex
/// if it must be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessEngine {
    state: GameState,
}

impl GuessEngine {
    /// Creates an idle engine.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game over `[low, high]` and returns the first guess.
    ///
    /// Legal from every phase; any prior game is discarded.
    ///
    /// # Errors
    ///
    /// Returns `StartError::RangeInverted` if `low > high`. The engine is
    /// left untouched in that case.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn start(&mut self, low: i64, high: i64) -> Result<GuessIssued, StartError> {
        let game = GuessSetup::new().start(low, high)?;
        let issued = game.issued();
        info!(low, high, guess = issued.value, "Game started");
        self.state = GameState::Running(game);
        Ok(issued)
    }

    /// Confirms the current guess and ends the game in success.
    ///
    /// # Errors
    ///
    /// Returns `StepError::NotRunning` outside the running phase.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn confirm(&mut self) -> Result<GameOver, StepError> {
        let game = self.take_running()?;
        let finished = game.confirm();
        let outcome = *finished.outcome();
        info!(attempts = finished.attempts(), secret = finished.last_guess(), "Guess confirmed");
        self.state = GameState::Finished(finished);
        Ok(outcome)
    }

    /// Answers that the secret is greater than the current guess.
    ///
    /// # Errors
    ///
    /// Returns `StepError::NotRunning` outside the running phase.
    pub fn too_high(&mut self) -> Result<Step, StepError> {
        self.feedback(Feedback::TooHigh)
    }

    /// Answers that the secret is less than the current guess.
    ///
    /// # Errors
    ///
    /// Returns `StepError::NotRunning` outside the running phase.
    pub fn too_low(&mut self) -> Result<Step, StepError> {
        self.feedback(Feedback::TooLow)
    }

    /// Applies feedback to the current guess.
    ///
    /// # Errors
    ///
    /// Returns `StepError::NotRunning` outside the running phase, or
    /// `StepError::InvariantViolation` if a contract check fails. A failed
    /// contract check leaves the running game as it was.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn feedback(&mut self, feedback: Feedback) -> Result<Step, StepError> {
        let game = self.take_running()?;
        let backup = game.clone();

        let result = match game.answer(feedback) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, guess = backup.guess(), "Feedback rejected by contract");
                self.state = GameState::Running(backup);
                return Err(e);
            }
        };

        let step = match &result {
            GuessResult::InProgress(next) => {
                debug!(guess = next.guess(), attempts = next.attempts(), "Next guess");
                Step::Guess(next.issued())
            }
            GuessResult::Finished(done) => {
                info!(attempts = done.attempts(), "Inconsistent feedback ended the game");
                Step::Over(*done.outcome())
            }
        };

        self.state = result.into();
        Ok(step)
    }

    /// Returns the engine to idle, discarding any game.
    ///
    /// Always legal.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn reset(&mut self) {
        debug!("Resetting engine");
        self.state = GameState::default();
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the guesses issued in the current game (0 when idle).
    pub fn attempts(&self) -> u32 {
        match &self.state {
            GameState::Idle(_) => 0,
            GameState::Running(game) => game.attempts(),
            GameState::Finished(game) => game.attempts(),
        }
    }

    /// Returns the last guess shown, if a game has been started.
    pub fn last_guess(&self) -> Option<i64> {
        match &self.state {
            GameState::Idle(_) => None,
            GameState::Running(game) => Some(game.guess()),
            GameState::Finished(game) => Some(game.last_guess()),
        }
    }

    /// Returns the outstanding guess while running.
    pub fn current(&self) -> Option<GuessIssued> {
        match &self.state {
            GameState::Running(game) => Some(game.issued()),
            _ => None,
        }
    }

    /// Returns the candidate interval, if a game has been started.
    pub fn interval(&self) -> Option<Interval> {
        match &self.state {
            GameState::Idle(_) => None,
            GameState::Running(game) => Some(game.interval()),
            GameState::Finished(game) => Some(game.interval()),
        }
    }

    /// Returns the outcome once finished.
    pub fn outcome(&self) -> Option<GameOver> {
        match &self.state {
            GameState::Finished(game) => Some(*game.outcome()),
            _ => None,
        }
    }

    /// Returns the answered rounds of the current game.
    pub fn history(&self) -> &[Round] {
        match &self.state {
            GameState::Idle(_) => &[],
            GameState::Running(game) => game.history(),
            GameState::Finished(game) => game.history(),
        }
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves the running game out, leaving the engine untouched otherwise.
    fn take_running(&mut self) -> Result<GuessInProgress, StepError> {
        let phase = self.phase();
        match std::mem::take(&mut self.state) {
            GameState::Running(game) => Ok(game),
            other => {
                debug!(%phase, "Step rejected outside running phase");
                self.state = other;
                Err(StepError::NotRunning(phase))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_idle() {
        let engine = GuessEngine::new();
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.attempts(), 0);
        assert_eq!(engine.last_guess(), None);
        assert_eq!(engine.interval(), None);
    }

    #[test]
    fn test_inverted_start_leaves_state_alone() {
        let mut engine = GuessEngine::new();
        engine.start(0, 10).expect("valid range");
        let before = engine.clone();

        let err = engine.start(5, 1).unwrap_err();
        assert_eq!(err, StartError::RangeInverted { low: 5, high: 1 });
        assert_eq!(engine, before);
    }

    #[test]
    fn test_not_running_leaves_state_alone() {
        let mut engine = GuessEngine::new();
        engine.start(2, 2).expect("valid range");
        engine.confirm().expect("running");
        let before = engine.clone();

        assert_eq!(engine.too_low(), Err(StepError::NotRunning(Phase::Finished)));
        assert_eq!(engine.confirm(), Err(StepError::NotRunning(Phase::Finished)));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_finished_keeps_last_guess() {
        let mut engine = GuessEngine::new();
        engine.start(0, 10).expect("valid range");
        engine.too_low().expect("running");
        engine.confirm().expect("running");
        assert_eq!(engine.last_guess(), Some(2));
        assert_eq!(engine.outcome(), Some(GameOver::Success { attempts: 2 }));
        assert_eq!(engine.current(), None);
    }

    #[test]
    fn test_contract_failure_restores_running_game() {
        let mut engine = GuessEngine::new();
        engine.start(0, 10).expect("valid range");
        if let GameState::Running(game) = &mut engine.state {
            game.guess = 42;
        }
        let before = engine.clone();

        let result = engine.too_high();
        assert!(matches!(result, Err(StepError::InvariantViolation(_))));
        assert_eq!(engine, before);
        assert_eq!(engine.phase(), Phase::Running);
    }

    #[test]
    fn test_state_serializes() {
        let mut engine = GuessEngine::new();
        engine.start(1, 100).expect("valid range");
        engine.too_high().expect("running");

        let json = serde_json::to_string(&engine).expect("serializes");
        let restored: GuessEngine = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(restored, engine);
    }
}
