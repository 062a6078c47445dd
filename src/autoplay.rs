//! Automated players that answer the engine's guesses.
//!
//! A [`Responder`] stands in for the human behind the surface. The
//! honest oracle knows the secret and always answers truthfully; the
//! scripted responder replays fixed answers, which is how inconsistent
//! feedback is exercised.

use crate::games::guess::{GameOver, GuessEngine, GuessError, GuessIssued, Step};
use std::collections::VecDeque;
use tracing::{debug, info, instrument};

/// A verdict on a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Answer {
    /// The guess is the secret.
    Correct,
    /// The secret is greater than the guess.
    Higher,
    /// The secret is less than the guess.
    Lower,
}

/// Something that answers guesses.
pub trait Responder {
    /// Returns a verdict for `guess`, or `None` if out of answers.
    fn respond(&mut self, guess: &GuessIssued) -> Option<Answer>;
}

/// Answers truthfully for a fixed secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HonestOracle {
    secret: i64,
}

impl HonestOracle {
    /// Creates an oracle for `secret`.
    pub fn new(secret: i64) -> Self {
        Self { secret }
    }

    /// Returns the secret.
    pub fn secret(&self) -> i64 {
        self.secret
    }
}

impl Responder for HonestOracle {
    fn respond(&mut self, guess: &GuessIssued) -> Option<Answer> {
        Some(match self.secret.cmp(&guess.value) {
            std::cmp::Ordering::Equal => Answer::Correct,
            std::cmp::Ordering::Greater => Answer::Higher,
            std::cmp::Ordering::Less => Answer::Lower,
        })
    }
}

/// Replays a fixed list of answers in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedResponder {
    answers: VecDeque<Answer>,
}

impl ScriptedResponder {
    /// Creates a responder that gives `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// Returns the answers not yet given.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Responder for ScriptedResponder {
    fn respond(&mut self, _guess: &GuessIssued) -> Option<Answer> {
        self.answers.pop_front()
    }
}

/// Error raised while playing a game out.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AutoplayError {
    /// The engine refused an operation.
    #[display("{}", _0)]
    Engine(GuessError),

    /// The responder stopped answering before the game ended.
    #[display("Responder ran out of answers after {} guesses", _0)]
    OutOfAnswers(u32),
}

impl std::error::Error for AutoplayError {}

impl From<GuessError> for AutoplayError {
    fn from(err: GuessError) -> Self {
        AutoplayError::Engine(err)
    }
}

/// Record of one automated game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Transcript {
    /// Every guess issued, in order.
    pub guesses: Vec<GuessIssued>,
    /// How the game ended.
    pub outcome: GameOver,
}

/// Starts a game over `[low, high]` and plays it to the end.
///
/// `on_guess` sees every guess before it is answered, so callers can
/// echo progress.
#[instrument(skip(engine, responder, on_guess))]
pub fn play_out<R, F>(
    engine: &mut GuessEngine,
    low: i64,
    high: i64,
    responder: &mut R,
    mut on_guess: F,
) -> Result<Transcript, AutoplayError>
where
    R: Responder + ?Sized,
    F: FnMut(&GuessIssued),
{
    let mut guess = engine.start(low, high).map_err(GuessError::from)?;
    let mut guesses = Vec::new();

    loop {
        on_guess(&guess);
        guesses.push(guess);

        let answer = responder
            .respond(&guess)
            .ok_or(AutoplayError::OutOfAnswers(guess.attempts))?;
        debug!(guess = guess.value, %answer, "Responder answered");

        let step = match answer {
            Answer::Correct => Step::Over(engine.confirm().map_err(GuessError::from)?),
            Answer::Higher => engine.too_high().map_err(GuessError::from)?,
            Answer::Lower => engine.too_low().map_err(GuessError::from)?,
        };

        match step {
            Step::Guess(next) => guess = next,
            Step::Over(outcome) => {
                info!(%outcome, guesses = guesses.len(), "Game played out");
                return Ok(Transcript { guesses, outcome });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::guess::{Phase, StartError};

    #[test]
    fn test_honest_oracle_finds_secret() {
        let mut engine = GuessEngine::new();
        let mut oracle = HonestOracle::new(6);

        let transcript = play_out(&mut engine, 0, 10, &mut oracle, |_| {}).expect("plays out");
        let values: Vec<i64> = transcript.guesses.iter().map(|g| g.value).collect();
        assert_eq!(values, vec![5, 8, 6]);
        assert_eq!(transcript.outcome, GameOver::Success { attempts: 3 });
        assert_eq!(engine.phase(), Phase::Finished);
    }

    #[test]
    fn test_scripted_contradiction() {
        let mut engine = GuessEngine::new();
        let mut script = ScriptedResponder::new([Answer::Higher]);

        let transcript = play_out(&mut engine, 1, 1, &mut script, |_| {}).expect("plays out");
        assert_eq!(transcript.outcome, GameOver::Contradiction);
        assert_eq!(transcript.guesses.len(), 1);
    }

    #[test]
    fn test_out_of_answers() {
        let mut engine = GuessEngine::new();
        let mut script = ScriptedResponder::new([Answer::Lower]);

        let err = play_out(&mut engine, 0, 100, &mut script, |_| {}).unwrap_err();
        assert_eq!(err, AutoplayError::OutOfAnswers(2));
        assert_eq!(engine.phase(), Phase::Running);
    }

    #[test]
    fn test_inverted_range_is_reported() {
        let mut engine = GuessEngine::new();
        let mut oracle = HonestOracle::new(3);

        let err = play_out(&mut engine, 9, 1, &mut oracle, |_| {}).unwrap_err();
        assert_eq!(
            err,
            AutoplayError::Engine(GuessError::Start(StartError::RangeInverted { low: 9, high: 1 }))
        );
    }

    #[test]
    fn test_on_guess_sees_every_guess() {
        let mut engine = GuessEngine::new();
        let mut oracle = HonestOracle::new(1);
        let mut seen = Vec::new();

        play_out(&mut engine, 1, 16, &mut oracle, |g| seen.push(g.value)).expect("plays out");
        assert_eq!(seen, vec![8, 4, 2, 1]);
    }
}
