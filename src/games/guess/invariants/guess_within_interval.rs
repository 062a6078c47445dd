//! Bounded guess invariant: the outstanding guess is a live candidate.

use super::super::GuessInProgress;
use super::Invariant;

/// Invariant: `low <= guess <= high`.
///
/// Bisection only ever guesses a value that could still be the secret.
pub struct GuessWithinInterval;

impl Invariant<GuessInProgress> for GuessWithinInterval {
    fn holds(game: &GuessInProgress) -> bool {
        game.interval().contains(game.guess())
    }

    fn description() -> &'static str {
        "Guess lies within the candidate interval"
    }
}
