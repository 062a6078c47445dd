//! History consistency invariant: the interval agrees with every answer given.

use super::super::GuessInProgress;
use super::Invariant;

/// Invariant: every answered round admits every remaining candidate.
///
/// A "higher" answer to guess `g` means every candidate exceeds `g`;
/// a "lower" answer means every candidate is below it. Checking both
/// bounds is enough because the interval is contiguous.
pub struct HistoryConsistent;

impl Invariant<GuessInProgress> for HistoryConsistent {
    fn holds(game: &GuessInProgress) -> bool {
        let interval = game.interval();
        game.history()
            .iter()
            .all(|round| round.admits(interval.low) && round.admits(interval.high))
    }

    fn description() -> &'static str {
        "Interval agrees with every recorded answer"
    }
}
