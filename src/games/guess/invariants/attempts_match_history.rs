//! Attempt count invariant: one attempt per answered round plus the open guess.

use super::super::GuessInProgress;
use super::Invariant;

/// Invariant: `attempts == history.len() + 1`.
///
/// Every answered guess is in the history and the outstanding guess is
/// counted, so attempts equal guesses issued including the first.
pub struct AttemptsMatchHistory;

impl Invariant<GuessInProgress> for AttemptsMatchHistory {
    fn holds(game: &GuessInProgress) -> bool {
        u32::try_from(game.history().len())
            .ok()
            .and_then(|answered| answered.checked_add(1))
            .is_some_and(|expected| expected == game.attempts())
    }

    fn description() -> &'static str {
        "Attempts equal answered rounds plus the outstanding guess"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::guess::{Feedback, GuessInProgress, GuessResult, GuessSetup};

    #[test]
    fn test_first_guess_counts() {
        let game = GuessSetup::new().start(1, 1).expect("valid range");
        assert_eq!(game.attempts(), 1);
        assert!(AttemptsMatchHistory::holds(&game));
    }

    #[test]
    fn test_counts_every_round() {
        let log = [Feedback::TooHigh, Feedback::TooHigh, Feedback::TooLow];

        if let Ok(GuessResult::InProgress(game)) = GuessInProgress::replay(1, 100, &log) {
            assert_eq!(game.attempts(), 4);
            assert!(AttemptsMatchHistory::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_skipped_count_violates() {
        let mut game = GuessSetup::new().start(1, 100).expect("valid range");
        game.attempts = 0;
        assert!(!AttemptsMatchHistory::holds(&game));
    }
}
