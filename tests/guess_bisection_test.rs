//! Property tests for bisection termination and attempt bounds.

use proptest::prelude::*;
use strictly_guess::{
    Feedback, GameOver, GuessEngine, GuessInvariants, GuessResult, GuessSetup, HonestOracle,
    InvariantSet, play_out, width, worst_case_attempts,
};

/// `ceil(log2(w)) + 1`, the looser bound quoted for honest play.
fn ceil_log2_plus_one(w: u128) -> u32 {
    let ceil = if w <= 1 { 0 } else { u128::BITS - (w - 1).leading_zeros() };
    ceil + 1
}

fn range_and_secret() -> impl Strategy<Value = (i64, i64, i64)> {
    (any::<i64>(), any::<i64>(), any::<u64>()).prop_map(|(a, b, pick)| {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let span = width(low, high);
        let offset = u128::from(pick) % span;
        let secret = (i128::from(low) + offset as i128) as i64;
        (low, high, secret)
    })
}

fn small_range_and_secret() -> impl Strategy<Value = (i64, i64, i64)> {
    (-1000i64..1000, 0i64..2000).prop_flat_map(|(low, len)| {
        let high = low + len;
        (Just(low), Just(high), low..=high)
    })
}

proptest! {
    #[test]
    fn honest_play_finds_secret_within_bound((low, high, secret) in range_and_secret()) {
        let mut engine = GuessEngine::new();
        let mut oracle = HonestOracle::new(secret);

        let transcript = play_out(&mut engine, low, high, &mut oracle, |_| {}).unwrap();
        let attempts = transcript.guesses.len() as u32;

        prop_assert_eq!(transcript.outcome, GameOver::Success { attempts });
        prop_assert_eq!(engine.last_guess(), Some(secret));

        let w = width(low, high);
        prop_assert!(attempts <= worst_case_attempts(w));
        prop_assert!(attempts <= ceil_log2_plus_one(w));
    }

    #[test]
    fn every_guess_lies_in_its_interval((low, high, secret) in small_range_and_secret()) {
        let mut engine = GuessEngine::new();
        let mut oracle = HonestOracle::new(secret);
        let transcript = play_out(&mut engine, low, high, &mut oracle, |_| {}).unwrap();

        for pair in transcript.guesses.windows(2) {
            prop_assert_eq!(pair[1].attempts, pair[0].attempts + 1);
            prop_assert_ne!(pair[0].value, pair[1].value);
        }
        for guess in &transcript.guesses {
            prop_assert!(low <= guess.value && guess.value <= high);
        }
    }

    #[test]
    fn invariants_hold_along_honest_play((low, high, secret) in small_range_and_secret()) {
        let mut game = GuessSetup::new().start(low, high).unwrap();

        while game.guess() != secret {
            prop_assert!(GuessInvariants::check_all(&game).is_ok());
            let feedback = if secret > game.guess() {
                Feedback::TooHigh
            } else {
                Feedback::TooLow
            };
            game = match game.answer(feedback).unwrap() {
                GuessResult::InProgress(next) => next,
                GuessResult::Finished(_) => {
                    return Err(TestCaseError::fail("honest feedback never contradicts"));
                }
            };
        }
        prop_assert!(GuessInvariants::check_all(&game).is_ok());
    }
}
