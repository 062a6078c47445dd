//! Tests for the mutable guessing engine lifecycle.

use strictly_guess::{GameOver, GuessEngine, GuessIssued, Phase, StartError, Step, StepError};

#[test]
fn test_walkthrough_zero_to_ten() {
    let mut engine = GuessEngine::new();

    assert_eq!(engine.start(0, 10), Ok(GuessIssued::new(5, 1)));
    assert_eq!(engine.too_high(), Ok(Step::Guess(GuessIssued::new(8, 2))));
    assert_eq!(engine.too_low(), Ok(Step::Guess(GuessIssued::new(6, 3))));
    assert_eq!(engine.confirm(), Ok(GameOver::Success { attempts: 3 }));

    assert_eq!(engine.phase(), Phase::Finished);
    assert_eq!(engine.attempts(), 3);
    assert_eq!(engine.last_guess(), Some(6));
}

#[test]
fn test_single_value_range_guesses_it_first() {
    let mut engine = GuessEngine::new();
    assert_eq!(engine.start(42, 42), Ok(GuessIssued::new(42, 1)));
    assert_eq!(engine.phase(), Phase::Running);
}

#[test]
fn test_inverted_range_keeps_phase() {
    let mut engine = GuessEngine::new();
    assert_eq!(
        engine.start(5, 1),
        Err(StartError::RangeInverted { low: 5, high: 1 })
    );
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.attempts(), 0);
}

#[test]
fn test_feedback_when_idle_is_rejected() {
    let mut engine = GuessEngine::new();
    assert_eq!(engine.too_high(), Err(StepError::NotRunning(Phase::Idle)));
    assert_eq!(engine.too_low(), Err(StepError::NotRunning(Phase::Idle)));
    assert_eq!(engine.confirm(), Err(StepError::NotRunning(Phase::Idle)));
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn test_contradiction_on_single_value() {
    let mut engine = GuessEngine::new();
    engine.start(1, 1).expect("valid range");

    assert_eq!(engine.too_high(), Ok(Step::Over(GameOver::Contradiction)));
    assert_eq!(engine.phase(), Phase::Finished);
    assert_eq!(engine.outcome(), Some(GameOver::Contradiction));
    assert_eq!(engine.attempts(), 1);

    // No further guesses once finished
    assert_eq!(engine.too_low(), Err(StepError::NotRunning(Phase::Finished)));
}

#[test]
fn test_contradiction_after_mixed_answers() {
    // Secret "above 5" then "below 6" on [0, 10] leaves nothing.
    let mut engine = GuessEngine::new();
    engine.start(0, 10).expect("valid range");
    engine.too_high().expect("running"); // [6, 10], guess 8
    engine.too_low().expect("running"); // [6, 7], guess 6
    let step = engine.too_low().expect("running"); // [6, 5]

    assert_eq!(step, Step::Over(GameOver::Contradiction));
    assert_eq!(engine.attempts(), 3);
    assert_eq!(engine.history().len(), 3);
}

#[test]
fn test_reset_from_every_phase() {
    let mut engine = GuessEngine::new();
    engine.reset();
    assert_eq!(engine.phase(), Phase::Idle);

    engine.start(0, 100).expect("valid range");
    engine.too_low().expect("running");
    engine.reset();
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.attempts(), 0);
    assert_eq!(engine.last_guess(), None);
    assert_eq!(engine.interval(), None);

    engine.start(3, 3).expect("valid range");
    engine.confirm().expect("running");
    engine.reset();
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.attempts(), 0);
}

#[test]
fn test_restart_has_no_residual_state() {
    let mut fresh = GuessEngine::new();
    let fresh_first = fresh.start(-20, 20).expect("valid range");

    let mut used = GuessEngine::new();
    used.start(0, 1000).expect("valid range");
    used.too_high().expect("running");
    used.too_high().expect("running");
    used.confirm().expect("running");
    used.reset();
    let used_first = used.start(-20, 20).expect("valid range");

    assert_eq!(fresh_first, used_first);
    assert_eq!(fresh, used);
}

#[test]
fn test_start_while_running_discards_game() {
    let mut engine = GuessEngine::new();
    engine.start(0, 10).expect("valid range");
    engine.too_high().expect("running");

    assert_eq!(engine.start(100, 200), Ok(GuessIssued::new(150, 1)));
    assert!(engine.history().is_empty());
}

#[test]
fn test_start_after_success_begins_fresh_game() {
    let mut engine = GuessEngine::new();
    engine.start(0, 10).expect("valid range");
    engine.too_low().expect("running");
    engine.confirm().expect("running");
    assert_eq!(engine.phase(), Phase::Finished);

    assert_eq!(engine.start(20, 30), Ok(GuessIssued::new(25, 1)));
    assert_eq!(engine.phase(), Phase::Running);
    assert!(engine.history().is_empty());
    assert_eq!(engine.outcome(), None);
}

#[test]
fn test_start_after_contradiction_begins_fresh_game() {
    let mut engine = GuessEngine::new();
    engine.start(1, 1).expect("valid range");
    assert_eq!(engine.too_low(), Ok(Step::Over(GameOver::Contradiction)));

    assert_eq!(engine.start(20, 30), Ok(GuessIssued::new(25, 1)));
    assert_eq!(engine.phase(), Phase::Running);
    assert!(engine.history().is_empty());
    assert_eq!(engine.attempts(), 1);
}

#[test]
fn test_engines_are_independent() {
    let mut a = GuessEngine::new();
    let mut b = GuessEngine::new();

    a.start(0, 10).expect("valid range");
    b.start(0, 10).expect("valid range");
    a.too_high().expect("running");

    assert_eq!(a.last_guess(), Some(8));
    assert_eq!(b.last_guess(), Some(5));
    assert_eq!(b.attempts(), 1);
}

#[test]
fn test_full_integer_range() {
    let mut engine = GuessEngine::new();
    let first = engine.start(i64::MIN, i64::MAX).expect("valid range");
    assert_eq!(first.value, -1);

    // Always answer "higher": the engine must climb to i64::MAX.
    let mut last = first;
    loop {
        match engine.too_high().expect("running") {
            Step::Guess(guess) => last = guess,
            Step::Over(outcome) => {
                assert_eq!(outcome, GameOver::Contradiction);
                break;
            }
        }
    }
    assert_eq!(last.value, i64::MAX);
    assert!(last.attempts <= 65);
}
