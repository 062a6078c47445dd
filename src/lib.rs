//! Strictly Guess library - a type-safe bisection guessing game
//!
//! The user thinks of a number in a range; the engine guesses the
//! midpoint and narrows the range on every "higher" or "lower" answer.
//!
//! # Architecture
//!
//! - **Games**: the guessing engine, as typestate phases with contracts
//!   and invariants, plus a mutable [`GuessEngine`] façade
//! - **Autoplay**: responders that answer guesses without a human
//! - **Surface**: a line-oriented adapter that turns typed commands into
//!   engine calls
//!
//! # Example
//!
//! ```
//! use strictly_guess::{GameOver, GuessEngine, Step};
//!
//! let mut engine = GuessEngine::new();
//! let first = engine.start(0, 10)?;
//! assert_eq!(first.value, 5);
//!
//! // The secret is 6: higher, then lower, then confirm.
//! assert!(matches!(engine.too_high()?, Step::Guess(g) if g.value == 8));
//! assert!(matches!(engine.too_low()?, Step::Guess(g) if g.value == 6));
//! assert_eq!(engine.confirm()?, GameOver::Success { attempts: 3 });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod autoplay;
mod config;
mod games;
mod surface;

// Crate-level exports - Game types (guessing)
pub use games::guess::{
    AttemptsMatchHistory, Contract, Feedback, FeedbackContract, GameOver, GameState, GuessEngine,
    GuessError, GuessFinished, GuessInProgress, GuessInvariants, GuessIssued, GuessResult,
    GuessSetup, GuessWithinInterval, HistoryConsistent, Interval, IntervalShrinks, Invariant,
    InvariantSet, InvariantViolation, Phase, RangeOrdered, Round, StartContract, StartError, Step,
    StepError, midpoint, width, worst_case_attempts,
};

// Crate-level exports - Autoplay
pub use autoplay::{Answer, AutoplayError, HonestOracle, Responder, ScriptedResponder, Transcript, play_out};

// Crate-level exports - Configuration
pub use config::{ConfigError, GuessConfig};

// Crate-level exports - Interaction surface
pub use surface::{Command, ConsoleSurface, ParseError, Reply, Surface, enabled_commands};
