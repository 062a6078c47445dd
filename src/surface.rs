//! Line-oriented interaction surface for the guessing engine.
//!
//! The surface translates typed commands into engine calls and renders
//! the typed results. It holds no game state of its own: legality is
//! always decided by the engine.

use crate::config::GuessConfig;
use crate::games::guess::{
    GameOver, GuessEngine, GuessIssued, Interval, Phase, StartError, Step, StepError,
};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// A command typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a game, over the given range or the configured default.
    Start(Option<(i64, i64)>),
    /// The guess is right.
    Confirm,
    /// The secret is higher than the guess.
    Higher,
    /// The secret is lower than the guess.
    Lower,
    /// Abandon the game and go idle.
    Reset,
    /// Show the current state.
    Status,
    /// List commands.
    Help,
    /// Leave the surface.
    Quit,
}

/// Error parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// The first word is not a command.
    #[display("Unknown command: {:?} (type 'help')", _0)]
    Unknown(String),

    /// The command got the wrong number of arguments.
    #[display("Usage: {}", _0)]
    Usage(&'static str),

    /// A range bound is not an integer.
    #[display("{}", _0)]
    Start(StartError),
}

impl std::error::Error for ParseError {}

const START_USAGE: &str = "start <low> <high>";

fn parse_bound(token: &str) -> Result<i64, ParseError> {
    token
        .parse::<i64>()
        .map_err(|_| ParseError::Start(StartError::InvalidInput(token.to_string())))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseError::Unknown(String::new()));
        };
        let args: Vec<&str> = words.collect();

        let (command, usage) = match head.to_ascii_lowercase().as_str() {
            "start" | "s" => {
                return match args.as_slice() {
                    [] => Ok(Command::Start(None)),
                    [low, high] => Ok(Command::Start(Some((
                        parse_bound(low)?,
                        parse_bound(high)?,
                    )))),
                    _ => Err(ParseError::Usage(START_USAGE)),
                };
            }
            "confirm" | "yes" | "y" => (Command::Confirm, "confirm"),
            "higher" | "h" => (Command::Higher, "higher"),
            "lower" | "l" => (Command::Lower, "lower"),
            "reset" | "restart" | "r" => (Command::Reset, "reset"),
            "status" => (Command::Status, "status"),
            "help" | "?" => (Command::Help, "help"),
            "quit" | "exit" | "q" => (Command::Quit, "quit"),
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        // Only start takes arguments.
        if !args.is_empty() {
            return Err(ParseError::Usage(usage));
        }
        Ok(command)
    }
}

/// Commands `Surface::handle` carries out in a phase without an error.
pub fn enabled_commands(phase: Phase) -> &'static [&'static str] {
    match phase {
        Phase::Idle => &["start", "reset", "status", "help", "quit"],
        Phase::Running => &[
            "confirm", "higher", "lower", "reset", "start", "status", "help", "quit",
        ],
        Phase::Finished => &["reset", "start", "status", "help", "quit"],
    }
}

/// Something the surface shows in response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A new guess is on the table.
    Guess {
        /// The guess.
        guess: GuessIssued,
        /// The interval it came from, when configured to show it.
        interval: Option<Interval>,
    },
    /// The game ended.
    Over {
        /// How it ended.
        outcome: GameOver,
        /// Guesses issued.
        attempts: u32,
    },
    /// The engine went idle.
    Reset,
    /// Current state summary.
    Status {
        /// Lifecycle phase.
        phase: Phase,
        /// Guesses issued.
        attempts: u32,
        /// Last guess shown, if any.
        last_guess: Option<i64>,
    },
    /// Command list.
    Help(Phase),
    /// The command could not be carried out.
    Error(String),
    /// The user is leaving.
    Quit,
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Guess { guess, interval } => {
                write!(f, "{}", guess)?;
                if let Some(interval) = interval {
                    write!(f, "  (range {})", interval)?;
                }
                write!(f, "\nAttempts: {}", guess.attempts)
            }
            Reply::Over { outcome, attempts } => match outcome {
                GameOver::Success { .. } => write!(f, "🎉 {}", outcome),
                GameOver::Contradiction => {
                    write!(f, "{}\nAttempts: {}", outcome, attempts)
                }
            },
            Reply::Reset => write!(f, "Game reset.\nAttempts: 0"),
            Reply::Status {
                phase,
                attempts,
                last_guess,
            } => {
                write!(f, "Phase: {}  Attempts: {}", phase, attempts)?;
                if let Some(guess) = last_guess {
                    write!(f, "  Last guess: {}", guess)?;
                }
                write!(f, "\nAvailable: {}", enabled_commands(*phase).join(", "))
            }
            Reply::Help(phase) => {
                writeln!(f, "Commands:")?;
                writeln!(f, "  start <low> <high>  pick a secret in the range, then start")?;
                writeln!(f, "  confirm | y         the guess is right")?;
                writeln!(f, "  higher  | h         your number is higher")?;
                writeln!(f, "  lower   | l         your number is lower")?;
                writeln!(f, "  reset   | r         abandon the game")?;
                writeln!(f, "  status              show the current state")?;
                writeln!(f, "  quit    | q         leave")?;
                write!(f, "Available now: {}", enabled_commands(*phase).join(", "))
            }
            Reply::Error(message) => write!(f, "Error: {}", message),
            Reply::Quit => write!(f, "Bye!"),
        }
    }
}

/// Message shown when a game cannot start.
fn start_message(err: &StartError) -> String {
    match err {
        StartError::RangeInverted { .. } => "Start must be less than or equal to End.".to_string(),
        StartError::InvalidInput(_) => "Please enter valid numbers.".to_string(),
    }
}

fn step_message(command: &str, err: &StepError) -> String {
    match err {
        StepError::NotRunning(phase) => {
            format!("'{}' is not available: no game is running ({})", command, phase)
        }
        StepError::InvariantViolation(detail) => detail.clone(),
    }
}

/// Adapter between typed commands and the engine.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    engine: GuessEngine,
    config: GuessConfig,
}

impl Surface {
    /// Creates a surface over a fresh engine.
    pub fn new(config: GuessConfig) -> Self {
        Self {
            engine: GuessEngine::new(),
            config,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    /// Parses and handles one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(ParseError::Start(err)) => {
                debug!(error = %err, "Range rejected before reaching the engine");
                Reply::Error(start_message(&err))
            }
            Err(err) => Reply::Error(err.to_string()),
        }
    }

    /// Carries out a command against the engine.
    #[instrument(skip(self), fields(phase = %self.engine.phase()))]
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Start(range) => {
                let (low, high) =
                    range.unwrap_or((*self.config.default_low(), *self.config.default_high()));
                match self.engine.start(low, high) {
                    Ok(guess) => self.guess_reply(guess),
                    Err(err) => Reply::Error(start_message(&err)),
                }
            }
            Command::Confirm => match self.engine.confirm() {
                Ok(outcome) => self.over_reply(outcome),
                Err(err) => Reply::Error(step_message("confirm", &err)),
            },
            Command::Higher => {
                let result = self.engine.too_high();
                self.step_reply("higher", result)
            }
            Command::Lower => {
                let result = self.engine.too_low();
                self.step_reply("lower", result)
            }
            Command::Reset => {
                self.engine.reset();
                Reply::Reset
            }
            Command::Status => Reply::Status {
                phase: self.engine.phase(),
                attempts: self.engine.attempts(),
                last_guess: self.engine.last_guess(),
            },
            Command::Help => Reply::Help(self.engine.phase()),
            Command::Quit => Reply::Quit,
        }
    }

    fn step_reply(&self, command: &str, result: Result<Step, StepError>) -> Reply {
        match result {
            Ok(Step::Guess(guess)) => self.guess_reply(guess),
            Ok(Step::Over(outcome)) => self.over_reply(outcome),
            Err(err) => {
                warn!(command, error = %err, "Step rejected");
                Reply::Error(step_message(command, &err))
            }
        }
    }

    fn guess_reply(&self, guess: GuessIssued) -> Reply {
        let interval = if *self.config.show_interval() {
            self.engine.interval()
        } else {
            None
        };
        Reply::Guess { guess, interval }
    }

    fn over_reply(&self, outcome: GameOver) -> Reply {
        Reply::Over {
            outcome,
            attempts: self.engine.attempts(),
        }
    }
}

/// Interactive console loop over any reader and writer.
pub struct ConsoleSurface<R, W> {
    surface: Surface,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSurface<R, W> {
    /// Creates a console over `input` and `output`.
    pub fn new(config: GuessConfig, input: R, output: W) -> Self {
        Self {
            surface: Surface::new(config),
            input,
            output,
        }
    }

    /// Returns the underlying surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> std::io::Result<()> {
        info!("Console surface started");
        writeln!(self.output, "🧠 GUESS THE NUMBER")?;
        writeln!(self.output, "Set a range and let the computer guess")?;
        writeln!(self.output, "{}", Reply::Help(self.surface.engine().phase()))?;

        let mut buf = Vec::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                break;
            }
            // Undecodable bytes become U+FFFD and fail to parse as a command.
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            let reply = self.surface.handle_line(&line);
            writeln!(self.output, "{}", reply)?;
            if reply == Reply::Quit {
                break;
            }
        }

        info!("Console surface stopped");
        Ok(())
    }
}
