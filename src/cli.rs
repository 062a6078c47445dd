//! Command-line interface for strictly_guess.

use clap::{Parser, Subcommand};

/// Strictly Guess - the computer finds your number by bisection
#[derive(Parser, Debug)]
#[command(name = "strictly_guess")]
#[command(about = "Think of a number; the computer guesses it by halving the range", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "strictly_guess.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play,

    /// Let an honest oracle answer for a known secret
    Solve {
        /// Lower bound of the range
        #[arg(long, allow_negative_numbers = true)]
        low: i64,

        /// Upper bound of the range
        #[arg(long, allow_negative_numbers = true)]
        high: i64,

        /// The number the oracle is thinking of
        #[arg(long, allow_negative_numbers = true)]
        secret: i64,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration as TOML
    Config,
}
