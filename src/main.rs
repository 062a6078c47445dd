//! Strictly Guess - Unified CLI
//!
//! Plays the bisection guessing game on the terminal or against an oracle.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_guess::{ConsoleSurface, GuessConfig, GuessEngine, HonestOracle, Interval, play_out};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => {
            let config = load_config(&cli.config)?;
            initialize_tracing(&config);
            run_play(config)
        }
        Command::Solve {
            low,
            high,
            secret,
            json,
        } => {
            let config = load_config(&cli.config)?;
            initialize_tracing(&config);
            run_solve(low, high, secret, json)
        }
        Command::Config => {
            print!("{}", GuessConfig::default_toml()?);
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Result<GuessConfig> {
    GuessConfig::load_or_default(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

/// Sends tracing output to stderr so it never mixes with the game text.
fn initialize_tracing(config: &GuessConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}

/// Run the interactive console surface
#[instrument(skip(config))]
fn run_play(config: GuessConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = ConsoleSurface::new(config, stdin.lock(), stdout.lock());
    console.run().context("Console I/O failed")?;
    Ok(())
}

/// Run a game answered by an honest oracle
#[instrument]
fn run_solve(low: i64, high: i64, secret: i64, json: bool) -> Result<()> {
    if low <= high && !Interval::new(low, high).contains(secret) {
        warn!(secret, low, high, "Secret lies outside the range; expect a contradiction");
    }

    let mut engine = GuessEngine::new();
    let mut oracle = HonestOracle::new(secret);
    let transcript = play_out(&mut engine, low, high, &mut oracle, |guess| {
        if !json {
            println!("{}  (attempt {})", guess, guess.attempts);
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
    } else {
        println!("{}", transcript.outcome);
    }
    Ok(())
}
