//! Configuration for the guessing game binary.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the console surface and logging.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessConfig {
    /// Lower bound used by `start` when no range is typed.
    default_low: i64,

    /// Upper bound used by `start` when no range is typed.
    default_high: i64,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Show the remaining interval alongside each guess.
    show_interval: bool,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            default_low: 1,
            default_high: 100,
            log_filter: "warn,strictly_guess=info".to_string(),
            show_interval: false,
        }
    }
}

impl GuessConfig {
    /// Creates a configuration with the given default range.
    pub fn new(default_low: i64, default_high: i64) -> Self {
        Self {
            default_low,
            default_high,
            ..Self::default()
        }
    }

    /// Returns a copy that shows the interval alongside guesses.
    pub fn with_show_interval(mut self, show_interval: bool) -> Self {
        self.show_interval = show_interval;
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            default_low = config.default_low,
            default_high = config.default_high,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_low > self.default_high {
            return Err(ConfigError::new(format!(
                "default_low ({}) must be <= default_high ({})",
                self.default_low, self.default_high
            )));
        }
        Ok(())
    }

    /// Renders the default configuration as TOML.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
