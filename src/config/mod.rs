//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BIAS_LENS` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment is a valid configuration:
//! lexicon sentiment, perturbation on, built-in catalog, pretty logs at `info`.
//!
//! # Example
//!
//! ```no_run
//! use bias_lens::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sentiment provider: {:?}", config.sentiment.provider);
//! ```

mod analysis;
mod error;
mod logging;
mod sentiment;

pub use analysis::{AnalysisConfig, FlagContextMode};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use sentiment::{SentimentConfig, SentimentProvider};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (level, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scoring engine configuration (perturbation, catalog, flag context)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Sentiment capability configuration (provider, token, timeout)
    #[serde(default)]
    pub sentiment: SentimentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BIAS_LENS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BIAS_LENS__SENTIMENT__PROVIDER=huggingface` -> `sentiment.provider = huggingface`
    /// - `BIAS_LENS__ANALYSIS__PERTURBATION_ENABLED=false` -> `analysis.perturbation_enabled = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BIAS_LENS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.analysis.validate()?;
        self.sentiment.validate()?;
        Ok(())
    }
}
