//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Perturbation probability must be between 0 and 1")]
    InvalidPerturbationProbability,

    #[error("Perturbation magnitude must be between 0 and 0.5")]
    InvalidPerturbationMagnitude,

    #[error("Sentiment timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Sentiment base URL must start with http:// or https://")]
    InvalidBaseUrl,
}
