//! Sentiment capability configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::sentiment::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Sentiment capability configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentConfig {
    /// Which classifier backs the sentiment signal
    #[serde(default)]
    pub provider: SentimentProvider,

    /// HuggingFace API token
    pub api_token: Option<String>,

    /// Inference API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Bound on one whole sentiment call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Fall back to the lexicon classifier on transient remote failures
    #[serde(default = "default_fallback_to_lexicon")]
    pub fallback_to_lexicon: bool,
}

/// Sentiment classifier type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SentimentProvider {
    #[default]
    Lexicon,
    HuggingFace,
    /// No classifier; the sentiment signal is always Center
    None,
}

impl SentimentConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a HuggingFace token is configured
    pub fn has_api_token(&self) -> bool {
        self.api_token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Validate sentiment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.provider == SentimentProvider::HuggingFace {
            if !self.has_api_token() {
                return Err(ValidationError::MissingRequired("SENTIMENT__API_TOKEN"));
            }
            if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
                return Err(ValidationError::InvalidBaseUrl);
            }
        }

        Ok(())
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            provider: SentimentProvider::default(),
            api_token: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            fallback_to_lexicon: default_fallback_to_lexicon(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_retries() -> u32 {
    2
}

fn default_fallback_to_lexicon() -> bool {
    true
}
