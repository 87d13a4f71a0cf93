//! Sentiment Classifier Port - Interface for the external polarity capability.
//!
//! The scoring engine only needs a binary polarity and a confidence for a
//! chunk of text. How the model behind it is trained or hosted is outside the
//! engine's concern.
//!
//! # Contract
//!
//! - Input is a single chunk of at most [`CHUNK_CHAR_BUDGET`] characters
//! - Output is a [`SentimentPrediction`] with confidence in `[0, 1]`
//! - Errors are returned, never panicked; callers degrade them to a neutral result
//!
//! [`CHUNK_CHAR_BUDGET`]: crate::domain::bias::CHUNK_CHAR_BUDGET
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct AlwaysPositive;
//!
//! #[async_trait]
//! impl SentimentClassifier for AlwaysPositive {
//!     async fn classify(&self, chunk: &str) -> Result<SentimentPrediction, SentimentError> {
//!         Ok(SentimentPrediction::positive(0.99))
//!     }
//!
//!     fn classifier_info(&self) -> ClassifierInfo {
//!         ClassifierInfo::new("always-positive", "none")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::bias::SentimentPrediction;

/// Port for the external sentiment capability.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify one chunk of text as positive or negative.
    async fn classify(&self, chunk: &str) -> Result<SentimentPrediction, SentimentError>;

    /// Get classifier information (name, model).
    fn classifier_info(&self) -> ClassifierInfo;
}

/// Classifier information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierInfo {
    /// Classifier name (e.g., "huggingface", "lexicon").
    pub name: String,
    /// Model identifier.
    pub model: String,
    /// Whether the classifier calls a remote service.
    pub remote: bool,
}

impl ClassifierInfo {
    /// Creates new classifier info for a local classifier.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            remote: false,
        }
    }

    /// Marks the classifier as remote.
    pub fn with_remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }
}

/// Sentiment classifier errors.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable (including a model that is still loading).
    #[error("classifier unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API token rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl SentimentError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_secs: u32) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SentimentError::RateLimited { .. }
                | SentimentError::Unavailable { .. }
                | SentimentError::Network(_)
                | SentimentError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_info_builder_works() {
        let info = ClassifierInfo::new("huggingface", "distilbert").with_remote(true);
        assert_eq!(info.name, "huggingface");
        assert_eq!(info.model, "distilbert");
        assert!(info.remote);
    }

    #[test]
    fn sentiment_error_constructors_work() {
        assert!(matches!(
            SentimentError::rate_limited(30),
            SentimentError::RateLimited { retry_after_secs: 30 }
        ));
        assert!(matches!(
            SentimentError::timeout(10),
            SentimentError::Timeout { timeout_secs: 10 }
        ));
        assert!(matches!(
            SentimentError::invalid_request("empty"),
            SentimentError::InvalidRequest(_)
        ));
    }

    #[test]
    fn sentiment_error_retryable_classification() {
        assert!(SentimentError::rate_limited(30).is_retryable());
        assert!(SentimentError::unavailable("loading").is_retryable());
        assert!(SentimentError::network("reset").is_retryable());
        assert!(SentimentError::timeout(5).is_retryable());

        assert!(!SentimentError::AuthenticationFailed.is_retryable());
        assert!(!SentimentError::parse("bad json").is_retryable());
        assert!(!SentimentError::invalid_request("empty").is_retryable());
    }

    #[test]
    fn sentiment_error_displays_correctly() {
        assert_eq!(
            SentimentError::rate_limited(5).to_string(),
            "rate limited: retry after 5s"
        );
        assert_eq!(
            SentimentError::unavailable("model loading").to_string(),
            "classifier unavailable: model loading"
        );
    }
}
