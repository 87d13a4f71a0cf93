//! Failover Sentiment Classifier - primary classifier with an optional fallback.
//!
//! When the primary fails with a transient error (rate limit, unavailable,
//! timeout, network), the same chunk is sent to the fallback. Permanent
//! errors such as a rejected token are returned as-is.
//!
//! # Example
//!
//! ```ignore
//! let primary = HuggingFaceClassifier::new(hf_config)?;
//! let classifier = FailoverClassifier::new(Arc::new(primary))
//!     .with_fallback(Arc::new(LexiconClassifier::new()));
//! ```

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::warn;

use crate::domain::bias::SentimentPrediction;
use crate::ports::{ClassifierInfo, SentimentClassifier, SentimentError};

/// Sentiment classifier wrapper with automatic failover.
pub struct FailoverClassifier {
    primary: Arc<dyn SentimentClassifier>,
    fallback: Option<Arc<dyn SentimentClassifier>>,
    fallback_count: AtomicU64,
}

impl FailoverClassifier {
    /// Creates a failover classifier with only a primary.
    pub fn new(primary: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            primary,
            fallback: None,
            fallback_count: AtomicU64::new(0),
        }
    }

    /// Adds a fallback classifier.
    pub fn with_fallback(mut self, fallback: Arc<dyn SentimentClassifier>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Number of chunks answered by the fallback so far.
    pub fn fallback_count(&self) -> u64 {
        self.fallback_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SentimentClassifier for FailoverClassifier {
    async fn classify(&self, chunk: &str) -> Result<SentimentPrediction, SentimentError> {
        match self.primary.classify(chunk).await {
            Ok(prediction) => Ok(prediction),
            Err(err) if err.is_retryable() => match &self.fallback {
                Some(fallback) => {
                    warn!(
                        primary = %self.primary.classifier_info().name,
                        fallback = %fallback.classifier_info().name,
                        error = %err,
                        "Sentiment classifier failing over"
                    );
                    self.fallback_count.fetch_add(1, Ordering::Relaxed);
                    fallback.classify(chunk).await
                }
                None => Err(err),
            },
            Err(err) => Err(err),
        }
    }

    fn classifier_info(&self) -> ClassifierInfo {
        self.primary.classifier_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sentiment::{MockError, MockSentimentClassifier};
    use crate::domain::bias::Polarity;

    fn primary_failing_with(error: MockError) -> MockSentimentClassifier {
        MockSentimentClassifier::new().with_error(error)
    }

    #[tokio::test]
    async fn primary_success_does_not_touch_fallback() {
        let primary = MockSentimentClassifier::new()
            .with_prediction(SentimentPrediction::negative(0.9));
        let fallback = MockSentimentClassifier::new();
        let classifier = FailoverClassifier::new(Arc::new(primary))
            .with_fallback(Arc::new(fallback.clone()));

        let prediction = classifier.classify("a chunk of text").await.unwrap();

        assert_eq!(prediction.polarity, Polarity::Negative);
        assert_eq!(fallback.call_count(), 0);
        assert_eq!(classifier.fallback_count(), 0);
    }

    #[tokio::test]
    async fn retryable_error_uses_fallback() {
        let primary = primary_failing_with(MockError::Unavailable {
            message: "model loading".into(),
        });
        let fallback = MockSentimentClassifier::new()
            .with_prediction(SentimentPrediction::negative(0.7));
        let classifier = FailoverClassifier::new(Arc::new(primary))
            .with_fallback(Arc::new(fallback.clone()));

        let prediction = classifier.classify("a chunk of text").await.unwrap();

        assert_eq!(prediction, SentimentPrediction::negative(0.7));
        assert_eq!(fallback.get_calls(), vec!["a chunk of text"]);
        assert_eq!(classifier.fallback_count(), 1);
    }

    #[tokio::test]
    async fn permanent_error_is_not_failed_over() {
        let primary = primary_failing_with(MockError::AuthenticationFailed);
        let fallback = MockSentimentClassifier::new();
        let classifier = FailoverClassifier::new(Arc::new(primary))
            .with_fallback(Arc::new(fallback.clone()));

        let result = classifier.classify("a chunk of text").await;

        assert!(matches!(result, Err(SentimentError::AuthenticationFailed)));
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn retryable_error_without_fallback_is_returned() {
        let primary = primary_failing_with(MockError::RateLimited {
            retry_after_secs: 10,
        });
        let classifier = FailoverClassifier::new(Arc::new(primary));

        let result = classifier.classify("a chunk of text").await;
        assert!(matches!(result, Err(SentimentError::RateLimited { .. })));
    }

    #[test]
    fn reports_primary_info() {
        let classifier = FailoverClassifier::new(Arc::new(MockSentimentClassifier::new()))
            .with_fallback(Arc::new(MockSentimentClassifier::new()));
        assert_eq!(classifier.classifier_info().name, "mock");
    }
}
