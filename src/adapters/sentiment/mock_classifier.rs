//! Mock Sentiment Classifier for testing.
//!
//! Provides a configurable mock implementation of the SentimentClassifier port,
//! allowing tests to run without loading or calling a real model.
//!
//! # Features
//!
//! - Pre-configured predictions, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let classifier = MockSentimentClassifier::new()
//!     .with_prediction(SentimentPrediction::negative(0.8))
//!     .with_delay(Duration::from_millis(100));
//!
//! let prediction = classifier.classify("A chunk of text").await?;
//! assert_eq!(prediction.polarity, Polarity::Negative);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::bias::SentimentPrediction;
use crate::ports::{ClassifierInfo, SentimentClassifier, SentimentError};

/// Mock sentiment classifier for testing.
#[derive(Debug, Clone)]
pub struct MockSentimentClassifier {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Returned once the queue is exhausted.
    fallback_prediction: SentimentPrediction,
    info: ClassifierInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Chunks received, for verification.
    calls: Arc<Mutex<Vec<String>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(SentimentPrediction),
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Parse { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for SentimentError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => {
                SentimentError::rate_limited(retry_after_secs)
            }
            MockError::Unavailable { message } => SentimentError::unavailable(message),
            MockError::AuthenticationFailed => SentimentError::AuthenticationFailed,
            MockError::Network { message } => SentimentError::network(message),
            MockError::Parse { message } => SentimentError::parse(message),
            MockError::Timeout { timeout_secs } => SentimentError::timeout(timeout_secs),
        }
    }
}

impl Default for MockSentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockSentimentClassifier {
    /// Creates a new mock classifier that answers positive by default.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fallback_prediction: SentimentPrediction::positive(0.99),
            info: ClassifierInfo::new("mock", "mock-sentiment-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a prediction to the queue.
    pub fn with_prediction(self, prediction: SentimentPrediction) -> Self {
        locked(&self.responses).push_back(MockResponse::Success(prediction));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        locked(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets the prediction returned after the queue is exhausted.
    pub fn with_fallback_prediction(mut self, prediction: SentimentPrediction) -> Self {
        self.fallback_prediction = prediction;
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the classifier info.
    pub fn with_classifier_info(mut self, info: ClassifierInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this classifier.
    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Returns all chunks received.
    pub fn get_calls(&self) -> Vec<String> {
        locked(&self.calls).clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        locked(&self.calls).clear();
    }

    fn next_response(&self) -> MockResponse {
        locked(&self.responses)
            .pop_front()
            .unwrap_or(MockResponse::Success(self.fallback_prediction))
    }
}

#[async_trait]
impl SentimentClassifier for MockSentimentClassifier {
    async fn classify(&self, chunk: &str) -> Result<SentimentPrediction, SentimentError> {
        locked(&self.calls).push(chunk.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success(prediction) => Ok(prediction),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn classifier_info(&self) -> ClassifierInfo {
        self.info.clone()
    }
}
