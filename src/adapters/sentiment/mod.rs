//! Sentiment classifier adapters.
//!
//! Implementations of the `SentimentClassifier` port:
//!
//! - `HuggingFaceClassifier` - Hosted inference API (DistilBERT SST-2 by default)
//! - `LexiconClassifier` - Offline word-list classifier
//! - `FailoverClassifier` - Primary with fallback on transient errors
//! - `MockSentimentClassifier` - Configurable mock for testing

mod failover_classifier;
mod huggingface_classifier;
mod lexicon_classifier;
mod mock_classifier;

pub use failover_classifier::FailoverClassifier;
pub use huggingface_classifier::{
    backoff_delay, total_backoff, HuggingFaceClassifier, HuggingFaceConfig, DEFAULT_BASE_URL,
    DEFAULT_MODEL,
};
pub use lexicon_classifier::{LexiconClassifier, LexiconScore};
pub use mock_classifier::{MockError, MockResponse, MockSentimentClassifier};
