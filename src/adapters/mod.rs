//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the scoring engine to external systems:
//! - `sentiment` - Sentiment classifiers (HuggingFace, lexicon, failover, mock)
//! - `perturbation` - Randomness sources for the final score

pub mod perturbation;
pub mod sentiment;

pub use perturbation::{FixedPerturbation, NoPerturbation, RandomPerturbation};
pub use sentiment::{
    FailoverClassifier, HuggingFaceClassifier, HuggingFaceConfig, LexiconClassifier,
    MockSentimentClassifier,
};
