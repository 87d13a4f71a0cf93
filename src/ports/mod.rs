//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SentimentClassifier` - The external sentiment capability (remote model or local lexicon)
//! - `PerturbationSource` - Randomness for the final score perturbation

mod perturbation_source;
mod sentiment_classifier;

pub use perturbation_source::PerturbationSource;
pub use sentiment_classifier::{ClassifierInfo, SentimentClassifier, SentimentError};
