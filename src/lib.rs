//! Bias Lens - Multi-signal political bias scoring for article text
//!
//! Three independent signals (topical keywords, sentiment in topical
//! context, loaded language) are combined into a Left / Center / Right
//! verdict with a score in `[0, 1]` and a confidence level.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use bias_lens::adapters::{LexiconClassifier, NoPerturbation};
//! use bias_lens::application::BiasAnalyzer;
//! use bias_lens::domain::bias::PhraseCatalog;
//!
//! # async fn run() {
//! let analyzer = BiasAnalyzer::new(
//!     PhraseCatalog::shared_builtin(),
//!     Some(Arc::new(LexiconClassifier::new())),
//!     Arc::new(NoPerturbation),
//! );
//! let result = analyzer.classify_bias("Tax cuts create jobs and grow the economy.").await;
//! println!("{} ({})", result.final_label, result.final_score);
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
