//! Application layer - the analyzer and its wiring.
//!
//! Orchestrates the pure domain signals over the ports. Nothing here fails
//! outward except configuration wiring in [`build_analyzer`].

mod bias_analyzer;
mod bootstrap;

pub use bias_analyzer::{BiasAnalyzer, DEFAULT_SENTIMENT_TIMEOUT};
pub use bootstrap::{build_analyzer, BootstrapError, RemoteBudget};
