//! Analyzer wiring from configuration.
//!
//! The one place where configuration becomes concrete adapters. Callers
//! build a [`BiasAnalyzer`] once per process and share it.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::perturbation::{NoPerturbation, RandomPerturbation};
use crate::adapters::sentiment::{
    total_backoff, FailoverClassifier, HuggingFaceClassifier, HuggingFaceConfig,
    LexiconClassifier,
};
use crate::config::{AppConfig, SentimentConfig, SentimentProvider, ValidationError};
use crate::domain::bias::{CatalogError, PhraseCatalog};
use crate::ports::{PerturbationSource, SentimentClassifier, SentimentError};

use super::BiasAnalyzer;

/// Errors raised while wiring the analyzer.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Failed to load phrase catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to create sentiment classifier: {0}")]
    Classifier(#[from] SentimentError),
}

/// Time left to the fallback classifier after the remote retry chain.
const FALLBACK_RESERVE: Duration = Duration::from_millis(500);

/// Shortest per-request timeout worth attempting.
const MIN_REQUEST_TIMEOUT: Duration = Duration::from_millis(500);

/// How one remote sentiment call spends the configured `timeout_secs`.
///
/// Every request, every backoff pause and [`FALLBACK_RESERVE`] fit inside the
/// analyzer's bound, so a hanging endpoint surfaces as a retryable timeout
/// before the analyzer gives up on the whole call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteBudget {
    pub request_timeout: Duration,
    pub max_retries: u32,
}

impl RemoteBudget {
    /// Splits `total` across up to `max_retries + 1` requests, dropping
    /// retries that would squeeze a request below [`MIN_REQUEST_TIMEOUT`].
    pub fn split(total: Duration, max_retries: u32) -> Self {
        // Beyond 63 retries the backoff alone overflows any Duration.
        for retries in (0..=max_retries.min(63)).rev() {
            let reserved = total_backoff(retries).saturating_add(FALLBACK_RESERVE);
            if let Some(remaining) = total.checked_sub(reserved) {
                let request_timeout = remaining / (retries + 1);
                if request_timeout >= MIN_REQUEST_TIMEOUT {
                    return Self {
                        request_timeout,
                        max_retries: retries,
                    };
                }
            }
        }

        Self {
            request_timeout: total / 2,
            max_retries: 0,
        }
    }

    /// Longest time the remote classifier can spend before giving up.
    pub fn worst_case(&self) -> Duration {
        self.request_timeout
            .saturating_mul(self.max_retries + 1)
            .saturating_add(total_backoff(self.max_retries))
    }
}

/// Builds an analyzer from validated configuration.
pub fn build_analyzer(config: &AppConfig) -> Result<BiasAnalyzer, BootstrapError> {
    config.validate()?;

    let catalog = match &config.analysis.catalog_path {
        Some(path) => Arc::new(PhraseCatalog::from_yaml_file(path)?),
        None => PhraseCatalog::shared_builtin(),
    };

    let sentiment = build_classifier(&config.sentiment)?;

    let perturbation: Arc<dyn PerturbationSource> = if config.analysis.perturbation_enabled {
        Arc::new(RandomPerturbation::new(
            config.analysis.perturbation_probability,
            config.analysis.perturbation_magnitude,
        ))
    } else {
        Arc::new(NoPerturbation)
    };

    info!(
        catalog_version = %catalog.version,
        phrases = catalog.phrase_count(),
        provider = ?config.sentiment.provider,
        perturbation_enabled = config.analysis.perturbation_enabled,
        "Bias analyzer configured"
    );

    Ok(BiasAnalyzer::new(catalog, sentiment, perturbation)
        .with_sentiment_timeout(config.sentiment.timeout())
        .with_flag_context(config.analysis.flag_context()))
}

fn build_classifier(
    config: &SentimentConfig,
) -> Result<Option<Arc<dyn SentimentClassifier>>, BootstrapError> {
    let classifier: Arc<dyn SentimentClassifier> = match config.provider {
        SentimentProvider::None => return Ok(None),
        SentimentProvider::Lexicon => Arc::new(LexiconClassifier::new()),
        SentimentProvider::HuggingFace => {
            let token = config
                .api_token
                .clone()
                .ok_or(ValidationError::MissingRequired("SENTIMENT__API_TOKEN"))?;
            let budget = RemoteBudget::split(config.timeout(), config.max_retries);
            if budget.max_retries < config.max_retries {
                warn!(
                    configured = config.max_retries,
                    effective = budget.max_retries,
                    timeout_secs = config.timeout_secs,
                    "Sentiment timeout too short for configured retries"
                );
            }
            let hf_config = HuggingFaceConfig::new(token)
                .with_model(config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(budget.request_timeout)
                .with_max_retries(budget.max_retries);
            let remote: Arc<dyn SentimentClassifier> =
                Arc::new(HuggingFaceClassifier::new(hf_config)?);

            if config.fallback_to_lexicon {
                Arc::new(FailoverClassifier::new(remote).with_fallback(Arc::new(LexiconClassifier::new())))
            } else {
                remote
            }
        }
    };
    Ok(Some(classifier))
}
