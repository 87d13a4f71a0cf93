//! HuggingFace Classifier - SentimentClassifier over the hosted inference API.
//!
//! Sends each chunk to a text-classification model (DistilBERT SST-2 by
//! default) and reads back the highest-scoring label.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HuggingFaceConfig::new(api_token)
//!     .with_model("distilbert-base-uncased-finetuned-sst-2-english")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let classifier = HuggingFaceClassifier::new(config)?;
//! ```
//!
//! # Response format
//!
//! The endpoint answers with either `[[{label, score}, ...]]` or
//! `[{label, score}, ...]`. Both are accepted. `POSITIVE`/`LABEL_1` map to
//! positive polarity, `NEGATIVE`/`LABEL_0` to negative.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::domain::bias::{Polarity, SentimentPrediction};
use crate::ports::{ClassifierInfo, SentimentClassifier, SentimentError};

/// Default hosted inference endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Default sentiment model.
pub const DEFAULT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Configuration for the HuggingFace classifier.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// API token for authentication.
    api_token: Secret<String>,
    /// Model identifier on the hub.
    pub model: String,
    /// Base URL of the inference API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl HuggingFaceConfig {
    /// Creates a new configuration with the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: Secret::new(api_token.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn api_token(&self) -> &str {
        self.api_token.expose_secret()
    }
}

/// HuggingFace inference API classifier.
pub struct HuggingFaceClassifier {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceClassifier {
    /// Creates a new classifier with the given configuration.
    pub fn new(config: HuggingFaceConfig) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SentimentError::invalid_request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the model endpoint URL.
    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Sends one chunk to the endpoint.
    async fn send_request(&self, chunk: &str) -> Result<Response, SentimentError> {
        self.client
            .post(self.model_url())
            .bearer_auth(self.config.api_token())
            .json(&InferenceRequest { inputs: chunk })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SentimentError::timeout(self.config.timeout.as_secs() as u32)
                } else if e.is_connect() {
                    SentimentError::network(format!("Connection failed: {}", e))
                } else {
                    SentimentError::network(e.to_string())
                }
            })
    }

    /// Maps an error status onto the port error.
    async fn handle_response_status(response: Response) -> Result<Response, SentimentError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status.as_u16(), error_body))
    }

    fn status_error(status: u16, error_body: String) -> SentimentError {
        match status {
            401 | 403 => SentimentError::AuthenticationFailed,
            429 => SentimentError::rate_limited(30),
            400 | 404 | 422 => SentimentError::InvalidRequest(error_body),
            503 => {
                let estimated = parse_estimated_time(&error_body);
                SentimentError::unavailable(format!(
                    "model loading (estimated {}s): {}",
                    estimated, error_body
                ))
            }
            500..=599 => {
                SentimentError::unavailable(format!("Server error {}: {}", status, error_body))
            }
            _ => SentimentError::network(format!("Unexpected status {}: {}", status, error_body)),
        }
    }

    async fn parse_response(response: Response) -> Result<SentimentPrediction, SentimentError> {
        let response = Self::handle_response_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| SentimentError::parse(format!("Failed to read response: {}", e)))?;
        parse_prediction(&body)
    }

    async fn classify_once(&self, chunk: &str) -> Result<SentimentPrediction, SentimentError> {
        let response = self.send_request(chunk).await?;
        Self::parse_response(response).await
    }
}

#[async_trait]
impl SentimentClassifier for HuggingFaceClassifier {
    async fn classify(&self, chunk: &str) -> Result<SentimentPrediction, SentimentError> {
        let mut retry_count = 0;

        loop {
            match self.classify_once(chunk).await {
                Ok(prediction) => return Ok(prediction),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    debug!(
                        model = %self.config.model,
                        retry = retry_count + 1,
                        error = %err,
                        "Retrying sentiment request"
                    );
                }
            }

            sleep(backoff_delay(retry_count)).await;
            retry_count += 1;
        }
    }

    fn classifier_info(&self) -> ClassifierInfo {
        ClassifierInfo::new("huggingface", &self.config.model).with_remote(true)
    }
}

/// Pause before retry number `retry + 1`: 1s, 2s, 4s, ...
pub fn backoff_delay(retry: u32) -> Duration {
    Duration::from_secs(1u64.checked_shl(retry).unwrap_or(u64::MAX))
}

/// Sum of every pause taken by a call that exhausts `max_retries`.
pub fn total_backoff(max_retries: u32) -> Duration {
    (0..max_retries).fold(Duration::ZERO, |total, retry| {
        total.saturating_add(backoff_delay(retry))
    })
}

// ----- Wire types -----

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    estimated_time: Option<f64>,
}

/// Parses an inference response body into a prediction.
fn parse_prediction(body: &str) -> Result<SentimentPrediction, SentimentError> {
    let response: InferenceResponse = serde_json::from_str(body)
        .map_err(|e| SentimentError::parse(format!("Failed to parse response: {}", e)))?;

    let candidates = match response {
        InferenceResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
        InferenceResponse::Flat(flat) => flat,
    };

    let best = candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| SentimentError::parse("No labels in response"))?;

    let polarity = match best.label.to_ascii_uppercase().as_str() {
        "POSITIVE" | "LABEL_1" | "POS" => Polarity::Positive,
        "NEGATIVE" | "LABEL_0" | "NEG" => Polarity::Negative,
        other => return Err(SentimentError::parse(format!("Unknown label: {}", other))),
    };

    Ok(SentimentPrediction::new(polarity, best.score))
}

/// Reads `estimated_time` from a model-loading error, rounded up.
fn parse_estimated_time(error_body: &str) -> u32 {
    serde_json::from_str::<ErrorBody>(error_body)
        .ok()
        .and_then(|body| body.estimated_time)
        .map(|secs| secs.max(0.0).ceil() as u32)
        .unwrap_or(20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = HuggingFaceConfig::new("hf_test")
            .with_model("custom/model")
            .with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(3))
            .with_max_retries(0);

        assert_eq!(config.model, "custom/model");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.api_token(), "hf_test");
    }

    #[test]
    fn backoff_doubles_per_retry() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(4));
        assert_eq!(total_backoff(0), Duration::ZERO);
        assert_eq!(total_backoff(3), Duration::from_secs(7));
        assert_eq!(total_backoff(200), Duration::MAX);
    }

    #[test]
    fn config_debug_redacts_token() {
        let config = HuggingFaceConfig::new("hf_secret_token");
        assert!(!format!("{:?}", config).contains("hf_secret_token"));
    }

    #[test]
    fn model_url_trims_trailing_slash() {
        let classifier = HuggingFaceClassifier::new(
            HuggingFaceConfig::new("t").with_base_url("http://localhost:8080/"),
        )
        .unwrap();
        assert_eq!(
            classifier.model_url(),
            format!("http://localhost:8080/models/{}", DEFAULT_MODEL)
        );
    }

    #[test]
    fn classifier_info_is_remote() {
        let classifier = HuggingFaceClassifier::new(HuggingFaceConfig::new("t")).unwrap();
        let info = classifier.classifier_info();
        assert_eq!(info.name, "huggingface");
        assert_eq!(info.model, DEFAULT_MODEL);
        assert!(info.remote);
    }

    #[test]
    fn parse_nested_response_picks_highest_score() {
        let body = r#"[[{"label":"NEGATIVE","score":0.12},{"label":"POSITIVE","score":0.88}]]"#;
        let prediction = parse_prediction(body).unwrap();
        assert_eq!(prediction.polarity, Polarity::Positive);
        assert_eq!(prediction.confidence, 0.88);
    }

    #[test]
    fn parse_flat_response() {
        let body = r#"[{"label":"NEGATIVE","score":0.97},{"label":"POSITIVE","score":0.03}]"#;
        let prediction = parse_prediction(body).unwrap();
        assert_eq!(prediction.polarity, Polarity::Negative);
        assert_eq!(prediction.confidence, 0.97);
    }

    #[test]
    fn parse_generic_label_names() {
        let body = r#"[[{"label":"LABEL_1","score":0.7},{"label":"LABEL_0","score":0.3}]]"#;
        assert_eq!(parse_prediction(body).unwrap().polarity, Polarity::Positive);
    }

    #[test]
    fn parse_rejects_empty_and_unknown() {
        assert!(matches!(parse_prediction("[[]]"), Err(SentimentError::Parse(_))));
        assert!(matches!(
            parse_prediction(r#"[{"label":"JOY","score":0.9}]"#),
            Err(SentimentError::Parse(_))
        ));
        assert!(matches!(
            parse_prediction(r#"{"error":"oops"}"#),
            Err(SentimentError::Parse(_))
        ));
    }

    #[test]
    fn status_errors_map_to_port_errors() {
        assert!(matches!(
            HuggingFaceClassifier::status_error(401, String::new()),
            SentimentError::AuthenticationFailed
        ));
        assert!(matches!(
            HuggingFaceClassifier::status_error(429, String::new()),
            SentimentError::RateLimited { .. }
        ));
        assert!(matches!(
            HuggingFaceClassifier::status_error(400, "bad".into()),
            SentimentError::InvalidRequest(_)
        ));
        let loading = HuggingFaceClassifier::status_error(
            503,
            r#"{"error":"Model is currently loading","estimated_time":12.4}"#.into(),
        );
        assert!(loading.is_retryable());
        assert!(loading.to_string().contains("estimated 13s"));
        assert!(HuggingFaceClassifier::status_error(502, String::new()).is_retryable());
    }

    #[test]
    fn estimated_time_defaults_when_missing() {
        assert_eq!(parse_estimated_time("not json"), 20);
        assert_eq!(parse_estimated_time(r#"{"estimated_time":1.0}"#), 1);
    }
}
