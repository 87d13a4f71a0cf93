//! BiasAnalyzer - the engine's entry points.
//!
//! Holds the catalog, the optional sentiment capability and the perturbation
//! source, and runs the pure domain signals over them:
//!
//! - `classify_bias` → keyword + sentiment-context + loaded-language → aggregate
//! - `analyze_sentiment` → standalone polarity of the opening text
//! - `detect_loaded_language` → evidence snippets
//! - `analyze_text` → all of the above merged into an `ArticleReport`
//!
//! None of the entry points fail. A missing, failing or slow sentiment
//! classifier degrades its signal to Center/0.5 (or Neutral/0.0 for
//! polarity) and is logged at `warn`.

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::domain::bias::{
    is_insufficient_text, AnalysisResult, ArticleReport, BiasAggregator, BiasLabel, FlagContext,
    KeywordMatcher, LanguageFlag, LanguageFlagger, LoadedLanguageDetector, PhraseCatalog,
    SentimentContext, SentimentRecord, SignalResult, SignalSet, CHUNK_CHAR_BUDGET,
};
use crate::ports::{PerturbationSource, SentimentClassifier, SentimentError};

/// Default bound on one whole sentiment call.
pub const DEFAULT_SENTIMENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Multi-signal bias analyzer.
///
/// Construct once per process and share behind an `Arc`; every method takes
/// `&self` and holds no mutable state.
pub struct BiasAnalyzer {
    catalog: Arc<PhraseCatalog>,
    sentiment: Option<Arc<dyn SentimentClassifier>>,
    perturbation: Arc<dyn PerturbationSource>,
    sentiment_timeout: Duration,
    flag_context: FlagContext,
}

impl BiasAnalyzer {
    /// Creates a new BiasAnalyzer.
    pub fn new(
        catalog: Arc<PhraseCatalog>,
        sentiment: Option<Arc<dyn SentimentClassifier>>,
        perturbation: Arc<dyn PerturbationSource>,
    ) -> Self {
        Self {
            catalog,
            sentiment,
            perturbation,
            sentiment_timeout: DEFAULT_SENTIMENT_TIMEOUT,
            flag_context: FlagContext::default(),
        }
    }

    /// Sets the bound on one whole sentiment call.
    pub fn with_sentiment_timeout(mut self, timeout: Duration) -> Self {
        self.sentiment_timeout = timeout;
        self
    }

    /// Sets the snippet context of the loaded-term flagger.
    pub fn with_flag_context(mut self, context: FlagContext) -> Self {
        self.flag_context = context;
        self
    }

    pub fn catalog(&self) -> &PhraseCatalog {
        &self.catalog
    }

    /// Classifies the political lean of `text`.
    pub async fn classify_bias(&self, text: &str) -> AnalysisResult {
        let analysis_id = Uuid::new_v4();
        let span = info_span!(
            "classify_bias",
            %analysis_id,
            text_chars = text.chars().count(),
            catalog_version = %self.catalog.version
        );

        async move {
            if is_insufficient_text(text) {
                debug!("Text below minimum length, returning Center");
                return AnalysisResult::insufficient_text();
            }

            let keyword = KeywordMatcher::new(&self.catalog).analyze(text);
            debug!(label = %keyword.label, score = %keyword.score, "Keyword signal");

            let loaded = LoadedLanguageDetector::new(&self.catalog).analyze(text);
            debug!(label = %loaded.label, score = %loaded.score, "Loaded-language signal");

            let sentiment = self.sentiment_signal(text).await;
            debug!(label = %sentiment.label, score = %sentiment.score, "Sentiment signal");

            let fractions = keyword.keyword_fractions();
            let perturbation = self.perturbation.next_perturbation();
            let result = BiasAggregator::aggregate(
                SignalSet {
                    keyword,
                    sentiment,
                    loaded,
                },
                fractions,
                perturbation,
            );

            info!(
                final_label = %result.final_label,
                final_score = %result.final_score,
                confidence = %result.confidence,
                override_rule = ?result.override_rule,
                "Bias classification complete"
            );
            result
        }
        .instrument(span)
        .await
    }

    /// Score and label only.
    pub async fn classify_bias_score(&self, text: &str) -> (f64, BiasLabel) {
        let result = self.classify_bias(text).await;
        (result.final_score.value(), result.final_label)
    }

    /// Polarity of the first [`CHUNK_CHAR_BUDGET`] characters of `text`.
    ///
    /// Neutral/0.0 for short text, classifier failure, and undecided
    /// verdicts (confidence 0.5, e.g. no lexicon word matched).
    pub async fn analyze_sentiment(&self, text: &str) -> SentimentRecord {
        if is_insufficient_text(text) {
            return SentimentRecord::neutral();
        }
        let Some(classifier) = &self.sentiment else {
            return SentimentRecord::neutral();
        };

        let opening = truncate_chars(text, CHUNK_CHAR_BUDGET);
        match tokio::time::timeout(self.sentiment_timeout, classifier.classify(opening)).await {
            Ok(Ok(prediction)) => SentimentRecord::from_prediction(prediction),
            Ok(Err(err)) => {
                warn!(error = %err, "Sentiment polarity failed, returning Neutral");
                SentimentRecord::neutral()
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.sentiment_timeout.as_millis() as u64,
                    "Sentiment polarity timed out, returning Neutral"
                );
                SentimentRecord::neutral()
            }
        }
    }

    /// Loaded-term snippets in `text`, at most five.
    pub fn detect_loaded_language(&self, text: &str) -> Vec<LanguageFlag> {
        LanguageFlagger::new(&self.catalog, self.flag_context).detect(text)
    }

    /// Full report: bias verdict, polarity and loaded-term snippets.
    pub async fn analyze_text(&self, text: &str) -> ArticleReport {
        let (analysis, sentiment) =
            futures::join!(self.classify_bias(text), self.analyze_sentiment(text));
        let flags = self.detect_loaded_language(text);
        ArticleReport::new(analysis, sentiment, flags)
    }

    /// Sentiment-context signal, degraded to Center on any failure.
    async fn sentiment_signal(&self, text: &str) -> SignalResult {
        let Some(classifier) = &self.sentiment else {
            return SignalResult::unavailable("no sentiment classifier configured");
        };

        let call = self.classify_chunks(classifier.as_ref(), text);
        match tokio::time::timeout(self.sentiment_timeout, call).await {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                warn!(
                    classifier = %classifier.classifier_info().name,
                    error = %err,
                    "Sentiment classification failed, signal degraded to Center"
                );
                SignalResult::unavailable(err.to_string())
            }
            Err(_) => {
                let timeout_ms = self.sentiment_timeout.as_millis() as u64;
                warn!(
                    classifier = %classifier.classifier_info().name,
                    timeout_ms,
                    "Sentiment classification timed out, signal degraded to Center"
                );
                SignalResult::unavailable(format!("timed out after {}ms", timeout_ms))
            }
        }
    }

    /// Classifies the leading chunks concurrently. One failure fails the call.
    async fn classify_chunks(
        &self,
        classifier: &dyn SentimentClassifier,
        text: &str,
    ) -> Result<SignalResult, SentimentError> {
        let chunks = SentimentContext::classifiable_chunks(text);
        let predictions =
            try_join_all(chunks.iter().map(|chunk| classifier.classify(chunk))).await?;

        let context = SentimentContext::new(&self.catalog);
        let leans = chunks
            .iter()
            .zip(predictions)
            .map(|(chunk, prediction)| context.chunk_lean(chunk, prediction.polarity))
            .collect();

        Ok(SentimentContext::summarize(leans))
    }
}

/// The first `max_chars` characters of `text`.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
