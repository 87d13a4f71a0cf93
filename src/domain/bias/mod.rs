//! Bias module - multi-signal political lean scoring.
//!
//! Pure, synchronous domain logic. Three independent signals read the same
//! [`PhraseCatalog`]:
//!
//! - [`KeywordMatcher`] - weighted topical phrase counts
//! - [`SentimentContext`] - chunk polarity reinterpreted through topic co-occurrence
//! - [`LoadedLanguageDetector`] - charged vocabulary and partisan overrides
//!
//! [`BiasAggregator`] combines them into an [`AnalysisResult`]. The
//! [`LanguageFlagger`] runs alongside to surface evidence snippets.

mod aggregator;
mod catalog;
mod keyword_matcher;
mod language_flags;
mod lean;
mod loaded_language;
mod polarity;
mod report;
mod sentiment_context;

pub use aggregator::{
    label_for, AnalysisResult, BiasAggregator, OverrideRule, SignalSet, KEYWORD_WEIGHT,
    LOADED_WEIGHT, OVERRIDE_FRACTION, SENTIMENT_WEIGHT,
};
pub use catalog::{
    BoostedPhrases, CatalogError, DirectionCues, LoadedCategory, OverridePhrases, PhraseCatalog,
    TopicCategory, BUILTIN_CATALOG_VERSION,
};
pub use keyword_matcher::{
    category_multiplier, KeywordBreakdown, KeywordMatcher, LeanFractions, DOMINANCE_THRESHOLD,
};
pub use language_flags::{
    FlagContext, LanguageFlag, LanguageFlagger, DEFAULT_CONTEXT_CHARS, DEFAULT_CONTEXT_TOKENS,
    MAX_FLAGS,
};
pub use lean::{
    is_insufficient_text, BiasLabel, Confidence, SignalDetail, SignalResult, MIN_TEXT_CHARS,
};
pub use loaded_language::{category_weight, LoadedBreakdown, LoadedLanguageDetector};
pub use polarity::{
    Polarity, SentimentLabel, SentimentPrediction, SentimentRecord, UNDECIDED_CONFIDENCE,
};
pub use report::ArticleReport;
pub use sentiment_context::{
    SentimentBreakdown, SentimentContext, CHUNK_CHAR_BUDGET, MAX_CLASSIFIED_CHUNKS,
};
