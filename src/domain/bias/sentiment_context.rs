//! Sentiment-Context Classifier - reads chunk polarity as political lean.
//!
//! This module holds the synchronous half of the signal: chunking, topic
//! co-occurrence and averaging. Calling the sentiment capability happens in
//! the application layer, which feeds each verdict to [`SentimentContext::chunk_lean`].

use serde::{Deserialize, Serialize};

use super::catalog::{PhraseCatalog, TopicCategory};
use super::lean::{BiasLabel, SignalDetail, SignalResult};
use super::polarity::Polarity;

/// Character budget of one chunk, the sentiment capability's input limit.
pub const CHUNK_CHAR_BUDGET: usize = 512;

/// Only the leading chunks are classified.
pub const MAX_CLASSIFIED_CHUNKS: usize = 3;

/// Chunks shorter than this (trimmed) are skipped.
const MIN_CHUNK_CHARS: usize = 10;

const LEFT_LEAN: f64 = 0.25;
const RIGHT_LEAN: f64 = 0.75;
const NEUTRAL_LEAN: f64 = 0.5;

const LEFT_THRESHOLD: f64 = 0.35;
const RIGHT_THRESHOLD: f64 = 0.65;

const LEFT_TOPICS: [TopicCategory; 2] = [TopicCategory::Social, TopicCategory::Environmental];
const RIGHT_TOPICS: [TopicCategory; 2] = [TopicCategory::Economic, TopicCategory::Social];

/// Evidence recorded by the sentiment signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    /// Lean value of every classified chunk, in text order.
    pub chunk_leans: Vec<f64>,
    pub average: f64,
}

/// Topic co-occurrence rules over a catalog.
pub struct SentimentContext<'a> {
    catalog: &'a PhraseCatalog,
}

impl<'a> SentimentContext<'a> {
    pub fn new(catalog: &'a PhraseCatalog) -> Self {
        Self { catalog }
    }

    /// Splits text into whitespace-bounded chunks of at most `budget` characters.
    ///
    /// Words are never split. A single word longer than the budget becomes a
    /// chunk of its own.
    pub fn chunk_text(text: &str, budget: usize) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_chars = 0;

        for word in text.split_whitespace() {
            let word_chars = word.chars().count();
            if current_chars > 0 && current_chars + 1 + word_chars > budget {
                chunks.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            if current_chars > 0 {
                current.push(' ');
                current_chars += 1;
            }
            current.push_str(word);
            current_chars += word_chars;
        }

        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }

    /// The chunks that should be sent to the sentiment capability.
    pub fn classifiable_chunks(text: &str) -> Vec<String> {
        Self::chunk_text(text, CHUNK_CHAR_BUDGET)
            .into_iter()
            .take(MAX_CLASSIFIED_CHUNKS)
            .filter(|chunk| chunk.trim().chars().count() >= MIN_CHUNK_CHARS)
            .collect()
    }

    /// Lean value of one chunk given its polarity.
    ///
    /// Positive sentiment prefers the Left reading when both topic families
    /// co-occur; negative sentiment prefers the Right reading.
    pub fn chunk_lean(&self, chunk: &str, polarity: Polarity) -> f64 {
        let lower = chunk.to_lowercase();
        let left = self.mentions_any(BiasLabel::Left, &LEFT_TOPICS, &lower);
        let right = self.mentions_any(BiasLabel::Right, &RIGHT_TOPICS, &lower);

        match polarity {
            Polarity::Positive if left => LEFT_LEAN,
            Polarity::Positive if right => RIGHT_LEAN,
            Polarity::Negative if right => RIGHT_LEAN,
            Polarity::Negative if left => LEFT_LEAN,
            _ => NEUTRAL_LEAN,
        }
    }

    /// Averages chunk leans into the signal result.
    pub fn summarize(chunk_leans: Vec<f64>) -> SignalResult {
        if chunk_leans.is_empty() {
            return SignalResult::center(SignalDetail::Sentiment(SentimentBreakdown {
                chunk_leans,
                average: NEUTRAL_LEAN,
            }));
        }

        let average = chunk_leans.iter().sum::<f64>() / chunk_leans.len() as f64;
        let label = if average < LEFT_THRESHOLD {
            BiasLabel::Left
        } else if average > RIGHT_THRESHOLD {
            BiasLabel::Right
        } else {
            BiasLabel::Center
        };

        SignalResult::new(
            average,
            label,
            SignalDetail::Sentiment(SentimentBreakdown {
                chunk_leans,
                average,
            }),
        )
    }

    fn mentions_any(&self, lean: BiasLabel, categories: &[TopicCategory], lower: &str) -> bool {
        categories.iter().any(|category| {
            self.catalog
                .phrases(lean, *category)
                .iter()
                .any(|phrase| lower.contains(phrase.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_text_respects_budget_and_words() {
        let chunks = SentimentContext::chunk_text("alpha beta gamma delta", 11);
        assert_eq!(chunks, vec!["alpha beta", "gamma delta"]);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 11);
        }
    }

    #[test]
    fn chunk_text_keeps_long_word_whole() {
        let chunks = SentimentContext::chunk_text("tiny supercalifragilistic end", 8);
        assert_eq!(chunks, vec!["tiny", "supercalifragilistic", "end"]);
    }

    #[test]
    fn chunk_text_of_blank_is_empty() {
        assert!(SentimentContext::chunk_text("   \n\t ", 512).is_empty());
    }

    #[test]
    fn chunk_text_rejoins_all_words() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = SentimentContext::chunk_text(text, 9);
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn classifiable_chunks_caps_at_three() {
        let sentence = "word ".repeat(400);
        let chunks = SentimentContext::classifiable_chunks(&sentence);
        assert_eq!(chunks.len(), MAX_CLASSIFIED_CHUNKS);
    }

    #[test]
    fn classifiable_chunks_skips_short_chunks() {
        assert!(SentimentContext::classifiable_chunks("tiny bit").is_empty());
    }

    #[test]
    fn positive_left_topic_is_left() {
        let catalog = PhraseCatalog::builtin();
        let context = SentimentContext::new(&catalog);
        let lean = context.chunk_lean("Renewable energy is a triumph for everyone", Polarity::Positive);
        assert_eq!(lean, LEFT_LEAN);
    }

    #[test]
    fn negative_right_topic_is_right() {
        let catalog = PhraseCatalog::builtin();
        let context = SentimentContext::new(&catalog);
        let lean = context.chunk_lean("Lower taxes were blocked again", Polarity::Negative);
        assert_eq!(lean, RIGHT_LEAN);
    }

    #[test]
    fn positive_right_topic_is_right() {
        let catalog = PhraseCatalog::builtin();
        let context = SentimentContext::new(&catalog);
        let lean = context.chunk_lean("Tax cuts were a wonderful success", Polarity::Positive);
        assert_eq!(lean, RIGHT_LEAN);
    }

    #[test]
    fn negative_left_topic_is_left() {
        let catalog = PhraseCatalog::builtin();
        let context = SentimentContext::new(&catalog);
        let lean = context.chunk_lean("Climate change keeps getting worse", Polarity::Negative);
        assert_eq!(lean, LEFT_LEAN);
    }

    #[test]
    fn negative_without_topics_is_neutral() {
        let catalog = PhraseCatalog::builtin();
        let context = SentimentContext::new(&catalog);
        let lean = context.chunk_lean("The harbour was cold and grey today", Polarity::Negative);
        assert_eq!(lean, NEUTRAL_LEAN);
    }

    #[test]
    fn mixed_topics_depend_on_polarity() {
        let catalog = PhraseCatalog::builtin();
        let context = SentimentContext::new(&catalog);
        let chunk = "Climate change and the free market";
        assert_eq!(context.chunk_lean(chunk, Polarity::Positive), LEFT_LEAN);
        assert_eq!(context.chunk_lean(chunk, Polarity::Negative), RIGHT_LEAN);
    }

    #[test]
    fn healthcare_is_not_a_sentiment_topic() {
        let catalog = PhraseCatalog::builtin();
        let context = SentimentContext::new(&catalog);
        let lean = context.chunk_lean("Medicare for all passed today", Polarity::Positive);
        assert_eq!(lean, NEUTRAL_LEAN);
    }

    #[test]
    fn summarize_empty_is_center() {
        let result = SentimentContext::summarize(Vec::new());
        assert_eq!(result.label, BiasLabel::Center);
        assert_eq!(result.score.value(), 0.5);
    }

    #[test]
    fn summarize_returns_raw_average() {
        let result = SentimentContext::summarize(vec![0.25, 0.25, 0.5]);
        assert_eq!(result.label, BiasLabel::Left);
        assert!((result.score.value() - 1.0 / 3.0).abs() < 1e-9);

        let result = SentimentContext::summarize(vec![0.75, 0.5]);
        assert_eq!(result.label, BiasLabel::Center);
        assert_eq!(result.score.value(), 0.625);

        let result = SentimentContext::summarize(vec![0.75]);
        assert_eq!(result.label, BiasLabel::Right);
    }
}
