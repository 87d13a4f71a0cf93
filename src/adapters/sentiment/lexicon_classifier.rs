//! Lexicon Sentiment Classifier - offline, rule-based polarity.
//!
//! Word-list scoring with negation and intensifier handling. Lets the engine
//! run without a model endpoint. Much weaker than a trained model, and it only
//! knows the vocabulary below.
//!
//! Like a binary model it always answers: text with no known words comes back
//! Positive at confidence 0.5.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

use crate::domain::bias::SentimentPrediction;
use crate::ports::{ClassifierInfo, SentimentClassifier, SentimentError};

/// Rule-based sentiment classifier over a news vocabulary.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    words: HashMap<String, f64>,
    negations: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

/// Lexicon scoring for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconScore {
    /// Mean word score, `-1` to `1`.
    pub score: f64,
    /// Words that matched with their adjusted scores.
    pub matched_words: Vec<(String, f64)>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconClassifier {
    /// Creates a classifier with the built-in vocabulary.
    pub fn new() -> Self {
        let positive = [
            ("good", 0.5),
            ("great", 0.7),
            ("excellent", 0.8),
            ("success", 0.6),
            ("successful", 0.6),
            ("benefit", 0.5),
            ("benefits", 0.5),
            ("improve", 0.5),
            ("improved", 0.5),
            ("progress", 0.5),
            ("growth", 0.5),
            ("strong", 0.4),
            ("hope", 0.5),
            ("hopeful", 0.5),
            ("support", 0.3),
            ("protect", 0.4),
            ("win", 0.5),
            ("victory", 0.6),
            ("triumph", 0.7),
            ("thrive", 0.6),
            ("prosperity", 0.6),
            ("freedom", 0.4),
            ("fair", 0.4),
            ("safe", 0.4),
            ("innovation", 0.5),
            ("opportunity", 0.5),
            ("welcome", 0.4),
            ("praise", 0.6),
            ("celebrate", 0.6),
            ("healthy", 0.5),
            ("amazing", 0.8),
            ("fantastic", 0.8),
            ("brilliant", 0.7),
            ("heroic", 0.7),
            ("courageous", 0.6),
        ];

        let negative = [
            ("bad", -0.5),
            ("terrible", -0.8),
            ("awful", -0.8),
            ("horrible", -0.8),
            ("fail", -0.6),
            ("failed", -0.6),
            ("failure", -0.7),
            ("harm", -0.6),
            ("harmful", -0.6),
            ("damage", -0.6),
            ("threat", -0.5),
            ("threatens", -0.5),
            ("dangerous", -0.6),
            ("crisis", -0.7),
            ("disaster", -0.8),
            ("catastrophe", -0.9),
            ("devastating", -0.8),
            ("destroy", -0.8),
            ("destroying", -0.8),
            ("corrupt", -0.8),
            ("corruption", -0.8),
            ("scandal", -0.7),
            ("outrage", -0.6),
            ("outrageous", -0.7),
            ("shocking", -0.6),
            ("chaos", -0.7),
            ("fear", -0.5),
            ("blame", -0.5),
            ("attack", -0.5),
            ("crime", -0.6),
            ("violence", -0.8),
            ("unfair", -0.5),
            ("waste", -0.5),
            ("blocked", -0.4),
            ("collapse", -0.8),
            ("greedy", -0.7),
            ("evil", -0.9),
        ];

        let words = positive
            .into_iter()
            .chain(negative)
            .map(|(word, score)| (word.to_string(), score))
            .collect();

        let negations = [
            "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot", "can't",
            "don't", "doesn't", "didn't", "won't", "wouldn't", "shouldn't", "isn't", "aren't",
            "wasn't", "weren't", "hardly", "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let intensifiers = [
            ("very", 1.5),
            ("extremely", 2.0),
            ("highly", 1.5),
            ("deeply", 1.5),
            ("truly", 1.3),
            ("utterly", 1.8),
            ("slightly", 0.5),
            ("somewhat", 0.7),
        ]
        .into_iter()
        .map(|(word, multiplier)| (word.to_string(), multiplier))
        .collect();

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Adds or replaces a vocabulary word.
    pub fn with_word(mut self, word: &str, score: f64) -> Self {
        self.words.insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
        self
    }

    /// Scores text.
    ///
    /// A negation flips the next known word; an intensifier scales it. Either
    /// modifier is dropped at the first unknown word.
    pub fn score(&self, text: &str) -> LexiconScore {
        let mut matched_words = Vec::new();
        let mut negate_next = false;
        let mut intensifier = 1.0;

        for token in text.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            if self.negations.contains(&word) {
                negate_next = true;
                continue;
            }

            if let Some(multiplier) = self.intensifiers.get(&word) {
                intensifier = *multiplier;
                continue;
            }

            if let Some(base) = self.words.get(&word) {
                let mut score = *base;
                if negate_next {
                    score = -score;
                }
                score *= intensifier;
                matched_words.push((word, score));
            }
            negate_next = false;
            intensifier = 1.0;
        }

        let score = if matched_words.is_empty() {
            0.0
        } else {
            matched_words.iter().map(|(_, s)| s).sum::<f64>() / matched_words.len() as f64
        };

        LexiconScore {
            score: score.clamp(-1.0, 1.0),
            matched_words,
        }
    }

    /// Maps a lexicon score onto a binary prediction.
    fn predict(&self, text: &str) -> SentimentPrediction {
        let LexiconScore { score, .. } = self.score(text);
        let confidence = 0.5 + score.abs() / 2.0;
        if score < 0.0 {
            SentimentPrediction::negative(confidence)
        } else {
            SentimentPrediction::positive(confidence)
        }
    }
}

#[async_trait]
impl SentimentClassifier for LexiconClassifier {
    async fn classify(&self, chunk: &str) -> Result<SentimentPrediction, SentimentError> {
        if chunk.trim().is_empty() {
            return Err(SentimentError::invalid_request("empty chunk"));
        }
        Ok(self.predict(chunk))
    }

    fn classifier_info(&self) -> ClassifierInfo {
        ClassifierInfo::new("lexicon", "news-lexicon-v1")
    }
}
