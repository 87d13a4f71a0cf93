//! Keyword Pattern Matcher - weighted phrase evidence per lean.
//!
//! Counts catalog phrase occurrences per category, applies per-category
//! multipliers, and maps the dominant lean fraction into a fixed sub-range of
//! the Left-Right axis:
//!
//! | Dominant | Score range        |
//! |----------|--------------------|
//! | Left     | `0.15 ..= 0.5`     |
//! | Center   | `0.4 ..= 0.6`      |
//! | Right    | `0.65 ..= 0.9`     |
//!
//! Left is checked first, so a text with both Left and Right evidence above
//! the sensitivity threshold is treated as Left-dominant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::{PhraseCatalog, TopicCategory};
use super::lean::{is_insufficient_text, BiasLabel, SignalDetail, SignalResult};

/// A lean fraction must exceed this to be considered dominant.
pub const DOMINANCE_THRESHOLD: f64 = 0.1;

/// Weight of a phrase from the lean's boosted set.
const BOOSTED_WEIGHT: u32 = 2;

/// Raw lean fractions of the keyword evidence.
///
/// Left and Right fractions include category multipliers, so they can exceed
/// `1.0` when a text is entirely one-sided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LeanFractions {
    pub left: f64,
    pub right: f64,
    pub center: f64,
}

/// Evidence recorded by the keyword signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordBreakdown {
    /// Weighted occurrence count per Left category.
    pub left_categories: BTreeMap<TopicCategory, u32>,
    /// Weighted occurrence count per Right category.
    pub right_categories: BTreeMap<TopicCategory, u32>,
    pub center_count: u32,
    /// Sum of all weighted counts, before category multipliers.
    pub total_occurrences: u32,
    pub weighted_left: f64,
    pub weighted_right: f64,
    pub fractions: LeanFractions,
}

impl KeywordBreakdown {
    fn left_total(&self) -> u32 {
        self.left_categories.values().sum()
    }

    fn right_total(&self) -> u32 {
        self.right_categories.values().sum()
    }
}

/// Multiplier applied to a category's count before combining.
pub fn category_multiplier(lean: BiasLabel, category: TopicCategory) -> f64 {
    match (lean, category) {
        (BiasLabel::Left, TopicCategory::Economic) => 1.2,
        (BiasLabel::Left, TopicCategory::Social) => 1.3,
        (BiasLabel::Left, TopicCategory::Environmental) => 1.1,
        (BiasLabel::Left, TopicCategory::Healthcare) => 1.2,
        (BiasLabel::Right, TopicCategory::Economic) => 1.0,
        (BiasLabel::Right, TopicCategory::Social) => 1.1,
        (BiasLabel::Right, TopicCategory::Environmental) => 0.9,
        (BiasLabel::Right, TopicCategory::ForeignPolicy) => 1.0,
        _ => 1.0,
    }
}

/// Scores text by catalog phrase occurrences.
pub struct KeywordMatcher<'a> {
    catalog: &'a PhraseCatalog,
}

impl<'a> KeywordMatcher<'a> {
    pub fn new(catalog: &'a PhraseCatalog) -> Self {
        Self { catalog }
    }

    /// Runs the keyword signal.
    pub fn analyze(&self, text: &str) -> SignalResult {
        if is_insufficient_text(text) {
            return SignalResult::insufficient_text();
        }

        let lower = text.to_lowercase();
        let mut breakdown = KeywordBreakdown {
            left_categories: self.count_categories(BiasLabel::Left, &lower),
            right_categories: self.count_categories(BiasLabel::Right, &lower),
            center_count: self.weighted_count(BiasLabel::Center, &self.catalog.center, &lower),
            ..KeywordBreakdown::default()
        };

        breakdown.total_occurrences =
            breakdown.left_total() + breakdown.right_total() + breakdown.center_count;
        if breakdown.total_occurrences == 0 {
            return SignalResult::center(SignalDetail::Keyword(breakdown));
        }

        breakdown.weighted_left = weighted_total(BiasLabel::Left, &breakdown.left_categories);
        breakdown.weighted_right = weighted_total(BiasLabel::Right, &breakdown.right_categories);

        let total = f64::from(breakdown.total_occurrences);
        breakdown.fractions = LeanFractions {
            left: breakdown.weighted_left / total,
            right: breakdown.weighted_right / total,
            center: f64::from(breakdown.center_count) / total,
        };

        let (score, label) = map_fractions(&breakdown.fractions);
        SignalResult::new(score, label, SignalDetail::Keyword(breakdown))
    }

    fn count_categories(&self, lean: BiasLabel, lower: &str) -> BTreeMap<TopicCategory, u32> {
        self.catalog
            .categories(lean)
            .into_iter()
            .flatten()
            .map(|(category, phrases)| (*category, self.weighted_count(lean, phrases, lower)))
            .collect()
    }

    fn weighted_count(&self, lean: BiasLabel, phrases: &[String], lower: &str) -> u32 {
        phrases
            .iter()
            .map(|phrase| {
                let occurrences = lower.matches(phrase.as_str()).count() as u32;
                if self.catalog.is_boosted(lean, phrase) {
                    occurrences * BOOSTED_WEIGHT
                } else {
                    occurrences
                }
            })
            .sum()
    }
}

fn weighted_total(lean: BiasLabel, counts: &BTreeMap<TopicCategory, u32>) -> f64 {
    counts
        .iter()
        .map(|(category, count)| f64::from(*count) * category_multiplier(lean, *category))
        .sum()
}

/// Applies the dominance rule and maps the dominant fraction to a score.
fn map_fractions(fractions: &LeanFractions) -> (f64, BiasLabel) {
    if fractions.left > DOMINANCE_THRESHOLD {
        let score = (0.5 - fractions.left * 0.35).clamp(0.15, 0.5);
        (score, BiasLabel::Left)
    } else if fractions.right > DOMINANCE_THRESHOLD {
        let score = (0.65 + fractions.right * 0.25).max(0.65);
        (score, BiasLabel::Right)
    } else {
        (0.4 + fractions.center * 0.2, BiasLabel::Center)
    }
}
