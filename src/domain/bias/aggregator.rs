//! Bias Aggregator - combines the three signals into one verdict.
//!
//! Keyword evidence dominates the weighted sum. When the raw keyword fractions
//! are decisive an override rule fixes the label outright.
//!
//! The label thresholds are asymmetric (`< 0.48` Left, `> 0.65` Right). The
//! narrower Left band makes Left-leaning text easier to detect; this is a
//! calibration choice and is preserved as-is.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LeanScore;

use super::keyword_matcher::LeanFractions;
use super::lean::{BiasLabel, Confidence, SignalResult};

pub const KEYWORD_WEIGHT: f64 = 0.8;
pub const SENTIMENT_WEIGHT: f64 = 0.15;
pub const LOADED_WEIGHT: f64 = 0.05;

/// Raw keyword fraction above which the override rule fires.
pub const OVERRIDE_FRACTION: f64 = 0.5;

const LEFT_OVERRIDE_CEILING: f64 = 0.45;
const RIGHT_OVERRIDE_FLOOR: f64 = 0.7;

const LEFT_THRESHOLD: f64 = 0.48;
const RIGHT_THRESHOLD: f64 = 0.65;

/// The three signal outputs of one classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    pub keyword: SignalResult,
    pub sentiment: SignalResult,
    pub loaded: SignalResult,
}

impl SignalSet {
    /// All three signals short-circuited by the length guard.
    pub fn insufficient_text() -> Self {
        Self {
            keyword: SignalResult::insufficient_text(),
            sentiment: SignalResult::insufficient_text(),
            loaded: SignalResult::insufficient_text(),
        }
    }

    pub fn labels(&self) -> [BiasLabel; 3] {
        [self.keyword.label, self.sentiment.label, self.loaded.label]
    }

    /// Fixed-weight combination of the three scores.
    pub fn weighted_score(&self) -> f64 {
        self.keyword.score.value() * KEYWORD_WEIGHT
            + self.sentiment.score.value() * SENTIMENT_WEIGHT
            + self.loaded.score.value() * LOADED_WEIGHT
    }
}

/// Which override rule decided the label, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideRule {
    LeftKeywordDominance,
    RightKeywordDominance,
}

/// Aggregate verdict of one classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub final_score: LeanScore,
    pub final_label: BiasLabel,
    pub confidence: Confidence,
    pub override_rule: Option<OverrideRule>,
    pub signals: SignalSet,
}

impl AnalysisResult {
    /// Center/0.5 verdict for text below the length guard.
    pub fn insufficient_text() -> Self {
        let signals = SignalSet::insufficient_text();
        Self {
            final_score: LeanScore::CENTER,
            final_label: BiasLabel::Center,
            confidence: Confidence::from_labels(&signals.labels()),
            override_rule: None,
            signals,
        }
    }
}

/// Combines signals into an [`AnalysisResult`].
pub struct BiasAggregator;

impl BiasAggregator {
    /// Aggregates the signals.
    ///
    /// `perturbation` is added to the score after labelling and the sum is
    /// clamped to `[0, 1]`; it never changes the label.
    pub fn aggregate(
        signals: SignalSet,
        fractions: LeanFractions,
        perturbation: f64,
    ) -> AnalysisResult {
        let mut final_score = signals.weighted_score();

        let (final_label, override_rule) = if fractions.left > OVERRIDE_FRACTION {
            final_score = final_score.min(LEFT_OVERRIDE_CEILING);
            (BiasLabel::Left, Some(OverrideRule::LeftKeywordDominance))
        } else if fractions.right > OVERRIDE_FRACTION {
            final_score = final_score.max(RIGHT_OVERRIDE_FLOOR);
            (BiasLabel::Right, Some(OverrideRule::RightKeywordDominance))
        } else {
            (label_for(final_score), None)
        };

        let confidence = Confidence::from_labels(&signals.labels());
        let final_score = if perturbation.is_finite() {
            final_score + perturbation
        } else {
            final_score
        };

        AnalysisResult {
            final_score: LeanScore::new(final_score),
            final_label,
            confidence,
            override_rule,
            signals,
        }
    }
}

/// Threshold label for an un-overridden score.
pub fn label_for(score: f64) -> BiasLabel {
    if score < LEFT_THRESHOLD {
        BiasLabel::Left
    } else if score > RIGHT_THRESHOLD {
        BiasLabel::Right
    } else {
        BiasLabel::Center
    }
}
