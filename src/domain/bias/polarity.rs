//! Polarity types shared by the sentiment capability and the polarity estimator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::PolarityScore;

/// Binary polarity reported by a sentiment classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

/// One classifier verdict for a chunk of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentPrediction {
    pub polarity: Polarity,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
}

impl SentimentPrediction {
    /// Creates a prediction, clamping confidence into `[0, 1]`.
    pub fn new(polarity: Polarity, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            polarity,
            confidence,
        }
    }

    pub fn positive(confidence: f64) -> Self {
        Self::new(Polarity::Positive, confidence)
    }

    pub fn negative(confidence: f64) -> Self {
        Self::new(Polarity::Negative, confidence)
    }
}

/// Label of a [`SentimentRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Confidence of a coin-flip binary verdict.
pub const UNDECIDED_CONFIDENCE: f64 = 0.5;

/// Output of the standalone polarity estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub score: PolarityScore,
    pub label: SentimentLabel,
}

impl SentimentRecord {
    /// Neutral/0.0, used for short text and classifier failure.
    pub fn neutral() -> Self {
        Self {
            score: PolarityScore::NEUTRAL,
            label: SentimentLabel::Neutral,
        }
    }

    /// Positive confidence maps to `+confidence`, negative to `-confidence`.
    ///
    /// A binary verdict at or below [`UNDECIDED_CONFIDENCE`] carries no
    /// polarity and maps to [`SentimentRecord::neutral`].
    pub fn from_prediction(prediction: SentimentPrediction) -> Self {
        if prediction.confidence <= UNDECIDED_CONFIDENCE {
            return Self::neutral();
        }
        match prediction.polarity {
            Polarity::Positive => Self {
                score: PolarityScore::new(prediction.confidence),
                label: SentimentLabel::Positive,
            },
            Polarity::Negative => Self {
                score: PolarityScore::new(-prediction.confidence),
                label: SentimentLabel::Negative,
            },
        }
    }
}

impl Default for SentimentRecord {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_clamps_confidence() {
        assert_eq!(SentimentPrediction::positive(1.4).confidence, 1.0);
        assert_eq!(SentimentPrediction::negative(-0.2).confidence, 0.0);
        assert_eq!(SentimentPrediction::negative(f64::NAN).confidence, 0.0);
    }

    #[test]
    fn record_from_positive_prediction_is_positive() {
        let record = SentimentRecord::from_prediction(SentimentPrediction::positive(0.9));
        assert_eq!(record.label, SentimentLabel::Positive);
        assert_eq!(record.score.value(), 0.9);
    }

    #[test]
    fn record_from_negative_prediction_is_negated() {
        let record = SentimentRecord::from_prediction(SentimentPrediction::negative(0.75));
        assert_eq!(record.label, SentimentLabel::Negative);
        assert_eq!(record.score.value(), -0.75);
    }

    #[test]
    fn undecided_prediction_is_neutral() {
        let record = SentimentRecord::from_prediction(SentimentPrediction::positive(0.5));
        assert_eq!(record, SentimentRecord::neutral());
        let record = SentimentRecord::from_prediction(SentimentPrediction::negative(0.3));
        assert_eq!(record, SentimentRecord::neutral());
        let record = SentimentRecord::from_prediction(SentimentPrediction::negative(0.51));
        assert_eq!(record.label, SentimentLabel::Negative);
    }

    #[test]
    fn neutral_record_is_zero() {
        let record = SentimentRecord::neutral();
        assert_eq!(record.score.value(), 0.0);
        assert_eq!(record.label.to_string(), "Neutral");
    }
}
