//! Lean labels, confidence levels, and the uniform signal output shape.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::LeanScore;

use super::keyword_matcher::{KeywordBreakdown, LeanFractions};
use super::loaded_language::LoadedBreakdown;
use super::sentiment_context::SentimentBreakdown;

/// Texts whose trimmed length is below this many characters carry no signal.
pub const MIN_TEXT_CHARS: usize = 10;

/// Returns true when `text` is too short to analyze.
pub fn is_insufficient_text(text: &str) -> bool {
    text.trim().chars().count() < MIN_TEXT_CHARS
}

/// Position on the Left-Center-Right axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BiasLabel {
    Left,
    Center,
    Right,
}

impl BiasLabel {
    /// Every label, in axis order.
    pub const ALL: [BiasLabel; 3] = [BiasLabel::Left, BiasLabel::Center, BiasLabel::Right];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            BiasLabel::Left => "Left",
            BiasLabel::Center => "Center",
            BiasLabel::Right => "Right",
        }
    }
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How strongly the independent signals agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Derives confidence from the labels produced by the signals.
    ///
    /// `High` when any label occurs at least twice, `Medium` when any label
    /// occurs at all, `Low` otherwise. With three signals the `Low` branch
    /// can only be hit by an empty label set.
    pub fn from_labels(labels: &[BiasLabel]) -> Self {
        let max_agreement = BiasLabel::ALL
            .iter()
            .map(|candidate| labels.iter().filter(|l| *l == candidate).count())
            .max()
            .unwrap_or(0);

        match max_agreement {
            n if n >= 2 => Confidence::High,
            1 => Confidence::Medium,
            _ => Confidence::Low,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Evidence attached to a [`SignalResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalDetail {
    /// Text was shorter than [`MIN_TEXT_CHARS`].
    InsufficientText,
    /// The signal could not be computed (external capability missing or failed).
    Unavailable { reason: String },
    Keyword(KeywordBreakdown),
    Sentiment(SentimentBreakdown),
    Loaded(LoadedBreakdown),
}

/// Output of one of the three analysis signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub score: LeanScore,
    pub label: BiasLabel,
    pub detail: SignalDetail,
}

impl SignalResult {
    /// Creates a signal result, clamping the score into `[0, 1]`.
    pub fn new(score: f64, label: BiasLabel, detail: SignalDetail) -> Self {
        Self {
            score: LeanScore::new(score),
            label,
            detail,
        }
    }

    /// Center/0.5 with the given detail.
    pub fn center(detail: SignalDetail) -> Self {
        Self {
            score: LeanScore::CENTER,
            label: BiasLabel::Center,
            detail,
        }
    }

    /// Center/0.5 for text below the length guard.
    pub fn insufficient_text() -> Self {
        Self::center(SignalDetail::InsufficientText)
    }

    /// Center/0.5 for a signal whose inputs were unavailable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::center(SignalDetail::Unavailable {
            reason: reason.into(),
        })
    }

    /// Raw keyword fractions, or all zeros when this is not a keyword result.
    pub fn keyword_fractions(&self) -> LeanFractions {
        match &self.detail {
            SignalDetail::Keyword(breakdown) => breakdown.fractions,
            _ => LeanFractions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_text_counts_trimmed_characters() {
        assert!(is_insufficient_text(""));
        assert!(is_insufficient_text("Hi"));
        assert!(is_insufficient_text("   123456789   "));
        assert!(!is_insufficient_text("1234567890"));
    }

    #[test]
    fn insufficient_text_counts_characters_not_bytes() {
        // nine characters, eighteen bytes
        assert!(is_insufficient_text("ééééééééé"));
    }

    #[test]
    fn confidence_high_when_two_agree() {
        let labels = [BiasLabel::Left, BiasLabel::Left, BiasLabel::Right];
        assert_eq!(Confidence::from_labels(&labels), Confidence::High);
    }

    #[test]
    fn confidence_medium_when_all_differ() {
        let labels = [BiasLabel::Left, BiasLabel::Center, BiasLabel::Right];
        assert_eq!(Confidence::from_labels(&labels), Confidence::Medium);
    }

    #[test]
    fn confidence_low_only_without_labels() {
        assert_eq!(Confidence::from_labels(&[]), Confidence::Low);
    }

    #[test]
    fn confidence_never_low_for_three_labels() {
        for a in BiasLabel::ALL {
            for b in BiasLabel::ALL {
                for c in BiasLabel::ALL {
                    assert_ne!(Confidence::from_labels(&[a, b, c]), Confidence::Low);
                }
            }
        }
    }

    #[test]
    fn bias_label_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&BiasLabel::Left).unwrap(), "\"Left\"");
        assert_eq!(serde_json::to_string(&BiasLabel::Center).unwrap(), "\"Center\"");
    }

    #[test]
    fn confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
    }

    #[test]
    fn signal_detail_is_tagged() {
        let json = serde_json::to_string(&SignalResult::insufficient_text()).unwrap();
        assert!(json.contains("\"kind\":\"insufficient_text\""));
        assert!(json.contains("\"score\":0.5"));
    }

    #[test]
    fn non_keyword_signal_has_zero_fractions() {
        let fractions = SignalResult::unavailable("offline").keyword_fractions();
        assert_eq!(fractions, LeanFractions::default());
    }
}
