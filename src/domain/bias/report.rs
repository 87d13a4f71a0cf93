//! Article report - the merged record handed to callers that store results.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LeanScore, PolarityScore};

use super::aggregator::{AnalysisResult, SignalSet};
use super::language_flags::LanguageFlag;
use super::lean::{BiasLabel, Confidence};
use super::polarity::{SentimentLabel, SentimentRecord};

/// Bias verdict, polarity and loaded-term evidence for one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleReport {
    pub bias_score: LeanScore,
    pub bias_label: BiasLabel,
    pub confidence: Confidence,
    pub sentiment_score: PolarityScore,
    pub sentiment_label: SentimentLabel,
    pub language_flags: Vec<LanguageFlag>,
    pub signals: SignalSet,
}

impl ArticleReport {
    pub fn new(
        analysis: AnalysisResult,
        sentiment: SentimentRecord,
        language_flags: Vec<LanguageFlag>,
    ) -> Self {
        Self {
            bias_score: analysis.final_score,
            bias_label: analysis.final_label,
            confidence: analysis.confidence,
            sentiment_score: sentiment.score,
            sentiment_label: sentiment.label,
            language_flags,
            signals: analysis.signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_merges_all_parts() {
        let flags = vec![LanguageFlag {
            snippet: "a shocking turn".to_string(),
            term: "shocking".to_string(),
        }];
        let report = ArticleReport::new(
            AnalysisResult::insufficient_text(),
            SentimentRecord::neutral(),
            flags.clone(),
        );
        assert_eq!(report.bias_label, BiasLabel::Center);
        assert_eq!(report.sentiment_label, SentimentLabel::Neutral);
        assert_eq!(report.language_flags, flags);
    }

    #[test]
    fn report_serializes_flat_fields() {
        let report = ArticleReport::new(
            AnalysisResult::insufficient_text(),
            SentimentRecord::neutral(),
            Vec::new(),
        );
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["bias_score"], 0.5);
        assert_eq!(json["bias_label"], "Center");
        assert_eq!(json["confidence"], "high");
        assert_eq!(json["sentiment_label"], "Neutral");
        assert!(json["language_flags"].as_array().unwrap().is_empty());
    }

    #[test]
    fn stored_report_with_out_of_range_score_is_rejected() {
        let report = ArticleReport::new(
            AnalysisResult::insufficient_text(),
            SentimentRecord::neutral(),
            Vec::new(),
        );
        let mut json = serde_json::to_value(&report).unwrap();
        let restored: ArticleReport = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(restored, report);

        json["bias_score"] = serde_json::json!(1.4);
        assert!(serde_json::from_value::<ArticleReport>(json).is_err());
    }
}
