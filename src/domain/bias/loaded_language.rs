//! Loaded-Language Detector - charged vocabulary as a directional signal.
//!
//! Direction is inferred from literal cue words, not meaning. Treat the
//! result as a coarse heuristic: "corrupt" pushes toward Right whoever it is
//! aimed at.

use serde::{Deserialize, Serialize};

use super::catalog::{LoadedCategory, PhraseCatalog};
use super::lean::{is_insufficient_text, BiasLabel, SignalDetail, SignalResult};

/// Weight of each loaded-language category in the weighted sum.
pub fn category_weight(category: LoadedCategory) -> f64 {
    match category {
        LoadedCategory::Emotional => 0.4,
        LoadedCategory::Judgmental => 0.6,
        LoadedCategory::Partisan => 1.0,
    }
}

const STRONG_THRESHOLD: f64 = 1.5;
const MODERATE_THRESHOLD: f64 = 0.5;

const OVERRIDE_RIGHT_SCORE: f64 = 0.8;
const OVERRIDE_LEFT_SCORE: f64 = 0.2;
const STRONG_RIGHT_SCORE: f64 = 0.75;
const STRONG_LEFT_SCORE: f64 = 0.25;
const MODERATE_RIGHT_SCORE: f64 = 0.6;
const MODERATE_LEFT_SCORE: f64 = 0.4;

/// Evidence recorded by the loaded-language signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadedBreakdown {
    /// Distinct emotional phrases present.
    pub emotional: u32,
    pub judgmental: u32,
    pub partisan: u32,
    pub weighted_sum: f64,
    /// Phrases found, in catalog order.
    pub matched_phrases: Vec<String>,
    /// The override phrase that decided the label, if any.
    pub override_phrase: Option<String>,
}

/// Scores text by its loaded vocabulary.
pub struct LoadedLanguageDetector<'a> {
    catalog: &'a PhraseCatalog,
}

impl<'a> LoadedLanguageDetector<'a> {
    pub fn new(catalog: &'a PhraseCatalog) -> Self {
        Self { catalog }
    }

    /// Runs the loaded-language signal.
    pub fn analyze(&self, text: &str) -> SignalResult {
        if is_insufficient_text(text) {
            return SignalResult::insufficient_text();
        }

        let lower = text.to_lowercase();
        let mut breakdown = LoadedBreakdown::default();

        for category in [
            LoadedCategory::Emotional,
            LoadedCategory::Judgmental,
            LoadedCategory::Partisan,
        ] {
            let present: Vec<&String> = self
                .catalog
                .loaded_phrases(category)
                .iter()
                .filter(|phrase| lower.contains(phrase.as_str()))
                .collect();
            let count = present.len() as u32;
            breakdown.weighted_sum += f64::from(count) * category_weight(category);
            breakdown.matched_phrases.extend(present.into_iter().cloned());
            match category {
                LoadedCategory::Emotional => breakdown.emotional = count,
                LoadedCategory::Judgmental => breakdown.judgmental = count,
                LoadedCategory::Partisan => breakdown.partisan = count,
            }
        }

        if breakdown.matched_phrases.is_empty() {
            return SignalResult::center(SignalDetail::Loaded(breakdown));
        }

        if let Some((phrase, score, label)) = self.override_for(&lower) {
            breakdown.override_phrase = Some(phrase);
            return SignalResult::new(score, label, SignalDetail::Loaded(breakdown));
        }

        let (score, label) = self.direction(breakdown.weighted_sum, &lower);
        SignalResult::new(score, label, SignalDetail::Loaded(breakdown))
    }

    /// An attack on exactly one side forces the opposite authorship.
    fn override_for(&self, lower: &str) -> Option<(String, f64, BiasLabel)> {
        let overrides = &self.catalog.overrides;
        let attacks_left = first_present(&overrides.right_authored, lower);
        let attacks_right = first_present(&overrides.left_authored, lower);

        match (attacks_left, attacks_right) {
            (Some(phrase), None) => Some((phrase.clone(), OVERRIDE_RIGHT_SCORE, BiasLabel::Right)),
            (None, Some(phrase)) => Some((phrase.clone(), OVERRIDE_LEFT_SCORE, BiasLabel::Left)),
            _ => None,
        }
    }

    fn direction(&self, weighted_sum: f64, lower: &str) -> (f64, BiasLabel) {
        let cues = &self.catalog.cues;

        if weighted_sum > STRONG_THRESHOLD {
            if first_present(&cues.authority_critique, lower).is_some() {
                (STRONG_RIGHT_SCORE, BiasLabel::Right)
            } else if first_present(&cues.left_evidence, lower).is_some() {
                (STRONG_LEFT_SCORE, BiasLabel::Left)
            } else {
                (0.5, BiasLabel::Center)
            }
        } else if weighted_sum > MODERATE_THRESHOLD {
            if first_present(&cues.moderate_right, lower).is_some() {
                (MODERATE_RIGHT_SCORE, BiasLabel::Right)
            } else if first_present(&cues.moderate_left, lower).is_some() {
                (MODERATE_LEFT_SCORE, BiasLabel::Left)
            } else {
                (0.5, BiasLabel::Center)
            }
        } else {
            (0.5, BiasLabel::Center)
        }
    }
}

fn first_present<'p>(phrases: &'p [String], lower: &str) -> Option<&'p String> {
    phrases.iter().find(|phrase| lower.contains(phrase.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> SignalResult {
        let catalog = PhraseCatalog::builtin();
        LoadedLanguageDetector::new(&catalog).analyze(text)
    }

    fn breakdown(result: &SignalResult) -> &LoadedBreakdown {
        match &result.detail {
            SignalDetail::Loaded(breakdown) => breakdown,
            other => panic!("Expected loaded detail, got {:?}", other),
        }
    }

    #[test]
    fn short_text_is_insufficient() {
        let result = analyze("evil!");
        assert_eq!(result.detail, SignalDetail::InsufficientText);
        assert_eq!(result.score.value(), 0.5);
    }

    #[test]
    fn neutral_text_is_center() {
        let result = analyze("The committee met on Tuesday to review the budget.");
        assert_eq!(result.label, BiasLabel::Center);
        assert_eq!(result.score.value(), 0.5);
        assert!(breakdown(&result).matched_phrases.is_empty());
    }

    #[test]
    fn presence_not_frequency() {
        let result = analyze("Shocking. Shocking. Shocking news from the capital.");
        assert_eq!(breakdown(&result).emotional, 1);
    }

    #[test]
    fn attack_on_left_forces_right() {
        let result =
            analyze("The radical left wants to destroy this country with their socialist agenda.");
        assert_eq!(result.label, BiasLabel::Right);
        assert_eq!(result.score.value(), 0.8);
        assert_eq!(breakdown(&result).override_phrase.as_deref(), Some("radical left"));
    }

    #[test]
    fn attack_on_right_forces_left() {
        let result = analyze("The alt-right and greedy corporations are spreading hate.");
        assert_eq!(result.label, BiasLabel::Left);
        assert_eq!(result.score.value(), 0.2);
    }

    #[test]
    fn attacks_on_both_sides_cancel_override() {
        let result = analyze("Both the far left and the far right are shouting past each other.");
        let detail = breakdown(&result);
        assert!(detail.override_phrase.is_none());
        assert_eq!(detail.partisan, 2);
        assert_eq!(result.label, BiasLabel::Center);
    }

    #[test]
    fn strong_authority_critique_is_right() {
        let result = analyze("Corrupt politicians and deep state bureaucrats betray us all.");
        let detail = breakdown(&result);
        assert!((detail.weighted_sum - 2.2).abs() < 1e-9);
        assert_eq!(result.label, BiasLabel::Right);
        assert_eq!(result.score.value(), 0.75);
    }

    #[test]
    fn strong_left_evidence_is_left() {
        let result = analyze("Greedy and selfish owners exploit workers with shocking cruelty.");
        assert!(breakdown(&result).weighted_sum > STRONG_THRESHOLD);
        assert_eq!(result.label, BiasLabel::Left);
        assert_eq!(result.score.value(), 0.25);
    }

    #[test]
    fn moderate_right_cue() {
        let result = analyze("This outrageous liberal policy is a disaster.");
        assert_eq!(result.label, BiasLabel::Right);
        assert_eq!(result.score.value(), 0.6);
    }

    #[test]
    fn moderate_left_cue() {
        let result = analyze("A devastating and shocking move by corporate lobbyists.");
        assert_eq!(result.label, BiasLabel::Left);
        assert_eq!(result.score.value(), 0.4);
    }

    #[test]
    fn weak_loaded_language_is_center() {
        let result = analyze("The shocking result surprised the analysts.");
        assert_eq!(result.label, BiasLabel::Center);
        assert_eq!(result.score.value(), 0.5);
        assert_eq!(breakdown(&result).emotional, 1);
    }

    #[test]
    fn category_weights() {
        assert_eq!(category_weight(LoadedCategory::Emotional), 0.4);
        assert_eq!(category_weight(LoadedCategory::Judgmental), 0.6);
        assert_eq!(category_weight(LoadedCategory::Partisan), 1.0);
    }
}
