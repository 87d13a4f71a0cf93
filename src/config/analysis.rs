//! Analysis engine configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::perturbation::{
    DEFAULT_PERTURBATION_MAGNITUDE, DEFAULT_PERTURBATION_PROBABILITY,
};
use crate::domain::bias::{FlagContext, DEFAULT_CONTEXT_CHARS, DEFAULT_CONTEXT_TOKENS};

/// Upper bound on the perturbation magnitude.
const MAX_PERTURBATION_MAGNITUDE: f64 = 0.5;

/// Analysis engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Whether the final score is randomly perturbed
    #[serde(default = "default_perturbation_enabled")]
    pub perturbation_enabled: bool,

    /// Probability that a given score is perturbed
    #[serde(default = "default_perturbation_probability")]
    pub perturbation_probability: f64,

    /// Bound of the uniform perturbation
    #[serde(default = "default_perturbation_magnitude")]
    pub perturbation_magnitude: f64,

    /// YAML catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,

    /// Context window used for loaded-term snippets
    #[serde(default)]
    pub flag_context: FlagContextMode,
}

/// Snippet context mode
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlagContextMode {
    #[default]
    Chars,
    Tokens,
}

impl AnalysisConfig {
    /// The flagger context for the configured mode
    pub fn flag_context(&self) -> FlagContext {
        match self.flag_context {
            FlagContextMode::Chars => FlagContext::Chars(DEFAULT_CONTEXT_CHARS),
            FlagContextMode::Tokens => FlagContext::Tokens(DEFAULT_CONTEXT_TOKENS),
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.perturbation_probability) {
            return Err(ValidationError::InvalidPerturbationProbability);
        }
        if !(0.0..=MAX_PERTURBATION_MAGNITUDE).contains(&self.perturbation_magnitude) {
            return Err(ValidationError::InvalidPerturbationMagnitude);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            perturbation_enabled: default_perturbation_enabled(),
            perturbation_probability: default_perturbation_probability(),
            perturbation_magnitude: default_perturbation_magnitude(),
            catalog_path: None,
            flag_context: FlagContextMode::default(),
        }
    }
}

fn default_perturbation_enabled() -> bool {
    true
}

fn default_perturbation_probability() -> f64 {
    DEFAULT_PERTURBATION_PROBABILITY
}

fn default_perturbation_magnitude() -> f64 {
    DEFAULT_PERTURBATION_MAGNITUDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_defaults() {
        let config = AnalysisConfig::default();
        assert!(config.perturbation_enabled);
        assert_eq!(config.perturbation_probability, 0.05);
        assert_eq!(config.perturbation_magnitude, 0.03);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.flag_context(), FlagContext::Chars(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_token_flag_context() {
        let config = AnalysisConfig {
            flag_context: FlagContextMode::Tokens,
            ..Default::default()
        };
        assert_eq!(config.flag_context(), FlagContext::Tokens(2));
    }

    #[test]
    fn test_probability_out_of_range() {
        let config = AnalysisConfig {
            perturbation_probability: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPerturbationProbability)
        );
    }

    #[test]
    fn test_magnitude_out_of_range() {
        let config = AnalysisConfig {
            perturbation_magnitude: 0.6,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPerturbationMagnitude)
        );

        let config = AnalysisConfig {
            perturbation_magnitude: -0.01,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
