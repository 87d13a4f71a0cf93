//! Score value objects for the two numeric scales used by the engine.
//!
//! - [`LeanScore`] lives on the Left-Right axis in `[0, 1]` (Center = 0.5)
//! - [`PolarityScore`] lives on the negative-positive axis in `[-1, 1]`

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A position on the Left-Right axis, `0.0` (Left) to `1.0` (Right).
///
/// Deserialization rejects values outside the axis instead of clamping them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct LeanScore(f64);

impl LeanScore {
    /// The middle of the axis.
    pub const CENTER: Self = Self(0.5);

    /// Creates a new LeanScore, clamping to `[0, 1]`.
    ///
    /// NaN collapses to [`LeanScore::CENTER`].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::CENTER;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a LeanScore, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("lean_score", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for LeanScore {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<LeanScore> for f64 {
    fn from(score: LeanScore) -> Self {
        score.0
    }
}

impl Default for LeanScore {
    fn default() -> Self {
        Self::CENTER
    }
}

impl fmt::Display for LeanScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Signed sentiment strength, `-1.0` (negative) to `1.0` (positive).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PolarityScore(f64);

impl PolarityScore {
    /// No sentiment either way.
    pub const NEUTRAL: Self = Self(0.0);

    /// Creates a new PolarityScore, clamping to `[-1, 1]`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    /// Creates a PolarityScore, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("polarity_score", -1.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PolarityScore {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<PolarityScore> for f64 {
    fn from(score: PolarityScore) -> Self {
        score.0
    }
}

impl Default for PolarityScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for PolarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.3}", self.0)
    }
}
