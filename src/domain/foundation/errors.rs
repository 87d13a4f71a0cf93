//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("lean_score", 0.0, 1.0, 1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'lean_score' must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn validation_error_reports_nan() {
        let err = ValidationError::out_of_range("polarity_score", -1.0, 1.0, f64::NAN);
        assert!(format!("{}", err).ends_with("got NaN"));
    }
}
