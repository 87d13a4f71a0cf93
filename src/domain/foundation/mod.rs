//! Foundation module - Shared domain primitives.
//!
//! Contains the score value objects and error types that form the
//! vocabulary of the bias scoring domain.

mod errors;
mod score;

pub use errors::ValidationError;
pub use score::{LeanScore, PolarityScore};
