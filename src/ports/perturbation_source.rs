//! Perturbation Source Port - injectable randomness for the aggregator.
//!
//! The aggregator adds the returned value to the final score before clamping.
//! Tests supply a zero or fixed source to make classification deterministic.

/// Port for the bounded score perturbation.
pub trait PerturbationSource: Send + Sync {
    /// Value to add to the next final score. Usually `0.0`.
    fn next_perturbation(&self) -> f64;
}
