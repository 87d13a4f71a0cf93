//! Perturbation sources.
//!
//! - `RandomPerturbation` - With a small probability, a uniform value in `±magnitude`
//! - `NoPerturbation` - Always zero, for deterministic classification
//! - `FixedPerturbation` - A constant, for tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::ports::PerturbationSource;

/// Default probability that a score is perturbed.
pub const DEFAULT_PERTURBATION_PROBABILITY: f64 = 0.05;

/// Default bound of the perturbation.
pub const DEFAULT_PERTURBATION_MAGNITUDE: f64 = 0.03;

/// Randomly perturbs a small fraction of scores.
#[derive(Debug)]
pub struct RandomPerturbation {
    probability: f64,
    magnitude: f64,
    /// Seeded generator; `None` uses the thread-local generator.
    seeded: Option<Mutex<StdRng>>,
}

impl RandomPerturbation {
    /// Creates a source. Probability is clamped to `[0, 1]`, magnitude to `>= 0`.
    pub fn new(probability: f64, magnitude: f64) -> Self {
        Self {
            probability: if probability.is_nan() {
                0.0
            } else {
                probability.clamp(0.0, 1.0)
            },
            magnitude: if magnitude.is_nan() {
                0.0
            } else {
                magnitude.abs()
            },
            seeded: None,
        }
    }

    /// Uses a deterministic generator seeded with `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeded = Some(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if rng.gen_bool(self.probability) {
            rng.gen_range(-self.magnitude..=self.magnitude)
        } else {
            0.0
        }
    }
}

impl Default for RandomPerturbation {
    fn default() -> Self {
        Self::new(DEFAULT_PERTURBATION_PROBABILITY, DEFAULT_PERTURBATION_MAGNITUDE)
    }
}

impl PerturbationSource for RandomPerturbation {
    fn next_perturbation(&self) -> f64 {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                self.sample(&mut *rng)
            }
            None => self.sample(&mut rand::thread_rng()),
        }
    }
}

/// Never perturbs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPerturbation;

impl PerturbationSource for NoPerturbation {
    fn next_perturbation(&self) -> f64 {
        0.0
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedPerturbation(pub f64);

impl PerturbationSource for FixedPerturbation {
    fn next_perturbation(&self) -> f64 {
        self.0
    }
}
