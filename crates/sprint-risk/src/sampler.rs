//! Random draws used by the simulator, behind a trait so tests can script
//! exact sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{MAX_RATING, MIN_RATING};

/// Upper bound on risks drawn per sprint
pub const MAX_RISKS_PER_SPRINT: usize = 3;

pub trait RiskSampler {
    /// Number of risks for a sprint, 1..=MAX_RISKS_PER_SPRINT
    fn risk_count(&mut self) -> usize;

    /// Index into a pool of `len` remaining names, 0..len
    fn pick_index(&mut self, len: usize) -> usize;

    /// Probability or impact rating, MIN_RATING..=MAX_RATING
    fn rating(&mut self) -> u8;
}

/// [`RiskSampler`] over any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<StdRng> {
    /// Reproducible sampler
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RiskSampler for RngSampler<R> {
    fn risk_count(&mut self) -> usize {
        self.rng.gen_range(1..=MAX_RISKS_PER_SPRINT)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn rating(&mut self) -> u8 {
        self.rng.gen_range(MIN_RATING..=MAX_RATING)
    }
}
