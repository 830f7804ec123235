use rand::{rngs::StdRng, SeedableRng};

use crate::sample_count::SAMPLE_SIZE;

/// Source of minimal samples for the estimator.
///
/// Implementations return `SAMPLE_SIZE` distinct indices in `0..num_points`.
/// The estimator only calls [`MinimalSampler::sample`] with
/// `num_points >= SAMPLE_SIZE`.
pub trait MinimalSampler {
    /// Draw the indices of one minimal sample.
    fn sample(&mut self, num_points: usize) -> [usize; SAMPLE_SIZE];
}

/// Uniform sampling without replacement backed by a [`StdRng`].
#[derive(Debug, Clone)]
pub struct UniformSampler {
    rng: StdRng,
}

impl UniformSampler {
    /// Create a sampler from an optional seed, seeding from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Create a reproducible sampler.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a sampler seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        let mut tr = rand::rng();
        Self {
            rng: StdRng::from_rng(&mut tr),
        }
    }
}

impl MinimalSampler for UniformSampler {
    /// # Panics
    ///
    /// Panics if `num_points < SAMPLE_SIZE`.
    fn sample(&mut self, num_points: usize) -> [usize; SAMPLE_SIZE] {
        let sample = rand::seq::index::sample(&mut self.rng, num_points, SAMPLE_SIZE);
        [sample.index(0), sample.index(1), sample.index(2)]
    }
}
