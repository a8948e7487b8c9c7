//! Injectable Noise Sources

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the uniform perturbation (hundreds of thousands)
const NOISE_AMPLITUDE: f64 = 0.1;

/// Additive perturbation applied to each heuristic estimate.
///
/// Kept behind a trait so tests can pin the noise term to zero and assert
/// on the deterministic part of the model.
pub trait NoiseSource {
    /// Draw the next perturbation
    fn sample(&mut self) -> f64;
}

/// Uniform noise in [-0.1, 0.1], the production default
pub struct UniformNoise {
    rng: StdRng,
}

impl UniformNoise {
    /// Create a noise source seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible noise source from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for UniformNoise {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE)
    }
}

/// Zero noise, for deterministic estimates in tests
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn sample(&mut self) -> f64 {
        0.0
    }
}
