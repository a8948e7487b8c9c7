//! Local Fallback Estimator
//!
//! Provides a deterministic-with-noise heuristic price model used when the
//! remote prediction backend is unavailable. It never fails and always
//! returns a price at or above the floor.

mod heuristic;
mod noise;

pub use heuristic::{HeuristicModel, MIN_PRICE};
pub use noise::{NoNoise, NoiseSource, UniformNoise};
