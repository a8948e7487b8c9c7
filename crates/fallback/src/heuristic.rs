//! Heuristic Price Model

use crate::noise::{NoiseSource, UniformNoise};
use housing_schema::FeatureSet;
use tracing::debug;

/// Minimum price the model will return (hundreds of thousands)
pub const MIN_PRICE: f64 = 0.5;

/// Linear-plus-rules price model over the seven housing features.
///
/// Weights follow California housing patterns: income dominates, age
/// erodes value, and the coastal boxes carry location premiums. Output is
/// in hundreds of thousands of dollars.
pub struct HeuristicModel {
    noise: Box<dyn NoiseSource + Send>,
}

impl HeuristicModel {
    /// Create a model with the production noise source
    pub fn new() -> Self {
        Self::with_noise(UniformNoise::new())
    }

    /// Create a model with a caller-supplied noise source
    pub fn with_noise(noise: impl NoiseSource + Send + 'static) -> Self {
        Self {
            noise: Box::new(noise),
        }
    }

    /// Estimate a price for the given features. Never fails.
    pub fn estimate(&mut self, features: &FeatureSet) -> f64 {
        // Base price in hundreds of thousands
        let mut price = 1.5;

        // Income has the strongest positive correlation
        price += features.med_inc * 0.4;

        // Age slowly erodes value
        price -= features.house_age * 0.005;

        // Rooms above or below the 4-room baseline
        price += (features.ave_rooms - 4.0) * 0.1;

        // Bedroom-heavy layouts price lower. Zero rooms makes the ratio
        // infinite and trips the penalty, matching the original model.
        let bedroom_ratio = if features.ave_rooms == 0.0 {
            f64::INFINITY
        } else {
            features.ave_bedrms / features.ave_rooms
        };
        if bedroom_ratio > 0.3 {
            price -= 0.2;
        }

        // Overcrowding reduces price
        if features.ave_occup > 4.0 {
            price -= (features.ave_occup - 4.0) * 0.05;
        }

        // Location premiums inside the coastal California box
        if (32.0..=42.0).contains(&features.latitude)
            && (-125.0..=-114.0).contains(&features.longitude)
        {
            if features.longitude >= -122.0 {
                price += 1.0; // near coast
            }
            if (37.0..=38.0).contains(&features.latitude) && features.longitude >= -122.5 {
                price += 1.5; // Bay Area
            }
            if (33.5..=34.5).contains(&features.latitude) && features.longitude >= -118.5 {
                price += 0.8; // LA area
            }
        }

        price += self.noise.sample();

        let price = price.max(MIN_PRICE);
        debug!("heuristic estimate: {:.3}", price);
        price
    }
}

impl Default for HeuristicModel {
    fn default() -> Self {
        Self::new()
    }
}
