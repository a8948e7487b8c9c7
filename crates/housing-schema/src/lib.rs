//! Housing Feature Schema
//!
//! Declares the seven California-housing input features with their wire
//! keys, display labels, and valid ranges, plus the raw and parsed feature
//! containers shared across the pipeline.

mod features;
mod field;

pub use features::{FeatureSet, RawFeatures};
pub use field::Field;

use thiserror::Error;

/// Errors when converting raw form input into a feature set
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// Raw value could not be parsed as a finite number
    #[error("{field} value {raw:?} is not a finite number")]
    Unparseable { field: &'static str, raw: String },
}
