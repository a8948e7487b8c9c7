//! Housing Price Prediction Pipeline
//!
//! Composition crate: wires the form validator, the remote predictor, and
//! the local fallback estimator into a single submission flow with the
//! re-entrancy and error-recovery rules of the form front-end.

mod controller;
mod outcome;

pub use controller::{PipelineConfig, PredictionController, Submission};
pub use outcome::{format_usd, PredictionOutcome, PriceSource};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Errors that escape the submission flow.
///
/// Validation failures and backend unavailability never surface here;
/// this covers everything else, and the renderer shows a generic failure.
/// The form stays usable afterwards.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Unexpected failure during orchestration
    #[error("unexpected pipeline failure: {0}")]
    Unexpected(#[from] anyhow::Error),
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
