//! Submission Controller

use crate::{PipelineError, PredictionOutcome, PriceSource};
use anyhow::Context;
use fallback::HeuristicModel;
use form_validator::{FieldOutcome, FormReport, ValidationConfig, Validator};
use housing_schema::{FeatureSet, RawFeatures};
use remote_predictor::{RemoteConfig, RemotePredictor};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Instant;
use tracing::{info, warn};

/// Pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Backend endpoint and request deadline
    pub remote: RemoteConfig,
    /// Field validation rules
    pub validation: ValidationConfig,
}

/// What a submission attempt produced
#[derive(Debug)]
pub enum Submission {
    /// Prediction finished; render the outcome
    Completed(PredictionOutcome),
    /// Validation blocked it; render the field messages
    Invalid(FormReport),
    /// Another submission was in flight; do nothing
    Ignored,
}

/// Orchestrates validation, remote prediction, and local fallback.
///
/// Holds the only mutable state in the system: the in-flight flag gating
/// re-entrancy and the fallback model's noise source.
pub struct PredictionController {
    validator: Validator,
    remote: RemotePredictor,
    fallback: Mutex<HeuristicModel>,
    in_flight: AtomicBool,
}

impl PredictionController {
    /// Create a controller with the given config
    pub fn new(config: PipelineConfig) -> Self {
        info!(
            "Creating prediction controller for {}",
            config.remote.base_url
        );
        Self {
            validator: Validator::new(config.validation),
            remote: RemotePredictor::new(config.remote),
            fallback: Mutex::new(HeuristicModel::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Replace the fallback model, e.g. to pin its noise source in tests
    pub fn with_fallback(mut self, model: HeuristicModel) -> Self {
        self.fallback = Mutex::new(model);
        self
    }

    /// Validate a single field for input-event rendering
    pub fn validate(&self, field_key: &str, raw: &str) -> FieldOutcome {
        self.validator.validate(field_key, raw)
    }

    /// Whether a submission is currently outstanding
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one submission attempt.
    ///
    /// A second call while one is outstanding returns
    /// [`Submission::Ignored`] without queuing. Backend failures of any
    /// kind are recovered silently through the local fallback. The
    /// in-flight flag is released on every exit path, unwinding included.
    pub async fn submit(&self, form: &RawFeatures) -> Result<Submission, PipelineError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            info!("submission ignored: another one is in flight");
            return Ok(Submission::Ignored);
        };

        let report = self.validator.validate_form(form);
        if !report.is_valid() {
            return Ok(Submission::Invalid(report));
        }

        // Snapshot taken at submit time; the form already validated, so a
        // parse failure here is an orchestration bug.
        let features =
            FeatureSet::from_raw(form).context("snapshot of a validated form failed")?;

        let started = Instant::now();
        let (price, source) = match self.remote.predict(&features).await {
            Ok(price) => (price, PriceSource::Remote),
            Err(err) => {
                warn!("prediction backend unavailable ({err}); using local fallback");
                let mut model = self
                    .fallback
                    .lock()
                    .map_err(|_| anyhow::anyhow!("fallback model lock poisoned"))?;
                (model.estimate(&features), PriceSource::LocalFallback)
            }
        };
        let latency_ms = started.elapsed().as_millis() as u64;

        info!(
            "prediction completed via {} in {}ms",
            source.as_str(),
            latency_ms
        );
        Ok(Submission::Completed(PredictionOutcome {
            price,
            source,
            latency_ms,
        }))
    }
}

/// RAII holder for the in-flight flag
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_blocks_second_acquire() {
        let flag = AtomicBool::new(false);
        let first = InFlightGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(InFlightGuard::acquire(&flag).is_none());
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let flag = AtomicBool::new(false);
        drop(InFlightGuard::acquire(&flag));
        assert!(!flag.load(Ordering::Acquire));
        assert!(InFlightGuard::acquire(&flag).is_some());
    }

    #[test]
    fn test_controller_starts_idle() {
        let controller = PredictionController::new(PipelineConfig::default());
        assert!(!controller.is_in_flight());
    }
}
