//! Prediction Backend Client

use crate::{extract_price, RemoteError};
use housing_schema::FeatureSet;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default per-request deadline
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Configuration for the prediction backend
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the backend, e.g. `http://127.0.0.1:5000`
    pub base_url: String,
    /// Per-request deadline; anything slower counts as unavailable
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for a single prediction backend
pub struct RemotePredictor {
    client: reqwest::Client,
    config: RemoteConfig,
}

/// Response returned by the JSON prediction endpoint
#[derive(Debug, Deserialize)]
struct PredictApiResponse {
    predicted_price: f64,
}

impl RemotePredictor {
    /// Create a new predictor for the given backend
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a predictor reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across components)
    pub fn with_client(client: reqwest::Client, config: RemoteConfig) -> Self {
        Self { client, config }
    }

    /// Backend configuration
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Request a prediction from the form endpoint.
    ///
    /// Sends `POST {base_url}/predict` with the seven features
    /// form-encoded and scans the rendered body for the advertised price.
    /// One attempt, no retry; the caller decides whether to fall back.
    pub async fn predict(&self, features: &FeatureSet) -> Result<f64, RemoteError> {
        let response = self
            .client
            .post(format!("{}/predict", self.config.base_url))
            .timeout(self.config.timeout)
            .form(features)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("prediction backend returned {}", status);
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.request_error(e))?;
        let price = extract_price(&body).ok_or(RemoteError::UnrecognizedBody)?;
        debug!("backend predicted {:.2}", price);
        Ok(price)
    }

    /// Request a prediction from the JSON endpoint.
    ///
    /// Sends `POST {base_url}/predict_api` with the seven features as a
    /// JSON object and expects `{"predicted_price": <number>}` back.
    pub async fn predict_api(&self, features: &FeatureSet) -> Result<f64, RemoteError> {
        let response = self
            .client
            .post(format!("{}/predict_api", self.config.base_url))
            .timeout(self.config.timeout)
            .json(features)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("prediction backend returned {}", status);
            return Err(RemoteError::Status(status.as_u16()));
        }

        let parsed: PredictApiResponse = response
            .json()
            .await
            .map_err(|_| RemoteError::UnrecognizedBody)?;
        debug!("backend predicted {:.2}", parsed.predicted_price);
        Ok(parsed.predicted_price)
    }

    fn request_error(&self, err: reqwest::Error) -> RemoteError {
        if err.is_timeout() {
            RemoteError::Timeout(self.config.timeout.as_millis() as u64)
        } else {
            RemoteError::Transport(err)
        }
    }
}
