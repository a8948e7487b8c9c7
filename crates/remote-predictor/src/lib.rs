//! Remote Prediction Client
//!
//! HTTP client for the housing price prediction backend. Sends validated
//! features via POST and parses the price out of the response. Every
//! failure mode here — transport error, timeout, bad status, body without
//! a recognizable price — means the backend is unavailable, and callers
//! fall back to the local estimator.

mod client;
mod parse;

pub use client::{RemoteConfig, RemotePredictor};
pub use parse::extract_price;

use thiserror::Error;

/// Errors from the prediction backend; each variant reads "unavailable"
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The HTTP request itself failed (connect, DNS, TLS)
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    /// No usable response within the configured deadline
    #[error("no response within {0}ms")]
    Timeout(u64),

    /// Backend answered with a non-2xx status
    #[error("backend returned status {0}")]
    Status(u16),

    /// Successful status, but the body carried no recognizable price
    #[error("response body carried no recognizable price")]
    UnrecognizedBody,
}
