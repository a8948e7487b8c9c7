//! Prediction Outcomes and Formatting

use serde::{Deserialize, Serialize};

/// Where a price estimate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceSource {
    /// The prediction backend answered
    Remote,
    /// The backend was unavailable; the local heuristic answered
    LocalFallback,
}

impl PriceSource {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSource::Remote => "remote",
            PriceSource::LocalFallback => "local-fallback",
        }
    }
}

/// Result of one completed submission.
///
/// Created once per attempt and handed straight to the rendering
/// collaborator; never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Estimated price in hundreds of thousands of dollars
    pub price: f64,
    /// Which estimator produced it
    pub source: PriceSource,
    /// Wall-clock time the prediction took
    pub latency_ms: u64,
}

impl PredictionOutcome {
    /// Render the line the results card shows
    pub fn display_text(&self) -> String {
        let demo_note = match self.source {
            PriceSource::Remote => "",
            PriceSource::LocalFallback => " (Demo Mode)",
        };
        format!(
            "Estimated House Price: {}{}",
            format_usd(self.price),
            demo_note
        )
    }
}

/// Format a price in hundreds-of-thousands units as whole-dollar USD
pub fn format_usd(price: f64) -> String {
    let dollars = (price * 100_000.0).round() as i64;
    let digits = dollars.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if dollars < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
