//! Response Body Parsing

/// Marker preceding the price in the backend's rendered response
const PRICE_MARKER: &str = "Predicted House Price: ";

/// Scan a response body for `Predicted House Price: <number>`.
///
/// `<number>` may carry comma thousands separators and a decimal point;
/// separators are stripped before parsing. The first occurrence that
/// yields a number wins. This is a deliberately loose contract with the
/// backend, kept for compatibility with its rendered output.
pub fn extract_price(body: &str) -> Option<f64> {
    for (idx, _) in body.match_indices(PRICE_MARKER) {
        let rest = &body[idx + PRICE_MARKER.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit() && c != ',' && c != '.')
            .unwrap_or(rest.len());
        let run = &rest[..end];
        if run.is_empty() {
            continue;
        }
        let cleaned: String = run.chars().filter(|&c| c != ',').collect();
        if let Ok(price) = cleaned.trim_end_matches('.').parse() {
            return Some(price);
        }
    }
    None
}
