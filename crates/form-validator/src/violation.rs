//! Validation Rule Violations

use thiserror::Error;

/// First rule a field value failed.
///
/// `Display` carries the exact user-facing message; the rendering
/// collaborator shows it verbatim next to the field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// Required field left empty
    #[error("{label} is required")]
    Missing { label: &'static str },

    /// Value is not a parseable finite number
    #[error("{label} must be a valid number")]
    NotNumeric { label: &'static str },

    /// Parsed value below the declared minimum
    #[error("{label} must be at least {min}")]
    BelowMin { label: &'static str, min: f64 },

    /// Parsed value above the declared maximum
    #[error("{label} must be no more than {max}")]
    AboveMax { label: &'static str, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text() {
        let v = Violation::BelowMin {
            label: "Median Income",
            min: 0.0,
        };
        assert_eq!(v.to_string(), "Median Income must be at least 0");

        let v = Violation::AboveMax {
            label: "Longitude",
            max: 180.0,
        };
        assert_eq!(v.to_string(), "Longitude must be no more than 180");

        let v = Violation::Missing { label: "House Age" };
        assert_eq!(v.to_string(), "House Age is required");

        let v = Violation::NotNumeric { label: "Latitude" };
        assert_eq!(v.to_string(), "Latitude must be a valid number");
    }

    #[test]
    fn test_negative_bound_renders_without_suffix() {
        let v = Violation::BelowMin {
            label: "Latitude",
            min: -90.0,
        };
        assert_eq!(v.to_string(), "Latitude must be at least -90");
    }
}
