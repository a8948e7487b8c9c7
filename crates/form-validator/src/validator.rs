//! Form Field Validator

use crate::Violation;
use housing_schema::{Field, RawFeatures};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation rule for a single field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeRule {
    /// Whether the field must be present
    pub required: bool,
    /// Inclusive minimum
    pub min: f64,
    /// Inclusive maximum
    pub max: f64,
}

impl RangeRule {
    fn for_field(field: Field) -> Self {
        let (min, max) = field.range();
        Self {
            required: true,
            min,
            max,
        }
    }
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Median income rule (tens of thousands)
    pub med_inc: RangeRule,
    /// House age rule (years)
    pub house_age: RangeRule,
    /// Average rooms rule
    pub ave_rooms: RangeRule,
    /// Average bedrooms rule
    pub ave_bedrms: RangeRule,
    /// Average occupancy rule
    pub ave_occup: RangeRule,
    /// Latitude rule (degrees)
    pub latitude: RangeRule,
    /// Longitude rule (degrees)
    pub longitude: RangeRule,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            med_inc: RangeRule::for_field(Field::MedInc),
            house_age: RangeRule::for_field(Field::HouseAge),
            ave_rooms: RangeRule::for_field(Field::AveRooms),
            ave_bedrms: RangeRule::for_field(Field::AveBedrms),
            ave_occup: RangeRule::for_field(Field::AveOccup),
            latitude: RangeRule::for_field(Field::Latitude),
            longitude: RangeRule::for_field(Field::Longitude),
        }
    }
}

impl ValidationConfig {
    /// Get the rule for a field
    pub fn rule(&self, field: Field) -> &RangeRule {
        match field {
            Field::MedInc => &self.med_inc,
            Field::HouseAge => &self.house_age,
            Field::AveRooms => &self.ave_rooms,
            Field::AveBedrms => &self.ave_bedrms,
            Field::AveOccup => &self.ave_occup,
            Field::Latitude => &self.latitude,
            Field::Longitude => &self.longitude,
        }
    }
}

/// Result of validating one field
///
/// Computed fresh on every input event and on submit; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome {
    /// Whether the value is acceptable
    pub ok: bool,
    /// Human-readable reason when it is not
    pub message: Option<String>,
}

impl FieldOutcome {
    fn pass() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    fn fail(violation: Violation) -> Self {
        Self {
            ok: false,
            message: Some(violation.to_string()),
        }
    }
}

/// Per-field outcomes for a whole form, in form order
#[derive(Debug, Clone)]
pub struct FormReport {
    outcomes: Vec<(Field, FieldOutcome)>,
}

impl FormReport {
    /// Whether every field passed
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.ok)
    }

    /// All outcomes, in form order
    pub fn outcomes(&self) -> &[(Field, FieldOutcome)] {
        &self.outcomes
    }

    /// The failure message for a field, if it failed
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, outcome)| outcome.message.as_deref())
    }
}

/// Validator for raw form input
///
/// Pure given the raw value and the rule table; any UI state mutation is
/// the caller's responsibility.
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a raw value by wire key.
    ///
    /// Unknown keys pass through unchecked: the surrounding form only
    /// carries known fields.
    pub fn validate(&self, field_key: &str, raw: &str) -> FieldOutcome {
        match Field::from_key(field_key) {
            Some(field) => self.validate_field(field, raw),
            None => FieldOutcome::pass(),
        }
    }

    /// Validate a raw value for a known field.
    ///
    /// First failing rule wins: required, numeric, minimum, maximum.
    pub fn validate_field(&self, field: Field, raw: &str) -> FieldOutcome {
        let rule = self.config.rule(field);
        let label = field.label();
        let value = raw.trim();

        if value.is_empty() {
            if rule.required {
                debug!("{} rejected: empty", field.key());
                return FieldOutcome::fail(Violation::Missing { label });
            }
            return FieldOutcome::pass();
        }

        let number: f64 = match value.parse() {
            Ok(n) => n,
            Err(_) => {
                debug!("{} rejected: unparseable {:?}", field.key(), value);
                return FieldOutcome::fail(Violation::NotNumeric { label });
            }
        };
        if !number.is_finite() {
            debug!("{} rejected: non-finite {:?}", field.key(), value);
            return FieldOutcome::fail(Violation::NotNumeric { label });
        }

        if number < rule.min {
            debug!("{} rejected: {} below {}", field.key(), number, rule.min);
            return FieldOutcome::fail(Violation::BelowMin {
                label,
                min: rule.min,
            });
        }
        if number > rule.max {
            debug!("{} rejected: {} above {}", field.key(), number, rule.max);
            return FieldOutcome::fail(Violation::AboveMax {
                label,
                max: rule.max,
            });
        }

        FieldOutcome::pass()
    }

    /// Validate a whole form, returning the per-field detail
    pub fn validate_form(&self, form: &RawFeatures) -> FormReport {
        let outcomes = Field::ALL
            .iter()
            .map(|&field| (field, self.validate_field(field, form.get(field))))
            .collect();
        FormReport { outcomes }
    }

    /// Whether every declared field passes; this gates submission
    pub fn validate_all(&self, form: &RawFeatures) -> bool {
        self.validate_form(form).is_valid()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
