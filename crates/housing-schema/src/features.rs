//! Raw and Parsed Feature Containers

use crate::{Field, SchemaError};
use serde::{Deserialize, Serialize};

/// Raw string values as handed over by the input collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawFeatures {
    pub med_inc: String,
    pub house_age: String,
    pub ave_rooms: String,
    pub ave_bedrms: String,
    pub ave_occup: String,
    pub latitude: String,
    pub longitude: String,
}

impl RawFeatures {
    /// Create the demo form values shipped with the original front-end
    pub fn sample() -> Self {
        Self {
            med_inc: "5.5".to_string(),
            house_age: "10".to_string(),
            ave_rooms: "6.2".to_string(),
            ave_bedrms: "1.1".to_string(),
            ave_occup: "3.2".to_string(),
            latitude: "34.05".to_string(),
            longitude: "-118.25".to_string(),
        }
    }

    /// Get the raw value for a field
    pub fn get(&self, field: Field) -> &str {
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

    /// Get the raw value by wire key, if the key is known
    pub fn get_key(&self, key: &str) -> Option<&str> {
        Field::from_key(key).map(|f| self.get(f))
    }

    /// Set the raw value for a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::MedInc => self.med_inc = value,
            Field::HouseAge => self.house_age = value,
            Field::AveRooms => self.ave_rooms = value,
            Field::AveBedrms => self.ave_bedrms = value,
            Field::AveOccup => self.ave_occup = value,
            Field::Latitude => self.latitude = value,
            Field::Longitude => self.longitude = value,
        }
    }
}

/// A complete parsed feature vector
///
/// Serializes with the exact wire keys (`MedInc`, `HouseAge`, ...) so it can
/// be form- or JSON-encoded for the prediction backend without remapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureSet {
    pub med_inc: f64,
    pub house_age: f64,
    pub ave_rooms: f64,
    pub ave_bedrms: f64,
    pub ave_occup: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl FeatureSet {
    /// Parse raw form values into a feature set.
    ///
    /// Expects input that already passed validation; a failure here is an
    /// orchestration bug rather than a user input error.
    pub fn from_raw(raw: &RawFeatures) -> Result<Self, SchemaError> {
        Ok(Self {
            med_inc: parse_field(Field::MedInc, raw)?,
            house_age: parse_field(Field::HouseAge, raw)?,
            ave_rooms: parse_field(Field::AveRooms, raw)?,
            ave_bedrms: parse_field(Field::AveBedrms, raw)?,
            ave_occup: parse_field(Field::AveOccup, raw)?,
            latitude: parse_field(Field::Latitude, raw)?,
            longitude: parse_field(Field::Longitude, raw)?,
        })
    }

    /// Get the value for a field
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::MedInc => self.med_inc,
            Field::HouseAge => self.house_age,
            Field::AveRooms => self.ave_rooms,
            Field::AveBedrms => self.ave_bedrms,
            Field::AveOccup => self.ave_occup,
            Field::Latitude => self.latitude,
            Field::Longitude => self.longitude,
        }
    }
}

fn parse_field(field: Field, raw: &RawFeatures) -> Result<f64, SchemaError> {
    let text = raw.get(field).trim();
    let value: f64 = text.parse().map_err(|_| SchemaError::Unparseable {
        field: field.key(),
        raw: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(SchemaError::Unparseable {
            field: field.key(),
            raw: text.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses() {
        let features = FeatureSet::from_raw(&RawFeatures::sample()).unwrap();
        assert_eq!(features.med_inc, 5.5);
        assert_eq!(features.latitude, 34.05);
        assert_eq!(features.longitude, -118.25);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let mut raw = RawFeatures::sample();
        raw.set(Field::MedInc, "  7.25  ");
        let features = FeatureSet::from_raw(&raw).unwrap();
        assert_eq!(features.med_inc, 7.25);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let mut raw = RawFeatures::sample();
        raw.set(Field::HouseAge, "ten");
        assert!(FeatureSet::from_raw(&raw).is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        let mut raw = RawFeatures::sample();
        raw.set(Field::AveOccup, "inf");
        assert!(FeatureSet::from_raw(&raw).is_err());

        raw.set(Field::AveOccup, "NaN");
        assert!(FeatureSet::from_raw(&raw).is_err());
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let features = FeatureSet::from_raw(&RawFeatures::sample()).unwrap();
        let value = serde_json::to_value(features).unwrap();
        for field in Field::ALL {
            assert!(value.get(field.key()).is_some(), "missing {}", field.key());
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let features = FeatureSet::from_raw(&RawFeatures::sample()).unwrap();
        assert_eq!(features.get(Field::AveRooms), 6.2);
        assert_eq!(features.get(Field::AveBedrms), 1.1);
    }
}
