//! Feature Field Declarations

use serde::{Deserialize, Serialize};

/// The seven input features of the housing price model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Median income (tens of thousands of dollars)
    MedInc,
    /// House age (years)
    HouseAge,
    /// Average rooms per household
    AveRooms,
    /// Average bedrooms per household
    AveBedrms,
    /// Average occupants per household
    AveOccup,
    /// Latitude (degrees)
    Latitude,
    /// Longitude (degrees)
    Longitude,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 7] = [
        Field::MedInc,
        Field::HouseAge,
        Field::AveRooms,
        Field::AveBedrms,
        Field::AveOccup,
        Field::Latitude,
        Field::Longitude,
    ];

    /// Get the wire key, exactly as the prediction backend expects it
    pub fn key(&self) -> &'static str {
        match self {
            Field::MedInc => "MedInc",
            Field::HouseAge => "HouseAge",
            Field::AveRooms => "AveRooms",
            Field::AveBedrms => "AveBedrms",
            Field::AveOccup => "AveOccup",
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
        }
    }

    /// Get the display label used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::MedInc => "Median Income",
            Field::HouseAge => "House Age",
            Field::AveRooms => "Average Rooms",
            Field::AveBedrms => "Average Bedrooms",
            Field::AveOccup => "Average Occupancy",
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
        }
    }

    /// Get the inclusive (min, max) range for valid values
    pub fn range(&self) -> (f64, f64) {
        match self {
            Field::MedInc => (0.0, 50.0),
            Field::HouseAge => (0.0, 100.0),
            Field::AveRooms => (0.0, 50.0),
            Field::AveBedrms => (0.0, 10.0),
            Field::AveOccup => (0.0, 20.0),
            Field::Latitude => (-90.0, 90.0),
            Field::Longitude => (-180.0, 180.0),
        }
    }

    /// Look up a field by its wire key
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lookup_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Field::from_key("Population"), None);
        assert_eq!(Field::from_key(""), None);
    }

    #[test]
    fn test_ranges_are_ordered() {
        for field in Field::ALL {
            let (min, max) = field.range();
            assert!(min < max, "{} range is inverted", field.key());
        }
    }
}
