// File: src/field.rs
// Purpose: Static field table and travel mode for the itinerary request form

use itinera_validation::{
    validate_budget, validate_days, validate_email, validate_required, validate_travelers,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    StartingLocation,
    Destination,
    NumberOfDays,
    NumberOfTravelers,
    Budget,
    Email,
    /// Free text, not validated, not part of [`FIELD_SPECS`]
    AdditionalPreferences,
}

impl FieldId {
    /// Element name of the input on the hosting page
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::StartingLocation => "starting-location",
            FieldId::Destination => "destination",
            FieldId::NumberOfDays => "number-of-days",
            FieldId::NumberOfTravelers => "number-of-travelers",
            FieldId::Budget => "budget",
            FieldId::Email => "email",
            FieldId::AdditionalPreferences => "additional-preferences",
        }
    }

    /// Human-readable label used in error reporting and the summary
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::StartingLocation => "Starting location",
            FieldId::Destination => "Destination",
            FieldId::NumberOfDays => "Number of days",
            FieldId::NumberOfTravelers => "Number of travelers",
            FieldId::Budget => "Budget",
            FieldId::Email => "Email",
            FieldId::AdditionalPreferences => "Additional preferences",
        }
    }
}

/// One tracked field: where it lives on the page and how it validates
pub struct FieldSpec {
    pub id: FieldId,
    /// Element name of the error display slot
    pub error_slot: &'static str,
    pub validate: fn(&str) -> Result<(), String>,
}

/// The tracked fields, defined once for the process lifetime
pub const FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec {
        id: FieldId::StartingLocation,
        error_slot: "starting-location-error",
        validate: validate_required,
    },
    FieldSpec {
        id: FieldId::Destination,
        error_slot: "destination-error",
        validate: validate_required,
    },
    FieldSpec {
        id: FieldId::NumberOfDays,
        error_slot: "number-of-days-error",
        validate: validate_days,
    },
    FieldSpec {
        id: FieldId::NumberOfTravelers,
        error_slot: "number-of-travelers-error",
        validate: validate_travelers,
    },
    FieldSpec {
        id: FieldId::Budget,
        error_slot: "budget-error",
        validate: validate_budget,
    },
    FieldSpec {
        id: FieldId::Email,
        error_slot: "email-error",
        validate: validate_email,
    },
];

/// Look up the table entry for a tracked field
pub fn field_spec(id: FieldId) -> Option<&'static FieldSpec> {
    FIELD_SPECS.iter().find(|spec| spec.id == id)
}

/// Mode of travel, as offered by the radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Bus,
    Train,
    Flight,
    Car,
}

impl TravelMode {
    /// Wire code used in the payload and as the radio value
    pub fn as_code(&self) -> &'static str {
        match self {
            TravelMode::Bus => "bus",
            TravelMode::Train => "train",
            TravelMode::Flight => "flight",
            TravelMode::Car => "car",
        }
    }

    /// Parse a wire code
    pub fn from_code(code: &str) -> Option<TravelMode> {
        match code {
            "bus" => Some(TravelMode::Bus),
            "train" => Some(TravelMode::Train),
            "flight" => Some(TravelMode::Flight),
            "car" => Some(TravelMode::Car),
            _ => None,
        }
    }

    /// Capitalized display name
    pub fn display_label(&self) -> &'static str {
        match self {
            TravelMode::Bus => "Bus",
            TravelMode::Train => "Train",
            TravelMode::Flight => "Flight",
            TravelMode::Car => "Car",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

/// Display label for a raw mode code, falling back to the code itself for
/// anything the label table does not recognize
pub fn mode_label(code: &str) -> String {
    match TravelMode::from_code(code) {
        Some(mode) => mode.display_label().to_string(),
        None => code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_table_covers_tracked_fields() {
        assert_eq!(FIELD_SPECS.len(), 6);
        assert!(field_spec(FieldId::Email).is_some());
        assert!(field_spec(FieldId::AdditionalPreferences).is_none());
    }

    #[test]
    fn test_field_table_wiring() {
        let spec = field_spec(FieldId::Budget).unwrap();
        assert_eq!(spec.error_slot, "budget-error");
        assert!((spec.validate)("-1").is_err());
        assert!((spec.validate)("0").is_ok());
    }

    #[test]
    fn test_mode_codes_round_trip() {
        for mode in [
            TravelMode::Bus,
            TravelMode::Train,
            TravelMode::Flight,
            TravelMode::Car,
        ] {
            assert_eq!(TravelMode::from_code(mode.as_code()), Some(mode));
        }
    }

    #[test]
    fn test_mode_label_fallback() {
        assert_eq!(mode_label("flight"), "Flight");
        assert_eq!(mode_label("bus"), "Bus");
        assert_eq!(mode_label("zeppelin"), "zeppelin");
    }

    #[test]
    fn test_mode_serde_wire_codes() {
        assert_eq!(
            serde_json::to_string(&TravelMode::Flight).unwrap(),
            "\"flight\""
        );
        let mode: TravelMode = serde_json::from_str("\"car\"").unwrap();
        assert_eq!(mode, TravelMode::Car);
    }
}
