// File: src/snapshot.rs
// Purpose: Raw form snapshot and the normalized trip request payload

use crate::field::FieldId;
use crate::view::FormView;
use serde::{Deserialize, Serialize};

/// Raw field values as the page holds them
///
/// Read from the view on demand at validation, submit, and render time;
/// never cached between events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    pub starting_location: String,
    pub destination: String,
    pub number_of_days: String,
    pub number_of_travelers: String,
    pub budget: String,
    pub mode_of_travel: Option<String>,
    pub email: String,
    pub additional_preferences: String,
}

impl FormSnapshot {
    /// Read every field from the view
    pub fn read_from<V: FormView + ?Sized>(view: &V) -> Self {
        Self {
            starting_location: view.field_value(FieldId::StartingLocation),
            destination: view.field_value(FieldId::Destination),
            number_of_days: view.field_value(FieldId::NumberOfDays),
            number_of_travelers: view.field_value(FieldId::NumberOfTravelers),
            budget: view.field_value(FieldId::Budget),
            mode_of_travel: view.selected_mode(),
            email: view.field_value(FieldId::Email),
            additional_preferences: view.field_value(FieldId::AdditionalPreferences),
        }
    }
}

/// Outbound webhook payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub starting_location: String,
    pub destination: String,
    pub number_of_days: u32,
    pub number_of_travelers: u32,
    pub budget: f64,
    pub mode_of_travel: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_preferences: Option<String>,
}

impl TripRequest {
    /// Normalize a snapshot into the wire payload
    ///
    /// Numeric fields fall back to 0 when unparseable. The controller only
    /// builds a payload after full validation passes, so the fallback never
    /// fires on the submit path; it keeps the builder infallible for callers
    /// that bypass validation.
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        let additional = snapshot.additional_preferences.trim();
        Self {
            starting_location: snapshot.starting_location.trim().to_string(),
            destination: snapshot.destination.trim().to_string(),
            number_of_days: snapshot.number_of_days.trim().parse().unwrap_or(0),
            number_of_travelers: snapshot.number_of_travelers.trim().parse().unwrap_or(0),
            budget: snapshot.budget.trim().parse().unwrap_or(0.0),
            mode_of_travel: snapshot
                .mode_of_travel
                .as_deref()
                .unwrap_or_default()
                .to_string(),
            email: snapshot.email.trim().to_string(),
            additional_preferences: if additional.is_empty() {
                None
            } else {
                Some(additional.to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_snapshot() -> FormSnapshot {
        FormSnapshot {
            starting_location: "NYC".to_string(),
            destination: "Paris".to_string(),
            number_of_days: "5".to_string(),
            number_of_travelers: "2".to_string(),
            budget: "1000".to_string(),
            mode_of_travel: Some("flight".to_string()),
            email: "a@b.com".to_string(),
            additional_preferences: String::new(),
        }
    }

    #[test]
    fn test_payload_normalizes_types() {
        let payload = TripRequest::from_snapshot(&valid_snapshot());
        assert_eq!(payload.number_of_days, 5);
        assert_eq!(payload.number_of_travelers, 2);
        assert_eq!(payload.budget, 1000.0);
        assert_eq!(payload.mode_of_travel, "flight");
    }

    #[test]
    fn test_payload_trims_strings() {
        let mut snapshot = valid_snapshot();
        snapshot.starting_location = "  NYC  ".to_string();
        snapshot.email = " a@b.com ".to_string();
        let payload = TripRequest::from_snapshot(&snapshot);
        assert_eq!(payload.starting_location, "NYC");
        assert_eq!(payload.email, "a@b.com");
    }

    #[test]
    fn test_payload_json_shape() {
        let mut snapshot = valid_snapshot();
        snapshot.additional_preferences = "  window seat ".to_string();
        let payload = TripRequest::from_snapshot(&snapshot);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "startingLocation": "NYC",
                "destination": "Paris",
                "numberOfDays": 5,
                "numberOfTravelers": 2,
                "budget": 1000.0,
                "modeOfTravel": "flight",
                "email": "a@b.com",
                "additionalPreferences": "window seat",
            })
        );
    }

    #[test]
    fn test_blank_preferences_omitted_from_json() {
        let snapshot = valid_snapshot();
        let json = serde_json::to_value(TripRequest::from_snapshot(&snapshot)).unwrap();
        assert!(json.get("additionalPreferences").is_none());
    }

    #[test]
    fn test_unparseable_numerics_fall_back_to_zero() {
        let mut snapshot = valid_snapshot();
        snapshot.number_of_days = "soon".to_string();
        snapshot.budget = String::new();
        snapshot.mode_of_travel = None;
        let payload = TripRequest::from_snapshot(&snapshot);
        assert_eq!(payload.number_of_days, 0);
        assert_eq!(payload.budget, 0.0);
        assert_eq!(payload.mode_of_travel, "");
    }
}
