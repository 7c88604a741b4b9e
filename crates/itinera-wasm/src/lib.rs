//! Itinera validation WASM bindings
//!
//! WebAssembly exports giving the hosting page live per-field validation
//! with the same logic the form engine runs before submission.

use itinera_validation::{
    is_valid_email, validate_budget, validate_days, validate_email, validate_mode_selected,
    validate_required, validate_travelers,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Raw form values as the page holds them
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTripForm {
    pub starting_location: String,
    pub destination: String,
    pub number_of_days: String,
    pub number_of_travelers: String,
    pub budget: String,
    pub mode_of_travel: Option<String>,
    pub email: String,
    pub additional_preferences: String,
}

fn validator_for(field: &str) -> Option<fn(&str) -> Result<(), String>> {
    match field {
        "startingLocation" | "destination" => Some(validate_required),
        "numberOfDays" => Some(validate_days),
        "numberOfTravelers" => Some(validate_travelers),
        "budget" => Some(validate_budget),
        "email" => Some(validate_email),
        _ => None,
    }
}

/// Validate a single field value on an input event
///
/// Returns the error message, or `null`/`undefined` when the value is valid
/// or the field is not tracked.
///
/// # Example (JavaScript)
/// ```javascript
/// const error = validateField('budget', input.value);
/// errorSlot.textContent = error ?? '';
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: &str, value: &str) -> Option<String> {
    validator_for(field).and_then(|validate| validate(value).err())
}

/// Validate the whole form before submission
///
/// # Arguments
/// * `form` - JavaScript object with the raw field values (camelCase keys,
///   `modeOfTravel` null or absent when no radio option is checked)
///
/// # Returns
/// Array of `{field, message}` errors (empty if the form is valid)
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: JsValue) -> Result<JsValue, JsValue> {
    let form: RawTripForm = serde_wasm_bindgen::from_value(form)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form: {}", e)))?;

    let mut errors = Vec::new();
    let mut push = |field: &str, result: Result<(), String>| {
        if let Err(message) = result {
            errors.push(ValidationError {
                field: field.to_string(),
                message,
            });
        }
    };

    push("startingLocation", validate_required(&form.starting_location));
    push("destination", validate_required(&form.destination));
    push("numberOfDays", validate_days(&form.number_of_days));
    push(
        "numberOfTravelers",
        validate_travelers(&form.number_of_travelers),
    );
    push("budget", validate_budget(&form.budget));
    push("email", validate_email(&form.email));
    push(
        "modeOfTravel",
        validate_mode_selected(form.mode_of_travel.as_deref()),
    );

    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    is_valid_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_field_dispatch() {
        assert!(validate_field("budget", "100").is_none());
        assert_eq!(
            validate_field("budget", "-1").as_deref(),
            Some("Budget cannot be negative.")
        );
        assert!(validate_field("unknownField", "whatever").is_none());
    }

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("invalid-email"));
    }

    #[wasm_bindgen_test]
    fn test_day_boundaries() {
        assert!(validate_field("numberOfDays", "365").is_none());
        assert_eq!(
            validate_field("numberOfDays", "366").as_deref(),
            Some("Maximum 365 days.")
        );
    }
}
