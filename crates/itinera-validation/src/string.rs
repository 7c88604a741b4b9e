//! Required-field and selection validation

use alloc::string::{String, ToString};

/// Validates that a field has non-whitespace content
pub fn validate_required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("This field is required.".to_string())
    } else {
        Ok(())
    }
}

/// Validates that a mode-of-travel option is selected
///
/// Radio groups report no value at all until one option is picked, so the
/// input is an `Option` rather than a string field.
pub fn validate_mode_selected(selected: Option<&str>) -> Result<(), String> {
    match selected {
        Some(code) if !code.trim().is_empty() => Ok(()),
        _ => Err("Please select a mode of travel.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("NYC").is_ok());
        assert!(validate_required("  Paris  ").is_ok());

        assert!(validate_required("").is_err());
        assert!(validate_required("   ").is_err());
        assert_eq!(
            validate_required("").unwrap_err(),
            "This field is required."
        );
    }

    #[test]
    fn test_mode_selected() {
        assert!(validate_mode_selected(Some("flight")).is_ok());
        assert!(validate_mode_selected(Some("boat")).is_ok()); // presence only

        assert!(validate_mode_selected(None).is_err());
        assert!(validate_mode_selected(Some("")).is_err());
        assert_eq!(
            validate_mode_selected(None).unwrap_err(),
            "Please select a mode of travel."
        );
    }
}
