//! Numeric field validation for the trip request

use alloc::string::{String, ToString};

/// Validates the number-of-days field (1 to 365)
pub fn validate_days(value: &str) -> Result<(), String> {
    let num = match value.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => return Err("Enter at least 1 day.".to_string()),
    };
    if num < 1 {
        return Err("Enter at least 1 day.".to_string());
    }
    if num > 365 {
        return Err("Maximum 365 days.".to_string());
    }
    Ok(())
}

/// Validates the number-of-travelers field (1 to 99)
pub fn validate_travelers(value: &str) -> Result<(), String> {
    let num = match value.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => return Err("Enter at least 1 traveler.".to_string()),
    };
    if num < 1 {
        return Err("Enter at least 1 traveler.".to_string());
    }
    if num > 99 {
        return Err("Maximum 99 travelers.".to_string());
    }
    Ok(())
}

/// Validates the budget field: any non-negative number, zero included
pub fn validate_budget(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Budget is required.".to_string());
    }
    let num = match trimmed.parse::<f64>() {
        Ok(n) => n,
        Err(_) => return Err("Enter a valid number.".to_string()),
    };
    // parse accepts "NaN" and "inf"; neither is a budget
    if !num.is_finite() {
        return Err("Enter a valid number.".to_string());
    }
    if num < 0.0 {
        return Err("Budget cannot be negative.".to_string());
    }
    Ok(())
}
