//! Input checks shared by the repositories and the CLI.

use crate::entities::is_hex_color;
use crate::errors::CoreError;

/// Trimmed tag name; blank names are rejected.
pub fn tag_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("tag name must not be empty"));
    }
    Ok(trimmed.to_string())
}

pub fn hex_color(field: &str, value: &str) -> Result<(), CoreError> {
    if is_hex_color(value) {
        Ok(())
    } else {
        Err(CoreError::validation(format!(
            "{field} must be a #RRGGBB color, got '{value}'"
        )))
    }
}

pub fn month(month: u32) -> Result<(), CoreError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CoreError::validation(format!("month must be 1-12, got {month}")))
    }
}

pub fn quarter(quarter: u32) -> Result<(), CoreError> {
    if (1..=4).contains(&quarter) {
        Ok(())
    } else {
        Err(CoreError::validation(format!(
            "quarter must be 1-4, got {quarter}"
        )))
    }
}

pub fn progress(progress: u8) -> Result<(), CoreError> {
    if progress <= 100 {
        Ok(())
    } else {
        Err(CoreError::validation(format!(
            "progress must be 0-100, got {progress}"
        )))
    }
}

pub fn day_of_week(day: u8) -> Result<(), CoreError> {
    if day <= 6 {
        Ok(())
    } else {
        Err(CoreError::validation(format!(
            "day_of_week must be 0 (Sunday) to 6 (Saturday), got {day}"
        )))
    }
}

pub fn hours(field: &str, hours: f64) -> Result<(), CoreError> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::validation(format!(
            "{field} must be a non-negative number, got {hours}"
        )))
    }
}
