//! String validators
//!
//! Lengths are counted in characters, matching how the service counts them.

use super::utils::get_regex;
use crate::errors::{ValidationError, ValidationResult};

/// Validate that a string meets a minimum length requirement
pub fn min_length(s: &str, min: usize) -> ValidationResult<()> {
    let len = s.chars().count();
    if len < min {
        Err(ValidationError::TooShort(format!(
            "String length ({}) is less than minimum length ({})",
            len, min
        )))
    } else {
        Ok(())
    }
}

/// Validate that a string does not exceed a maximum length
pub fn max_length(s: &str, max: usize) -> ValidationResult<()> {
    let len = s.chars().count();
    if len > max {
        Err(ValidationError::TooLong(format!(
            "String length ({}) exceeds maximum length ({})",
            len, max
        )))
    } else {
        Ok(())
    }
}

/// Validate that the whole string matches a pattern
pub fn matches_pattern(s: &str, pattern: &str) -> ValidationResult<()> {
    match get_regex(pattern) {
        Ok(re) => {
            if re.is_match(s) {
                Ok(())
            } else {
                Err(ValidationError::PatternMismatch(format!(
                    "String does not match pattern: {}",
                    pattern
                )))
            }
        }
        Err(e) => Err(ValidationError::InvalidPattern(format!(
            "Invalid regex pattern '{}': {}",
            pattern, e
        ))),
    }
}

/// Validate that a string is one of the allowed values
pub fn one_of(s: &str, allowed: &[&str]) -> ValidationResult<()> {
    if allowed.contains(&s) {
        Ok(())
    } else {
        Err(ValidationError::NotAllowed(format!(
            "'{}' is not one of [{}]",
            s,
            allowed.join(", ")
        )))
    }
}
