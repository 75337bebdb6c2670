//! Numeric validators

use crate::errors::{ValidationError, ValidationResult};

/// Validate that a numeric value is within a range (inclusive)
pub fn between<T>(value: T, min: T, max: T) -> ValidationResult<()>
where
    T: PartialOrd + std::fmt::Debug,
{
    if value < min || value > max {
        Err(ValidationError::OutOfRange(format!(
            "Value {:?} is outside range [{:?}, {:?}]",
            value, min, max
        )))
    } else {
        Ok(())
    }
}

/// Validate that a numeric value is at least a minimum
pub fn min<T>(value: T, min: T) -> ValidationResult<()>
where
    T: PartialOrd + std::fmt::Debug,
{
    if value < min {
        Err(ValidationError::OutOfRange(format!(
            "Value {:?} is less than minimum {:?}",
            value, min
        )))
    } else {
        Ok(())
    }
}

/// Validate that a numeric value is at most a maximum
pub fn max<T>(value: T, max: T) -> ValidationResult<()>
where
    T: PartialOrd + std::fmt::Debug,
{
    if value > max {
        Err(ValidationError::OutOfRange(format!(
            "Value {:?} exceeds maximum {:?}",
            value, max
        )))
    } else {
        Ok(())
    }
}

/// Validate against optional inclusive bounds
pub fn bounded(value: f64, lower: Option<f64>, upper: Option<f64>) -> ValidationResult<()> {
    match (lower, upper) {
        (Some(lo), Some(hi)) => between(value, lo, hi),
        (Some(lo), None) => min(value, lo),
        (None, Some(hi)) => max(value, hi),
        (None, None) => Ok(()),
    }
}
