//! Validator functions and utilities
//!
//! These validators back [`crate::Record::validate`] and can also be used
//! directly on individual values.

pub mod numeric;
pub mod string;

pub use numeric::*;
pub use string::*;

use crate::errors::{ValidationError, ValidationResult};

/// Utility module for validation helpers
pub mod utils {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use regex::Regex;

    static REGEX_CACHE: Lazy<Mutex<HashMap<String, Regex>>> =
        Lazy::new(|| Mutex::new(HashMap::new()));

    /// Compile `pattern` anchored to the whole input, with caching
    pub fn get_regex(pattern: &str) -> Result<Regex, regex::Error> {
        let mut cache = match REGEX_CACHE.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(re) = cache.get(pattern) {
            return Ok(re.clone());
        }

        let compiled = Regex::new(&format!("^(?:{})$", pattern))?;
        cache.insert(pattern.to_string(), compiled.clone());
        Ok(compiled)
    }
}

/// Validate that a list or map holds at least `min` entries
pub fn min_items(count: usize, min: usize) -> ValidationResult<()> {
    if count < min {
        Err(ValidationError::TooShort(format!(
            "{} entries is less than minimum {}",
            count, min
        )))
    } else {
        Ok(())
    }
}

/// Validate that a list or map holds at most `max` entries
pub fn max_items(count: usize, max: usize) -> ValidationResult<()> {
    if count > max {
        Err(ValidationError::TooLong(format!(
            "{} entries exceeds maximum {}",
            count, max
        )))
    } else {
        Ok(())
    }
}

/// Validate the number of entries in a list or map
pub fn item_count(count: usize, min: Option<usize>, max: Option<usize>) -> ValidationResult<()> {
    if let Some(min) = min {
        min_items(count, min)?;
    }
    if let Some(max) = max {
        max_items(count, max)?;
    }
    Ok(())
}

// Run every validator and gather the failures
pub(crate) fn run_all<T: ?Sized>(
    input: &T,
    validators: &[&dyn Fn(&T) -> ValidationResult<()>],
) -> Vec<ValidationError> {
    validators
        .iter()
        .filter_map(|validator| validator(input).err())
        .collect()
}
