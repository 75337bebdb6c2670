//! Error handling for the record runtime
//!
//! Two families of errors live here: [`RecordError`] for failures raised by
//! record operations themselves (duplicate map keys, unknown field names,
//! non-finite doubles, JSON conversion) and [`ValidationError`] for constraint violations found
//! by an explicit `validate()` call.

use std::fmt;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised by record operations
#[derive(Error, Debug)]
pub enum RecordError {
    /// A key was added to a map field that already holds it
    #[error("Duplicated keys ({key}) are provided for {record}.{field}")]
    DuplicateKey {
        record: &'static str,
        field: &'static str,
        key: String,
    },

    /// A dynamic accessor named a field the record does not declare
    #[error("{record} has no field named '{field}'")]
    UnknownField { record: &'static str, field: String },

    /// A present double is NaN or infinite
    #[error("{record}.{path} holds a non-finite number, which has no JSON form")]
    NonFinite { record: &'static str, path: String },

    /// A value could not be converted to or from its JSON form
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Constraint validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RecordError {
    /// Returns true if this error was raised by a map insertion
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, RecordError::DuplicateKey { .. })
    }
}

/// Enum representing different validation error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input is too long (string, list or map)
    #[error("Input exceeds maximum length: {0}")]
    TooLong(String),

    /// Input is too short (string, list or map)
    #[error("Input is shorter than minimum length: {0}")]
    TooShort(String),

    /// Input is outside numeric range
    #[error("Value is outside allowed range: {0}")]
    OutOfRange(String),

    /// Input validation failed for regex pattern
    #[error("Pattern match failed: {0}")]
    PatternMismatch(String),

    /// Value is not a member of the allowed set
    #[error("Value is not allowed: {0}")]
    NotAllowed(String),

    /// Input type is incorrect
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// A declared pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Composite validation error (multiple errors)
    #[error("{0}")]
    Composite(CompositeError),
}

/// Container for multiple validation errors
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeError {
    /// Collection of validation errors
    pub errors: Vec<ValidationError>,
    /// Field path information
    pub path: Option<String>,
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) if !path.is_empty() => {
                writeln!(f, "{} validation errors at {}:", self.errors.len(), path)?
            }
            _ => writeln!(f, "{} validation errors:", self.errors.len())?,
        }

        for (idx, err) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", idx + 1, err)?;
        }

        Ok(())
    }
}

impl ValidationError {
    /// Create a new composite validation error from a collection of errors
    pub fn composite<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
    {
        Self::collect(errors.into_iter().collect(), None)
    }

    /// Create a composite error with a specific field path
    pub fn composite_at<I, S>(errors: I, path: S) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
        S: Into<String>,
    {
        Self::collect(errors.into_iter().collect(), Some(path.into()))
    }

    fn collect(mut errors: Vec<ValidationError>, path: Option<String>) -> Self {
        if errors.len() == 1 {
            // A single error is returned as-is
            errors.remove(0)
        } else {
            ValidationError::Composite(CompositeError { errors, path })
        }
    }

    /// Flatten nested composites into their leaf errors
    pub fn leaves(&self) -> Vec<&ValidationError> {
        match self {
            ValidationError::Composite(composite) => {
                composite.errors.iter().flat_map(|e| e.leaves()).collect()
            }
            other => vec![other],
        }
    }

    /// Number of leaf errors carried by this error
    pub fn count(&self) -> usize {
        self.leaves().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_error() {
        let errs = vec![
            ValidationError::TooShort("name: 0 < 1".to_string()),
            ValidationError::PatternMismatch("roleArn".to_string()),
        ];

        let composite = ValidationError::composite(errs);

        if let ValidationError::Composite(comp) = &composite {
            assert_eq!(comp.errors.len(), 2);
        } else {
            panic!("Expected composite error");
        }
        assert_eq!(composite.count(), 2);

        // Test with a single error
        let single_err = ValidationError::OutOfRange("maxResults".to_string());
        let composite_single = ValidationError::composite(vec![single_err.clone()]);

        // Should unwrap to the original error
        assert_eq!(composite_single, single_err);
    }

    #[test]
    fn test_nested_composite_leaves() {
        let inner = ValidationError::composite_at(
            vec![
                ValidationError::TooLong("a".to_string()),
                ValidationError::TooLong("b".to_string()),
            ],
            "solutionConfig",
        );
        let outer = ValidationError::composite(vec![inner, ValidationError::NotAllowed("c".to_string())]);

        assert_eq!(outer.count(), 3);
        assert!(outer.to_string().contains("solutionConfig"));
    }

    #[test]
    fn test_duplicate_key_message() {
        let err = RecordError::DuplicateKey {
            record: "CampaignConfig",
            field: "itemExplorationConfig",
            key: "explorationWeight".to_string(),
        };

        assert!(err.is_duplicate_key());
        assert_eq!(
            err.to_string(),
            "Duplicated keys (explorationWeight) are provided for CampaignConfig.itemExplorationConfig"
        );
    }
}
