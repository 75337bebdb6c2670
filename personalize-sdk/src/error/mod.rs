//! Error handling for the Personalize SDK
//!
//! This module provides a comprehensive error system that:
//! - Models the faults the service reports as typed variants
//! - Keeps local faults (validation, serialization, transport) apart
//! - Adds rich context to errors for better debugging
//! - Provides convenient Result type alias

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use typed_record_rs::{RecordError, ValidationError};

pub mod mapping;

/// Result type for Personalize SDK operations
pub type Result<T> = std::result::Result<T, PersonalizeError>;

/// Main error type for the Personalize SDK
#[derive(Error, Debug)]
pub enum PersonalizeError {
    /// The request carried a value the service rejected
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A pagination token was not recognised
    #[error("Invalid next token: {0}")]
    InvalidNextToken(String),

    /// An account or resource limit was reached
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    /// A resource with the same name already exists
    #[error("Resource already exists: {0}")]
    ResourceAlreadyExists(String),

    /// The resource is being used by another resource
    #[error("Resource in use: {0}")]
    ResourceInUse(String),

    /// The named resource does not exist
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Any other fault reported by the service
    #[error("Service error ({code}): {message}")]
    Service { code: String, message: String },

    /// A record operation failed
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// Client-side constraint validation failed
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Request or response body could not be converted
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The request executor failed before a response was received
    #[error("Executor error: {0}")]
    Executor(String),

    /// The request executor did not answer in time
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors with additional context
    #[error("{inner}")]
    WithContext {
        inner: Box<PersonalizeError>,
        context: ErrorContext,
    },
}

impl PersonalizeError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PersonalizeError::InvalidInput(message.into())
    }

    /// Create a resource not found error
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        PersonalizeError::ResourceNotFound(message.into())
    }

    /// Create a generic service error
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        PersonalizeError::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        PersonalizeError::Serialization(message.into())
    }

    /// Create an executor error
    pub fn executor(message: impl Into<String>) -> Self {
        PersonalizeError::Executor(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        PersonalizeError::Timeout(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        PersonalizeError::Configuration(message.into())
    }

    /// Add context to an existing error
    pub fn with_context(self, context: ErrorContext) -> Self {
        PersonalizeError::WithContext {
            inner: Box::new(self),
            context,
        }
    }

    /// Add a single context key/value to an existing error
    pub fn with_context_value(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        let mut context = ErrorContext::new();
        context.add(key, value);
        self.with_context(context)
    }

    /// The error without any context wrappers
    pub fn root(&self) -> &PersonalizeError {
        match self {
            PersonalizeError::WithContext { inner, .. } => inner.root(),
            other => other,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            PersonalizeError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the service error code if available
    pub fn error_code(&self) -> Option<&str> {
        self.context().and_then(|c| c.error_code.as_deref())
    }

    /// Get the operation name if available
    pub fn operation(&self) -> Option<&str> {
        self.context().map(|c| c.operation.as_str())
    }

    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        self.context().and_then(|c| c.status_code)
    }

    /// Get the request ID if available
    pub fn request_id(&self) -> Option<&str> {
        self.context().and_then(|c| c.request_id.as_deref())
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        match self {
            PersonalizeError::Executor(_) => true,
            PersonalizeError::Timeout(_) => true,
            PersonalizeError::LimitExceeded(_) => true,
            PersonalizeError::WithContext { inner, context } => {
                inner.is_retryable()
                    || (matches!(**inner, PersonalizeError::Service { .. })
                        && context.status_code.map_or(false, mapping::is_retryable_status))
            }
            _ => false,
        }
    }

    /// Check if this is a permanent error (not retryable)
    pub fn is_permanent(&self) -> bool {
        !self.is_retryable()
    }
}

/// Error context information
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Operation that generated the error
    pub operation: String,

    /// Time the error was observed
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,

    /// HTTP status code if applicable
    pub status_code: Option<u16>,

    /// Service-specific error code
    pub error_code: Option<String>,

    /// Request ID for tracing
    pub request_id: Option<String>,

    /// Additional context data
    pub data: HashMap<String, String>,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            operation: "unknown".to_string(),
            timestamp: Some(chrono::Utc::now()),
            status_code: None,
            error_code: None,
            request_id: None,
            data: HashMap::new(),
        }
    }
}

impl ErrorContext {
    /// Create a new error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new error context for a specific operation
    pub fn for_operation(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Self::default()
        }
    }

    /// Add an HTTP status code
    pub fn status_code(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Add an error code
    pub fn error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    /// Add a request ID
    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Add a context value
    pub fn add<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: fmt::Display,
    {
        self.data.insert(key.into(), value.to_string());
    }

    /// Add a context value and return self (builder pattern)
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: fmt::Display,
    {
        self.add(key, value);
        self
    }
}

/// Convert serde_json errors to PersonalizeError
impl From<serde_json::Error> for PersonalizeError {
    fn from(err: serde_json::Error) -> Self {
        PersonalizeError::serialization(format!("JSON error: {}", err))
    }
}
