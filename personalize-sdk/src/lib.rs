//! # Personalize SDK
//!
//! Typed model and client seam for the Amazon Personalize control plane.
//!
//! This crate provides:
//!
//! - Request, result and configuration records for all 43 operations
//! - A client that validates, serializes and routes requests to a
//!   caller-supplied transport
//! - Typed errors for the faults the service reports
//! - Configuration and logging utilities
//!
//! ## Architecture
//!
//! - `model`: records declared with [`typed_record_rs::record!`]
//! - `Operation` / `OperationRequest`: binds each request to its output
//! - `RequestExecutor`: the transport seam (HTTP, signing, retries live behind it)
//! - `PersonalizeClient`: one typed method per operation
//! - `PersonalizeError`: error handling

// Re-export core modules
pub mod core;
pub use self::core::{ClientBuilder, RequestExecutor, ServiceClient, ServiceRequest, ServiceResponse};

pub mod client;
pub use client::PersonalizeClient;

pub mod model;

pub mod operation;
pub use operation::{Operation, OperationRequest};

// Re-export error handling
pub mod error;
pub use error::{ErrorContext, PersonalizeError, Result};

// Re-export configuration management
pub mod config;
pub use config::{ConfigProvider, PersonalizeConfig, ServiceConfig};

pub mod logging;
pub use logging::{init_logging, LoggingConfig};

// Utility module for common functionality
mod util;

pub use typed_record_rs::{Record, RecordError, Timestamp, ValidationError};

#[cfg(test)]
mod tests;

/// Create a new default client builder
pub fn client() -> core::ClientBuilder {
    core::ClientBuilder::new()
}
