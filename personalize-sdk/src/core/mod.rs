//! Core abstractions for the Personalize SDK
//!
//! This module provides the trait interfaces the client is built on:
//!
//! - `ServiceClient`: Identity of a service client
//! - `RequestExecutor`: Carries a serialized request to the service
//! - `ClientBuilder`: Builder pattern for creating clients

pub mod builder;
pub use builder::ClientBuilder;

use async_trait::async_trait;

use crate::error::Result;

/// Content type of the service's JSON protocol
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Base trait for all service clients
pub trait ServiceClient: Send + Sync {
    /// The client name/identifier
    fn name(&self) -> &str;

    /// The base URL for the service
    fn base_url(&self) -> &str;

    /// Service API version
    fn version(&self) -> &str;
}

/// A serialized operation call, ready for transport
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    /// Endpoint URL the call is addressed to
    pub endpoint: String,

    /// Value of the `X-Amz-Target` header, `AmazonPersonalize.<Operation>`
    pub target: String,

    /// Client-generated id for correlating logs
    pub request_id: String,

    /// JSON request body
    pub body: String,
}

impl ServiceRequest {
    /// Protocol headers the transport must send with the body
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", CONTENT_TYPE.to_string()),
            ("X-Amz-Target", self.target.clone()),
            ("amz-sdk-invocation-id", self.request_id.clone()),
        ]
    }
}

/// What the transport received back
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    /// HTTP status code
    pub status: u16,

    /// Service-assigned request id (`x-amzn-RequestId`)
    pub request_id: Option<String>,

    /// Error code from the `x-amzn-ErrorType` header, if any
    pub error_type: Option<String>,

    /// Raw response body
    pub body: String,
}

impl ServiceResponse {
    /// A successful response carrying `body`
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            request_id: None,
            error_type: None,
            body: body.into(),
        }
    }

    /// A failed response with the given status and body
    pub fn error(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            request_id: None,
            error_type: None,
            body: body.into(),
        }
    }

    /// Attach the service request id
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Attach the error type header value
    pub fn with_error_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait responsible for delivering requests to the service
///
/// Signing and HTTP live behind this seam; an implementation should only
/// return `Err` when no response was obtained at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Execute one call and return the raw response
    async fn execute(&self, request: ServiceRequest) -> Result<ServiceResponse>;
}
