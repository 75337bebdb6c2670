//! Personalize client
//!
//! Shapes typed requests into [`ServiceRequest`]s, hands them to a
//! [`RequestExecutor`] and turns the answer back into typed output or a
//! [`PersonalizeError`].

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};
use typed_record_rs::Record;

use crate::config::{PersonalizeConfig, ServiceConfig};
use crate::core::{ClientBuilder, RequestExecutor, ServiceClient, ServiceRequest};
use crate::error::{mapping, ErrorContext, PersonalizeError, Result};
use crate::model::*;
use crate::operation::{with_operations, Operation, OperationRequest};
use crate::util::{generate_request_id, measure_time_async, truncate_string};

/// API version of the control plane
pub const API_VERSION: &str = "2018-05-22";

/// Typed client for the Personalize control plane
pub struct PersonalizeClient<E> {
    /// Transport the requests are handed to
    executor: Arc<E>,

    /// Configuration
    config: PersonalizeConfig,
}

impl<E> Clone for PersonalizeClient<E> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            config: self.config.clone(),
        }
    }
}

impl<E> fmt::Debug for PersonalizeClient<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalizeClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PersonalizeClient<()> {
    /// Create a new builder for the client
    ///
    /// The executor type is fixed later, by [`ClientBuilder::build`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<E: RequestExecutor> PersonalizeClient<E> {
    /// Create a client with default configuration
    pub fn new(executor: E) -> Result<Self> {
        Self::with_config(executor, PersonalizeConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(executor: E, config: PersonalizeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            executor: Arc::new(executor),
            config,
        })
    }

    pub fn config(&self) -> &PersonalizeConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Send any operation request and decode its output
    pub async fn send<R: OperationRequest>(&self, request: &R) -> Result<R::Output> {
        let operation = R::OPERATION;
        let request_id = generate_request_id();
        let span = info_span!(
            "personalize_call",
            operation = operation.name(),
            request_id = %request_id
        );

        self.dispatch(operation, request, request_id).instrument(span).await
    }

    async fn dispatch<R: OperationRequest>(
        &self,
        operation: Operation,
        request: &R,
        request_id: String,
    ) -> Result<R::Output> {
        let context = || ErrorContext::for_operation(operation.name()).request_id(request_id.clone());

        if self.config.validate_requests {
            if let Err(e) = request.validate() {
                warn!(violations = e.count(), "Request failed validation");
                return Err(PersonalizeError::from(e).with_context(context()));
            }
        }

        debug!(
            request = %truncate_string(&request.describe(), self.config.describe_limit),
            "Sending request"
        );

        let body = request
            .to_json()
            .map_err(|e| PersonalizeError::from(e).with_context(context()))?;
        let endpoint = self
            .config
            .endpoint_url()
            .map_err(|e| e.with_context(context()))?;

        let service_request = ServiceRequest {
            endpoint: endpoint.to_string(),
            target: operation.target(),
            request_id: request_id.clone(),
            body,
        };

        let timeout = self.config.timeout;
        let (outcome, elapsed) = measure_time_async(|| {
            tokio::time::timeout(timeout, self.executor.execute(service_request))
        })
        .await;

        let response = match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!(error = %e, "Request executor failed");
                return Err(e.with_context(context()));
            }
            Err(_) => {
                warn!(timeout_ms = timeout.as_millis() as u64, "Request timed out");
                return Err(PersonalizeError::timeout(format!(
                    "{} did not complete within {:?}",
                    operation, timeout
                ))
                .with_context(context()));
            }
        };

        debug!(
            status = response.status,
            elapsed_ms = elapsed.as_millis() as u64,
            "Received response"
        );

        if !response.is_success() {
            let mut ctx = context();
            if let Some(service_id) = &response.request_id {
                ctx.add("service_request_id", service_id);
            }
            let error = mapping::map_error_response(
                response.status,
                response.error_type.as_deref(),
                &response.body,
                &mut ctx,
            );
            warn!(status = response.status, error = %error, "Service returned an error");
            return Err(error.with_context(ctx));
        }

        if response.body.trim().is_empty() {
            return Ok(R::Output::default());
        }

        R::Output::from_json(&response.body).map_err(|e| {
            PersonalizeError::serialization(format!("Failed to decode {} output: {}", operation, e))
                .with_context(context().status_code(response.status))
        })
    }
}

macro_rules! operation_methods {
    ($($op:ident => $req:ident -> $out:ident,)+) => {
        paste::paste! {
            impl<E: RequestExecutor> PersonalizeClient<E> {
                $(
                    #[doc = "Calls the `" $op "` operation"]
                    pub async fn [<$op:snake>](&self, request: &$req) -> Result<$out> {
                        self.send(request).await
                    }
                )+
            }
        }
    };
}

with_operations!(operation_methods);

impl<E: RequestExecutor> ServiceClient for PersonalizeClient<E> {
    fn name(&self) -> &str {
        "personalize"
    }

    fn base_url(&self) -> &str {
        &self.config.endpoint
    }

    fn version(&self) -> &str {
        API_VERSION
    }
}
