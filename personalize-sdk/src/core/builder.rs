//! Client builder implementation
//!
//! Provides a builder pattern for creating and configuring the client.

use std::time::Duration;

use crate::client::PersonalizeClient;
use crate::config::{ConfigProvider, ConfigProviderExt, PersonalizeConfig, ServiceConfig};
use crate::core::RequestExecutor;
use crate::error::Result;

/// Builder for [`PersonalizeClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    /// Settings collected so far
    config: PersonalizeConfig,

    /// Whether an explicit endpoint was set
    endpoint_set: bool,
}

impl ClientBuilder {
    /// Create a new client builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from configuration loaded from a provider
    ///
    /// An endpoint only counts as explicit when the provider supplies one.
    pub fn from_provider<P: ConfigProvider>(provider: &P) -> Result<Self> {
        Ok(Self {
            config: PersonalizeConfig::from_provider(provider)?,
            endpoint_set: provider.contains("endpoint"),
        })
    }

    /// Set the service endpoint, with or without a scheme
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self.endpoint_set = true;
        self
    }

    /// Set the region; the endpoint follows unless set explicitly
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = region.into();
        if !self.endpoint_set {
            self.config.endpoint = PersonalizeConfig::endpoint_for_region(&self.config.region);
        }
        self
    }

    /// Validate request records before they are sent
    pub fn validate_requests(mut self, enabled: bool) -> Self {
        self.config.validate_requests = enabled;
        self
    }

    /// Maximum characters of a record description written to logs
    pub fn describe_limit(mut self, limit: usize) -> Self {
        self.config.describe_limit = limit;
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// The configuration as it stands
    pub fn config(&self) -> &PersonalizeConfig {
        &self.config
    }

    /// Validate the settings and build a client around `executor`
    pub fn build<E: RequestExecutor>(self, executor: E) -> Result<PersonalizeClient<E>> {
        self.config.validate()?;
        PersonalizeClient::with_config(executor, self.config)
    }
}
