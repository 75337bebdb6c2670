//! Configuration management for the Personalize client
//!
//! This module provides utilities for loading and validating client
//! configuration, with support for environment variables.

use std::collections::HashMap;
use std::env;
use std::fmt::{self, Debug};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PersonalizeError, Result};
use crate::util::parse_duration;

/// Base trait for configuration providers
pub trait ConfigProvider: Send + Sync {
    /// Get a string configuration value
    fn get_string(&self, key: &str) -> Result<String>;
}

/// Extension methods for configuration providers
pub trait ConfigProviderExt: ConfigProvider {
    /// Get an integer configuration value
    fn get_int(&self, key: &str) -> Result<i64> {
        let value = self.get_string(key)?;
        value.parse::<i64>().map_err(|e| {
            PersonalizeError::configuration(format!("Invalid integer for key {}: {}", key, e))
        })
    }

    /// Get a boolean configuration value
    fn get_bool(&self, key: &str) -> Result<bool> {
        let value = self.get_string(key)?;
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => Err(PersonalizeError::configuration(format!(
                "Invalid boolean value for key {}: {}",
                key, value
            ))),
        }
    }

    /// Get a duration such as `30s`, `500ms` or `2m`
    fn get_duration(&self, key: &str) -> Result<Duration> {
        let value = self.get_string(key)?;
        parse_duration(&value).ok_or_else(|| {
            PersonalizeError::configuration(format!("Invalid duration for key {}: {}", key, value))
        })
    }

    /// Get a typed configuration value by parsing from string
    fn get<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        <T as FromStr>::Err: fmt::Display,
    {
        let value = self.get_string(key)?;
        value.parse::<T>().map_err(|e| {
            PersonalizeError::configuration(format!("Invalid value for key {}: {}", key, e))
        })
    }

    /// Whether the provider has a value for `key`
    fn contains(&self, key: &str) -> bool {
        self.get_string(key).is_ok()
    }

    /// Get a string configuration value with a default
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get an integer configuration value with a default
    fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.get_int(key).unwrap_or(default)
    }

    /// Get a boolean configuration value with a default
    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProviderExt for T {}

/// Environment variable based configuration provider
#[derive(Debug, Clone, Default)]
pub struct EnvConfigProvider {
    /// Optional prefix for environment variables
    prefix: Option<String>,

    /// Optional namespace for variables
    namespace: Option<String>,
}

impl EnvConfigProvider {
    /// Create a new environment variable config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prefix for environment variables
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set a namespace for environment variables
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Format a configuration key as an environment variable
    pub(crate) fn format_key(&self, key: &str) -> String {
        let mut env_key = String::new();

        if let Some(ref prefix) = self.prefix {
            env_key.push_str(prefix);
            env_key.push('_');
        }

        if let Some(ref namespace) = self.namespace {
            env_key.push_str(namespace);
            env_key.push('_');
        }

        // Uppercase, with non-alphanumerics replaced by underscores
        env_key.push_str(&key.to_uppercase().replace(|c: char| !c.is_ascii_alphanumeric(), "_"));

        env_key
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        let env_key = self.format_key(key);

        env::var(&env_key).map_err(|e| match e {
            env::VarError::NotPresent => PersonalizeError::configuration(format!(
                "Environment variable not set: {}",
                env_key
            )),
            env::VarError::NotUnicode(_) => PersonalizeError::configuration(format!(
                "Environment variable is not valid unicode: {}",
                env_key
            )),
        })
    }
}

/// In-memory config provider for testing or static configuration
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigProvider {
    /// Configuration values
    values: HashMap<String, String>,
}

impl MemoryConfigProvider {
    /// Create a new empty memory config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory config provider with initial values
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Set a configuration value
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.values.insert(key.into(), value.to_string());
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        self.values.get(key).cloned().ok_or_else(|| {
            PersonalizeError::configuration(format!("Configuration key not found: {}", key))
        })
    }
}

/// A composite config provider that tries multiple providers in order
#[derive(Default)]
pub struct CompositeConfigProvider {
    /// Ordered list of config providers to try
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl CompositeConfigProvider {
    /// Create a new composite config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider to the chain
    pub fn add_provider(&mut self, provider: impl ConfigProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Add a provider and return self (builder pattern)
    pub fn with_provider(mut self, provider: impl ConfigProvider + 'static) -> Self {
        self.add_provider(provider);
        self
    }
}

impl Debug for CompositeConfigProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeConfigProvider")
            .field("providers", &self.providers.len())
            .finish()
    }
}

impl ConfigProvider for CompositeConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        for provider in &self.providers {
            if let Ok(value) = provider.get_string(key) {
                return Ok(value);
            }
        }

        Err(PersonalizeError::configuration(format!(
            "Configuration key not found in any provider: {}",
            key
        )))
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Arc<P> {
    fn get_string(&self, key: &str) -> Result<String> {
        (**self).get_string(key)
    }
}

/// Global default configuration provider
pub static DEFAULT_PROVIDER: Lazy<Arc<EnvConfigProvider>> =
    Lazy::new(|| Arc::new(EnvConfigProvider::new().with_prefix("PERSONALIZE")));

/// Trait for service-specific configuration
pub trait ServiceConfig: Debug + Send + Sync {
    /// Validate this configuration
    fn validate(&self) -> Result<()>;

    /// Service name
    fn service_name(&self) -> &str;
}

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_ENDPOINT: &str = "https://personalize.us-east-1.amazonaws.com";
pub const DEFAULT_DESCRIBE_LIMIT: usize = 512;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Personalize client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizeConfig {
    /// Endpoint, with or without a scheme
    pub endpoint: String,

    /// Region the endpoint belongs to
    pub region: String,

    /// Validate request records before sending
    pub validate_requests: bool,

    /// Maximum characters of a record description written to logs
    pub describe_limit: usize,

    /// How long to wait for the executor
    pub timeout: Duration,
}

impl Default for PersonalizeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            validate_requests: false,
            describe_limit: DEFAULT_DESCRIBE_LIMIT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl PersonalizeConfig {
    /// Regional endpoint of the service
    pub fn endpoint_for_region(region: &str) -> String {
        format!("https://personalize.{}.amazonaws.com", region)
    }

    /// Load configuration from a config provider
    ///
    /// Keys: `endpoint`, `region`, `validate_requests`, `describe_limit`,
    /// `timeout`. Without an explicit endpoint the regional one is used.
    /// Missing keys take their defaults; a key that is set to a malformed
    /// value is a configuration error.
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Result<Self> {
        let region = provider.get_string_or("region", DEFAULT_REGION);
        let endpoint = provider
            .get_string("endpoint")
            .unwrap_or_else(|_| Self::endpoint_for_region(&region));
        let validate_requests = if provider.contains("validate_requests") {
            provider.get_bool("validate_requests")?
        } else {
            false
        };
        let describe_limit = if provider.contains("describe_limit") {
            provider.get::<usize>("describe_limit")?
        } else {
            DEFAULT_DESCRIBE_LIMIT
        };
        let timeout = if provider.contains("timeout") {
            provider.get_duration("timeout")?
        } else {
            DEFAULT_TIMEOUT
        };

        let config = Self {
            endpoint,
            region,
            validate_requests,
            describe_limit,
            timeout,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the `PERSONALIZE_*` environment
    pub fn from_env() -> Result<Self> {
        Self::from_provider(&**DEFAULT_PROVIDER)
    }

    /// The endpoint as a URL; `https://` is assumed when no scheme is given
    pub fn endpoint_url(&self) -> Result<Url> {
        let raw = self.endpoint.trim();
        let candidate = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("https://{}", raw)
        };

        let url = Url::parse(&candidate).map_err(|e| {
            PersonalizeError::configuration(format!("Invalid endpoint '{}': {}", self.endpoint, e))
        })?;

        if url.host_str().is_none() {
            return Err(PersonalizeError::configuration(format!(
                "Endpoint has no host: {}",
                self.endpoint
            )));
        }

        Ok(url)
    }
}

impl ServiceConfig for PersonalizeConfig {
    fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(PersonalizeError::configuration("Personalize endpoint is required"));
        }
        self.endpoint_url()?;

        if self.region.trim().is_empty() {
            return Err(PersonalizeError::configuration("Personalize region is required"));
        }

        if self.describe_limit == 0 {
            return Err(PersonalizeError::configuration(
                "Describe limit must be greater than zero",
            ));
        }

        if self.timeout.is_zero() {
            return Err(PersonalizeError::configuration("Timeout must be greater than zero"));
        }

        Ok(())
    }

    fn service_name(&self) -> &str {
        "personalize"
    }
}
