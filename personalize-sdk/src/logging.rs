//! # Structured Logging
//!
//! Subscriber setup for applications embedding the client. The client itself
//! only emits `tracing` events and spans; nothing is printed unless a
//! subscriber is installed, for example with [`init_logging`].

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{PersonalizeError, Result};

// Flag to track if logging has been initialized
static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Configuration for the logging system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// The log level to use (trace, debug, info, warn, error)
    pub level: String,
    /// Whether to use JSON formatting
    pub json_format: bool,
    /// Whether to include the event target
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Filter directive for the configured level; `RUST_LOG` wins when set
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,personalize_sdk={0},typed_record_rs={0}", self.level)))
    }
}

/// Initializes the structured logging system
pub fn init_logging(config: Option<LoggingConfig>) -> Result<()> {
    // Don't re-initialize if already done
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return Ok(());
    }

    let config = config.unwrap_or_default();

    let json_layer = config.json_format.then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_target(config.with_target)
    });

    let text_layer = (!config.json_format).then(|| fmt::layer().with_target(config.with_target));

    tracing_subscriber::registry()
        .with(config.filter())
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| PersonalizeError::configuration(format!("Failed to set global subscriber: {}", e)))?;

    LOGGING_INITIALIZED.store(true, Ordering::SeqCst);

    tracing::info!(
        level = %config.level,
        json = config.json_format,
        "Structured logging initialized"
    );

    Ok(())
}

/// Whether [`init_logging`] has installed a subscriber
pub fn is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging(Some(LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        }))
        .unwrap();
        assert!(is_initialized());

        // A second call is a no-op, even with different settings
        assert!(init_logging(Some(LoggingConfig {
            json_format: true,
            ..LoggingConfig::default()
        }))
        .is_ok());
    }
}
