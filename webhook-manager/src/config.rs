//! Configuration for the webhook manager

use serde::Deserialize;
use std::env;

/// Environment variable toggling registry/dispatch logging
pub const ENV_LOGGING: &str = "WEBHOOK_MANAGER_LOGGING";

/// Environment variable toggling the overwrite warning
pub const ENV_WARN_ON_OVERWRITE: &str = "WEBHOOK_MANAGER_WARN_ON_OVERWRITE";

/// Configuration for a [`WebhookManager`](crate::WebhookManager)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WebhookManagerConfig {
    /// Emit `tracing` events for registrations, lookups and dispatches
    pub enable_logging: bool,

    /// Log a warning when a registration replaces an existing driver
    pub warn_on_overwrite: bool,
}

impl Default for WebhookManagerConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            warn_on_overwrite: true,
        }
    }
}

impl WebhookManagerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> WebhookManagerConfigBuilder {
        WebhookManagerConfigBuilder::new()
    }

    /// Create config from environment variables.
    ///
    /// Unset or unparseable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            enable_logging: lookup(ENV_LOGGING)
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.enable_logging),
            warn_on_overwrite: lookup(ENV_WARN_ON_OVERWRITE)
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.warn_on_overwrite),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for WebhookManagerConfig
#[derive(Debug, Clone, Default)]
pub struct WebhookManagerConfigBuilder {
    config: WebhookManagerConfig,
}

impl WebhookManagerConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: WebhookManagerConfig::default(),
        }
    }

    /// Enable or disable logging
    pub fn enable_logging(mut self, enabled: bool) -> Self {
        self.config.enable_logging = enabled;
        self
    }

    /// Enable or disable the overwrite warning
    pub fn warn_on_overwrite(mut self, enabled: bool) -> Self {
        self.config.warn_on_overwrite = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> WebhookManagerConfig {
        self.config
    }
}
