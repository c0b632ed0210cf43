//! Webhook driver registry and dispatch

use crate::{
    Dispatch, DispatchOutcome, Result, SharedDriver, WebhookDriver, WebhookError, WebhookHeaders,
    WebhookManagerConfig,
};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Registry of named webhook drivers.
///
/// Cloning a manager yields another handle onto the same registry, so one
/// instance can be created at startup and passed to whatever receives
/// webhooks. Drivers are only ever added; registering under a name that is
/// already bound replaces the previous driver.
pub struct WebhookManager<D = serde_json::Value, H = WebhookHeaders> {
    drivers: Arc<RwLock<HashMap<String, SharedDriver<D, H>>>>,
    config: Arc<WebhookManagerConfig>,
}

impl<D, H> WebhookManager<D, H> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::with_config(WebhookManagerConfig::default())
    }

    /// Create an empty registry with custom config
    pub fn with_config(config: WebhookManagerConfig) -> Self {
        Self {
            drivers: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config),
        }
    }

    /// Get the manager configuration
    pub fn config(&self) -> &WebhookManagerConfig {
        &self.config
    }

    /// Register a driver under `name`, replacing any existing binding
    pub fn register<T>(&self, name: impl Into<String>, driver: T) -> Result<SharedDriver<D, H>>
    where
        T: WebhookDriver<D, H> + 'static,
    {
        self.register_shared(name, Arc::new(driver))
    }

    /// Register an already shared driver under `name`.
    ///
    /// The same `Arc` is handed back by later lookups.
    pub fn register_shared(
        &self,
        name: impl Into<String>,
        driver: SharedDriver<D, H>,
    ) -> Result<SharedDriver<D, H>> {
        let name = name.into();
        if name.is_empty() {
            return Err(WebhookError::InvalidDriverName(name));
        }

        let replaced = self
            .drivers
            .write()
            .insert(name.clone(), Arc::clone(&driver))
            .is_some();

        if self.config.enable_logging {
            if replaced && self.config.warn_on_overwrite {
                warn!(driver = %name, "Replaced existing webhook driver");
            }
            debug!(driver = %name, identity = ?driver.identity(), "Registered webhook driver");
        }

        Ok(driver)
    }

    /// Register-or-fetch.
    ///
    /// With `Some(driver)` the driver is registered first. Either way the
    /// driver bound to `name` afterwards is returned.
    pub fn driver(
        &self,
        name: &str,
        driver: Option<SharedDriver<D, H>>,
    ) -> Result<SharedDriver<D, H>> {
        if let Some(driver) = driver {
            self.register_shared(name, driver)?;
        }
        self.get_driver(name)
    }

    /// Get the driver bound to `name`
    pub fn get_driver(&self, name: &str) -> Result<SharedDriver<D, H>> {
        let found = self.drivers.read().get(name).cloned();

        found.ok_or_else(|| {
            if self.config.enable_logging {
                warn!(driver = name, "Webhook driver not found");
            }
            WebhookError::DriverNotFound(name.to_string())
        })
    }

    /// Snapshot of every registered driver
    pub fn drivers(&self) -> HashMap<String, SharedDriver<D, H>> {
        self.drivers.read().clone()
    }

    /// Names of the registered drivers, sorted
    pub fn driver_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.drivers.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a driver is bound to `name`
    pub fn exists(&self, name: &str) -> bool {
        self.drivers.read().contains_key(name)
    }

    /// Get the number of registered drivers
    pub fn count(&self) -> usize {
        self.drivers.read().len()
    }

    /// Whether no driver has been registered yet
    pub fn is_empty(&self) -> bool {
        self.drivers.read().is_empty()
    }

    /// Run a webhook through the driver bound to `name`.
    ///
    /// `process` is only called when `validate` accepts the payload. Both
    /// receive exactly the `data` and `headers` given here. The registry lock
    /// is not held while the driver runs.
    pub fn process_webhook(&self, name: &str, data: &D, headers: &H) -> Result<Dispatch> {
        let driver = self.get_driver(name)?;
        let started = Utc::now();

        if self.config.enable_logging {
            debug!(driver = name, "Dispatching webhook");
        }

        if !driver.validate(data, headers) {
            if self.config.enable_logging {
                debug!(driver = name, "Webhook rejected by driver validation");
            }
            return Ok(Dispatch::new(name, DispatchOutcome::Rejected).at(started));
        }

        if let Err(e) = driver.process(data, headers) {
            if self.config.enable_logging {
                error!(driver = name, error = %e, "Webhook driver failed");
            }
            return Err(WebhookError::Driver(e));
        }

        let dispatch = Dispatch::new(name, DispatchOutcome::Processed).at(started);
        if self.config.enable_logging {
            info!(driver = name, dispatch_id = %dispatch.id, "Webhook processed");
        }
        Ok(dispatch)
    }
}

impl<D, H> Clone for WebhookManager<D, H> {
    fn clone(&self) -> Self {
        Self {
            drivers: Arc::clone(&self.drivers),
            config: Arc::clone(&self.config),
        }
    }
}

impl<D, H> Default for WebhookManager<D, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, H> fmt::Debug for WebhookManager<D, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookManager")
            .field("drivers", &self.driver_names())
            .field("config", &self.config)
            .finish()
    }
}
