//! Error types for webhook registry operations

use thiserror::Error;

/// Error returned by a driver's `process` step.
///
/// Drivers box their own error type; the manager hands it back untouched.
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while registering or dispatching webhooks
#[derive(Error, Debug)]
pub enum WebhookError {
    /// No driver is bound under the requested name
    #[error("{0} not found as a webhook driver")]
    DriverNotFound(String),

    /// Driver names must not be empty
    #[error("Invalid webhook driver name: {0:?}")]
    InvalidDriverName(String),

    /// The driver's `process` step failed; displays as the driver's own error
    #[error("{0}")]
    Driver(#[source] DriverError),
}

impl WebhookError {
    /// Name of the missing driver, if this is a lookup miss
    pub fn missing_driver(&self) -> Option<&str> {
        match self {
            Self::DriverNotFound(name) => Some(name),
            _ => None,
        }
    }

    /// The driver's own error, if `process` failed
    pub fn driver_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Driver(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
