//! Webhook driver contract

use crate::WebhookHeaders;
use crate::error::DriverError;
use std::fmt;
use std::sync::Arc;

/// A handler for one class of incoming webhook.
///
/// The manager only ever calls [`validate`](Self::validate) and then, if it
/// returned `true`, [`process`](Self::process) with the same payload and
/// headers. Payload and header types are opaque to the manager.
///
/// # Examples
///
/// ```rust
/// use webhook_manager::{DriverError, DriverIdentity, WebhookDriver, WebhookHeaders};
///
/// struct GithubPush;
///
/// impl WebhookDriver for GithubPush {
///     fn validate(&self, _data: &serde_json::Value, headers: &WebhookHeaders) -> bool {
///         headers.get("x-github-event") == Some("push")
///     }
///
///     fn process(
///         &self,
///         data: &serde_json::Value,
///         _headers: &WebhookHeaders,
///     ) -> Result<(), DriverError> {
///         println!("pushed to {}", data["ref"]);
///         Ok(())
///     }
///
///     fn identity(&self) -> Option<DriverIdentity> {
///         Some(DriverIdentity::Event("push".to_string()))
///     }
/// }
/// ```
pub trait WebhookDriver<D = serde_json::Value, H = WebhookHeaders>: Send + Sync {
    /// Decide whether `process` should run. Must not have side effects.
    fn validate(&self, data: &D, headers: &H) -> bool;

    /// Handle a validated webhook
    fn process(&self, data: &D, headers: &H) -> Result<(), DriverError>;

    /// Optional identity metadata; never used for lookup
    fn identity(&self) -> Option<DriverIdentity> {
        None
    }
}

/// A driver shared between the registry and its callers
pub type SharedDriver<D = serde_json::Value, H = WebhookHeaders> = Arc<dyn WebhookDriver<D, H>>;

/// What a driver says it handles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DriverIdentity {
    /// An event name, e.g. `"push"` or `"invoice.paid"`
    Event(String),

    /// A route path, e.g. `"/webhooks/stripe"`
    Path(String),
}

impl fmt::Display for DriverIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(event) => write!(f, "event:{}", event),
            Self::Path(path) => write!(f, "path:{}", path),
        }
    }
}

/// A driver built from a pair of closures
pub struct FnDriver<V, P> {
    validate: V,
    process: P,
    identity: Option<DriverIdentity>,
}

impl<V, P> FnDriver<V, P> {
    /// Create a driver from a validate and a process closure
    pub fn new(validate: V, process: P) -> Self {
        Self {
            validate,
            process,
            identity: None,
        }
    }

    /// Tag the driver with an event name
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.identity = Some(DriverIdentity::Event(event.into()));
        self
    }

    /// Tag the driver with a route path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.identity = Some(DriverIdentity::Path(path.into()));
        self
    }
}

impl<D, H, V, P> WebhookDriver<D, H> for FnDriver<V, P>
where
    V: Fn(&D, &H) -> bool + Send + Sync,
    P: Fn(&D, &H) -> Result<(), DriverError> + Send + Sync,
{
    fn validate(&self, data: &D, headers: &H) -> bool {
        (self.validate)(data, headers)
    }

    fn process(&self, data: &D, headers: &H) -> Result<(), DriverError> {
        (self.process)(data, headers)
    }

    fn identity(&self) -> Option<DriverIdentity> {
        self.identity.clone()
    }
}

impl<V, P> fmt::Debug for FnDriver<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnDriver")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn always(accept: bool) -> impl WebhookDriver {
        FnDriver::new(
            move |_: &Value, _: &WebhookHeaders| accept,
            |_: &Value, _: &WebhookHeaders| Ok(()),
        )
    }

    #[test]
    fn test_fn_driver_delegates() {
        let driver = FnDriver::new(
            |data: &Value, _: &WebhookHeaders| data["ok"] == json!(true),
            |_: &Value, _: &WebhookHeaders| Err::<(), DriverError>("nope".into()),
        );
        let headers = WebhookHeaders::new();

        assert!(driver.validate(&json!({"ok": true}), &headers));
        assert!(!driver.validate(&json!({"ok": false}), &headers));

        let err = driver.process(&json!({}), &headers).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn test_identity_defaults_to_none() {
        assert_eq!(always(true).identity(), None);
    }

    #[test]
    fn test_fn_driver_identity() {
        let driver = FnDriver::new(
            |_: &Value, _: &WebhookHeaders| true,
            |_: &Value, _: &WebhookHeaders| Ok(()),
        )
        .with_path("/hooks/stripe");

        assert_eq!(
            WebhookDriver::<Value, WebhookHeaders>::identity(&driver),
            Some(DriverIdentity::Path("/hooks/stripe".to_string()))
        );
    }

    #[test]
    fn test_identity_display() {
        assert_eq!(DriverIdentity::Event("push".into()).to_string(), "event:push");
        assert_eq!(DriverIdentity::Path("/gh".into()).to_string(), "path:/gh");
    }

    #[test]
    fn test_custom_payload_types() {
        struct Threshold(u32);

        impl WebhookDriver<u32, ()> for Threshold {
            fn validate(&self, data: &u32, _headers: &()) -> bool {
                *data >= self.0
            }

            fn process(&self, _data: &u32, _headers: &()) -> Result<(), DriverError> {
                Ok(())
            }
        }

        let driver: SharedDriver<u32, ()> = Arc::new(Threshold(10));
        assert!(driver.validate(&12, &()));
        assert!(!driver.validate(&3, &()));
    }
}
