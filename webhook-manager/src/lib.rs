//! Webhook Driver Registry
//!
//! This crate keeps a table of named webhook drivers and dispatches incoming
//! webhooks to them. A driver decides whether a webhook is for it
//! (`validate`) and then handles it (`process`); the manager only calls
//! `process` when `validate` said yes.
//!
//! Receiving HTTP requests and verifying signatures happen before the
//! manager is involved; it is called with an already parsed payload and its
//! headers.
//!
//! # Features
//!
//! - **Named drivers**: one driver per name, last registration wins
//! - **Validate-then-process dispatch**: with a [`Dispatch`] record per call
//! - **Opaque payloads**: `serde_json::Value` and [`WebhookHeaders`] by
//!   default, any types via the generic parameters
//! - **Process-wide accessor**: [`initialize`] behind the `global` feature
//!
//! # Example
//!
//! ```rust
//! use webhook_manager::{FnDriver, WebhookHeaders, WebhookManager};
//! use serde_json::{Value, json};
//!
//! # fn main() -> webhook_manager::Result<()> {
//! let manager: WebhookManager = WebhookManager::new();
//!
//! manager.register(
//!     "github",
//!     FnDriver::new(
//!         |_: &Value, headers: &WebhookHeaders| headers.get("x-github-event") == Some("push"),
//!         |data: &Value, _: &WebhookHeaders| {
//!             println!("push to {}", data["ref"]);
//!             Ok(())
//!         },
//!     )
//!     .with_event("push"),
//! )?;
//!
//! let headers = WebhookHeaders::new().with("X-GitHub-Event", "push");
//! let dispatch = manager.process_webhook("github", &json!({"ref": "main"}), &headers)?;
//! assert!(dispatch.is_processed());
//!
//! assert!(manager.exists("github"));
//! assert!(manager.get_driver("gitlab").is_err());
//! # Ok(())
//! # }
//! ```

mod config;
mod dispatch;
mod driver;
mod error;
#[cfg(feature = "global")]
mod global;
mod headers;
mod manager;

pub use config::{
    ENV_LOGGING, ENV_WARN_ON_OVERWRITE, WebhookManagerConfig, WebhookManagerConfigBuilder,
};
pub use dispatch::{Dispatch, DispatchOutcome};
pub use driver::{DriverIdentity, FnDriver, SharedDriver, WebhookDriver};
pub use error::{DriverError, WebhookError};
#[cfg(feature = "global")]
pub use global::initialize;
pub use headers::WebhookHeaders;
pub use manager::WebhookManager;

/// Result type for webhook registry operations
pub type Result<T> = std::result::Result<T, WebhookError>;
