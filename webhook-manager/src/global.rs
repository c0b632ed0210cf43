//! Process-wide manager

use crate::{WebhookManager, WebhookManagerConfig};
use once_cell::sync::Lazy;

static GLOBAL: Lazy<WebhookManager> =
    Lazy::new(|| WebhookManager::with_config(WebhookManagerConfig::from_env()));

/// Get the process-wide manager, creating it on first use.
///
/// Every call returns the same instance. Prefer creating a [`WebhookManager`]
/// and passing it around; this is a convenience for code that cannot.
pub fn initialize() -> &'static WebhookManager {
    &GLOBAL
}
