//! Dispatch records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of running a webhook through its driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// `validate` accepted the webhook and `process` completed
    Processed,

    /// `validate` rejected the webhook; `process` was not called
    Rejected,
}

/// Record of a single dispatch through [`WebhookManager::process_webhook`](crate::WebhookManager::process_webhook)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatch {
    /// Unique dispatch ID
    pub id: Uuid,

    /// Name of the driver the webhook was dispatched to
    pub driver: String,

    /// What happened
    pub outcome: DispatchOutcome,

    /// When the dispatch started
    pub dispatched_at: DateTime<Utc>,
}

impl Dispatch {
    pub(crate) fn new(driver: impl Into<String>, outcome: DispatchOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            driver: driver.into(),
            outcome,
            dispatched_at: Utc::now(),
        }
    }

    pub(crate) fn at(mut self, dispatched_at: DateTime<Utc>) -> Self {
        self.dispatched_at = dispatched_at;
        self
    }

    /// Whether the driver processed the webhook
    pub fn is_processed(&self) -> bool {
        self.outcome == DispatchOutcome::Processed
    }
}
