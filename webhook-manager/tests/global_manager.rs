//! Tests for the process-wide accessor.
#![cfg(feature = "global")]

use serde_json::{Value, json};
use std::sync::Arc;
use webhook_manager::{FnDriver, SharedDriver, WebhookHeaders, initialize};

#[test]
fn test_initialize_returns_same_instance() {
    let first = initialize();
    let second = initialize();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_registration_shared_across_references() {
    let driver: SharedDriver = Arc::new(
        FnDriver::new(
            |data: &Value, _: &WebhookHeaders| data["ok"] == json!(true),
            |_: &Value, _: &WebhookHeaders| Ok(()),
        )
        .with_path("/hooks/shared"),
    );

    initialize()
        .register_shared("shared-driver", Arc::clone(&driver))
        .unwrap();

    let other = initialize();
    assert!(other.exists("shared-driver"));
    assert!(Arc::ptr_eq(&other.get_driver("shared-driver").unwrap(), &driver));

    let dispatch = other
        .process_webhook("shared-driver", &json!({"ok": true}), &WebhookHeaders::new())
        .unwrap();
    assert!(dispatch.is_processed());
}

#[test]
fn test_clone_of_global_shares_state() {
    let handle = initialize().clone();
    handle
        .register(
            "cloned-global-driver",
            FnDriver::new(
                |_: &Value, _: &WebhookHeaders| false,
                |_: &Value, _: &WebhookHeaders| Ok(()),
            ),
        )
        .unwrap();

    assert!(initialize().exists("cloned-global-driver"));
}
