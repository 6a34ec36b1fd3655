//! Queue wrapper tests

use capbond_capabilities::queue;
use capbond_providers::MemoryQueue;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn enqueue_lifecycle() {
    let err = queue::enqueue("emails", &json!({"to": "a@example.com"}))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Queue provider not configured. Call set_provider() first."
    );

    let backend = Arc::new(MemoryQueue::new());
    queue::set_provider(backend.clone());

    let id = queue::enqueue("emails", &json!({"to": "a@example.com"}))
        .await
        .unwrap();
    assert_eq!(id, "msg-1");
    assert_eq!(
        backend.messages(),
        vec![("emails".to_string(), json!({"to": "a@example.com"}))]
    );
}
