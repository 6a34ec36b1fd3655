//! Scheduler wrapper tests

use capbond_capabilities::scheduler;
use capbond_domain::ports::ScheduledJob;
use capbond_providers::RecordingScheduler;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn scheduling_lifecycle() {
    let job = ScheduledJob::new("send_digest", json!({"user": "u-1"}), Utc::now());

    let err = scheduler::schedule(&job).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Scheduler provider not configured. Call set_provider() first."
    );

    let backend = Arc::new(RecordingScheduler::new());
    scheduler::set_provider(backend.clone());

    let id = scheduler::schedule(&job).await.unwrap();
    assert_eq!(id, "job-1");
    assert_eq!(backend.jobs().len(), 1);
    assert_eq!(backend.jobs()[0].1.kind, "send_digest");

    assert!(scheduler::cancel(&id).await.unwrap());
    assert!(!scheduler::cancel(&id).await.unwrap());
}
