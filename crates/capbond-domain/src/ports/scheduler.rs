//! Job Scheduler Port

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job handed to the scheduler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledJob {
    /// Host-defined job kind, e.g. `"send_digest"`
    pub kind: String,
    /// Payload delivered to the job handler when it runs
    pub payload: Value,
    /// Earliest time the job may run
    pub run_at: DateTime<Utc>,
}

impl ScheduledJob {
    /// Create a job of `kind` scheduled for `run_at`
    pub fn new<S: Into<String>>(kind: S, payload: Value, run_at: DateTime<Utc>) -> Self {
        Self {
            kind: kind.into(),
            payload,
            run_at,
        }
    }
}

/// Scheduling contract for the `"scheduler"` capability
#[async_trait]
pub trait SchedulerProvider: Send + Sync {
    /// Enqueue a job, returning the scheduler's job identifier
    async fn schedule(&self, job: &ScheduledJob) -> Result<String>;

    /// Cancel a previously scheduled job; returns whether it existed
    async fn cancel(&self, job_id: &str) -> Result<bool>;
}
