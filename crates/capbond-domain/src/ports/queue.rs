//! Message Queue Port

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Enqueue contract for the `"queue"` capability
#[async_trait]
pub trait QueueProvider: Send + Sync {
    /// Append a payload to the named queue, returning the message id
    async fn enqueue(&self, queue: &str, payload: &Value) -> Result<String>;
}
