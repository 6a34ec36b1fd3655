//! Push Delivery Port

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A push notification addressed to one device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushMessage {
    /// Opaque device token from the platform
    pub device_token: String,
    /// Notification title
    pub title: String,
    /// Notification body
    pub body: String,
    /// Optional structured payload delivered alongside the notification
    pub data: Option<Value>,
}

/// Delivery contract for the `"push"` capability
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Deliver a push message
    async fn send_push(&self, message: &PushMessage) -> Result<()>;
}
