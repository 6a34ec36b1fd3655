//! Notification Channel Port
//!
//! Port for named notification channels (webhook, slack, pager, ...).
//! Several channels are bonded concurrently under the `"notifications"`
//! category and fan-out delivery invokes every one of them, collecting an
//! independent [`NotifyOutcome`] per channel.

use crate::error::{Error, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Short subject line
    pub subject: String,
    /// Message body
    pub body: String,
}

impl Notification {
    /// Create a notification
    pub fn new<S: Into<String>, B: Into<String>>(subject: S, body: B) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Per-channel result record produced by fan-out delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyOutcome {
    /// The bonded channel name
    pub channel: String,
    /// Whether the channel accepted the notification
    pub ok: bool,
    /// The channel's error message when `ok` is false
    pub error: Option<String>,
    /// When the delivery attempt completed
    pub sent_at: DateTime<Utc>,
}

impl NotifyOutcome {
    /// Record a successful delivery
    pub fn success<S: Into<String>>(channel: S) -> Self {
        Self {
            channel: channel.into(),
            ok: true,
            error: None,
            sent_at: Utc::now(),
        }
    }

    /// Record a failed delivery
    pub fn failure<S: Into<String>>(channel: S, error: &Error) -> Self {
        Self {
            channel: channel.into(),
            ok: false,
            error: Some(error.to_string()),
            sent_at: Utc::now(),
        }
    }
}

/// Delivery contract for one named channel under `"notifications"`
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Deliver a notification through this channel
    async fn notify(&self, notification: &Notification) -> Result<()>;
}
