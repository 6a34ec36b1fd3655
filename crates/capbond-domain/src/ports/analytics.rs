//! Analytics Provider Port
//!
//! Port for product analytics backends. `track` and `identify` are the
//! mandatory surface; `group` is an optional capability that not every
//! backend implements - callers must check [`AnalyticsProvider::supports_group`]
//! before delegating, and surface a distinct unsupported error when it is
//! absent rather than a generic not-configured one.

use crate::error::{Error, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single analytics event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Event name, e.g. `"checkout_completed"`
    pub name: String,
    /// Identifier of the user the event belongs to, if known
    pub user_id: Option<String>,
    /// Free-form event properties
    pub properties: Value,
    /// When the event occurred
    pub occurred_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Create an event named `name`, timestamped now, with empty properties
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            user_id: None,
            properties: Value::Null,
            occurred_at: Utc::now(),
        }
    }

    /// Attach the user the event belongs to
    pub fn with_user<S: Into<String>>(mut self, user_id: S) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach free-form properties
    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = properties;
        self
    }
}

/// Analytics backend contract for the `"analytics"` capability
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Record an event
    async fn track(&self, event: &AnalyticsEvent) -> Result<()>;

    /// Associate traits with a user
    async fn identify(&self, user_id: &str, traits: &Value) -> Result<()>;

    /// Whether this backend implements the optional `group` call
    fn supports_group(&self) -> bool {
        false
    }

    /// Associate a user with a group (optional capability)
    async fn group(&self, group_id: &str, traits: &Value) -> Result<()> {
        let _ = (group_id, traits);
        Err(Error::unsupported("group() not implemented"))
    }

    /// Backend name for diagnostics
    fn provider_name(&self) -> &str;
}
