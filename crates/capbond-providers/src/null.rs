//! No-op providers
//!
//! Bonded as defaults when a host wants the capability surface available
//! but routed nowhere.

use async_trait::async_trait;
use capbond_domain::error::Result;
use capbond_domain::ports::{
    AnalyticsEvent, AnalyticsProvider, Notification, NotificationChannel, PushMessage,
    PushProvider,
};
use serde_json::Value;

/// Analytics provider that accepts and discards everything.
/// Does not implement the optional `group` capability.
#[derive(Debug, Default)]
pub struct NullAnalytics;

impl NullAnalytics {
    /// Create a null analytics provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnalyticsProvider for NullAnalytics {
    async fn track(&self, _event: &AnalyticsEvent) -> Result<()> {
        Ok(())
    }

    async fn identify(&self, _user_id: &str, _traits: &Value) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Notification channel that accepts and discards everything
#[derive(Debug, Default)]
pub struct NullChannel;

impl NullChannel {
    /// Create a null channel
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationChannel for NullChannel {
    async fn notify(&self, _notification: &Notification) -> Result<()> {
        Ok(())
    }
}

/// Push provider that accepts and discards everything
#[derive(Debug, Default)]
pub struct NullPush;

impl NullPush {
    /// Create a null push provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PushProvider for NullPush {
    async fn send_push(&self, _message: &PushMessage) -> Result<()> {
        Ok(())
    }
}
