//! Notification channels capability
//!
//! Named-mode wrapper over the `"notifications"` category: several channels
//! are bonded concurrently, each under its own name. Fan-out delivery
//! invokes every bonded channel and never lets one channel's failure
//! prevent the others from running - each failure becomes a per-channel
//! result record instead.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::{Notification, NotificationChannel, NotifyOutcome};
use futures::future::join_all;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::warn;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "notifications";

/// Bond a channel under `name`, replacing any previous binding for it
pub fn set_channel(name: &str, channel: Arc<dyn NotificationChannel>) {
    capbond_registry::bond_named(CATEGORY, name, channel);
}

/// The channel bonded under `name`, if any
pub fn get_channel(name: &str) -> Option<Arc<dyn NotificationChannel>> {
    capbond_registry::get_named(CATEGORY, name)
}

/// Whether a channel is bonded under `name`
pub fn has_channel(name: &str) -> bool {
    capbond_registry::is_bonded_named(CATEGORY, name)
}

/// Every bonded channel, in bonding order
pub fn channels() -> IndexMap<String, Arc<dyn NotificationChannel>> {
    capbond_registry::get_all(CATEGORY)
}

/// Bonded channel names, in bonding order
pub fn channel_names() -> Vec<String> {
    channels().keys().cloned().collect()
}

/// The channel bonded under `name`, or the capability's not-configured error
pub fn require_channel(name: &str) -> Result<Arc<dyn NotificationChannel>> {
    get_channel(name).ok_or_else(|| {
        Error::not_configured(format!(
            "Notification channel '{name}' not configured. Call set_channel() first."
        ))
    })
}

/// Deliver a notification through one named channel
pub async fn notify(name: &str, notification: &Notification) -> Result<()> {
    require_channel(name)?.notify(notification).await
}

/// Deliver a notification through every bonded channel
///
/// Channels run concurrently; the result records come back in bonding
/// order regardless of completion order. Zero bonded channels yields an
/// empty vec and a warning, never an error.
pub async fn notify_all(notification: &Notification) -> Vec<NotifyOutcome> {
    let channels = channels();
    if channels.is_empty() {
        warn!("notify_all called with no notification channels bonded");
        return Vec::new();
    }

    let deliveries = channels.iter().map(|(name, channel)| async move {
        match channel.notify(notification).await {
            Ok(()) => NotifyOutcome::success(name),
            Err(error) => {
                warn!(channel = %name, error = %error, "notification channel failed");
                NotifyOutcome::failure(name, &error)
            }
        }
    });
    join_all(deliveries).await
}
