//! Analytics capability
//!
//! Singleton-mode wrapper over the `"analytics"` category. `group` is an
//! optional provider capability: a bonded provider that lacks it fails with
//! a distinct unsupported error, not the not-configured one.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::{AnalyticsEvent, AnalyticsProvider};
use serde_json::Value;
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "analytics";

const NOT_CONFIGURED: &str = "Analytics provider not configured. Call set_provider() first.";

/// Bond the active analytics provider, replacing any previous one
pub fn set_provider(provider: Arc<dyn AnalyticsProvider>) {
    capbond_registry::bond(CATEGORY, provider);
}

/// The bonded provider, if any
pub fn get_provider() -> Option<Arc<dyn AnalyticsProvider>> {
    capbond_registry::get(CATEGORY)
}

/// Whether a provider is bonded
pub fn has_provider() -> bool {
    capbond_registry::is_bonded(CATEGORY)
}

/// The bonded provider, or the capability's not-configured error
pub fn require_provider() -> Result<Arc<dyn AnalyticsProvider>> {
    get_provider().ok_or_else(|| Error::not_configured(NOT_CONFIGURED))
}

/// Record an event through the bonded provider
pub async fn track(event: &AnalyticsEvent) -> Result<()> {
    require_provider()?.track(event).await
}

/// Associate traits with a user through the bonded provider
pub async fn identify(user_id: &str, traits: &Value) -> Result<()> {
    require_provider()?.identify(user_id, traits).await
}

/// Associate a user with a group - optional provider capability
pub async fn group(group_id: &str, traits: &Value) -> Result<()> {
    let provider = require_provider()?;
    if !provider.supports_group() {
        return Err(Error::unsupported(
            "Analytics provider does not support group()",
        ));
    }
    provider.group(group_id, traits).await
}
