//! Queue capability
//!
//! Singleton-mode wrapper over the `"queue"` category.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::QueueProvider;
use serde_json::Value;
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "queue";

const NOT_CONFIGURED: &str = "Queue provider not configured. Call set_provider() first.";

/// Bond the active queue provider, replacing any previous one
pub fn set_provider(provider: Arc<dyn QueueProvider>) {
    capbond_registry::bond(CATEGORY, provider);
}

/// The bonded provider, if any
pub fn get_provider() -> Option<Arc<dyn QueueProvider>> {
    capbond_registry::get(CATEGORY)
}

/// Whether a provider is bonded
pub fn has_provider() -> bool {
    capbond_registry::is_bonded(CATEGORY)
}

/// The bonded provider, or the capability's not-configured error
pub fn require_provider() -> Result<Arc<dyn QueueProvider>> {
    get_provider().ok_or_else(|| Error::not_configured(NOT_CONFIGURED))
}

/// Append a payload to the named queue through the bonded provider
pub async fn enqueue(queue: &str, payload: &Value) -> Result<String> {
    require_provider()?.enqueue(queue, payload).await
}
