//! Push capability
//!
//! Singleton-mode wrapper over the `"push"` category.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::{PushMessage, PushProvider};
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "push";

const NOT_CONFIGURED: &str = "Push provider not configured. Call set_provider() first.";

/// Bond the active push provider, replacing any previous one
pub fn set_provider(provider: Arc<dyn PushProvider>) {
    capbond_registry::bond(CATEGORY, provider);
}

/// The bonded provider, if any
pub fn get_provider() -> Option<Arc<dyn PushProvider>> {
    capbond_registry::get(CATEGORY)
}

/// Whether a provider is bonded
pub fn has_provider() -> bool {
    capbond_registry::is_bonded(CATEGORY)
}

/// The bonded provider, or the capability's not-configured error
pub fn require_provider() -> Result<Arc<dyn PushProvider>> {
    get_provider().ok_or_else(|| Error::not_configured(NOT_CONFIGURED))
}

/// Deliver a push message through the bonded provider
pub async fn send_push(message: &PushMessage) -> Result<()> {
    require_provider()?.send_push(message).await
}
