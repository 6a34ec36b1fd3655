//! Secrets capability
//!
//! Singleton-mode wrapper over the `"secrets"` category.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::SecretsProvider;
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "secrets";

const NOT_CONFIGURED: &str = "Secrets provider not configured. Call set_provider() first.";

/// Bond the active secret store, replacing any previous one
pub fn set_provider(provider: Arc<dyn SecretsProvider>) {
    capbond_registry::bond(CATEGORY, provider);
}

/// The bonded store, if any
pub fn get_provider() -> Option<Arc<dyn SecretsProvider>> {
    capbond_registry::get(CATEGORY)
}

/// Whether a store is bonded
pub fn has_provider() -> bool {
    capbond_registry::is_bonded(CATEGORY)
}

/// The bonded store, or the capability's not-configured error
pub fn require_provider() -> Result<Arc<dyn SecretsProvider>> {
    get_provider().ok_or_else(|| Error::not_configured(NOT_CONFIGURED))
}

/// Fetch a secret by key; `None` when the store has no such key
pub async fn get_secret(key: &str) -> Result<Option<String>> {
    require_provider()?.get_secret(key).await
}

/// Fetch a secret that must exist, failing with a configuration error naming it
pub async fn require_secret(key: &str) -> Result<String> {
    get_secret(key)
        .await?
        .ok_or_else(|| Error::configuration(format!("Secret '{key}' is not set")))
}
