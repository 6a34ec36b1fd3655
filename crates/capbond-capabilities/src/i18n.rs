//! Translation capability
//!
//! Singleton-mode wrapper over the `"i18n"` category. `t` requires a bonded
//! provider but falls back to the key itself when the catalog has no entry,
//! so missing translations render visibly instead of failing.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::I18nProvider;
use serde_json::Value;
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "i18n";

const NOT_CONFIGURED: &str = "I18n provider not configured. Call set_provider() first.";

/// Bond the active translation provider, replacing any previous one
pub fn set_provider(provider: Arc<dyn I18nProvider>) {
    capbond_registry::bond(CATEGORY, provider);
}

/// The bonded provider, if any
pub fn get_provider() -> Option<Arc<dyn I18nProvider>> {
    capbond_registry::get(CATEGORY)
}

/// Whether a provider is bonded
pub fn has_provider() -> bool {
    capbond_registry::is_bonded(CATEGORY)
}

/// The bonded provider, or the capability's not-configured error
pub fn require_provider() -> Result<Arc<dyn I18nProvider>> {
    get_provider().ok_or_else(|| Error::not_configured(NOT_CONFIGURED))
}

/// Translate `key`, falling back to the key when no catalog entry exists
pub fn t(key: &str) -> Result<String> {
    Ok(require_provider()?
        .translate(key, None)
        .unwrap_or_else(|| key.to_string()))
}

/// Translate `key` with interpolation arguments
pub fn t_args(key: &str, args: &Value) -> Result<String> {
    Ok(require_provider()?
        .translate(key, Some(args))
        .unwrap_or_else(|| key.to_string()))
}

/// The active locale of the bonded provider
pub fn locale() -> Result<String> {
    Ok(require_provider()?.locale().to_string())
}
