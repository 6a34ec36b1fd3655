//! Translation Catalog Port
//!
//! Synchronous by design: catalog lookup has no suspension point, and the
//! wrapper's `t()` must stay cheap to call repeatedly (e.g. once per render).

use serde_json::Value;

/// Translation contract for the `"i18n"` capability
pub trait I18nProvider: Send + Sync {
    /// Resolve `key` to a localized string, or `None` when the catalog has
    /// no entry. `args` carries interpolation values when present.
    fn translate(&self, key: &str, args: Option<&Value>) -> Option<String>;

    /// The active locale, e.g. `"en-US"`
    fn locale(&self) -> &str;
}
