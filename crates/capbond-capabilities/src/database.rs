//! Database capability
//!
//! Singleton-mode wrapper over the `"database"` category. The host bonds a
//! pool once at startup; everything else queries through the delegates.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::DatabasePool;
use serde_json::Value;
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "database";

const NOT_CONFIGURED: &str = "Database pool not configured. Call set_pool() first.";

/// Bond the active database pool, replacing any previous one
pub fn set_pool(pool: Arc<dyn DatabasePool>) {
    capbond_registry::bond(CATEGORY, pool);
}

/// The bonded pool, if any
pub fn get_pool() -> Option<Arc<dyn DatabasePool>> {
    capbond_registry::get(CATEGORY)
}

/// Whether a pool is bonded
pub fn has_pool() -> bool {
    capbond_registry::is_bonded(CATEGORY)
}

/// The bonded pool, or the capability's not-configured error
pub fn require_pool() -> Result<Arc<dyn DatabasePool>> {
    get_pool().ok_or_else(|| Error::not_configured(NOT_CONFIGURED))
}

/// Run a statement that returns rows against the bonded pool
pub async fn query(statement: &str, params: &[Value]) -> Result<Vec<Value>> {
    require_pool()?.query(statement, params).await
}

/// Run a statement that returns an affected-row count against the bonded pool
pub async fn execute(statement: &str, params: &[Value]) -> Result<u64> {
    require_pool()?.execute(statement, params).await
}
