//! Secret Store Port

use crate::error::Result;
use async_trait::async_trait;

/// Lookup contract for the `"secrets"` capability
#[async_trait]
pub trait SecretsProvider: Send + Sync {
    /// Fetch a secret by key; `None` when the store has no such key
    async fn get_secret(&self, key: &str) -> Result<Option<String>>;
}
