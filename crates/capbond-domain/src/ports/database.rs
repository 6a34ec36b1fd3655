//! Database Pool Port
//!
//! Port for the database capability. A pool hands out query execution
//! against whatever engine backs it; rows travel as JSON values so the
//! contract stays engine-agnostic.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Connection-pool contract for the `"database"` capability
#[async_trait]
pub trait DatabasePool: Send + Sync {
    /// Run a statement that returns rows
    async fn query(&self, statement: &str, params: &[Value]) -> Result<Vec<Value>>;

    /// Run a statement that returns an affected-row count
    async fn execute(&self, statement: &str, params: &[Value]) -> Result<u64>;

    /// Pool implementation name for diagnostics
    fn pool_name(&self) -> &str;
}
