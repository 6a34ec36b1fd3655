//! Database wrapper tests
//!
//! Each test binary owns the process-wide registry; every phase that
//! mutates the `"database"` category runs inside one test function so
//! phases cannot race each other.

use capbond_capabilities::database;
use capbond_domain::ports::DatabasePool;
use capbond_providers::RecordingPool;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn pool_lifecycle_and_delegation() {
    // not configured yet
    assert!(!database::has_pool());
    assert!(database::get_pool().is_none());
    let err = database::query("SELECT 1", &[]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Database pool not configured. Call set_pool() first."
    );

    // bond a pool and delegate through it
    let pool_a = Arc::new(RecordingPool::new("pool-a").with_rows(vec![json!({"id": 7})]));
    database::set_pool(pool_a.clone());
    assert!(database::has_pool());

    let rows = database::query("SELECT * FROM users", &[]).await.unwrap();
    assert_eq!(rows, vec![json!({"id": 7})]);
    assert_eq!(pool_a.statements(), vec!["SELECT * FROM users"]);

    let resolved = database::get_pool().expect("bonded");
    assert_eq!(resolved.pool_name(), "pool-a");

    // re-bonding replaces silently; resolution picks up the new pool
    let pool_b: Arc<dyn DatabasePool> = Arc::new(RecordingPool::new("pool-b"));
    database::set_pool(Arc::clone(&pool_b));
    let resolved = database::get_pool().expect("bonded");
    assert!(Arc::ptr_eq(&resolved, &pool_b));

    let affected = database::execute("DELETE FROM users", &[]).await.unwrap();
    assert_eq!(affected, 0);
}
