//! capbond - capability provider registry
//!
//! Decouples feature modules (database access, payments, notifications,
//! i18n, analytics, ...) from the concrete package that backs each
//! capability. A host bonds one provider per capability at startup; every
//! other module resolves at call time through the registry or through a
//! typed capability wrapper, with no compile-time dependency on any
//! concrete implementation.
//!
//! This crate is the public face of the workspace: it re-exports the
//! layers and adds the host-side bootstrap helpers (configuration loading,
//! startup verification, logging initialization).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use capbond::capabilities::database;
//! use capbond::providers::RecordingPool;
//!
//! // bootstrap: bond once
//! database::set_pool(Arc::new(RecordingPool::new("primary")));
//!
//! // anywhere else: resolve at call time
//! let pool = database::require_pool().unwrap();
//! assert_eq!(pool.pool_name(), "primary");
//! ```

/// Host bootstrap: configuration loading and startup verification
pub mod bootstrap;
/// Structured logging initialization
pub mod logging;

pub use capbond_capabilities as capabilities;
pub use capbond_domain::{Error, Result, error, ports};
pub use capbond_providers as providers;
pub use capbond_registry as registry;
pub use capbond_registry::{Registry, global};
