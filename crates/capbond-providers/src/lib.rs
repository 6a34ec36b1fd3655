//! Null and in-memory capability providers
//!
//! Concrete third-party integrations live outside this workspace; what ships
//! here are the null defaults and recording/in-memory implementations used
//! as development stand-ins and test fixtures. Each satisfies a port from
//! `capbond-domain` and nothing else - bonding them is the host's decision.

/// Recording and in-memory providers
pub mod memory;
/// No-op providers
pub mod null;

pub use memory::{
    MemoryMailTransport, MemoryQueue, MemorySecrets, RecordingAnalytics, RecordingChannel,
    RecordingPool, RecordingPush, RecordingScheduler, StaticI18n, StaticOAuth, TestPayments,
};
pub use null::{NullAnalytics, NullChannel, NullPush};
