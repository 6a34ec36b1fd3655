//! Capability Wrapper Modules
//!
//! One thin module per capability, each layered over exactly one registry
//! category. The recurring shape:
//!
//! 1. a setter that bonds the provider (`set_pool`, `set_transport`,
//!    `set_channel(name, ...)` for multi-provider capabilities);
//! 2. a getter family - optional lookup, existence check, and a requiring
//!    getter that translates "not bonded" into the capability's own
//!    localized message;
//! 3. delegate functions that resolve the provider at call time and forward
//!    arguments and results unchanged. Provider errors propagate untouched,
//!    except in fan-out delivery where each channel's failure becomes a
//!    per-channel result record.
//!
//! Resolution happens on every call, never at load time, so the same code
//! works whether the capability is bonded, unbonded, or re-bonded (as tests
//! do) without recompilation.

/// Analytics capability (`"analytics"`)
pub mod analytics;
/// Database capability (`"database"`)
pub mod database;
/// Outbound mail capability (`"email"`)
pub mod email;
/// Translation capability (`"i18n"`)
pub mod i18n;
/// Named notification channels (`"notifications"`)
pub mod notifications;
/// Named OAuth verifiers (`"oauth"`)
pub mod oauth;
/// Named payment providers (`"payments"`)
pub mod payments;
/// Push delivery capability (`"push"`)
pub mod push;
/// Message queue capability (`"queue"`)
pub mod queue;
/// Job scheduling capability (`"scheduler"`)
pub mod scheduler;
/// Secret lookup capability (`"secrets"`)
pub mod secrets;
