//! Capability Port Contracts
//!
//! One module per capability. Each defines the trait a concrete provider
//! must satisfy plus the value objects its methods exchange. The registry
//! never inspects these contracts - it stores providers as opaque values
//! and each capability wrapper performs the one typed downcast at its
//! boundary.
//!
//! Ports follow the Dependency Inversion Principle: the domain defines the
//! interface, providers implement it, and nothing here names a concrete
//! third-party package.

/// Analytics provider port (track/identify, optional group)
pub mod analytics;
/// Database pool port
pub mod database;
/// Outbound mail transport port
pub mod email;
/// Translation catalog port
pub mod i18n;
/// Named notification channel port
pub mod notifications;
/// Named OAuth token verifier port
pub mod oauth;
/// Named payment provider port
pub mod payments;
/// Mobile/desktop push delivery port
pub mod push;
/// Message queue port
pub mod queue;
/// Job scheduler port
pub mod scheduler;
/// Secret store port
pub mod secrets;

// Re-export the port traits and value objects for convenience
pub use analytics::{AnalyticsEvent, AnalyticsProvider};
pub use database::DatabasePool;
pub use email::{MailMessage, MailReceipt, MailTransport};
pub use i18n::I18nProvider;
pub use notifications::{Notification, NotificationChannel, NotifyOutcome};
pub use oauth::{OAuthIdentity, OAuthVerifier};
pub use payments::{ChargeOutcome, ChargeRequest, PaymentProvider};
pub use push::{PushMessage, PushProvider};
pub use queue::QueueProvider;
pub use scheduler::{ScheduledJob, SchedulerProvider};
pub use secrets::SecretsProvider;
