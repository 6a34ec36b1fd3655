//! Recording and in-memory providers
//!
//! Every provider here keeps its state in plain process memory behind a
//! `Mutex` and exposes accessors for assertions, so tests can observe what
//! was delegated to them without any external service.

use async_trait::async_trait;
use capbond_domain::error::{Error, Result};
use capbond_domain::ports::{
    AnalyticsEvent, AnalyticsProvider, ChargeOutcome, ChargeRequest, DatabasePool, I18nProvider,
    MailMessage, MailReceipt, MailTransport, Notification, NotificationChannel, OAuthIdentity,
    OAuthVerifier, PaymentProvider, PushMessage, PushProvider, QueueProvider, ScheduledJob,
    SchedulerProvider, SecretsProvider,
};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

// Guards are held only across plain map/vec access, never across an await.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Database pool that records statements and answers with canned rows
pub struct RecordingPool {
    name: String,
    rows: Vec<Value>,
    statements: Mutex<Vec<String>>,
}

impl RecordingPool {
    /// Create a pool named `name` that returns no rows
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            statements: Mutex::new(Vec::new()),
        }
    }

    /// Answer every query with these rows
    pub fn with_rows(mut self, rows: Vec<Value>) -> Self {
        self.rows = rows;
        self
    }

    /// Statements seen so far, in execution order
    pub fn statements(&self) -> Vec<String> {
        lock(&self.statements).clone()
    }
}

#[async_trait]
impl DatabasePool for RecordingPool {
    async fn query(&self, statement: &str, _params: &[Value]) -> Result<Vec<Value>> {
        lock(&self.statements).push(statement.to_string());
        Ok(self.rows.clone())
    }

    async fn execute(&self, statement: &str, _params: &[Value]) -> Result<u64> {
        lock(&self.statements).push(statement.to_string());
        Ok(self.rows.len() as u64)
    }

    fn pool_name(&self) -> &str {
        &self.name
    }
}

/// Analytics provider that records everything and supports `group`
#[derive(Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
    identities: Mutex<Vec<(String, Value)>>,
    groups: Mutex<Vec<(String, Value)>>,
}

impl RecordingAnalytics {
    /// Create a recording analytics provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracked events, in arrival order
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        lock(&self.events).clone()
    }

    /// Identify calls, in arrival order
    pub fn identities(&self) -> Vec<(String, Value)> {
        lock(&self.identities).clone()
    }

    /// Group calls, in arrival order
    pub fn groups(&self) -> Vec<(String, Value)> {
        lock(&self.groups).clone()
    }
}

#[async_trait]
impl AnalyticsProvider for RecordingAnalytics {
    async fn track(&self, event: &AnalyticsEvent) -> Result<()> {
        lock(&self.events).push(event.clone());
        Ok(())
    }

    async fn identify(&self, user_id: &str, traits: &Value) -> Result<()> {
        lock(&self.identities).push((user_id.to_string(), traits.clone()));
        Ok(())
    }

    fn supports_group(&self) -> bool {
        true
    }

    async fn group(&self, group_id: &str, traits: &Value) -> Result<()> {
        lock(&self.groups).push((group_id.to_string(), traits.clone()));
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// Mail transport that keeps sent messages in memory
#[derive(Default)]
pub struct MemoryMailTransport {
    sent: Mutex<Vec<MailMessage>>,
    counter: AtomicU64,
}

impl MemoryMailTransport {
    /// Create an empty transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, in send order
    pub fn sent(&self) -> Vec<MailMessage> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl MailTransport for MemoryMailTransport {
    async fn send_mail(&self, message: &MailMessage) -> Result<MailReceipt> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        lock(&self.sent).push(message.clone());
        Ok(MailReceipt {
            message_id: format!("mem-{n}"),
        })
    }

    fn transport_name(&self) -> &str {
        "memory"
    }
}

/// Translation provider backed by a fixed catalog
///
/// Interpolation is the minimal `{placeholder}` form: string values from
/// the `args` object replace matching braces in the template.
pub struct StaticI18n {
    locale: String,
    catalog: HashMap<String, String>,
}

impl StaticI18n {
    /// Create a catalog for `locale` from (key, template) pairs
    pub fn new<L: Into<String>>(
        locale: L,
        entries: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Self {
        Self {
            locale: locale.into(),
            catalog: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl I18nProvider for StaticI18n {
    fn translate(&self, key: &str, args: Option<&Value>) -> Option<String> {
        let template = self.catalog.get(key)?;
        let mut output = template.clone();
        if let Some(Value::Object(map)) = args {
            for (name, value) in map {
                let replacement = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                output = output.replace(&format!("{{{name}}}"), &replacement);
            }
        }
        Some(output)
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}

/// Scheduler that records jobs and hands out sequential ids
#[derive(Default)]
pub struct RecordingScheduler {
    jobs: Mutex<Vec<(String, ScheduledJob)>>,
    issued: Mutex<HashSet<String>>,
    counter: AtomicU64,
}

impl RecordingScheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs scheduled so far as (id, job) pairs
    pub fn jobs(&self) -> Vec<(String, ScheduledJob)> {
        lock(&self.jobs).clone()
    }
}

#[async_trait]
impl SchedulerProvider for RecordingScheduler {
    async fn schedule(&self, job: &ScheduledJob) -> Result<String> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let id = format!("job-{n}");
        lock(&self.jobs).push((id.clone(), job.clone()));
        lock(&self.issued).insert(id.clone());
        Ok(id)
    }

    async fn cancel(&self, job_id: &str) -> Result<bool> {
        Ok(lock(&self.issued).remove(job_id))
    }
}

/// Notification channel that records deliveries, or fails every delivery
/// when constructed with [`RecordingChannel::failing`]
#[derive(Default)]
pub struct RecordingChannel {
    delivered: Mutex<Vec<Notification>>,
    failure: Option<String>,
}

impl RecordingChannel {
    /// Create a channel that accepts every notification
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a channel whose every delivery fails with `message`
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Notifications accepted so far
    pub fn delivered(&self) -> Vec<Notification> {
        lock(&self.delivered).clone()
    }
}

#[async_trait]
impl NotificationChannel for RecordingChannel {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        if let Some(message) = &self.failure {
            return Err(Error::provider(message.clone()));
        }
        lock(&self.delivered).push(notification.clone());
        Ok(())
    }
}

/// Push provider that records sent messages
#[derive(Default)]
pub struct RecordingPush {
    sent: Mutex<Vec<PushMessage>>,
}

impl RecordingPush {
    /// Create an empty push recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far
    pub fn sent(&self) -> Vec<PushMessage> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl PushProvider for RecordingPush {
    async fn send_push(&self, message: &PushMessage) -> Result<()> {
        lock(&self.sent).push(message.clone());
        Ok(())
    }
}

/// Secret store backed by a fixed map
#[derive(Default)]
pub struct MemorySecrets {
    entries: HashMap<String, String>,
}

impl MemorySecrets {
    /// Create a store from (key, value) pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl SecretsProvider for MemorySecrets {
    async fn get_secret(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }
}

/// Queue that appends to an in-memory log
#[derive(Default)]
pub struct MemoryQueue {
    messages: Mutex<Vec<(String, Value)>>,
    counter: AtomicU64,
}

impl MemoryQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueued (queue, payload) pairs, in arrival order
    pub fn messages(&self) -> Vec<(String, Value)> {
        lock(&self.messages).clone()
    }
}

#[async_trait]
impl QueueProvider for MemoryQueue {
    async fn enqueue(&self, queue: &str, payload: &Value) -> Result<String> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        lock(&self.messages).push((queue.to_string(), payload.clone()));
        Ok(format!("msg-{n}"))
    }
}

/// Payment provider that settles every charge with sequential ids
pub struct TestPayments {
    name: String,
    counter: AtomicU64,
}

impl TestPayments {
    /// Create a provider named `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            counter: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl PaymentProvider for TestPayments {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeOutcome> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(ChargeOutcome {
            charge_id: format!("ch_{}_{n}", self.name),
            amount_cents: request.amount_cents,
            currency: request.currency.clone(),
        })
    }

    async fn refund(&self, charge_id: &str) -> Result<ChargeOutcome> {
        Ok(ChargeOutcome {
            charge_id: charge_id.to_string(),
            amount_cents: 0,
            currency: "USD".to_string(),
        })
    }

    fn provider_name(&self) -> &str {
        &self.name
    }
}

/// OAuth verifier that accepts a fixed token set
pub struct StaticOAuth {
    issuer: String,
    tokens: HashMap<String, OAuthIdentity>,
}

impl StaticOAuth {
    /// Create a verifier for `issuer` accepting (token, subject) pairs
    pub fn new<I: Into<String>>(
        issuer: I,
        tokens: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Self {
        let issuer = issuer.into();
        let tokens = tokens
            .into_iter()
            .map(|(token, subject)| {
                (
                    token.to_string(),
                    OAuthIdentity {
                        subject: subject.to_string(),
                        email: None,
                        issuer: issuer.clone(),
                    },
                )
            })
            .collect();
        Self { issuer, tokens }
    }

    /// The issuer this verifier answers for
    pub fn issuer(&self) -> &str {
        &self.issuer
    }
}

#[async_trait]
impl OAuthVerifier for StaticOAuth {
    async fn verify(&self, token: &str) -> Result<OAuthIdentity> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| Error::provider(format!("token rejected by issuer '{}'", self.issuer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn recording_pool_returns_canned_rows() {
        let pool = RecordingPool::new("test").with_rows(vec![json!({"id": 1})]);
        let rows = pool.query("SELECT * FROM users", &[]).await.unwrap();
        assert_eq!(rows, vec![json!({"id": 1})]);
        assert_eq!(pool.statements(), vec!["SELECT * FROM users"]);
    }

    #[test]
    fn static_i18n_interpolates_placeholders() {
        let i18n = StaticI18n::new("en-US", [("greeting", "Hello, {name}!")]);
        let translated = i18n.translate("greeting", Some(&json!({"name": "Ada"})));
        assert_eq!(translated.as_deref(), Some("Hello, Ada!"));
        assert!(i18n.translate("missing", None).is_none());
    }

    #[tokio::test]
    async fn failing_channel_rejects_and_records_nothing() {
        let channel = RecordingChannel::failing("webhook down");
        let err = channel
            .notify(&Notification::new("s", "b"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("webhook down"));
        assert!(channel.delivered().is_empty());
    }

    #[tokio::test]
    async fn scheduler_cancel_reports_existence() {
        let scheduler = RecordingScheduler::new();
        let job = ScheduledJob::new("digest", json!({}), chrono::Utc::now());
        let id = scheduler.schedule(&job).await.unwrap();
        assert!(scheduler.cancel(&id).await.unwrap());
        assert!(!scheduler.cancel(&id).await.unwrap());
    }
}
