//! Analytics wrapper tests

use capbond_capabilities::analytics;
use capbond_domain::Error;
use capbond_domain::ports::AnalyticsEvent;
use capbond_providers::{NullAnalytics, RecordingAnalytics};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn provider_lifecycle_and_optional_group() {
    // unconfigured: every delegate fails with the localized message
    let event = AnalyticsEvent::new("signup").with_user("u-1");
    let err = analytics::track(&event).await.unwrap_err();
    assert!(
        err.to_string()
            .contains("Analytics provider not configured")
    );
    assert!(matches!(err, Error::NotConfigured { .. }));

    // a provider without the optional group capability
    analytics::set_provider(Arc::new(NullAnalytics::new()));
    analytics::track(&event).await.unwrap();
    let err = analytics::group("team-1", &json!({})).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Analytics provider does not support group()"
    );
    assert!(matches!(err, Error::Unsupported { .. }));

    // a provider with it: calls flow through unchanged
    let recording = Arc::new(RecordingAnalytics::new());
    analytics::set_provider(recording.clone());

    analytics::track(&event).await.unwrap();
    analytics::identify("u-1", &json!({"plan": "pro"})).await.unwrap();
    analytics::group("team-1", &json!({"size": 3})).await.unwrap();

    assert_eq!(recording.events().len(), 1);
    assert_eq!(recording.events()[0].name, "signup");
    assert_eq!(
        recording.identities(),
        vec![("u-1".to_string(), json!({"plan": "pro"}))]
    );
    assert_eq!(
        recording.groups(),
        vec![("team-1".to_string(), json!({"size": 3}))]
    );
}
