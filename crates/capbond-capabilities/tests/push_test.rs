//! Push wrapper tests

use capbond_capabilities::push;
use capbond_domain::ports::PushMessage;
use capbond_providers::RecordingPush;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn push_lifecycle() {
    let message = PushMessage {
        device_token: "tok-1".to_string(),
        title: "Ping".to_string(),
        body: "You have mail".to_string(),
        data: Some(json!({"badge": 1})),
    };

    let err = push::send_push(&message).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Push provider not configured. Call set_provider() first."
    );

    let provider = Arc::new(RecordingPush::new());
    push::set_provider(provider.clone());
    assert!(push::has_provider());

    push::send_push(&message).await.unwrap();
    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].device_token, "tok-1");
}
