//! Mail wrapper tests

use capbond_capabilities::email;
use capbond_domain::ports::MailMessage;
use capbond_providers::MemoryMailTransport;
use std::sync::Arc;

#[tokio::test]
async fn transport_lifecycle_and_delivery() {
    let message = MailMessage::new("a@example.com", "noreply@example.com", "Hi", "Welcome aboard")
        .with_html("<p>Welcome aboard</p>");

    let err = email::send_mail(&message).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Mail transport not configured. Call set_transport() first."
    );

    let transport = Arc::new(MemoryMailTransport::new());
    email::set_transport(transport.clone());
    assert!(email::has_transport());

    let receipt = email::send_mail(&message).await.unwrap();
    assert_eq!(receipt.message_id, "mem-1");
    let receipt = email::send_mail(&message).await.unwrap();
    assert_eq!(receipt.message_id, "mem-2");

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, vec!["a@example.com"]);
    assert_eq!(sent[0].html_body.as_deref(), Some("<p>Welcome aboard</p>"));
}
