//! OAuth wrapper tests

use capbond_capabilities::oauth;
use capbond_providers::StaticOAuth;
use std::sync::Arc;

#[tokio::test]
async fn named_verifier_lifecycle() {
    // before any bonding: an empty, iterable map - never an absent value
    let verifiers = oauth::verifiers();
    assert!(verifiers.is_empty());
    assert_eq!(verifiers.iter().count(), 0);

    let err = oauth::verify("google", "tok-1").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "OAuth verifier 'google' not configured. Call set_verifier() first."
    );

    oauth::set_verifier(
        "google",
        Arc::new(StaticOAuth::new("https://accounts.google.com", [("tok-1", "sub-1")])),
    );
    oauth::set_verifier(
        "github",
        Arc::new(StaticOAuth::new("https://github.com", [("tok-2", "sub-2")])),
    );

    let names: Vec<String> = oauth::verifiers().keys().cloned().collect();
    assert_eq!(names, ["google", "github"]);

    let identity = oauth::verify("google", "tok-1").await.unwrap();
    assert_eq!(identity.subject, "sub-1");
    assert_eq!(identity.issuer, "https://accounts.google.com");

    // provider-internal rejection propagates unchanged
    let err = oauth::verify("google", "bogus").await.unwrap_err();
    assert!(err.to_string().contains("token rejected"));
}
