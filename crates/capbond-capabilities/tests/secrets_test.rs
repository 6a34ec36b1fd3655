//! Secrets wrapper tests

use capbond_capabilities::secrets;
use capbond_providers::MemorySecrets;
use std::sync::Arc;

#[tokio::test]
async fn secret_lookup_lifecycle() {
    let err = secrets::get_secret("API_KEY").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Secrets provider not configured. Call set_provider() first."
    );

    secrets::set_provider(Arc::new(MemorySecrets::from_pairs([(
        "API_KEY", "s3cret",
    )])));

    assert_eq!(
        secrets::get_secret("API_KEY").await.unwrap().as_deref(),
        Some("s3cret")
    );
    assert!(secrets::get_secret("MISSING").await.unwrap().is_none());

    assert_eq!(secrets::require_secret("API_KEY").await.unwrap(), "s3cret");
    let err = secrets::require_secret("MISSING").await.unwrap_err();
    assert!(err.to_string().contains("Secret 'MISSING' is not set"));
}
