//! Payments wrapper tests

use capbond_capabilities::payments;
use capbond_domain::ports::ChargeRequest;
use capbond_providers::TestPayments;
use std::sync::Arc;

#[tokio::test]
async fn named_processor_lifecycle() {
    let request = ChargeRequest {
        amount_cents: 2500,
        currency: "USD".to_string(),
        customer_id: "cus-1".to_string(),
        description: Some("Pro plan".to_string()),
    };

    let err = payments::charge("stripe", &request).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Payment provider 'stripe' not configured. Call set_provider() first."
    );

    payments::set_provider("stripe", Arc::new(TestPayments::new("stripe")));
    payments::set_provider("paypal", Arc::new(TestPayments::new("paypal")));
    assert!(payments::has_provider("stripe"));
    assert!(!payments::has_provider("adyen"));

    let names: Vec<String> = payments::providers().keys().cloned().collect();
    assert_eq!(names, ["stripe", "paypal"]);

    let outcome = payments::charge("stripe", &request).await.unwrap();
    assert_eq!(outcome.charge_id, "ch_stripe_1");
    assert_eq!(outcome.amount_cents, 2500);

    // the other processor resolves independently
    let outcome = payments::charge("paypal", &request).await.unwrap();
    assert_eq!(outcome.charge_id, "ch_paypal_1");

    let refund = payments::refund("stripe", "ch_stripe_1").await.unwrap();
    assert_eq!(refund.amount_cents, 0);
}
