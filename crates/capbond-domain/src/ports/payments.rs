//! Payment Provider Port
//!
//! Named port: hosts may run several payment processors side by side, each
//! bonded under its own name within the `"payments"` category.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A charge request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Amount in the currency's minor unit (cents)
    pub amount_cents: i64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Customer identifier at the processor
    pub customer_id: String,
    /// Optional statement description
    pub description: Option<String>,
}

/// Result of a settled charge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeOutcome {
    /// Processor-assigned charge identifier
    pub charge_id: String,
    /// Amount actually charged, in minor units
    pub amount_cents: i64,
    /// ISO 4217 currency code
    pub currency: String,
}

/// Charging contract for one named processor under `"payments"`
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Charge a customer
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeOutcome>;

    /// Reverse a previous charge
    async fn refund(&self, charge_id: &str) -> Result<ChargeOutcome>;

    /// Processor name for diagnostics
    fn provider_name(&self) -> &str;
}
