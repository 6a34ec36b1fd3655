//! Payments capability
//!
//! Named-mode wrapper over the `"payments"` category: hosts that run more
//! than one processor bond each under its own name and pick one per charge.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::{ChargeOutcome, ChargeRequest, PaymentProvider};
use indexmap::IndexMap;
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "payments";

/// Bond a processor under `name`, replacing any previous binding for it
pub fn set_provider(name: &str, provider: Arc<dyn PaymentProvider>) {
    capbond_registry::bond_named(CATEGORY, name, provider);
}

/// The processor bonded under `name`, if any
pub fn get_provider(name: &str) -> Option<Arc<dyn PaymentProvider>> {
    capbond_registry::get_named(CATEGORY, name)
}

/// Whether a processor is bonded under `name`
pub fn has_provider(name: &str) -> bool {
    capbond_registry::is_bonded_named(CATEGORY, name)
}

/// Every bonded processor, in bonding order
pub fn providers() -> IndexMap<String, Arc<dyn PaymentProvider>> {
    capbond_registry::get_all(CATEGORY)
}

/// The processor bonded under `name`, or the capability's not-configured error
pub fn require_provider(name: &str) -> Result<Arc<dyn PaymentProvider>> {
    get_provider(name).ok_or_else(|| {
        Error::not_configured(format!(
            "Payment provider '{name}' not configured. Call set_provider() first."
        ))
    })
}

/// Charge a customer through the named processor
pub async fn charge(name: &str, request: &ChargeRequest) -> Result<ChargeOutcome> {
    require_provider(name)?.charge(request).await
}

/// Refund a previous charge through the named processor
pub async fn refund(name: &str, charge_id: &str) -> Result<ChargeOutcome> {
    require_provider(name)?.refund(charge_id).await
}
