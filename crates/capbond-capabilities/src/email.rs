//! Outbound mail capability
//!
//! Singleton-mode wrapper over the `"email"` category.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::{MailMessage, MailReceipt, MailTransport};
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "email";

const NOT_CONFIGURED: &str = "Mail transport not configured. Call set_transport() first.";

/// Bond the active mail transport, replacing any previous one
pub fn set_transport(transport: Arc<dyn MailTransport>) {
    capbond_registry::bond(CATEGORY, transport);
}

/// The bonded transport, if any
pub fn get_transport() -> Option<Arc<dyn MailTransport>> {
    capbond_registry::get(CATEGORY)
}

/// Whether a transport is bonded
pub fn has_transport() -> bool {
    capbond_registry::is_bonded(CATEGORY)
}

/// The bonded transport, or the capability's not-configured error
pub fn require_transport() -> Result<Arc<dyn MailTransport>> {
    get_transport().ok_or_else(|| Error::not_configured(NOT_CONFIGURED))
}

/// Deliver a message through the bonded transport
pub async fn send_mail(message: &MailMessage) -> Result<MailReceipt> {
    require_transport()?.send_mail(message).await
}
