//! Mail Transport Port
//!
//! Port for outbound mail delivery. The message shape is deliberately
//! minimal; provider-specific features (templates, attachments, tracking
//! pixels) belong to the concrete transport, not the contract.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An outbound mail message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailMessage {
    /// Recipient addresses
    pub to: Vec<String>,
    /// Sender address
    pub from: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
    /// Optional HTML body
    pub html_body: Option<String>,
}

impl MailMessage {
    /// Create a plain-text message to a single recipient
    pub fn new<T, F, S, B>(to: T, from: F, subject: S, body: B) -> Self
    where
        T: Into<String>,
        F: Into<String>,
        S: Into<String>,
        B: Into<String>,
    {
        Self {
            to: vec![to.into()],
            from: from.into(),
            subject: subject.into(),
            body: body.into(),
            html_body: None,
        }
    }

    /// Attach an HTML body alongside the plain-text one
    pub fn with_html<H: Into<String>>(mut self, html: H) -> Self {
        self.html_body = Some(html.into());
        self
    }
}

/// Delivery receipt returned by a transport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailReceipt {
    /// Transport-assigned message identifier
    pub message_id: String,
}

/// Outbound mail contract for the `"email"` capability
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver a message, returning the transport's receipt
    async fn send_mail(&self, message: &MailMessage) -> Result<MailReceipt>;

    /// Transport name for diagnostics
    fn transport_name(&self) -> &str;
}
