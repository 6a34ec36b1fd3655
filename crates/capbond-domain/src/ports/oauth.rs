//! OAuth Verifier Port
//!
//! Named port: each OAuth server (google, github, ...) is bonded under its
//! own name within the `"oauth"` category.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identity extracted from a verified token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthIdentity {
    /// Stable subject identifier from the issuer
    pub subject: String,
    /// Verified email address, when the issuer provides one
    pub email: Option<String>,
    /// Token issuer
    pub issuer: String,
}

/// Token verification contract for one named server under `"oauth"`
#[async_trait]
pub trait OAuthVerifier: Send + Sync {
    /// Verify an access/ID token and return the identity it proves
    async fn verify(&self, token: &str) -> Result<OAuthIdentity>;
}
