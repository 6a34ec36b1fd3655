//! OAuth capability
//!
//! Named-mode wrapper over the `"oauth"` category: one verifier per
//! configured OAuth server, addressed by name.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::{OAuthIdentity, OAuthVerifier};
use indexmap::IndexMap;
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "oauth";

/// Bond a verifier under `name`, replacing any previous binding for it
pub fn set_verifier(name: &str, verifier: Arc<dyn OAuthVerifier>) {
    capbond_registry::bond_named(CATEGORY, name, verifier);
}

/// The verifier bonded under `name`, if any
pub fn get_verifier(name: &str) -> Option<Arc<dyn OAuthVerifier>> {
    capbond_registry::get_named(CATEGORY, name)
}

/// Whether a verifier is bonded under `name`
pub fn has_verifier(name: &str) -> bool {
    capbond_registry::is_bonded_named(CATEGORY, name)
}

/// Every bonded verifier, in bonding order; empty when none are bonded
pub fn verifiers() -> IndexMap<String, Arc<dyn OAuthVerifier>> {
    capbond_registry::get_all(CATEGORY)
}

/// The verifier bonded under `name`, or the capability's not-configured error
pub fn require_verifier(name: &str) -> Result<Arc<dyn OAuthVerifier>> {
    get_verifier(name).ok_or_else(|| {
        Error::not_configured(format!(
            "OAuth verifier '{name}' not configured. Call set_verifier() first."
        ))
    })
}

/// Verify a token against the named server
pub async fn verify(name: &str, token: &str) -> Result<OAuthIdentity> {
    require_verifier(name)?.verify(token).await
}
