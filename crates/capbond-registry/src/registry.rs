//! Registry Operations
//!
//! [`Registry`] wraps the binding store in a single `RwLock` and exposes the
//! typed bond/get/require/unbond operations. One lock over both namespaces
//! keeps `unbond_all` atomic from the caller's perspective and makes
//! `bond_named`'s create-submap-then-insert safe under real threads.
//!
//! ## Typing
//!
//! The store holds erased values; type safety is caller-asserted through the
//! generic parameter, exactly one downcast per resolution. In practice every
//! provider is an `Arc<dyn Trait>`, so the `Clone` bound on resolution hands
//! the bonded value back by identity. A binding whose concrete type differs
//! from the requested `P` resolves as absent - the registry does no type
//! checking of its own.

use crate::store::BindingStore;
use capbond_domain::error::{Error, Result};
use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A capability provider registry
///
/// Process-wide use goes through [`crate::global`] and the free-function
/// facade; independent instances (one per stack, or one per test) behave
/// identically.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use capbond_registry::Registry;
///
/// let registry = Registry::new();
/// registry.bond("database", Arc::new(String::from("pool")));
///
/// let pool: Arc<String> = registry.require("database").unwrap();
/// assert_eq!(*pool, "pool");
/// ```
#[derive(Default)]
pub struct Registry {
    store: RwLock<BindingStore>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // No invariant spans a panic window inside the lock, so a poisoned
    // guard is safe to recover - bond must always succeed.
    fn read(&self) -> RwLockReadGuard<'_, BindingStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BindingStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bond a singleton provider under a category, replacing any previous
    /// binding (last write wins, no warning)
    pub fn bond<P: Send + Sync + 'static>(&self, category: &str, provider: P) {
        self.write().bond_singleton(category, Arc::new(provider));
    }

    /// Bond a named provider under a (category, name) pair, replacing any
    /// previous binding for that pair
    pub fn bond_named<P: Send + Sync + 'static>(&self, category: &str, name: &str, provider: P) {
        self.write().bond_named(category, name, Arc::new(provider));
    }

    /// Resolve the singleton provider bonded under a category, or `None`
    pub fn get<P: Clone + Send + Sync + 'static>(&self, category: &str) -> Option<P> {
        self.read()
            .singleton(category)
            .and_then(|value| value.downcast_ref::<P>())
            .cloned()
    }

    /// Resolve the provider bonded under a (category, name) pair, or `None`
    pub fn get_named<P: Clone + Send + Sync + 'static>(
        &self,
        category: &str,
        name: &str,
    ) -> Option<P> {
        self.read()
            .named(category, name)
            .and_then(|value| value.downcast_ref::<P>())
            .cloned()
    }

    /// Resolve every named provider under a category, in bonding order
    ///
    /// Always returns a map - empty when the category has no named
    /// bindings - so callers can iterate unconditionally.
    pub fn get_all<P: Clone + Send + Sync + 'static>(&self, category: &str) -> IndexMap<String, P> {
        let store = self.read();
        store
            .all_named(category)
            .map(|sub| {
                sub.iter()
                    .filter_map(|(name, value)| {
                        value.downcast_ref::<P>().map(|p| (name.clone(), p.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve the singleton provider or fail with [`Error::NotBound`]
    pub fn require<P: Clone + Send + Sync + 'static>(&self, category: &str) -> Result<P> {
        self.get(category)
            .ok_or_else(|| Error::not_bound(category))
    }

    /// Resolve a named provider or fail with [`Error::NotBoundNamed`]
    pub fn require_named<P: Clone + Send + Sync + 'static>(
        &self,
        category: &str,
        name: &str,
    ) -> Result<P> {
        self.get_named(category, name)
            .ok_or_else(|| Error::not_bound_named(category, name))
    }

    /// Remove the singleton binding; returns whether one existed
    pub fn unbond(&self, category: &str) -> bool {
        self.write().unbond_singleton(category)
    }

    /// Remove a named binding; returns whether it existed
    pub fn unbond_named(&self, category: &str, name: &str) -> bool {
        self.write().unbond_named(category, name)
    }

    /// Remove a category from both namespaces; never errors
    pub fn unbond_all(&self, category: &str) {
        self.write().clear_category(category);
    }

    /// Whether a singleton provider is bonded under a category
    pub fn is_bonded(&self, category: &str) -> bool {
        self.read().has_singleton(category)
    }

    /// Whether a provider is bonded under a (category, name) pair
    pub fn is_bonded_named(&self, category: &str, name: &str) -> bool {
        self.read().has_named(category, name)
    }

    /// Empty the registry entirely - test-harness affordance
    pub fn reset(&self) {
        self.write().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_and_get_hand_back_the_same_value() {
        let registry = Registry::new();
        let provider = Arc::new(String::from("pool-a"));
        registry.bond("database", Arc::clone(&provider));

        let resolved: Arc<String> = registry.get("database").expect("bonded");
        assert!(Arc::ptr_eq(&resolved, &provider));
    }

    #[test]
    fn mismatched_type_resolves_as_absent() {
        let registry = Registry::new();
        registry.bond("database", Arc::new(42u64));

        assert!(registry.get::<Arc<String>>("database").is_none());
        let err = registry.require::<Arc<String>>("database").unwrap_err();
        assert!(err.is_not_bound());
        // the binding is still there for the right type
        assert!(registry.is_bonded("database"));
        assert_eq!(*registry.get::<Arc<u64>>("database").expect("bonded"), 42);
    }

    #[test]
    fn get_all_is_empty_for_unknown_category() {
        let registry = Registry::new();
        let all: IndexMap<String, Arc<String>> = registry.get_all("oauth");
        assert!(all.is_empty());
    }

    #[test]
    fn reset_clears_both_namespaces() {
        let registry = Registry::new();
        registry.bond("database", Arc::new(1u32));
        registry.bond_named("oauth", "google", Arc::new(2u32));

        registry.reset();

        assert!(!registry.is_bonded("database"));
        assert!(!registry.is_bonded_named("oauth", "google"));
    }
}
