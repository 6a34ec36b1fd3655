//! Binding Store
//!
//! The raw data structure behind the registry: two independent namespaces
//! keyed by capability category. A category's presence in one namespace
//! says nothing about the other. The store is plain data - all locking and
//! typing live in [`crate::registry::Registry`].

use indexmap::IndexMap;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// The erased provider value held by the store
///
/// The registry never inspects, clones, or wraps the provider beyond this
/// erasure; the value is handed back by identity to every caller.
pub(crate) type BindingValue = Arc<dyn Any + Send + Sync>;

/// Two-namespace binding store: one provider per category, plus a map of
/// named providers per category. Named bindings keep bonding order, which
/// is the enumeration order seen by `get_all` and fan-out callers.
#[derive(Default)]
pub(crate) struct BindingStore {
    singletons: HashMap<String, BindingValue>,
    named: HashMap<String, IndexMap<String, BindingValue>>,
}

impl BindingStore {
    /// Insert or replace the singleton binding for a category
    pub(crate) fn bond_singleton(&mut self, category: &str, value: BindingValue) {
        self.singletons.insert(category.to_owned(), value);
    }

    /// Insert or replace a named binding, creating the category's sub-map
    /// on first use. Re-bonding an existing name keeps its original
    /// position in the enumeration order.
    pub(crate) fn bond_named(&mut self, category: &str, name: &str, value: BindingValue) {
        self.named
            .entry(category.to_owned())
            .or_default()
            .insert(name.to_owned(), value);
    }

    pub(crate) fn singleton(&self, category: &str) -> Option<&BindingValue> {
        self.singletons.get(category)
    }

    pub(crate) fn named(&self, category: &str, name: &str) -> Option<&BindingValue> {
        self.named.get(category).and_then(|sub| sub.get(name))
    }

    pub(crate) fn all_named(&self, category: &str) -> Option<&IndexMap<String, BindingValue>> {
        self.named.get(category)
    }

    pub(crate) fn has_singleton(&self, category: &str) -> bool {
        self.singletons.contains_key(category)
    }

    pub(crate) fn has_named(&self, category: &str, name: &str) -> bool {
        self.named(category, name).is_some()
    }

    /// Remove the singleton binding; returns whether one existed
    pub(crate) fn unbond_singleton(&mut self, category: &str) -> bool {
        self.singletons.remove(category).is_some()
    }

    /// Remove one named binding; returns whether it existed. The category's
    /// sub-map stays in place (possibly empty) - `shift_remove` so the
    /// remaining names keep their bonding order.
    pub(crate) fn unbond_named(&mut self, category: &str, name: &str) -> bool {
        self.named
            .get_mut(category)
            .is_some_and(|sub| sub.shift_remove(name).is_some())
    }

    /// Remove a category from both namespaces
    pub(crate) fn clear_category(&mut self, category: &str) {
        self.singletons.remove(category);
        self.named.remove(category);
    }

    /// Empty both namespaces entirely
    pub(crate) fn reset(&mut self) {
        self.singletons.clear();
        self.named.clear();
    }
}
