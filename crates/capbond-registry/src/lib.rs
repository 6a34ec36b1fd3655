//! Capability provider registry ("bonding")
//!
//! A process-wide, string-keyed service locator that lets independently
//! loaded modules register implementations of an abstract capability and
//! lets consumers resolve them at call time, without a compile-time
//! dependency on any concrete package.
//!
//! Two namespaces exist per category: a singleton binding (one provider per
//! category) and named bindings (several providers per category, addressed
//! by name). They are independent - bonding in one never affects the other.
//!
//! Every operation is a synchronous in-memory map access: nothing here does
//! I/O, suspends, or retries. A `bond` that returns before a `get` begins
//! is guaranteed visible to it; concurrent bonds to the same key race with
//! last-write-wins and no further tie-break.
//!
//! ## Surfaces
//!
//! - [`Registry`] - an instantiable registry; the hosting system may run
//!   several independent instances with identical semantics.
//! - The free functions in this crate root - the same verbs over the
//!   process-wide default registry ([`global`]), which is what the
//!   capability wrapper modules resolve through.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! // bootstrap: bond once per capability
//! capbond_registry::bond("greeting", Arc::new(String::from("hello")));
//!
//! // anywhere else: resolve at call time
//! let greeting: Arc<String> = capbond_registry::require("greeting").unwrap();
//! assert_eq!(*greeting, "hello");
//! # capbond_registry::unbond_all("greeting");
//! ```

mod registry;
mod store;

pub use capbond_domain::error::{Error, Result};
pub use registry::Registry;

use indexmap::IndexMap;
use std::sync::LazyLock;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide default registry
///
/// Created empty on first use and alive for the process lifetime. Test
/// harnesses that share it should call [`reset`] between cases or use
/// distinct categories.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Bond a singleton provider under a category on the default registry
pub fn bond<P: Send + Sync + 'static>(category: &str, provider: P) {
    global().bond(category, provider);
}

/// Bond a named provider under a (category, name) pair on the default registry
pub fn bond_named<P: Send + Sync + 'static>(category: &str, name: &str, provider: P) {
    global().bond_named(category, name, provider);
}

/// Resolve the singleton provider bonded under a category, or `None`
pub fn get<P: Clone + Send + Sync + 'static>(category: &str) -> Option<P> {
    global().get(category)
}

/// Resolve the provider bonded under a (category, name) pair, or `None`
pub fn get_named<P: Clone + Send + Sync + 'static>(category: &str, name: &str) -> Option<P> {
    global().get_named(category, name)
}

/// Resolve every named provider under a category, in bonding order;
/// empty (never absent) when the category has no named bindings
pub fn get_all<P: Clone + Send + Sync + 'static>(category: &str) -> IndexMap<String, P> {
    global().get_all(category)
}

/// Resolve the singleton provider or fail with [`Error::NotBound`]
pub fn require<P: Clone + Send + Sync + 'static>(category: &str) -> Result<P> {
    global().require(category)
}

/// Resolve a named provider or fail with [`Error::NotBoundNamed`]
pub fn require_named<P: Clone + Send + Sync + 'static>(category: &str, name: &str) -> Result<P> {
    global().require_named(category, name)
}

/// Remove the singleton binding; returns whether one existed
pub fn unbond(category: &str) -> bool {
    global().unbond(category)
}

/// Remove a named binding; returns whether it existed
pub fn unbond_named(category: &str, name: &str) -> bool {
    global().unbond_named(category, name)
}

/// Remove a category from both namespaces
pub fn unbond_all(category: &str) {
    global().unbond_all(category)
}

/// Whether a singleton provider is bonded under a category
pub fn is_bonded(category: &str) -> bool {
    global().is_bonded(category)
}

/// Whether a provider is bonded under a (category, name) pair
pub fn is_bonded_named(category: &str, name: &str) -> bool {
    global().is_bonded_named(category, name)
}

/// Empty the default registry entirely - test-harness affordance
pub fn reset() {
    global().reset()
}
