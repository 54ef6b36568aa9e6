//! Core trait that decouples curve consumers from where named curves come
//! from.
//!
//! The built-in preset table ([`BuiltinPresets`](crate::preset::BuiltinPresets))
//! and the configuration-backed [`Catalog`](crate::catalog::Catalog) both
//! implement it, so the command-line front-end and any embedding application
//! only depend on this abstraction.

use crate::bezier::CubicBezier;

/// A read-only mapping from curve name to [`CubicBezier`].
///
/// # Contract
///
/// * Lookups never fail: an unknown name is `None`, not an error.
/// * The mapping does not change after construction, so implementations
///   are expected to be shareable across threads without locking.
/// * Every name returned by [`names`](CurveCatalog::names) resolves through
///   [`lookup`](CurveCatalog::lookup).
pub trait CurveCatalog {
    /// Return the curve registered under `name`, if any.
    fn lookup(&self, name: &str) -> Option<CubicBezier>;

    /// All registered names, in a stable order.
    fn names(&self) -> Vec<String>;

    /// Whether `name` is registered.
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}
