//! Correction predicates.
//!
//! A comparator receives `(previous, next)` for a frame that is being
//! overwritten and returns `true` when the two values are equivalent, i.e.
//! no correction needs to be signalled.
//!
//! # Examples
//!
//! ```
//! use capacitor_core::traits::correction::{by_key, Comparator};
//!
//! struct Packet { value: i32 }
//!
//! let cmp: Comparator<Packet> = by_key(|p: &Packet| p.value);
//! assert!(cmp(&Packet { value: 1 }, &Packet { value: 1 }));
//! assert!(!cmp(&Packet { value: 1 }, &Packet { value: 2 }));
//! ```

use std::sync::Arc;

/// Shared `(previous, next) -> equivalent` predicate.
pub type Comparator<V> = Arc<dyn Fn(&V, &V) -> bool + Send + Sync>;

/// Wrap a closure as a [`Comparator`].
pub fn comparator<V, F>(f: F) -> Comparator<V>
where
    F: Fn(&V, &V) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Treat every overwrite as equivalent. Disables correction signalling.
pub fn always_equivalent<V: 'static>() -> Comparator<V> {
    Arc::new(|_: &V, _: &V| true)
}

/// Treat every overwrite as a correction.
pub fn never_equivalent<V: 'static>() -> Comparator<V> {
    Arc::new(|_: &V, _: &V| false)
}

/// Compare values with `PartialEq`.
pub fn by_eq<V: PartialEq + 'static>() -> Comparator<V> {
    Arc::new(|a: &V, b: &V| a == b)
}

/// Compare a projected key of each value.
pub fn by_key<V, K, F>(key: F) -> Comparator<V>
where
    V: 'static,
    K: PartialEq + 'static,
    F: Fn(&V) -> K + Send + Sync + 'static,
{
    Arc::new(move |a: &V, b: &V| key(a) == key(b))
}
