//! # capacitor
//!
//! Frame-indexed state reconciliation buffer.
//!
//! Each producer owns a [`CommitLog`] and commits per-frame values in any
//! order. An [`Aggregator`] tracks every connected producer, reports the
//! lowest frame every producer has contiguously committed up to, and loads a
//! frame from all producers at once. Overwrites are checked against a
//! correction predicate so callers learn when a frame they already consumed
//! has changed.
//!
//! The core is synchronous. Producer handles are `Send + Sync` when the
//! value type is `Send`; embedders that share an aggregator across threads
//! wrap it in their own lock.

pub mod aggregator;
pub mod commit_log;
pub mod producer;

pub use aggregator::Aggregator;
pub use commit_log::CommitLog;
pub use producer::{Producer, ProducerConfig};
