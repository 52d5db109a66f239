//! Interpolation strategy for frames a producer has not (yet) committed.
//!
//! Commit logs carry an interpolator but never consult it from `read`;
//! embedders call `CommitLog::interpolate` explicitly when they want a
//! stand-in value for a missing frame.

use crate::models::Frame;

/// Produces a stand-in value for `frame` from its nearest committed neighbours.
pub trait Interpolator<V>: Send + Sync {
    /// `previous` is the closest committed value before `frame`, `next` the
    /// closest one after it. Returns `None` when no value can be produced.
    fn interpolate(&self, frame: Frame, previous: Option<&V>, next: Option<&V>) -> Option<V>;
}

/// Interpolator that never produces a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterpolation;

impl<V> Interpolator<V> for NoInterpolation {
    fn interpolate(&self, _frame: Frame, _previous: Option<&V>, _next: Option<&V>) -> Option<V> {
        None
    }
}

/// Hold the most recent committed value before the missing frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldPrevious;

impl<V: Clone> Interpolator<V> for HoldPrevious {
    fn interpolate(&self, _frame: Frame, previous: Option<&V>, _next: Option<&V>) -> Option<V> {
        previous.cloned()
    }
}
