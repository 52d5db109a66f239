//! CommitLog: one producer's frame-indexed sequence of committed values.
//!
//! Commits may arrive in any order. The log tracks the length of the
//! unbroken prefix of committed slots (the contiguous size) and only exposes
//! frames inside that prefix through `read`. A later frame committed early
//! leaves a hole; the contiguous size advances past it only once the missing
//! frame is filled, at which point it jumps over every slot already present.
//!
//! # Examples
//!
//! ```
//! use capacitor::CommitLog;
//! use capacitor_core::traits::correction::by_eq;
//!
//! let mut log = CommitLog::new(by_eq::<i32>(), 0);
//! assert!(log.commit(0, 10));
//! assert!(log.commit(2, 30));
//! assert_eq!(log.contiguous_size(), 1);
//! assert_eq!(log.read(2), None); // behind a hole
//!
//! assert!(log.commit(1, 20));
//! assert_eq!(log.contiguous_size(), 3);
//! assert_eq!(log.read(2), Some(&30));
//!
//! assert!(!log.commit(1, 21)); // correction
//! assert_eq!(log.read(1), Some(&21));
//! ```

use std::fmt;
use std::sync::Arc;

use capacitor_core::config::BelowOffsetPolicy;
use capacitor_core::models::frame::internal_index;
use capacitor_core::models::Frame;
use capacitor_core::traits::{Comparator, Interpolator, NoInterpolation};
use capacitor_core::{CapacitorError, CapacitorResult};
use tracing::{debug, trace};

/// Possibly-sparse log of committed values for a single producer.
pub struct CommitLog<V> {
    /// Slot `i` holds the value for external frame `frame_offset + i`.
    commits: Vec<Option<V>>,
    frame_offset: Frame,
    /// Slots `0..contiguous_size` are all populated; slot `contiguous_size` is not.
    contiguous_size: usize,
    correction: Comparator<V>,
    below_offset: BelowOffsetPolicy,
    interpolator: Arc<dyn Interpolator<V>>,
    /// Last value loaded by `load_cache`.
    cache: Option<V>,
}

impl<V> CommitLog<V> {
    /// Create an empty log whose slot 0 corresponds to `frame_offset`.
    pub fn new(correction: Comparator<V>, frame_offset: Frame) -> Self {
        Self {
            commits: Vec::new(),
            frame_offset,
            contiguous_size: 0,
            correction,
            below_offset: BelowOffsetPolicy::default(),
            interpolator: Arc::new(NoInterpolation),
            cache: None,
        }
    }

    /// Set how commits below the frame offset are handled.
    pub fn with_below_offset(mut self, policy: BelowOffsetPolicy) -> Self {
        self.below_offset = policy;
        self
    }

    /// Replace the interpolation strategy.
    pub fn with_interpolator(mut self, interpolator: Arc<dyn Interpolator<V>>) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Commit `value` for `frame`.
    ///
    /// Returns `true` when no correction was necessary: either the slot was
    /// empty, or the correction predicate judged the previous value
    /// equivalent. Returns `false` when an earlier value was overwritten by a
    /// non-equivalent one. The new value is stored in both cases.
    ///
    /// Frames below the offset are dropped under [`BelowOffsetPolicy::Reject`]
    /// and reported as `true`, since nothing was corrected. Frames too far
    /// past the offset to address are dropped the same way.
    pub fn commit(&mut self, frame: Frame, value: V) -> bool {
        match self.try_commit(frame, value) {
            Ok(equivalent) => equivalent,
            Err(e) => {
                debug!(frame, frame_offset = self.frame_offset, error = %e, "commit rejected");
                true
            }
        }
    }

    /// Like [`commit`](Self::commit), but reports a rejected below-offset
    /// frame as [`CapacitorError::FrameBelowOffset`] and a frame whose slot
    /// cannot be addressed as [`CapacitorError::FrameOutOfRange`].
    pub fn try_commit(&mut self, frame: Frame, value: V) -> CapacitorResult<bool> {
        let index = self.slot_for_commit(frame)?;

        if index >= self.commits.len() {
            let len = index
                .checked_add(1)
                .ok_or(CapacitorError::FrameOutOfRange {
                    frame,
                    frame_offset: self.frame_offset,
                })?;
            self.commits.resize_with(len, || None);
        }

        let slot = &mut self.commits[index];
        let equivalent = match slot.as_ref() {
            Some(previous) => (self.correction)(previous, &value),
            None => true,
        };
        *slot = Some(value);

        if !equivalent {
            debug!(frame, index, "correction: committed value replaced");
        }

        if index == self.contiguous_size {
            let advanced = self.advance_contiguous();
            debug!(
                frame,
                advanced,
                contiguous_size = self.contiguous_size,
                "contiguous run extended"
            );
        }

        Ok(equivalent)
    }

    /// Value committed for `frame`, if `frame` lies inside the contiguous
    /// prefix. Populated slots past a hole are never exposed.
    pub fn read(&self, frame: Frame) -> Option<&V> {
        let value = internal_index(frame, self.frame_offset)
            .filter(|&index| index < self.contiguous_size)
            .and_then(|index| self.commits[index].as_ref());
        trace!(
            frame,
            contiguous_size = self.contiguous_size,
            available = value.is_some(),
            "commit log read"
        );
        value
    }

    /// Ask the interpolation strategy for a stand-in value for `frame`,
    /// passing the nearest committed values on either side of it.
    pub fn interpolate(&self, frame: Frame) -> Option<V> {
        let (previous, next) = match internal_index(frame, self.frame_offset) {
            Some(index) => {
                let split = index.min(self.commits.len());
                let previous = self.commits[..split].iter().rev().find_map(Option::as_ref);
                let next = self
                    .commits
                    .iter()
                    .skip(index.saturating_add(1))
                    .find_map(Option::as_ref);
                (previous, next)
            }
            None => (None, self.commits.iter().find_map(Option::as_ref)),
        };
        self.interpolator.interpolate(frame, previous, next)
    }

    /// Last value loaded into the cache, if any.
    pub fn cache(&self) -> Option<&V> {
        self.cache.as_ref()
    }

    /// Number of leading slots that are populated with no gaps.
    pub fn contiguous_size(&self) -> usize {
        self.contiguous_size
    }

    /// External frame that maps to slot 0.
    pub fn frame_offset(&self) -> Frame {
        self.frame_offset
    }

    /// First external frame not yet contiguously available.
    pub fn watermark(&self) -> Frame {
        self.frame_offset
            .saturating_add(self.contiguous_size as Frame)
    }

    /// Number of slots, populated or not.
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Whether no slot has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Populated slots past the contiguous prefix.
    pub fn pending_count(&self) -> usize {
        self.commits[self.contiguous_size..]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Whether an out-of-order commit is waiting on a hole to be filled.
    pub fn has_gap(&self) -> bool {
        self.pending_count() > 0
    }

    /// The correction predicate this log was configured with.
    pub fn correction(&self) -> &Comparator<V> {
        &self.correction
    }

    /// The below-offset policy this log was configured with.
    pub fn below_offset(&self) -> BelowOffsetPolicy {
        self.below_offset
    }

    fn slot_for_commit(&self, frame: Frame) -> CapacitorResult<usize> {
        if frame < self.frame_offset {
            return match self.below_offset {
                BelowOffsetPolicy::Clamp => Ok(0),
                BelowOffsetPolicy::Reject => Err(CapacitorError::FrameBelowOffset {
                    frame,
                    frame_offset: self.frame_offset,
                }),
            };
        }
        internal_index(frame, self.frame_offset).ok_or(CapacitorError::FrameOutOfRange {
            frame,
            frame_offset: self.frame_offset,
        })
    }

    /// Walk forward over populated slots. Returns how far the run advanced.
    fn advance_contiguous(&mut self) -> usize {
        let before = self.contiguous_size;
        while self
            .commits
            .get(self.contiguous_size)
            .is_some_and(Option::is_some)
        {
            self.contiguous_size += 1;
        }
        self.contiguous_size - before
    }
}

impl<V: Clone> CommitLog<V> {
    /// Replace the cache with the result of `read(frame)`, clearing it when
    /// the frame is unavailable. Returns whether a value was loaded.
    pub fn load_cache(&mut self, frame: Frame) -> bool {
        self.cache = self.read(frame).cloned();
        self.cache.is_some()
    }
}

impl<V> fmt::Debug for CommitLog<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommitLog")
            .field("frame_offset", &self.frame_offset)
            .field("contiguous_size", &self.contiguous_size)
            .field("len", &self.commits.len())
            .field("below_offset", &self.below_offset)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}
