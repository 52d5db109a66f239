//! Producer handles and their connection options.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use capacitor_core::config::BelowOffsetPolicy;
use capacitor_core::models::{Frame, ProducerId};
use capacitor_core::traits::{Comparator, Interpolator};
use capacitor_core::CapacitorResult;
use tracing::trace_span;

use crate::commit_log::CommitLog;

/// Options accepted by `Aggregator::connect`.
///
/// Unset fields fall back to the aggregator's defaults.
pub struct ProducerConfig<V> {
    pub correction_predicate: Option<Comparator<V>>,
    pub frame_offset: Option<Frame>,
    pub below_offset: Option<BelowOffsetPolicy>,
    pub interpolator: Option<Arc<dyn Interpolator<V>>>,
}

impl<V> ProducerConfig<V> {
    pub fn new() -> Self {
        Self {
            correction_predicate: None,
            frame_offset: None,
            below_offset: None,
            interpolator: None,
        }
    }

    pub fn with_correction_predicate(mut self, predicate: Comparator<V>) -> Self {
        self.correction_predicate = Some(predicate);
        self
    }

    pub fn with_frame_offset(mut self, frame_offset: Frame) -> Self {
        self.frame_offset = Some(frame_offset);
        self
    }

    pub fn with_below_offset(mut self, policy: BelowOffsetPolicy) -> Self {
        self.below_offset = Some(policy);
        self
    }

    pub fn with_interpolator(mut self, interpolator: Arc<dyn Interpolator<V>>) -> Self {
        self.interpolator = Some(interpolator);
        self
    }
}

impl<V> Default for ProducerConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a producer's [`CommitLog`].
///
/// The aggregator and the producer each hold a clone. After
/// `Aggregator::clear` the producer's clone keeps working but no longer
/// feeds the aggregator.
pub struct Producer<V> {
    id: ProducerId,
    log: Arc<Mutex<CommitLog<V>>>,
}

impl<V> Producer<V> {
    pub(crate) fn new(id: ProducerId, log: CommitLog<V>) -> Self {
        Self {
            id,
            log: Arc::new(Mutex::new(log)),
        }
    }

    pub fn id(&self) -> ProducerId {
        self.id
    }

    /// See [`CommitLog::commit`].
    pub fn commit(&self, frame: Frame, value: V) -> bool {
        let _span = trace_span!("capacitor.commit", producer_id = self.id.get()).entered();
        self.lock().commit(frame, value)
    }

    /// See [`CommitLog::try_commit`].
    pub fn try_commit(&self, frame: Frame, value: V) -> CapacitorResult<bool> {
        let _span = trace_span!("capacitor.commit", producer_id = self.id.get()).entered();
        self.lock().try_commit(frame, value)
    }

    pub fn contiguous_size(&self) -> usize {
        self.lock().contiguous_size()
    }

    pub fn frame_offset(&self) -> Frame {
        self.lock().frame_offset()
    }

    pub fn watermark(&self) -> Frame {
        self.lock().watermark()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn interpolate(&self, frame: Frame) -> Option<V> {
        self.lock().interpolate(frame)
    }

    /// Run `f` against the underlying log while holding its lock.
    pub fn with_log<R>(&self, f: impl FnOnce(&CommitLog<V>) -> R) -> R {
        f(&self.lock())
    }

    /// Whether both handles refer to the same commit log.
    pub fn same_log(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.log, &other.log)
    }

    fn lock(&self) -> MutexGuard<'_, CommitLog<V>> {
        // A panic inside a comparator leaves the log structurally intact.
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> Producer<V> {
    /// See [`CommitLog::read`].
    pub fn read(&self, frame: Frame) -> Option<V> {
        self.lock().read(frame).cloned()
    }

    /// Value cached by the last aggregator read that reached this producer.
    pub fn cache(&self) -> Option<V> {
        self.lock().cache().cloned()
    }

    pub(crate) fn load_cache(&self, frame: Frame) -> bool {
        self.lock().load_cache(frame)
    }
}

impl<V> Clone for Producer<V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            log: Arc::clone(&self.log),
        }
    }
}

impl<V> fmt::Debug for Producer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("id", &self.id)
            .field("log", &*self.lock())
            .finish()
    }
}
