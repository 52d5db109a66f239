//! Aggregator: tracks every connected producer and answers whether a frame
//! is available from all of them.
//!
//! Producers are kept in connection order. `read` walks them in that order
//! and stops at the first producer that lacks the frame, so producers after
//! that point keep whatever cache they held before the call.
//!
//! # Examples
//!
//! ```
//! use capacitor::{Aggregator, ProducerConfig};
//! use capacitor_core::traits::correction::by_eq;
//!
//! let mut agg: Aggregator<(), u32> = Aggregator::new(by_eq());
//! let a = agg.connect(ProducerConfig::new());
//! let b = agg.connect(ProducerConfig::new().with_frame_offset(1));
//!
//! a.commit(0, 1);
//! a.commit(1, 2);
//! b.commit(1, 20);
//!
//! assert_eq!(agg.size(), 2);
//! assert!(agg.read(1));
//! assert_eq!(a.cache(), Some(2));
//! assert_eq!(b.cache(), Some(20));
//! ```

use std::fmt;
use std::path::Path;

use capacitor_core::config::ProducerDefaults;
use capacitor_core::models::{Frame, ProducerId};
use capacitor_core::traits::correction::{always_equivalent, never_equivalent};
use capacitor_core::traits::Comparator;
use capacitor_core::{CapacitorConfig, CapacitorResult};
use tracing::{debug, info, instrument};

use crate::commit_log::CommitLog;
use crate::producer::{Producer, ProducerConfig};

/// Multi-producer aggregator.
///
/// `S` is the embedder's snapshot type for the global log; the aggregator
/// stores snapshots but never reads them.
pub struct Aggregator<S, V> {
    /// Connection order.
    producers: Vec<Producer<V>>,
    global_log: Vec<S>,
    default_predicate: Comparator<V>,
    /// Reserved hook; never invoked by the aggregator.
    equality: Comparator<V>,
    defaults: ProducerDefaults,
    next_id: ProducerId,
}

impl<S, V: 'static> Aggregator<S, V> {
    /// Create an aggregator whose producers default to `default_predicate`.
    pub fn new(default_predicate: Comparator<V>) -> Self {
        Self {
            producers: Vec::new(),
            global_log: Vec::new(),
            default_predicate,
            equality: never_equivalent(),
            defaults: ProducerDefaults::default(),
            next_id: ProducerId(0),
        }
    }

    /// Create an aggregator seeded with the producer defaults from `config`.
    pub fn with_config(default_predicate: Comparator<V>, config: &CapacitorConfig) -> Self {
        let mut aggregator = Self::new(default_predicate);
        aggregator.defaults = config.producer.clone();
        aggregator
    }

    /// Load and validate a TOML config file, then build an aggregator from it.
    pub fn from_config_file(
        default_predicate: Comparator<V>,
        path: &Path,
    ) -> CapacitorResult<Self> {
        let config = CapacitorConfig::from_file(path)?;
        Ok(Self::with_config(default_predicate, &config))
    }

    /// Register a new producer and return its handle.
    pub fn connect(&mut self, config: ProducerConfig<V>) -> Producer<V> {
        let predicate = config
            .correction_predicate
            .unwrap_or_else(|| self.default_predicate.clone());
        let frame_offset = config.frame_offset.unwrap_or(self.defaults.frame_offset);
        let below_offset = config.below_offset.unwrap_or(self.defaults.below_offset);

        let mut log = CommitLog::new(predicate, frame_offset).with_below_offset(below_offset);
        if let Some(interpolator) = config.interpolator {
            log = log.with_interpolator(interpolator);
        }

        let id = self.next_id;
        self.next_id = id.next();
        let producer = Producer::new(id, log);
        self.producers.push(producer.clone());

        info!(
            producer_id = id.get(),
            frame_offset,
            producer_count = self.producers.len(),
            "producer connected"
        );
        producer
    }

    /// Lowest watermark across producers: every producer has contiguous data
    /// for all frames below it. Zero when no producer is connected.
    pub fn size(&self) -> Frame {
        self.producers
            .iter()
            .map(Producer::watermark)
            .min()
            .unwrap_or(0)
    }

    /// Drop every producer and empty the global log.
    ///
    /// Handles returned by `connect` stay usable but are detached.
    pub fn clear(&mut self) {
        info!(
            producer_count = self.producers.len(),
            global_log_len = self.global_log.len(),
            "aggregator cleared"
        );
        self.producers.clear();
        self.global_log.clear();
    }

    pub fn producer(&self, id: ProducerId) -> Option<Producer<V>> {
        self.producers.iter().find(|p| p.id() == id).cloned()
    }

    /// Ids of connected producers, in connection order.
    pub fn producer_ids(&self) -> Vec<ProducerId> {
        self.producers.iter().map(Producer::id).collect()
    }

    pub fn producers(&self) -> impl Iterator<Item = &Producer<V>> {
        self.producers.iter()
    }

    pub fn producer_count(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    pub fn default_predicate(&self) -> &Comparator<V> {
        &self.default_predicate
    }

    /// Aggregator-level equality hook for embedders.
    pub fn equality(&self) -> &Comparator<V> {
        &self.equality
    }

    pub fn set_equality(&mut self, equality: Comparator<V>) {
        self.equality = equality;
    }

    pub fn global_log(&self) -> &[S] {
        &self.global_log
    }

    pub fn global_log_mut(&mut self) -> &mut Vec<S> {
        &mut self.global_log
    }

    pub fn push_global(&mut self, snapshot: S) {
        self.global_log.push(snapshot);
    }
}

impl<S, V: Clone> Aggregator<S, V> {
    /// Load `frame` into each producer's cache, in connection order.
    ///
    /// Returns `true` only if every producer had the frame. Stops at the
    /// first producer that lacks it; caches of later producers are left as
    /// they were. Always `false` with no producers.
    #[instrument(level = "trace", skip(self), fields(producer_count = self.producers.len()))]
    pub fn read(&self, frame: Frame) -> bool {
        if self.producers.is_empty() {
            return false;
        }
        for producer in &self.producers {
            if !producer.load_cache(frame) {
                debug!(frame, producer_id = producer.id().get(), "frame not ready");
                return false;
            }
        }
        true
    }
}

impl<S, V: 'static> Default for Aggregator<S, V> {
    fn default() -> Self {
        Self::new(always_equivalent())
    }
}

impl<S, V> fmt::Debug for Aggregator<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator")
            .field(
                "producers",
                &self.producers.iter().map(Producer::id).collect::<Vec<_>>(),
            )
            .field("global_log_len", &self.global_log.len())
            .field("defaults", &self.defaults)
            .field("next_id", &self.next_id)
            .finish()
    }
}
