use capacitor::{Aggregator, CommitLog, ProducerConfig};
use capacitor_core::traits::correction::{by_eq, comparator};
use proptest::prelude::*;

/// Frames `0..n` in an arbitrary order.
fn arb_permutation(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    (1..max_len).prop_flat_map(|n| Just((0..n as u64).collect::<Vec<_>>()).prop_shuffle())
}

/// Length of the unbroken prefix of `0..` present in `frames`.
fn expected_prefix(frames: &[u64]) -> usize {
    let mut seen = std::collections::HashSet::new();
    seen.extend(frames.iter().copied());
    (0u64..).take_while(|f| seen.contains(f)).count()
}

// ── Contiguous size is independent of arrival order ──────────────────────

proptest! {
    #[test]
    fn contiguous_size_ignores_arrival_order(frames in arb_permutation(64)) {
        let mut log = CommitLog::new(by_eq::<u64>(), 0);
        for &frame in &frames {
            log.commit(frame, frame);
        }
        prop_assert_eq!(log.contiguous_size(), frames.len());
        prop_assert!(!log.has_gap());
        for &frame in &frames {
            prop_assert_eq!(log.read(frame), Some(&frame));
        }
    }

    #[test]
    fn contiguous_size_matches_unbroken_prefix(
        frames in proptest::collection::vec(0u64..48, 0..64),
    ) {
        let mut log = CommitLog::new(by_eq::<u64>(), 0);
        for (step, &frame) in frames.iter().enumerate() {
            log.commit(frame, frame);
            prop_assert_eq!(log.contiguous_size(), expected_prefix(&frames[..=step]));
        }
    }

    #[test]
    fn reads_are_gated_by_the_prefix(
        frames in proptest::collection::vec(0u64..32, 0..48),
    ) {
        let mut log = CommitLog::new(by_eq::<u64>(), 0);
        for &frame in &frames {
            log.commit(frame, frame * 10);
        }
        let prefix = log.contiguous_size() as u64;
        for frame in 0..40u64 {
            if frame < prefix {
                prop_assert_eq!(log.read(frame), Some(&(frame * 10)));
            } else {
                prop_assert_eq!(log.read(frame), None);
            }
        }
    }

    #[test]
    fn commit_result_is_the_predicate_result(
        first in any::<i32>(),
        second in any::<i32>(),
    ) {
        let mut log = CommitLog::new(comparator(|a: &i32, b: &i32| a % 7 == b % 7), 0);
        prop_assert!(log.commit(0, first));
        prop_assert_eq!(log.commit(0, second), first % 7 == second % 7);
        prop_assert_eq!(log.read(0), Some(&second));
    }
}

// ── Aggregator size is the minimum watermark ─────────────────────────────

proptest! {
    #[test]
    fn aggregator_size_is_min_watermark(
        producers in proptest::collection::vec((0u64..8, 0usize..24), 1..6),
    ) {
        let mut agg: Aggregator<(), u64> = Aggregator::new(by_eq());
        let mut expected = u64::MAX;
        for (offset, count) in producers {
            let handle = agg.connect(ProducerConfig::new().with_frame_offset(offset));
            for frame in (offset..offset + count as u64).rev() {
                handle.commit(frame, frame);
            }
            expected = expected.min(offset + count as u64);
        }
        prop_assert_eq!(agg.size(), expected);
    }

    #[test]
    fn frames_below_size_are_ready(count in 1u64..32, producers in 1usize..5) {
        let mut agg: Aggregator<(), u64> = Aggregator::new(by_eq());
        let handles: Vec<_> = (0..producers)
            .map(|_| agg.connect(ProducerConfig::new()))
            .collect();
        for handle in &handles {
            for frame in 0..count {
                handle.commit(frame, frame);
            }
        }
        prop_assert_eq!(agg.size(), count);
        for frame in 0..agg.size() {
            prop_assert!(agg.read(frame));
        }
        prop_assert!(!agg.read(agg.size()));
    }
}
