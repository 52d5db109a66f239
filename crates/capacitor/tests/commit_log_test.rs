use std::sync::Arc;

use capacitor::CommitLog;
use capacitor_core::config::BelowOffsetPolicy;
use capacitor_core::errors::CapacitorErrorCode;
use capacitor_core::traits::correction::{always_equivalent, by_key, comparator};
use capacitor_core::traits::HoldPrevious;
use capacitor_core::CapacitorError;

#[derive(Debug, Clone, PartialEq)]
struct Packet {
    value: i64,
}

fn packet(value: i64) -> Packet {
    Packet { value }
}

fn packet_log(frame_offset: u64) -> CommitLog<Packet> {
    CommitLog::new(by_key(|p: &Packet| p.value), frame_offset)
}

#[test]
fn empty_log_reads_nothing() {
    let log = packet_log(0);
    assert_eq!(log.read(0), None);
    assert_eq!(log.contiguous_size(), 0);
    assert!(log.is_empty());
    assert_eq!(log.watermark(), 0);
}

#[test]
fn first_write_is_never_a_correction() {
    let mut log = packet_log(0);
    assert!(log.commit(0, packet(0)));
    assert!(log.commit(7, packet(-3)));
    assert!(log.commit(3, packet(99)));
}

#[test]
fn overwrite_reports_correction_and_keeps_new_value() {
    let mut log = packet_log(0);
    assert!(log.commit(0, packet(0)));
    assert_eq!(log.read(0), Some(&packet(0)));

    assert!(!log.commit(0, packet(1)));
    assert_eq!(log.read(0), Some(&packet(1)));

    assert!(log.commit(0, packet(1)));
    assert_eq!(log.read(0), Some(&packet(1)));

    assert!(log.commit(1, packet(0)));
    assert_eq!(log.read(0), Some(&packet(1)));
    assert_eq!(log.read(1), Some(&packet(0)));
    assert_eq!(log.read(2), None);
}

#[test]
fn predicate_receives_previous_then_next() {
    let mut log = CommitLog::new(comparator(|prev: &i64, next: &i64| next >= prev), 0);
    log.commit(0, 5);
    assert!(log.commit(0, 6));
    assert!(!log.commit(0, 2));
    assert_eq!(log.read(0), Some(&2));
}

#[test]
fn always_equivalent_disables_correction_signalling() {
    let mut log = CommitLog::new(always_equivalent::<i64>(), 0);
    log.commit(0, 1);
    assert!(log.commit(0, 2));
    assert_eq!(log.read(0), Some(&2));
}

#[test]
fn out_of_order_commits_are_gated_until_the_hole_closes() {
    let mut log = packet_log(0);
    log.commit(0, packet(0));
    log.commit(1, packet(1));
    assert_eq!(log.contiguous_size(), 2);

    log.commit(4, packet(4));
    assert_eq!(log.contiguous_size(), 2);
    assert_eq!(log.read(4), None);

    log.commit(3, packet(3));
    assert_eq!(log.contiguous_size(), 2);
    assert_eq!(log.read(2), None);
    assert_eq!(log.read(3), None);

    log.commit(2, packet(2));
    assert_eq!(log.contiguous_size(), 5);
    for frame in 2..5 {
        assert_eq!(log.read(frame), Some(&packet(frame as i64)));
    }
    assert_eq!(log.read(5), None);
}

#[test]
fn future_frame_alone_is_not_readable() {
    let mut log = packet_log(0);
    log.commit(1, packet(0));
    assert_eq!(log.read(0), None);
    assert_eq!(log.read(1), None);
    assert_eq!(log.len(), 2);
    assert!(log.has_gap());
    assert_eq!(log.pending_count(), 1);
}

#[test]
fn correcting_a_pending_slot_does_not_advance_the_run() {
    let mut log = packet_log(0);
    log.commit(2, packet(2));
    assert!(!log.commit(2, packet(20)));
    assert_eq!(log.contiguous_size(), 0);

    log.commit(0, packet(0));
    log.commit(1, packet(1));
    assert_eq!(log.contiguous_size(), 3);
    assert_eq!(log.read(2), Some(&packet(20)));
}

#[test]
fn frame_offset_maps_to_slot_zero() {
    let mut log = packet_log(10);
    assert!(log.commit(10, packet(1)));
    assert!(log.commit(11, packet(2)));
    assert_eq!(log.contiguous_size(), 2);
    assert_eq!(log.watermark(), 12);
    assert_eq!(log.read(10), Some(&packet(1)));
    assert_eq!(log.read(11), Some(&packet(2)));
    assert_eq!(log.read(9), None);
    assert_eq!(log.read(0), None);
}

#[test]
fn below_offset_commit_is_rejected_without_state_change() {
    let mut log = packet_log(5);
    assert!(log.commit(2, packet(1)));
    assert!(log.is_empty());
    assert_eq!(log.contiguous_size(), 0);

    let err = log.try_commit(4, packet(1)).unwrap_err();
    assert!(matches!(
        err,
        CapacitorError::FrameBelowOffset {
            frame: 4,
            frame_offset: 5
        }
    ));
    assert_eq!(err.error_code(), "FRAME_BELOW_OFFSET");
    assert!(log.is_empty());
}

#[test]
fn clamp_policy_overwrites_the_first_slot() {
    let mut log = packet_log(5).with_below_offset(BelowOffsetPolicy::Clamp);
    assert!(log.commit(5, packet(1)));
    assert!(!log.commit(0, packet(2)));
    assert_eq!(log.read(5), Some(&packet(2)));
    assert_eq!(log.read(0), None);
}

#[test]
fn cache_tracks_last_load_including_misses() {
    let mut log = packet_log(0);
    log.commit(0, packet(4));
    assert!(log.load_cache(0));
    assert_eq!(log.cache(), Some(&packet(4)));

    assert!(!log.load_cache(1));
    assert_eq!(log.cache(), None);
}

#[test]
fn read_does_not_touch_the_cache() {
    let mut log = packet_log(0);
    log.commit(0, packet(4));
    assert_eq!(log.read(0), Some(&packet(4)));
    assert_eq!(log.cache(), None);
}

#[test]
fn default_interpolator_produces_nothing() {
    let mut log = packet_log(0);
    log.commit(0, packet(1));
    log.commit(2, packet(3));
    assert_eq!(log.interpolate(1), None);
}

#[test]
fn hold_previous_repeats_the_nearest_earlier_commit() {
    let mut log = packet_log(0).with_interpolator(Arc::new(HoldPrevious));
    log.commit(0, packet(1));
    log.commit(3, packet(4));
    assert_eq!(log.interpolate(1), Some(packet(1)));
    assert_eq!(log.interpolate(2), Some(packet(1)));
    assert_eq!(log.interpolate(9), Some(packet(4)));
    // Interpolation never leaks into read.
    assert_eq!(log.read(1), None);
}

#[test]
fn large_sparse_frame_grows_the_log() {
    let mut log = packet_log(0);
    assert!(log.commit(1_000, packet(1)));
    assert_eq!(log.len(), 1_001);
    assert_eq!(log.contiguous_size(), 0);
}

#[test]
fn unaddressable_frame_is_rejected_without_state_change() {
    let mut log = packet_log(0);
    assert!(log.commit(u64::MAX, packet(1)));
    assert!(log.is_empty());
    assert_eq!(log.contiguous_size(), 0);

    let err = log.try_commit(u64::MAX, packet(1)).unwrap_err();
    assert!(matches!(
        err,
        CapacitorError::FrameOutOfRange {
            frame: u64::MAX,
            frame_offset: 0
        }
    ));
    assert_eq!(err.error_code(), "FRAME_OUT_OF_RANGE");
}

#[test]
fn watermark_saturates_at_the_top_of_the_timeline() {
    let mut log = packet_log(u64::MAX);
    assert!(log.commit(u64::MAX, packet(1)));
    assert_eq!(log.contiguous_size(), 1);
    assert_eq!(log.read(u64::MAX), Some(&packet(1)));
    assert_eq!(log.watermark(), u64::MAX);
}
