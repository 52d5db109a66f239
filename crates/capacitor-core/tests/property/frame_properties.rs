use capacitor_core::models::frame::internal_index;
use capacitor_core::models::ProducerId;
use proptest::prelude::*;

// ── Frame to slot mapping ────────────────────────────────────────────────

proptest! {
    #[test]
    fn internal_index_is_offset_difference(frame in any::<u64>(), offset in any::<u64>()) {
        let index = internal_index(frame, offset);
        if frame >= offset {
            prop_assert_eq!(index.map(|i| i as u64), Some(frame - offset));
        } else {
            prop_assert_eq!(index, None);
        }
    }

    #[test]
    fn offset_frame_is_slot_zero(offset in any::<u64>()) {
        prop_assert_eq!(internal_index(offset, offset), Some(0));
    }

    #[test]
    fn producer_ids_increase(raw in 0u64..u64::MAX) {
        let id = ProducerId(raw);
        prop_assert!(id.next() > id);
        prop_assert_eq!(id.next().get(), raw + 1);
    }
}
