//! Frame indices on the shared timeline.

/// An external frame index. Frames are discrete and monotonically increasing;
/// each producer maps them onto its own slots via its frame offset.
pub type Frame = u64;

/// Map an external frame onto a producer's internal slot index.
///
/// Returns `None` when `frame` lies below `frame_offset`.
///
/// # Examples
///
/// ```
/// use capacitor_core::models::frame::internal_index;
///
/// assert_eq!(internal_index(7, 5), Some(2));
/// assert_eq!(internal_index(4, 5), None);
/// ```
pub fn internal_index(frame: Frame, frame_offset: Frame) -> Option<usize> {
    frame
        .checked_sub(frame_offset)
        .and_then(|index| usize::try_from(index).ok())
}
