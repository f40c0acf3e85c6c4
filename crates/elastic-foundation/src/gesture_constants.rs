//! Shared gesture constants for drag release handling.
//!
//! These values are in logical pixels and milliseconds. They are defaults; the
//! scroll configuration can override the release window per scroller.

/// Longest gesture (press to release) that still counts as a flick.
///
/// Releases that took longer than this end without inertia: the user was
/// dragging deliberately rather than throwing the content.
pub const TIME_FOR_END_SCROLL_MS: f64 = 300.0;

/// Shortest elapsed time used when converting a release into a speed.
///
/// Press and release can share a timestamp on coarse clocks, which would
/// otherwise produce an infinite speed.
pub const MIN_GESTURE_ELAPSED_MS: f64 = 1.0;
