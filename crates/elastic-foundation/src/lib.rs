//! Pointer input and axis primitives for the elastic scroller.

pub mod axis;
pub mod gesture_constants;
pub mod input;

pub use axis::{Axis, PerAxis};
pub use elastic_graphics::{Point, Rect, Size};
pub use input::{
    GestureSummary, PointSample, PointerClock, PointerDelta, PointerId, PointerPhase,
    PointerTracker,
};
