//! Rubber-band scroll physics
//!
//! Follows the pointer while dragging, resists motion past either edge of
//! the content, flings with decaying inertia after a quick release and eases
//! back to the edge once an overscroll ends. Everything is frame-driven: the
//! host forwards pointer samples and calls [`Scroller::on_frame`] each display
//! frame.

mod axis_scroller;
mod callbacks;
mod config;
mod options;
pub mod resist;
mod scroller;
mod surface;

pub use axis_scroller::{AxisEvent, AxisPhase, AxisScroller};
pub use callbacks::{BounceResume, BounceStatus, OnBounce, OnScroll, ResumeRequest, ScrollCallbacks};
pub use config::{AxisMode, AxisModeParseError, BounceResist, ScrollConfig};
pub use options::{ScrollerOptions, DEFAULT_VIEWPORT_LENGTH};
pub use resist::{default_bounce_resist, Boundary, ResistContext};
pub use scroller::{ScrollPosition, Scroller};
pub use surface::{Layer, ScrollSurface};

pub use elastic_animation::StepOutcome;
pub use elastic_foundation::{
    Axis, PerAxis, Point, PointSample, PointerClock, PointerId, PointerPhase, Rect, Size,
};

pub mod prelude {
    pub use crate::{
        Axis, AxisMode, BounceResume, BounceStatus, Layer, PointSample, PointerPhase,
        ScrollConfig, ScrollPosition, ScrollSurface, Scroller, ScrollerOptions,
    };
}
