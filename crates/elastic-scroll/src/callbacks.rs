//! Host callbacks and the bounce resume handle.

use elastic_foundation::Axis;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Called with the new offset after every in-range scroll step.
pub type OnScroll = Rc<dyn Fn(f32, Axis)>;

/// Called once an axis starts bouncing back from an overscroll.
///
/// The axis does not retract until the handle is resumed.
pub type OnBounce = Rc<dyn Fn(f32, BounceResume, BounceStatus)>;

#[derive(Clone, Default)]
pub struct ScrollCallbacks {
    pub on_scroll: Option<OnScroll>,
    pub on_bounce: Option<OnBounce>,
}

impl fmt::Debug for ScrollCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollCallbacks")
            .field("on_scroll", &self.on_scroll.is_some())
            .field("on_bounce", &self.on_bounce.is_some())
            .finish()
    }
}

/// Which boundary an axis is bouncing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceStatus {
    pub axis: Axis,
    /// -1 past the start, +1 past the far end.
    pub sign: i8,
}

impl BounceStatus {
    pub fn is_past_start(&self) -> bool {
        self.sign < 0
    }

    pub fn is_past_end(&self) -> bool {
        self.sign > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResumeRequest {
    /// Retract to the boundary that was crossed.
    Boundary,
    /// Ease to an explicit offset and stay parked there.
    Offset(f32),
}

/// Completes a bounce started by [`OnBounce`].
///
/// The handle can be cloned and kept past the callback; the axis picks up the
/// request on its next frame. Handles from a bounce that a new gesture took
/// over are ignored.
#[derive(Clone)]
pub struct BounceResume {
    axis: Axis,
    slot: Rc<Cell<Option<ResumeRequest>>>,
}

impl BounceResume {
    pub(crate) fn new(axis: Axis) -> Self {
        Self {
            axis,
            slot: Rc::new(Cell::new(None)),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Eases back to the crossed boundary and ends the bounce.
    pub fn resume(&self) {
        self.slot.set(Some(ResumeRequest::Boundary));
    }

    /// Eases to `offset` instead of the boundary.
    ///
    /// Unless `offset` is the boundary itself the axis stays bouncing and
    /// parked there until resumed again. Non-finite offsets resume to the
    /// boundary.
    pub fn resume_to(&self, offset: f32) {
        if offset.is_finite() {
            self.slot.set(Some(ResumeRequest::Offset(offset)));
        } else {
            self.resume();
        }
    }

    pub fn resume_with(&self, offset: Option<f32>) {
        match offset {
            Some(offset) => self.resume_to(offset),
            None => self.resume(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.get().is_some()
    }

    pub(crate) fn take(&self) -> Option<ResumeRequest> {
        self.slot.take()
    }
}

impl fmt::Debug for BounceResume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BounceResume")
            .field("axis", &self.axis)
            .field("pending", &self.slot.get())
            .finish()
    }
}
