//! Boundary classification and overscroll resistance.
//!
//! Resistance functions are pure: everything they depend on travels in a
//! [`ResistContext`], so they can be exercised without a scroller.

/// Rate applied to a delta right at the boundary.
pub const BASE_RESIST_RATE: f32 = 0.8;

/// Lowest rate a deep overscroll can reach.
pub const MIN_RESIST_RATE: f32 = 0.05;

/// Default rate lost per pixel of overscroll.
pub const DEFAULT_RESIST_COEFFICIENT: f32 = 0.0058;

/// Where an axis offset sits relative to its legal range `[-max, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Boundary {
    /// Pulled past the start of the content (offset > 0).
    Start,
    #[default]
    InRange,
    /// Pushed past the far end of the content (offset < -max).
    End,
}

impl Boundary {
    /// Classifies a prospective offset.
    pub fn classify(offset: f32, max_scroll_distance: f32) -> Boundary {
        if offset > 0.0 {
            Boundary::Start
        } else if offset < -max_scroll_distance {
            Boundary::End
        } else {
            Boundary::InRange
        }
    }

    /// Sign reported to bounce handlers: -1 past the start, +1 past the end.
    pub fn sign(self) -> i8 {
        match self {
            Boundary::Start => -1,
            Boundary::InRange => 0,
            Boundary::End => 1,
        }
    }

    pub fn is_overscrolled(self) -> bool {
        self != Boundary::InRange
    }

    /// The offset a bounce past this boundary retracts to.
    pub fn rest_offset(self, max_scroll_distance: f32) -> Option<f32> {
        match self {
            Boundary::Start => Some(0.0),
            Boundary::InRange => None,
            Boundary::End => Some(-max_scroll_distance),
        }
    }
}

/// Inputs to a resistance function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistContext {
    pub boundary: Boundary,
    pub offset: f32,
    pub viewport_length: f32,
    pub content_length: f32,
    pub coefficient: f32,
}

impl ResistContext {
    /// How far the offset already sits past the active boundary.
    pub fn overscroll(&self) -> f32 {
        match self.boundary {
            Boundary::Start => self.offset.max(0.0),
            Boundary::InRange => 0.0,
            Boundary::End => (self.viewport_length - self.offset - self.content_length).max(0.0),
        }
    }
}

/// Fraction of a delta that survives at the current overscroll depth.
///
/// Content that fits the viewport has no real range, so it damps uniformly by
/// its own length instead of by depth.
pub fn resist_rate(context: &ResistContext) -> f32 {
    if !context.boundary.is_overscrolled() {
        return 1.0;
    }
    let depth = if context.content_length <= context.viewport_length {
        context.content_length
    } else {
        context.overscroll()
    };
    let rate = BASE_RESIST_RATE - context.coefficient * depth;
    if rate.is_nan() {
        return MIN_RESIST_RATE;
    }
    rate.clamp(MIN_RESIST_RATE, BASE_RESIST_RATE)
}

/// Default rubber-band resistance: scales `delta` by [`resist_rate`].
pub fn default_bounce_resist(delta: f32, context: &ResistContext) -> f32 {
    delta * resist_rate(context)
}
