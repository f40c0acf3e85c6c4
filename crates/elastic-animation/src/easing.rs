//! Exponential ease toward a fixed target.

use crate::step::{MotionTarget, StepOutcome, Stepper};

/// Default divisor applied to the remaining distance each frame.
pub const DEFAULT_SCROLL_CURVE: f32 = 7.0;

/// Default distance below which an ease snaps onto its target.
pub const DEFAULT_MIN_DELTA_TO_STOP: f32 = 0.3;

/// Advances `current` by a fixed fraction of the remaining distance.
pub fn ease_toward(current: f32, target: f32, curve: f32) -> f32 {
    current + (target - current) / curve
}

/// Eases a position toward `target`, covering `1 / curve` of the remaining
/// distance per frame.
///
/// The convergence is not time-corrected. Once within `min_delta_to_stop` of
/// the target the position is snapped exactly and the ease stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialEasing {
    current: f32,
    target: f32,
    curve: f32,
    min_delta_to_stop: f32,
}

impl ExponentialEasing {
    pub fn new(from: f32, target: f32) -> Self {
        Self {
            current: from,
            target,
            curve: DEFAULT_SCROLL_CURVE,
            min_delta_to_stop: DEFAULT_MIN_DELTA_TO_STOP,
        }
    }

    pub fn with_curve(mut self, curve: f32) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_min_delta_to_stop(mut self, min_delta_to_stop: f32) -> Self {
        self.min_delta_to_stop = min_delta_to_stop;
        self
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Unrounded position tracked between frames.
    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn is_at_target(&self) -> bool {
        (self.current - self.target).abs() < self.min_delta_to_stop
    }
}

impl<T: MotionTarget + ?Sized> Stepper<T> for ExponentialEasing {
    type Follow = ();

    fn step(&mut self, target: &mut T) -> StepOutcome<()> {
        self.current = ease_toward(self.current, self.target, self.curve);
        if self.is_at_target() {
            self.current = self.target;
            target.snap(self.target);
            return StepOutcome::Stop;
        }
        target.place(self.current);
        StepOutcome::Continue
    }
}
