//! Post-release inertia and overscroll coasting.

use crate::step::{MotionTarget, StepOutcome, Stepper, FRAME_BUDGET_MS};

/// Default fraction of speed removed per inertia frame.
pub const DEFAULT_SPEED_DECAY: f32 = 0.02;

/// Per-frame deltas at or below this magnitude end the inertia.
pub const MIN_INERTIA_DELTA: f32 = 1.0;

/// Removes `decay` of `speed`.
pub fn decay_speed(speed: f32, decay: f32) -> f32 {
    speed - speed * decay
}

/// Distance covered in one frame at `speed` (position per millisecond).
pub fn frame_delta(speed: f32) -> f32 {
    speed * FRAME_BUDGET_MS
}

/// Inertia ran into a boundary; the owner should coast with `delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overscrolled {
    pub delta: f32,
}

/// Decelerating scroll after a flick.
///
/// Each frame scrolls by `speed * 16` and then decays the speed. The loop ends
/// once the frame delta drops to one pixel or less, or hands over to an
/// [`OverscrollCoast`] when a frame crosses a boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaDecay {
    speed: f32,
    decay: f32,
    last_delta: f32,
}

impl InertiaDecay {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            decay: DEFAULT_SPEED_DECAY,
            last_delta: 0.0,
        }
    }

    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Delta applied by the most recent frame.
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }
}

impl<T: MotionTarget + ?Sized> Stepper<T> for InertiaDecay {
    type Follow = Overscrolled;

    fn step(&mut self, target: &mut T) -> StepOutcome<Overscrolled> {
        let delta = frame_delta(self.speed);
        if !delta.is_finite() || delta.abs() <= MIN_INERTIA_DELTA {
            return StepOutcome::Stop;
        }
        self.last_delta = delta;
        target.scroll_by(delta);
        if target.is_overscrolled() {
            return StepOutcome::StopThenInvoke(Overscrolled { delta });
        }
        self.speed = decay_speed(self.speed, self.decay);
        StepOutcome::Continue
    }
}

/// The coast ran out of momentum; the owner should bounce back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoastExhausted;

/// Momentum carried past a boundary after inertia.
///
/// Each frame adds the remaining delta directly and re-resists it, so the
/// travel shrinks geometrically until it falls under `min_delta_to_stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverscrollCoast {
    delta: f32,
    min_delta_to_stop: f32,
}

impl OverscrollCoast {
    pub fn new(delta: f32, min_delta_to_stop: f32) -> Self {
        Self {
            delta,
            min_delta_to_stop,
        }
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

impl<T: MotionTarget + ?Sized> Stepper<T> for OverscrollCoast {
    type Follow = CoastExhausted;

    fn step(&mut self, target: &mut T) -> StepOutcome<CoastExhausted> {
        target.shift(self.delta);
        self.delta = target.resist(self.delta);
        if !self.delta.is_finite() || self.delta.abs() < self.min_delta_to_stop {
            return StepOutcome::StopThenInvoke(CoastExhausted);
        }
        StepOutcome::Continue
    }
}
