//! Frame stepping primitives.
//!
//! Animations never schedule themselves. The host calls `tick` once per frame
//! and each call advances the running stepper by exactly one frame, so tests can
//! drive an animation deterministically by ticking N times.

/// Nominal frame budget assumed by every step, in milliseconds.
///
/// Steps do not measure real elapsed time: on a 120 Hz display animations run
/// twice as fast as on a 60 Hz one.
pub const FRAME_BUDGET_MS: f32 = 16.0;

/// Result of advancing an animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome<T> {
    /// The animation wants another frame.
    Continue,
    /// The animation finished with nothing left to do.
    Stop,
    /// The animation finished and the owner must run the follow-up `T`.
    StopThenInvoke(T),
}

impl<T> StepOutcome<T> {
    pub fn is_continue(&self) -> bool {
        matches!(self, StepOutcome::Continue)
    }

    pub fn is_finished(&self) -> bool {
        !self.is_continue()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StepOutcome<U> {
        match self {
            StepOutcome::Continue => StepOutcome::Continue,
            StepOutcome::Stop => StepOutcome::Stop,
            StepOutcome::StopThenInvoke(follow) => StepOutcome::StopThenInvoke(f(follow)),
        }
    }
}

/// A position the animation loops move.
///
/// Scroll axes implement this over their own offset so the loops stay free of
/// boundary bookkeeping.
pub trait MotionTarget {
    /// Current position.
    fn position(&self) -> f32;

    /// Stores an intermediate position, rounded to a whole pixel.
    fn place(&mut self, position: f32);

    /// Stores a final position exactly.
    fn snap(&mut self, position: f32);

    /// Adds a raw delta without boundary classification, rounded.
    fn shift(&mut self, delta: f32);

    /// Scrolls by a delta with boundary classification and resistance.
    fn scroll_by(&mut self, delta: f32);

    /// Whether the last scroll pushed the position past a boundary.
    fn is_overscrolled(&self) -> bool;

    /// Resists a delta according to the current overscroll depth.
    fn resist(&self, delta: f32) -> f32;
}

/// One frame-driven animation moving a `T`.
pub trait Stepper<T: ?Sized> {
    type Follow;

    fn step(&mut self, target: &mut T) -> StepOutcome<Self::Follow>;
}

/// Runs at most one stepper with cooperative cancellation.
///
/// `pause` only raises a flag; the running stepper is dropped at the top of
/// the next `tick`, so a frame already in progress keeps its effects.
#[derive(Debug)]
pub struct EasingLoop<S> {
    stepper: Option<S>,
    paused: bool,
    frames: u64,
}

impl<S> Default for EasingLoop<S> {
    fn default() -> Self {
        Self {
            stepper: None,
            paused: false,
            frames: 0,
        }
    }
}

impl<S> EasingLoop<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any running stepper and clears the paused flag.
    pub fn start(&mut self, stepper: S) {
        self.stepper = Some(stepper);
        self.paused = false;
        self.frames = 0;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drops the running stepper immediately.
    pub fn cancel(&mut self) {
        self.stepper = None;
    }

    pub fn is_running(&self) -> bool {
        self.stepper.is_some()
    }

    pub fn current(&self) -> Option<&S> {
        self.stepper.as_ref()
    }

    /// Frames stepped since the last `start`.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances by one frame.
    pub fn tick<T>(&mut self, target: &mut T) -> StepOutcome<<S as Stepper<T>>::Follow>
    where
        T: ?Sized,
        S: Stepper<T>,
    {
        if self.paused {
            if self.stepper.take().is_some() {
                log::trace!("easing loop paused after {} frames", self.frames);
            }
            return StepOutcome::Stop;
        }
        let Some(stepper) = self.stepper.as_mut() else {
            return StepOutcome::Stop;
        };
        self.frames += 1;
        let outcome = stepper.step(target);
        if outcome.is_finished() {
            self.stepper = None;
        }
        outcome
    }

    /// Ticks until the stepper finishes or `max_frames` elapse.
    ///
    /// Returns the final outcome, `Continue` if the budget ran out.
    pub fn run<T>(
        &mut self,
        target: &mut T,
        max_frames: usize,
    ) -> StepOutcome<<S as Stepper<T>>::Follow>
    where
        T: ?Sized,
        S: Stepper<T>,
    {
        for _ in 0..max_frames {
            let outcome = self.tick(target);
            if outcome.is_finished() {
                return outcome;
            }
        }
        StepOutcome::Continue
    }
}
