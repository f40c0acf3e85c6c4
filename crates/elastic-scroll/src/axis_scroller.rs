//! Per-axis scroll physics.
//!
//! An [`AxisScroller`] owns one dimension's offset and boundary state. Pointer
//! drags feed it deltas through [`AxisScroller::scroll`]; once released it
//! either flings, bounces back from an overscroll, or comes to rest. All motion
//! after release is advanced by [`AxisScroller::step`], one frame per call.
//!
//! Offsets follow the content translation convention: 0 shows the start of the
//! content and `-max_scroll_distance` shows its far end.

use crate::callbacks::{BounceResume, BounceStatus, ResumeRequest, ScrollCallbacks};
use crate::config::ScrollConfig;
use crate::resist::{Boundary, ResistContext};
use elastic_animation::{
    EasingLoop, ExponentialEasing, InertiaDecay, MotionTarget, OverscrollCoast, StepOutcome,
    Stepper,
};
use elastic_foundation::gesture_constants::MIN_GESTURE_ELAPSED_MS;
use elastic_foundation::Axis;

/// What an axis is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPhase {
    Idle,
    Dragging,
    /// Past a boundary and retracting, or parked waiting for a resume.
    Bouncing,
    /// Decelerating after a flick, including any coast past a boundary.
    Inertia,
    /// Easing toward a `scroll_to` target.
    EasingToTarget,
}

/// Follow-up an axis performed when a motion finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisEvent {
    /// Motion ended with the offset inside its legal range.
    Settled,
    /// The offset ended past a boundary and a bounce began.
    BounceStarted,
    /// A bounce eased to a resume offset and waits for another resume.
    Parked,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EasePurpose {
    ScrollTo,
    Retract { to_boundary: bool },
}

#[derive(Debug)]
enum Motion {
    Inertia(InertiaDecay),
    Coast(OverscrollCoast),
    Ease {
        easing: ExponentialEasing,
        purpose: EasePurpose,
    },
}

enum MotionFollow {
    Overscrolled(f32),
    CoastExhausted,
    Arrived(EasePurpose),
}

impl Stepper<AxisCore> for Motion {
    type Follow = MotionFollow;

    fn step(&mut self, core: &mut AxisCore) -> StepOutcome<MotionFollow> {
        match self {
            Motion::Inertia(inertia) => Stepper::<AxisCore>::step(inertia, core)
                .map(|overscrolled| MotionFollow::Overscrolled(overscrolled.delta)),
            Motion::Coast(coast) => {
                Stepper::<AxisCore>::step(coast, core).map(|_| MotionFollow::CoastExhausted)
            }
            Motion::Ease { easing, purpose } => {
                let outcome = Stepper::<AxisCore>::step(easing, core);
                if *purpose == EasePurpose::ScrollTo {
                    core.reclassify();
                    if !core.boundary.is_overscrolled() {
                        core.notify_scroll();
                    }
                }
                match outcome {
                    StepOutcome::Continue => StepOutcome::Continue,
                    _ => StepOutcome::StopThenInvoke(MotionFollow::Arrived(*purpose)),
                }
            }
        }
    }
}

/// Offset and range bookkeeping the animation loops move.
#[derive(Debug)]
struct AxisCore {
    axis: Axis,
    offset: f32,
    viewport_length: f32,
    content_length: f32,
    max_scroll_distance: f32,
    boundary: Boundary,
    scrollable: bool,
    scrollable_override: Option<bool>,
    scrolling: bool,
    config: ScrollConfig,
    callbacks: ScrollCallbacks,
}

impl AxisCore {
    fn resist_context(&self) -> ResistContext {
        ResistContext {
            boundary: self.boundary,
            offset: self.offset,
            viewport_length: self.viewport_length,
            content_length: self.content_length,
            coefficient: self.config.resist_coefficient,
        }
    }

    fn scroll(&mut self, delta: f32) {
        if !self.scrollable || delta == 0.0 || !delta.is_finite() {
            return;
        }
        self.scrolling = true;
        self.boundary = Boundary::classify(self.offset + delta, self.max_scroll_distance);
        let applied = if self.boundary.is_overscrolled() {
            self.resist(delta)
        } else {
            delta
        };
        if applied.is_finite() {
            self.offset += applied.round();
        }
        log::trace!(
            "{} axis scroll {delta} -> {} ({:?})",
            self.axis,
            self.offset,
            self.boundary
        );
        if !self.boundary.is_overscrolled() {
            self.notify_scroll();
        }
    }

    fn notify_scroll(&self) {
        if let Some(on_scroll) = &self.callbacks.on_scroll {
            on_scroll(self.offset, self.axis);
        }
    }

    fn reclassify(&mut self) {
        self.boundary = Boundary::classify(self.offset, self.max_scroll_distance);
    }

    fn in_legal_range(&self) -> bool {
        self.offset <= 0.0 && self.offset >= -self.max_scroll_distance
    }

    fn is_to_bounce(&self) -> bool {
        match self.boundary {
            Boundary::Start => self.offset > 0.0,
            Boundary::InRange => false,
            Boundary::End => self.offset < -self.max_scroll_distance,
        }
    }

    /// Offset a bounce retracts to.
    fn rest_offset(&self) -> f32 {
        self.boundary
            .rest_offset(self.max_scroll_distance)
            .unwrap_or_else(|| self.offset.clamp(-self.max_scroll_distance, 0.0))
    }

    fn easing_to(&self, target: f32) -> ExponentialEasing {
        ExponentialEasing::new(self.offset, target)
            .with_curve(self.config.scroll_curve)
            .with_min_delta_to_stop(self.config.min_delta_to_stop)
    }
}

impl MotionTarget for AxisCore {
    fn position(&self) -> f32 {
        self.offset
    }

    fn place(&mut self, position: f32) {
        self.offset = position.round();
    }

    fn snap(&mut self, position: f32) {
        self.offset = position;
    }

    fn shift(&mut self, delta: f32) {
        if delta.is_finite() {
            self.offset += delta.round();
        }
    }

    fn scroll_by(&mut self, delta: f32) {
        self.scroll(delta);
    }

    fn is_overscrolled(&self) -> bool {
        self.boundary.is_overscrolled()
    }

    fn resist(&self, delta: f32) -> f32 {
        (self.config.bounce_resist)(delta, &self.resist_context())
    }
}

/// Scroll physics for a single axis.
#[derive(Debug)]
pub struct AxisScroller {
    core: AxisCore,
    motion: EasingLoop<Motion>,
    bounce: Option<BounceResume>,
    dragging: bool,
}

impl AxisScroller {
    /// Creates an axis at offset 0 with no content.
    pub fn new(axis: Axis, config: ScrollConfig, callbacks: ScrollCallbacks) -> Self {
        Self {
            core: AxisCore {
                axis,
                offset: 0.0,
                viewport_length: 0.0,
                content_length: 0.0,
                max_scroll_distance: 0.0,
                boundary: Boundary::InRange,
                scrollable: false,
                scrollable_override: None,
                scrolling: false,
                config: config.sanitized(),
                callbacks,
            },
            motion: EasingLoop::new(),
            bounce: None,
            dragging: false,
        }
    }

    pub fn axis(&self) -> Axis {
        self.core.axis
    }

    pub fn offset(&self) -> f32 {
        self.core.offset
    }

    pub fn max_scroll_distance(&self) -> f32 {
        self.core.max_scroll_distance
    }

    pub fn viewport_length(&self) -> f32 {
        self.core.viewport_length
    }

    pub fn content_length(&self) -> f32 {
        self.core.content_length
    }

    pub fn boundary(&self) -> Boundary {
        self.core.boundary
    }

    /// True from the first drag delta until motion comes to rest.
    pub fn is_scrolling(&self) -> bool {
        self.core.scrolling
    }

    pub fn is_scrollable(&self) -> bool {
        self.core.scrollable
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Past a boundary and not yet back inside the legal range.
    pub fn is_to_bounce(&self) -> bool {
        self.core.is_to_bounce()
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.core.config
    }

    /// Whether another `step` would do anything.
    pub fn is_animating(&self) -> bool {
        (self.motion.is_running() && !self.motion.is_paused())
            || self.bounce.as_ref().is_some_and(BounceResume::is_pending)
    }

    /// Bouncing with no motion, waiting for the resume handle.
    pub fn is_parked(&self) -> bool {
        self.bounce.is_some() && !self.motion.is_running()
    }

    pub fn phase(&self) -> AxisPhase {
        if self.dragging {
            return AxisPhase::Dragging;
        }
        match self.motion.current() {
            Some(Motion::Inertia(_)) | Some(Motion::Coast(_)) => AxisPhase::Inertia,
            Some(Motion::Ease {
                purpose: EasePurpose::ScrollTo,
                ..
            }) => AxisPhase::EasingToTarget,
            Some(Motion::Ease {
                purpose: EasePurpose::Retract { .. },
                ..
            }) => AxisPhase::Bouncing,
            None if self.bounce.is_some() => AxisPhase::Bouncing,
            None => AxisPhase::Idle,
        }
    }

    /// Updates the viewport and content lengths along this axis.
    ///
    /// An idle axis left outside the new range is moved back onto its edge,
    /// and a bounce retracting to a boundary is re-aimed at the new edge.
    pub fn set_lengths(&mut self, viewport_length: f32, content_length: f32) {
        let viewport_length = non_negative(viewport_length);
        let content_length = non_negative(content_length);
        let core = &mut self.core;
        core.viewport_length = viewport_length;
        core.content_length = content_length;
        core.max_scroll_distance = (content_length - viewport_length).max(0.0);
        core.scrollable = core
            .scrollable_override
            .unwrap_or(content_length > viewport_length);
        log::debug!(
            "{} axis range: viewport {viewport_length}, content {content_length}, max {}, scrollable {}",
            core.axis,
            core.max_scroll_distance,
            core.scrollable
        );
        match self.phase() {
            AxisPhase::Idle => {
                if !self.core.in_legal_range() {
                    let clamped = self.core.rest_offset();
                    self.core.snap(clamped);
                }
                self.core.reclassify();
            }
            AxisPhase::Bouncing => self.retarget_retract(),
            _ => {}
        }
    }

    /// Forces scrollability on or off; `None` derives it from the lengths.
    pub fn set_scrollable(&mut self, scrollable: Option<bool>) {
        let core = &mut self.core;
        core.scrollable_override = scrollable;
        core.scrollable = scrollable.unwrap_or(core.content_length > core.viewport_length);
    }

    /// Applies one drag delta, resisted if it moves past a boundary.
    pub fn scroll(&mut self, delta: f32) {
        self.core.scroll(delta);
    }

    /// Raises the paused flag so the running motion ends at its next step.
    pub fn pause(&mut self) {
        self.motion.pause();
    }

    /// A pointer went down: interrupt motion and follow the finger.
    ///
    /// A bounce waiting on its resume handle is abandoned; the handle becomes
    /// inert.
    pub fn begin_drag(&mut self) {
        self.pause();
        self.dragging = true;
        if self.bounce.take().is_some() {
            log::debug!("{} axis bounce taken over by a new drag", self.core.axis);
        }
    }

    /// The last pointer lifted.
    ///
    /// `displacement` is the total travel along this axis over the gesture.
    pub fn end_drag(&mut self, elapsed_ms: f64, displacement: f32) -> AxisPhase {
        self.dragging = false;
        self.motion.cancel();
        self.motion.unpause();
        // the range may have changed under the finger
        self.core.reclassify();
        if self.core.is_to_bounce() {
            self.bounce_back();
        } else {
            self.core.boundary = Boundary::InRange;
            let quick = elapsed_ms < self.core.config.time_for_end_scroll;
            if quick && displacement != 0.0 && displacement.is_finite() {
                let elapsed = elapsed_ms.max(MIN_GESTURE_ELAPSED_MS);
                self.inertia_scroll((f64::from(displacement) / elapsed) as f32);
            } else {
                self.core.scrolling = false;
            }
        }
        self.phase()
    }

    /// Starts a decelerating fling at `speed` (offset units per millisecond).
    pub fn inertia_scroll(&mut self, speed: f32) {
        if !speed.is_finite() || !self.core.scrollable {
            self.core.scrolling = false;
            return;
        }
        log::debug!("{} axis inertia at {speed} px/ms", self.core.axis);
        self.core.scrolling = true;
        let inertia = InertiaDecay::new(speed).with_decay(self.core.config.speed_decay);
        self.motion.start(Motion::Inertia(inertia));
    }

    /// Ends an overscroll, consulting the bounce handler if there is one.
    ///
    /// Without a handler the axis retracts to the boundary right away.
    pub fn bounce_back(&mut self) -> AxisEvent {
        let resume = BounceResume::new(self.core.axis);
        self.bounce = Some(resume.clone());
        self.core.scrolling = true;
        let status = BounceStatus {
            axis: self.core.axis,
            sign: self.core.boundary.sign(),
        };
        log::debug!(
            "{} axis bouncing at {} (sign {})",
            self.core.axis,
            self.core.offset,
            status.sign
        );
        match self.core.callbacks.on_bounce.clone() {
            Some(on_bounce) => on_bounce(self.core.offset, resume, status),
            None => resume.resume(),
        }
        self.poll_resume();
        AxisEvent::BounceStarted
    }

    /// Resumes the current bounce; `None` retracts to the boundary.
    ///
    /// Returns false when there is no bounce to resume.
    pub fn resume(&mut self, offset: Option<f32>) -> bool {
        let Some(handle) = self.bounce.clone() else {
            log::debug!("{} axis has no bounce to resume", self.core.axis);
            return false;
        };
        handle.resume_with(offset);
        self.poll_resume();
        true
    }

    /// Scrolls so that `position` is at the start of the viewport.
    ///
    /// Animated scrolls only run on scrollable axes and bounce back if they
    /// settle past a boundary. Immediate placement is exact and unconditional.
    pub fn scroll_to(&mut self, position: f32, animate: bool) {
        if !position.is_finite() {
            log::warn!("{} axis ignoring scroll to {position}", self.core.axis);
            return;
        }
        let target = -position;
        if !animate {
            self.motion.cancel();
            self.bounce = None;
            self.core.snap(target);
            self.core.reclassify();
            self.core.scrolling = false;
            return;
        }
        if !self.core.scrollable || self.core.offset == target {
            return;
        }
        self.bounce = None;
        self.core.scrolling = true;
        let easing = self.core.easing_to(target);
        self.motion.start(Motion::Ease {
            easing,
            purpose: EasePurpose::ScrollTo,
        });
    }

    /// Stops all motion immediately, abandoning any bounce.
    pub fn halt(&mut self) {
        self.motion.cancel();
        self.motion.unpause();
        self.bounce = None;
        self.dragging = false;
        self.core.scrolling = false;
    }

    /// Advances the running motion by one frame.
    ///
    /// `StopThenInvoke` reports the follow-up the axis already carried out.
    pub fn step(&mut self) -> StepOutcome<AxisEvent> {
        if self.motion.is_paused() {
            // a drag took over; the interrupted motion ends without effects
            self.motion.cancel();
            return StepOutcome::Stop;
        }
        self.poll_resume();
        if !self.motion.is_running() {
            return StepOutcome::Stop;
        }
        match self.motion.tick(&mut self.core) {
            StepOutcome::Continue => StepOutcome::Continue,
            StepOutcome::Stop => {
                self.core.reclassify();
                if self.core.is_to_bounce() {
                    return StepOutcome::StopThenInvoke(self.bounce_back());
                }
                log::debug!(
                    "{} axis inertia settled at {}",
                    self.core.axis,
                    self.core.offset
                );
                self.core.scrolling = false;
                StepOutcome::StopThenInvoke(AxisEvent::Settled)
            }
            StepOutcome::StopThenInvoke(follow) => self.follow_up(follow),
        }
    }

    fn follow_up(&mut self, follow: MotionFollow) -> StepOutcome<AxisEvent> {
        match follow {
            MotionFollow::Overscrolled(delta) => {
                log::debug!("{} axis coasting past boundary", self.core.axis);
                let coast = OverscrollCoast::new(delta, self.core.config.min_delta_to_stop);
                self.motion.start(Motion::Coast(coast));
                StepOutcome::Continue
            }
            MotionFollow::CoastExhausted => StepOutcome::StopThenInvoke(self.bounce_back()),
            MotionFollow::Arrived(EasePurpose::ScrollTo) => {
                if self.core.boundary.is_overscrolled() {
                    StepOutcome::StopThenInvoke(self.bounce_back())
                } else {
                    self.core.scrolling = false;
                    StepOutcome::StopThenInvoke(AxisEvent::Settled)
                }
            }
            MotionFollow::Arrived(EasePurpose::Retract { to_boundary }) => {
                StepOutcome::StopThenInvoke(self.finish_retract(to_boundary))
            }
        }
    }

    fn poll_resume(&mut self) {
        let Some(request) = self.bounce.as_ref().and_then(BounceResume::take) else {
            return;
        };
        let rest = self.core.rest_offset();
        let (target, to_boundary) = match request {
            ResumeRequest::Boundary if self.core.in_legal_range() => {
                // the range grew under the overscroll while parked
                self.finish_retract(true);
                return;
            }
            ResumeRequest::Boundary => (rest, true),
            ResumeRequest::Offset(offset) => (offset, offset == rest),
        };
        if self.core.offset == target {
            self.finish_retract(to_boundary);
            return;
        }
        log::debug!(
            "{} axis retracting {} -> {target}",
            self.core.axis,
            self.core.offset
        );
        self.core.scrolling = true;
        let easing = self.core.easing_to(target);
        self.motion.start(Motion::Ease {
            easing,
            purpose: EasePurpose::Retract { to_boundary },
        });
    }

    fn retarget_retract(&mut self) {
        let Some(Motion::Ease {
            purpose: EasePurpose::Retract { to_boundary: true },
            ..
        }) = self.motion.current()
        else {
            return;
        };
        if self.core.in_legal_range() {
            self.motion.cancel();
            self.finish_retract(true);
            return;
        }
        let rest = self.core.rest_offset();
        log::debug!(
            "{} axis range changed mid-retract, retracting to {rest}",
            self.core.axis
        );
        let easing = self.core.easing_to(rest);
        self.motion.start(Motion::Ease {
            easing,
            purpose: EasePurpose::Retract { to_boundary: true },
        });
    }

    fn finish_retract(&mut self, to_boundary: bool) -> AxisEvent {
        if to_boundary {
            self.core.boundary = Boundary::InRange;
            self.core.scrolling = false;
            self.bounce = None;
            log::debug!("{} axis bounce finished", self.core.axis);
            AxisEvent::Settled
        } else {
            log::debug!(
                "{} axis parked at {} awaiting resume",
                self.core.axis,
                self.core.offset
            );
            AxisEvent::Parked
        }
    }
}

fn non_negative(length: f32) -> f32 {
    if length.is_finite() {
        length.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "tests/axis_scroller_tests.rs"]
mod tests;
