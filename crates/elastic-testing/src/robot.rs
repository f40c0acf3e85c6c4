//! Scripted pointer gestures and frame pumping
//!
//! A [`GestureRobot`] owns a virtual pointer and a virtual clock, so gestures
//! carry deterministic timestamps and tests can pick exactly whether a
//! release counts as a flick.
//!
//! # Example
//!
//! ```
//! use elastic_scroll::{Scroller, ScrollerOptions, ScrollSurface, Axis, Layer, Size};
//! use elastic_testing::{settle, Block, GestureRobot, MemoryContent};
//!
//! let mut content = MemoryContent::new();
//! for block in Block::rows(0, 10, Size::new(180.0, 100.0)) {
//!     content.attach(block, Layer::Scrollable);
//! }
//! let mut scroller = Scroller::new(ScrollerOptions::new(180.0, 280.0), content);
//!
//! let mut robot = GestureRobot::new(90.0, 200.0);
//! robot.drag(&mut scroller, 0.0, -120.0, 6, 600.0);
//! assert_eq!(scroller.offset(Axis::Y), -120.0);
//! assert!(settle(&mut scroller, 600).is_some());
//! ```

use elastic_scroll::{Point, PointSample, PointerId, ScrollSurface, Scroller};

/// Nominal frame interval the robot advances its clock by.
pub const ROBOT_FRAME_MS: f64 = 16.0;

/// Virtual pointer with its own clock.
#[derive(Debug, Clone)]
pub struct GestureRobot {
    id: PointerId,
    position: Point,
    now_ms: f64,
}

impl GestureRobot {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            id: 0,
            position: Point::new(x, y),
            now_ms: 0.0,
        }
    }

    pub fn with_pointer_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn pointer_id(&self) -> PointerId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Lets virtual time pass without input.
    pub fn advance(&mut self, millis: f64) {
        self.now_ms += millis;
    }

    pub fn press<S: ScrollSurface>(&mut self, scroller: &mut Scroller<S>) {
        log::trace!("robot {} press at {:?}", self.id, self.position);
        scroller.on_pointer_start(self.sample());
    }

    /// One move sample, `duration_ms` after the previous sample.
    pub fn move_by<S: ScrollSurface>(
        &mut self,
        scroller: &mut Scroller<S>,
        dx: f32,
        dy: f32,
        duration_ms: f64,
    ) {
        self.position = Point::new(self.position.x + dx, self.position.y + dy);
        self.now_ms += duration_ms;
        scroller.on_pointer_move(self.sample());
    }

    /// Moves by `(dx, dy)` in `steps` evenly spaced samples.
    pub fn move_in_steps<S: ScrollSurface>(
        &mut self,
        scroller: &mut Scroller<S>,
        dx: f32,
        dy: f32,
        steps: u32,
        duration_ms: f64,
    ) {
        let steps = steps.max(1);
        let origin = self.position;
        let started = self.now_ms;
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.position = Point::new(origin.x + dx * fraction, origin.y + dy * fraction);
            self.now_ms = started + duration_ms * f64::from(step) / f64::from(steps);
            scroller.on_pointer_move(self.sample());
        }
    }

    pub fn release<S: ScrollSurface>(&mut self, scroller: &mut Scroller<S>) {
        log::trace!("robot {} release at {:?}", self.id, self.position);
        scroller.on_pointer_end(self.sample());
    }

    pub fn cancel<S: ScrollSurface>(&mut self, scroller: &mut Scroller<S>) {
        scroller.on_pointer_cancel(self.sample());
    }

    /// Press, move and release.
    pub fn drag<S: ScrollSurface>(
        &mut self,
        scroller: &mut Scroller<S>,
        dx: f32,
        dy: f32,
        steps: u32,
        duration_ms: f64,
    ) {
        self.press(scroller);
        self.move_in_steps(scroller, dx, dy, steps, duration_ms);
        self.release(scroller);
    }

    /// A drag fast enough to end in inertia.
    pub fn flick<S: ScrollSurface>(
        &mut self,
        scroller: &mut Scroller<S>,
        dx: f32,
        dy: f32,
        duration_ms: f64,
    ) {
        self.drag(scroller, dx, dy, 4, duration_ms);
    }

    fn sample(&self) -> PointSample {
        PointSample::new(self.id, self.position.x, self.position.y, self.now_ms)
    }
}

/// Runs `frames` frames; returns whether the scroller still wants more.
pub fn pump_frames<S: ScrollSurface>(scroller: &mut Scroller<S>, frames: usize) -> bool {
    let mut animating = scroller.is_animating();
    for _ in 0..frames {
        animating = scroller.on_frame();
        if !animating {
            break;
        }
    }
    animating
}

/// Frames until the scroller stops animating, or `None` past `max_frames`.
pub fn settle<S: ScrollSurface>(scroller: &mut Scroller<S>, max_frames: usize) -> Option<usize> {
    for frame in 0..max_frames {
        if !scroller.on_frame() {
            return Some(frame + 1);
        }
    }
    None
}
