//! Two-axis scroll coordinator.

use crate::axis_scroller::AxisScroller;
use crate::config::AxisMode;
use crate::options::ScrollerOptions;
use crate::surface::{Layer, ScrollSurface};
use elastic_animation::StepOutcome;
use elastic_foundation::{Axis, PerAxis, Point, PointSample, PointerPhase, PointerTracker, Rect};

/// Target of [`Scroller::scroll_to`], in content coordinates (positive
/// values scroll toward the far end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPosition {
    /// Applies to the primary axis: vertical unless the scroller is
    /// horizontal-only.
    Scalar(f32),
    /// Per-axis targets; `None` leaves that axis alone.
    Point { x: Option<f32>, y: Option<f32> },
}

impl From<f32> for ScrollPosition {
    fn from(position: f32) -> Self {
        ScrollPosition::Scalar(position)
    }
}

impl From<Point> for ScrollPosition {
    fn from(point: Point) -> Self {
        ScrollPosition::Point {
            x: Some(point.x),
            y: Some(point.y),
        }
    }
}

impl From<(f32, f32)> for ScrollPosition {
    fn from((x, y): (f32, f32)) -> Self {
        ScrollPosition::Point {
            x: Some(x),
            y: Some(y),
        }
    }
}

/// Elastic scroll container over a host [`ScrollSurface`].
///
/// Pointer events feed both axes independently; the host calls
/// [`on_frame`](Self::on_frame) once per display frame while it returns true.
/// After resuming a held [`BounceResume`](crate::BounceResume) handle the host
/// must resume driving frames.
#[derive(Debug)]
pub struct Scroller<S: ScrollSurface> {
    viewport: Rect,
    radius: f32,
    axis_mode: AxisMode,
    cross_axis_margin: Option<f32>,
    axes: PerAxis<AxisScroller>,
    tracker: PointerTracker,
    surface: S,
    destroyed: bool,
}

impl<S: ScrollSurface> Scroller<S> {
    pub fn new(options: ScrollerOptions, surface: S) -> Self {
        let axis_mode = options.axis_mode;
        let axes = PerAxis::from_fn(|axis| {
            let mut scroller =
                AxisScroller::new(axis, options.config.clone(), options.callbacks.clone());
            let scrollable = if axis_mode.allows(axis) {
                options.scroll_override(axis)
            } else {
                if options.scroll_override(axis) == Some(true) {
                    log::warn!("{axis} axis disabled by {axis_mode:?} mode");
                }
                Some(false)
            };
            scroller.set_scrollable(scrollable);
            let initial = surface.offset(axis);
            if initial.is_finite() && initial != 0.0 {
                scroller.scroll_to(-initial, false);
            }
            scroller
        });
        let mut scroller = Self {
            viewport: options.viewport(),
            radius: options.radius,
            axis_mode,
            cross_axis_margin: options.effective_cross_axis_margin(),
            axes,
            tracker: PointerTracker::new(),
            surface,
            destroyed: false,
        };
        scroller.refresh_bounds();
        scroller
    }

    pub fn handle_pointer(&mut self, phase: PointerPhase, sample: PointSample) {
        match phase {
            PointerPhase::Start => self.on_pointer_start(sample),
            PointerPhase::Move => self.on_pointer_move(sample),
            PointerPhase::End => self.on_pointer_end(sample),
            PointerPhase::Cancel => self.on_pointer_cancel(sample),
        }
    }

    /// A contact went down; running motion on both axes stops at the next
    /// frame.
    pub fn on_pointer_start(&mut self, sample: PointSample) {
        if self.destroyed {
            return;
        }
        self.tracker.on_start(sample);
        for axis in Axis::ALL {
            self.axes[axis].begin_drag();
        }
    }

    pub fn on_pointer_move(&mut self, sample: PointSample) {
        if self.destroyed {
            return;
        }
        // dropped moves leave the current point alone so their travel carries over
        let Some(delta) = self.tracker.peek_move(&sample) else {
            return;
        };
        let delta = delta.as_point();
        if self.axis_mode.is_single_axis() {
            let primary = self.axis_mode.primary();
            let along = primary.of_point(delta);
            let across = primary.cross().of_point(delta);
            if along == 0.0 {
                return;
            }
            if let Some(margin) = self.cross_axis_margin {
                if across.abs() + margin >= along.abs() {
                    log::trace!("dropping move ({}, {}) as cross-axis", delta.x, delta.y);
                    return;
                }
            }
            self.tracker.on_move(sample);
            self.axes[primary].scroll(along);
        } else {
            self.tracker.on_move(sample);
            for axis in Axis::ALL {
                self.axes[axis].scroll(axis.of_point(delta));
            }
        }
        self.sync_surface();
    }

    /// A contact lifted. Both axes release once no contact remains.
    pub fn on_pointer_end(&mut self, sample: PointSample) {
        if self.destroyed {
            return;
        }
        let Some(summary) = self.tracker.on_end(sample) else {
            return;
        };
        if !self.tracker.is_idle() {
            return;
        }
        let displacement = summary.displacement();
        for axis in Axis::ALL {
            let travel = if self.axis_mode.allows(axis) {
                axis.of_point(displacement)
            } else {
                0.0
            };
            let phase = self.axes[axis].end_drag(summary.elapsed_ms, travel);
            log::debug!(
                "{axis} axis released after {:.0} ms: {phase:?}",
                summary.elapsed_ms
            );
        }
        self.sync_surface();
    }

    pub fn on_pointer_cancel(&mut self, sample: PointSample) {
        self.on_pointer_end(sample);
    }

    /// Advances both axes by one frame and pushes offsets to the surface.
    ///
    /// Returns whether another frame is needed.
    pub fn on_frame(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        for axis in Axis::ALL {
            if let StepOutcome::StopThenInvoke(event) = self.axes[axis].step() {
                log::trace!("{axis} axis: {event:?}");
            }
        }
        self.sync_surface();
        self.is_animating()
    }

    /// Attaches a child; scrollable children extend the content range.
    pub fn add_child(&mut self, child: S::Child, scrollable: bool) {
        let layer = if scrollable {
            Layer::Scrollable
        } else {
            Layer::Static
        };
        self.surface.attach(child, layer);
        if scrollable {
            self.refresh_bounds();
        }
    }

    /// Detaches `child`, or every child when `None`.
    pub fn remove_child(&mut self, child: Option<&S::Child>) {
        match child {
            Some(child) => self.surface.detach(child),
            None => self.surface.detach_all(),
        }
        self.refresh_bounds();
    }

    pub fn scroll_to(&mut self, position: impl Into<ScrollPosition>, animate: bool) {
        let targets = match position.into() {
            ScrollPosition::Scalar(position) => {
                let mut targets = PerAxis::new(None, None);
                targets[self.axis_mode.primary()] = Some(position);
                targets
            }
            ScrollPosition::Point { x, y } => PerAxis::new(x, y),
        };
        for (axis, target) in targets.iter() {
            if let Some(position) = *target {
                self.axes[axis].scroll_to(position, animate);
            }
        }
        self.sync_surface();
    }

    /// Resumes the bounce on `axis`; `None` retracts to its boundary.
    pub fn resume(&mut self, axis: Axis, offset: Option<f32>) -> bool {
        let resumed = self.axes[axis].resume(offset);
        self.sync_surface();
        resumed
    }

    /// Re-reads content lengths from the surface.
    pub fn refresh_bounds(&mut self) {
        for axis in Axis::ALL {
            let content = self.surface.content_length(axis);
            self.axes[axis].set_lengths(axis.of_rect(self.viewport), content);
        }
        self.sync_surface();
    }

    /// Stops listening to pointers and halts all motion. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        log::debug!("scroller destroyed");
        self.destroyed = true;
        self.tracker.clear();
        for axis in Axis::ALL {
            self.axes[axis].halt();
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn offset(&self, axis: Axis) -> f32 {
        self.axes[axis].offset()
    }

    pub fn axis(&self, axis: Axis) -> &AxisScroller {
        &self.axes[axis]
    }

    pub fn axis_mode(&self) -> AxisMode {
        self.axis_mode
    }

    /// True while either axis is dragging or moving.
    pub fn is_scrolling(&self) -> bool {
        self.axes.iter().any(|(_, axis)| axis.is_scrolling())
    }

    pub fn is_animating(&self) -> bool {
        self.axes.iter().any(|(_, axis)| axis.is_animating())
    }

    pub fn active_contacts(&self) -> usize {
        self.tracker.active_contacts()
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct access to the surface. Call [`refresh_bounds`](Self::refresh_bounds)
    /// after changing its content without going through `add_child`.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn sync_surface(&mut self) {
        for axis in Axis::ALL {
            self.surface.set_offset(axis, self.axes[axis].offset());
        }
    }
}
