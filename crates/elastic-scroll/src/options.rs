//! Construction options for [`Scroller`](crate::Scroller).

use crate::callbacks::{BounceResume, BounceStatus, ScrollCallbacks};
use crate::config::{AxisMode, ScrollConfig};
use elastic_foundation::{Axis, Rect};
use std::rc::Rc;

pub const DEFAULT_VIEWPORT_LENGTH: f32 = 500.0;

/// Viewport geometry, axis selection, physics and callbacks.
#[derive(Debug, Clone)]
pub struct ScrollerOptions {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    /// Forces horizontal scrollability; `None` derives it from the lengths.
    pub scroll_x: Option<bool>,
    pub scroll_y: Option<bool>,
    /// Corner radius of the viewport clip. Not used by the physics.
    pub radius: f32,
    pub axis_mode: AxisMode,
    /// In single-axis mode, drop moves whose cross-axis travel plus this
    /// margin reaches the primary travel.
    pub cross_axis_margin: Option<f32>,
    pub config: ScrollConfig,
    pub callbacks: ScrollCallbacks,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_LENGTH, DEFAULT_VIEWPORT_LENGTH)
    }
}

impl ScrollerOptions {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            x: 0.0,
            y: 0.0,
            scroll_x: None,
            scroll_y: None,
            radius: 0.0,
            axis_mode: AxisMode::Both,
            cross_axis_margin: None,
            config: ScrollConfig::default(),
            callbacks: ScrollCallbacks::default(),
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_scroll_x(mut self, scrollable: bool) -> Self {
        self.scroll_x = Some(scrollable);
        self
    }

    pub fn with_scroll_y(mut self, scrollable: bool) -> Self {
        self.scroll_y = Some(scrollable);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_axis_mode(mut self, axis_mode: AxisMode) -> Self {
        self.axis_mode = axis_mode;
        self
    }

    pub fn with_cross_axis_margin(mut self, margin: f32) -> Self {
        self.cross_axis_margin = Some(margin);
        self
    }

    pub fn with_config(mut self, config: ScrollConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_scroll(mut self, on_scroll: impl Fn(f32, Axis) + 'static) -> Self {
        self.callbacks.on_scroll = Some(Rc::new(on_scroll));
        self
    }

    pub fn on_bounce(
        mut self,
        on_bounce: impl Fn(f32, BounceResume, BounceStatus) + 'static,
    ) -> Self {
        self.callbacks.on_bounce = Some(Rc::new(on_bounce));
        self
    }

    /// Scrollability override for `axis`.
    pub fn scroll_override(&self, axis: Axis) -> Option<bool> {
        match axis {
            Axis::X => self.scroll_x,
            Axis::Y => self.scroll_y,
        }
    }

    /// Viewport bounds, with invalid lengths replaced by the default.
    pub fn viewport(&self) -> Rect {
        let width = valid_length(self.width, "width");
        let height = valid_length(self.height, "height");
        let x = if self.x.is_finite() { self.x } else { 0.0 };
        let y = if self.y.is_finite() { self.y } else { 0.0 };
        Rect::new(x, y, width, height)
    }

    /// Margin in effect, if any; negative or non-finite margins disable it.
    pub(crate) fn effective_cross_axis_margin(&self) -> Option<f32> {
        match self.cross_axis_margin {
            Some(margin) if margin.is_finite() && margin >= 0.0 => Some(margin),
            Some(margin) => {
                log::warn!("ignoring cross axis margin {margin}");
                None
            }
            None => None,
        }
    }
}

fn valid_length(length: f32, name: &str) -> f32 {
    if length.is_finite() && length >= 0.0 {
        length
    } else {
        log::warn!("invalid viewport {name} {length}, using {DEFAULT_VIEWPORT_LENGTH}");
        DEFAULT_VIEWPORT_LENGTH
    }
}
