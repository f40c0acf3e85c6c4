//! Tunable scroll physics and axis selection.

use crate::resist::{default_bounce_resist, ResistContext, DEFAULT_RESIST_COEFFICIENT};
use elastic_animation::{DEFAULT_MIN_DELTA_TO_STOP, DEFAULT_SCROLL_CURVE, DEFAULT_SPEED_DECAY};
use elastic_foundation::gesture_constants::TIME_FOR_END_SCROLL_MS;
use elastic_foundation::Axis;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Resistance applied to deltas while an axis is overscrolled.
pub type BounceResist = Rc<dyn Fn(f32, &ResistContext) -> f32>;

/// Physics parameters shared by both axes.
#[derive(Clone)]
pub struct ScrollConfig {
    /// Gestures shorter than this (ms) end in inertia.
    pub time_for_end_scroll: f64,
    /// Divisor applied to the remaining distance per easing frame.
    pub scroll_curve: f32,
    pub min_delta_to_stop: f32,
    /// Fraction of inertia speed lost per frame.
    pub speed_decay: f32,
    pub resist_coefficient: f32,
    pub bounce_resist: BounceResist,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            time_for_end_scroll: TIME_FOR_END_SCROLL_MS,
            scroll_curve: DEFAULT_SCROLL_CURVE,
            min_delta_to_stop: DEFAULT_MIN_DELTA_TO_STOP,
            speed_decay: DEFAULT_SPEED_DECAY,
            resist_coefficient: DEFAULT_RESIST_COEFFICIENT,
            bounce_resist: Rc::new(default_bounce_resist),
        }
    }
}

impl fmt::Debug for ScrollConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollConfig")
            .field("time_for_end_scroll", &self.time_for_end_scroll)
            .field("scroll_curve", &self.scroll_curve)
            .field("min_delta_to_stop", &self.min_delta_to_stop)
            .field("speed_decay", &self.speed_decay)
            .field("resist_coefficient", &self.resist_coefficient)
            .finish_non_exhaustive()
    }
}

impl ScrollConfig {
    pub fn with_time_for_end_scroll(mut self, millis: f64) -> Self {
        self.time_for_end_scroll = millis;
        self
    }

    pub fn with_scroll_curve(mut self, curve: f32) -> Self {
        self.scroll_curve = curve;
        self
    }

    pub fn with_min_delta_to_stop(mut self, min_delta: f32) -> Self {
        self.min_delta_to_stop = min_delta;
        self
    }

    pub fn with_speed_decay(mut self, decay: f32) -> Self {
        self.speed_decay = decay;
        self
    }

    pub fn with_resist_coefficient(mut self, coefficient: f32) -> Self {
        self.resist_coefficient = coefficient;
        self
    }

    /// Replaces the overscroll resistance function.
    ///
    /// The function must shrink the magnitude of any delta it is handed, or
    /// overscroll coasting never terminates.
    pub fn with_bounce_resist(
        mut self,
        resist: impl Fn(f32, &ResistContext) -> f32 + 'static,
    ) -> Self {
        self.bounce_resist = Rc::new(resist);
        self
    }

    /// Returns a copy with every invalid value replaced by its default.
    pub fn sanitized(&self) -> ScrollConfig {
        let defaults = ScrollConfig::default();
        let mut config = self.clone();
        if !(config.time_for_end_scroll.is_finite() && config.time_for_end_scroll >= 0.0) {
            log::warn!(
                "invalid time_for_end_scroll {}, using {}",
                config.time_for_end_scroll,
                defaults.time_for_end_scroll
            );
            config.time_for_end_scroll = defaults.time_for_end_scroll;
        }
        if !(config.scroll_curve.is_finite() && config.scroll_curve > 1.0) {
            log::warn!(
                "invalid scroll_curve {}, using {}",
                config.scroll_curve,
                defaults.scroll_curve
            );
            config.scroll_curve = defaults.scroll_curve;
        }
        if !(config.min_delta_to_stop.is_finite() && config.min_delta_to_stop > 0.0) {
            log::warn!(
                "invalid min_delta_to_stop {}, using {}",
                config.min_delta_to_stop,
                defaults.min_delta_to_stop
            );
            config.min_delta_to_stop = defaults.min_delta_to_stop;
        }
        if !(config.speed_decay.is_finite() && (0.0..1.0).contains(&config.speed_decay)) {
            log::warn!(
                "invalid speed_decay {}, using {}",
                config.speed_decay,
                defaults.speed_decay
            );
            config.speed_decay = defaults.speed_decay;
        }
        if !(config.resist_coefficient.is_finite() && config.resist_coefficient >= 0.0) {
            log::warn!(
                "invalid resist_coefficient {}, using {}",
                config.resist_coefficient,
                defaults.resist_coefficient
            );
            config.resist_coefficient = defaults.resist_coefficient;
        }
        config
    }
}

/// Which axes a scroller responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisMode {
    /// Both axes scroll independently.
    #[default]
    Both,
    Horizontal,
    Vertical,
}

impl AxisMode {
    /// Axis addressed by scalar scroll targets.
    pub fn primary(self) -> Axis {
        match self {
            AxisMode::Horizontal => Axis::X,
            AxisMode::Both | AxisMode::Vertical => Axis::Y,
        }
    }

    /// Whether pointer deltas along `axis` are routed at all.
    pub fn allows(self, axis: Axis) -> bool {
        match self {
            AxisMode::Both => true,
            AxisMode::Horizontal => axis == Axis::X,
            AxisMode::Vertical => axis == Axis::Y,
        }
    }

    pub fn is_single_axis(self) -> bool {
        self != AxisMode::Both
    }

    /// Parses `input`, logging and falling back to [`AxisMode::Both`].
    pub fn parse_or_default(input: &str) -> AxisMode {
        input.parse().unwrap_or_else(|err: AxisModeParseError| {
            log::warn!("{err}, scrolling both axes");
            AxisMode::Both
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisModeParseError {
    input: String,
}

impl AxisModeParseError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for AxisModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown axis mode {:?}; expected both, horizontal or vertical",
            self.input
        )
    }
}

impl std::error::Error for AxisModeParseError {}

impl FromStr for AxisMode {
    type Err = AxisModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" | "free" | "" => Ok(AxisMode::Both),
            "horizontal" | "hor" | "x" => Ok(AxisMode::Horizontal),
            "vertical" | "ver" | "y" => Ok(AxisMode::Vertical),
            _ => Err(AxisModeParseError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resist::Boundary;

    #[test]
    fn defaults_match_documented_physics() {
        let config = ScrollConfig::default();
        assert_eq!(config.time_for_end_scroll, 300.0);
        assert_eq!(config.scroll_curve, 7.0);
        assert_eq!(config.min_delta_to_stop, 0.3);
        assert_eq!(config.speed_decay, 0.02);
        assert_eq!(config.resist_coefficient, 0.0058);
    }

    #[test]
    fn sanitized_replaces_invalid_values_only() {
        let config = ScrollConfig::default()
            .with_scroll_curve(0.5)
            .with_speed_decay(f32::NAN)
            .with_min_delta_to_stop(0.5)
            .with_time_for_end_scroll(-1.0)
            .sanitized();
        assert_eq!(config.scroll_curve, 7.0);
        assert_eq!(config.speed_decay, 0.02);
        assert_eq!(config.time_for_end_scroll, 300.0);
        assert_eq!(config.min_delta_to_stop, 0.5);
    }

    #[test]
    fn custom_resist_is_kept() {
        let config = ScrollConfig::default().with_bounce_resist(|delta, _| delta * 0.25);
        let ctx = ResistContext {
            boundary: Boundary::Start,
            offset: 10.0,
            viewport_length: 100.0,
            content_length: 400.0,
            coefficient: config.resist_coefficient,
        };
        assert_eq!((config.sanitized().bounce_resist)(8.0, &ctx), 2.0);
    }

    #[test]
    fn axis_mode_parses_aliases() {
        assert_eq!("Vertical".parse::<AxisMode>(), Ok(AxisMode::Vertical));
        assert_eq!("hor".parse::<AxisMode>(), Ok(AxisMode::Horizontal));
        assert_eq!(" both ".parse::<AxisMode>(), Ok(AxisMode::Both));

        let err = "diagonal".parse::<AxisMode>().unwrap_err();
        assert_eq!(err.input(), "diagonal");
        assert!(err.to_string().contains("diagonal"));
        assert_eq!(AxisMode::parse_or_default("diagonal"), AxisMode::Both);
    }

    #[test]
    fn axis_mode_routing() {
        assert_eq!(AxisMode::Horizontal.primary(), Axis::X);
        assert_eq!(AxisMode::Both.primary(), Axis::Y);
        assert!(AxisMode::Vertical.allows(Axis::Y));
        assert!(!AxisMode::Vertical.allows(Axis::X));
        assert!(AxisMode::Both.allows(Axis::X));
    }
}
