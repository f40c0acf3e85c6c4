//! Frame-stepped animation loops for the elastic scroller
//!
//! Provides exponential easing toward a target, inertia decay after a flick and
//! overscroll coasting, all advanced one fixed-budget frame per `tick`.

mod easing;
mod inertia;
mod step;

pub use easing::*;
pub use inertia::*;
pub use step::*;

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
