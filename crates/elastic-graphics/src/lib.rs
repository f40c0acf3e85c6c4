//! Pure math/data for the elastic scroller
//!
//! Geometry primitives describing viewport bounds, content extents and
//! pointer positions.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
