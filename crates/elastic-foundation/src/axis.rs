//! Scroll axis selection.
//!
//! Every per-axis quantity goes through [`Axis`] and [`PerAxis`] instead of
//! looking up fields by name.

use elastic_graphics::{Point, Rect, Size};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the two scroll dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Short name reported to host callbacks.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }

    pub fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Component of a point along this axis.
    pub fn of_point(self, point: Point) -> f32 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    /// Extent of a size along this axis.
    pub fn of_size(self, size: Size) -> f32 {
        match self {
            Axis::X => size.width,
            Axis::Y => size.height,
        }
    }

    /// Viewport length of a rect along this axis.
    pub fn of_rect(self, rect: Rect) -> f32 {
        self.of_size(rect.size())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value stored once per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerAxis<T> {
    pub x: T,
    pub y: T,
}

impl<T> PerAxis<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        let x = f(Axis::X);
        let y = f(Axis::Y);
        Self { x, y }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        [(Axis::X, &self.x), (Axis::Y, &self.y)].into_iter()
    }
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl<T> IndexMut<Axis> for PerAxis<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}
