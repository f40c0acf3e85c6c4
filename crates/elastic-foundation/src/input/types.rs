use elastic_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One normalized pointer observation.
///
/// `t` is a monotonic capture time in milliseconds. Hosts with a single
/// contact can leave `id` at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSample {
    pub id: PointerId,
    pub x: f32,
    pub y: f32,
    pub t: f64,
}

impl PointSample {
    pub const fn new(id: PointerId, x: f32, y: f32, t: f64) -> Self {
        Self { id, x, y, t }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Movement of one contact since its previous sample.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerDelta {
    pub dx: f32,
    pub dy: f32,
}

impl PointerDelta {
    pub fn as_point(&self) -> Point {
        Point::new(self.dx, self.dy)
    }
}

/// Net displacement and duration of a finished contact.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureSummary {
    pub dx: f32,
    pub dy: f32,
    pub elapsed_ms: f64,
}

impl GestureSummary {
    pub fn displacement(&self) -> Point {
        Point::new(self.dx, self.dy)
    }
}
