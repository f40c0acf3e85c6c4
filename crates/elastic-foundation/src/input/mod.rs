pub mod clock;
pub mod tracker;
pub mod types;

pub use clock::PointerClock;
pub use tracker::PointerTracker;
pub use types::{GestureSummary, PointSample, PointerDelta, PointerId, PointerPhase};
