//! The content a scroller moves.

use elastic_foundation::Axis;

/// Which layer a child is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Moves with the scroll offset and contributes to the content length.
    Scrollable,
    /// Stays fixed over the viewport.
    Static,
}

/// Host-side content driven by a [`Scroller`](crate::Scroller).
///
/// The scroller owns the authoritative offsets and pushes them here after
/// every change. Offsets translate the scrollable layer: 0 shows the start of
/// the content, `-(content - viewport)` its far end.
pub trait ScrollSurface {
    type Child;

    /// Offset the surface currently shows; read once at construction.
    fn offset(&self, axis: Axis) -> f32;

    fn set_offset(&mut self, axis: Axis, offset: f32);

    /// Extent of the scrollable layer along `axis`.
    fn content_length(&self, axis: Axis) -> f32;

    fn attach(&mut self, child: Self::Child, layer: Layer);

    fn detach(&mut self, child: &Self::Child);

    /// Removes every child from both layers.
    fn detach_all(&mut self);
}
