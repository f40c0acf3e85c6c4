//! In-memory scroll surface.

use elastic_scroll::{Axis, Layer, PerAxis, Rect, ScrollSurface, Size};

pub type BlockId = u32;

/// A rectangular child in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub rect: Rect,
}

impl Block {
    pub const fn new(id: BlockId, rect: Rect) -> Self {
        Self { id, rect }
    }

    /// `count` rows of `size` stacked from the top, ids starting at `first_id`.
    pub fn rows(first_id: BlockId, count: u32, size: Size) -> Vec<Block> {
        (0..count)
            .map(|index| {
                let top = index as f32 * size.height;
                Block::new(first_id + index, Rect::new(0.0, top, size.width, size.height))
            })
            .collect()
    }
}

/// Surface that stores its children and offsets in plain vectors.
#[derive(Debug, Clone, Default)]
pub struct MemoryContent {
    scrollable: Vec<Block>,
    overlay: Vec<Block>,
    offset: PerAxis<f32>,
    offset_writes: usize,
}

impl MemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an offset already applied by the host.
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = PerAxis::new(x, y);
        self
    }

    pub fn scrollable_blocks(&self) -> &[Block] {
        &self.scrollable
    }

    pub fn overlay_blocks(&self) -> &[Block] {
        &self.overlay
    }

    /// Number of offset updates received from the scroller.
    pub fn offset_writes(&self) -> usize {
        self.offset_writes
    }

    pub fn next_id(&self) -> BlockId {
        self.scrollable
            .iter()
            .chain(&self.overlay)
            .map(|block| block.id + 1)
            .max()
            .unwrap_or(0)
    }

    /// A block of `size` placed directly below the current scrollable content.
    pub fn next_row(&self, size: Size) -> Block {
        let top = self.content_length(Axis::Y);
        Block::new(self.next_id(), Rect::new(0.0, top, size.width, size.height))
    }

    /// Ids of scrollable blocks intersecting a viewport of `size` at the
    /// current offset.
    pub fn visible_blocks(&self, size: Size) -> Vec<BlockId> {
        self.scrollable
            .iter()
            .filter(|block| {
                let shown = block.rect.translate(self.offset.x, self.offset.y);
                shown.right() > 0.0
                    && shown.x < size.width
                    && shown.bottom() > 0.0
                    && shown.y < size.height
            })
            .map(|block| block.id)
            .collect()
    }
}

impl ScrollSurface for MemoryContent {
    type Child = Block;

    fn offset(&self, axis: Axis) -> f32 {
        self.offset[axis]
    }

    fn set_offset(&mut self, axis: Axis, offset: f32) {
        self.offset[axis] = offset;
        self.offset_writes += 1;
    }

    fn content_length(&self, axis: Axis) -> f32 {
        self.scrollable
            .iter()
            .map(|block| match axis {
                Axis::X => block.rect.right(),
                Axis::Y => block.rect.bottom(),
            })
            .fold(0.0, f32::max)
    }

    fn attach(&mut self, child: Block, layer: Layer) {
        let blocks = match layer {
            Layer::Scrollable => &mut self.scrollable,
            Layer::Static => &mut self.overlay,
        };
        match blocks.iter_mut().find(|block| block.id == child.id) {
            Some(existing) => *existing = child,
            None => blocks.push(child),
        }
    }

    fn detach(&mut self, child: &Block) {
        self.scrollable.retain(|block| block.id != child.id);
        self.overlay.retain(|block| block.id != child.id);
    }

    fn detach_all(&mut self) {
        self.scrollable.clear();
        self.overlay.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_length_spans_scrollable_blocks_only() {
        let mut content = MemoryContent::new();
        for block in Block::rows(0, 5, Size::new(180.0, 200.0)) {
            content.attach(block, Layer::Scrollable);
        }
        content.attach(
            Block::new(99, Rect::new(0.0, 0.0, 400.0, 4000.0)),
            Layer::Static,
        );
        assert_eq!(content.content_length(Axis::Y), 1000.0);
        assert_eq!(content.content_length(Axis::X), 180.0);
        assert_eq!(content.next_id(), 100);
    }

    #[test]
    fn visible_blocks_follow_the_offset() {
        let mut content = MemoryContent::new();
        for block in Block::rows(0, 5, Size::new(180.0, 100.0)) {
            content.attach(block, Layer::Scrollable);
        }
        let viewport = Size::new(180.0, 250.0);
        assert_eq!(content.visible_blocks(viewport), vec![0, 1, 2]);

        content.set_offset(Axis::Y, -260.0);
        assert_eq!(content.visible_blocks(viewport), vec![2, 3, 4]);
    }

    #[test]
    fn next_row_stacks_below_and_detach_removes() {
        let mut content = MemoryContent::new();
        let first = content.next_row(Size::new(100.0, 40.0));
        content.attach(first, Layer::Scrollable);
        let second = content.next_row(Size::new(100.0, 60.0));
        assert_eq!(second.rect.y, 40.0);
        assert_eq!(second.id, 1);
        content.attach(second, Layer::Scrollable);

        content.detach(&first);
        assert_eq!(content.scrollable_blocks(), &[second]);
        content.detach_all();
        assert_eq!(content.content_length(Axis::Y), 0.0);
    }
}
