//! Headless list content for the demo.

use elastic_scroll::{Axis, Layer, PerAxis, Rect, ScrollSurface, Size};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub label: String,
    pub rect: Rect,
}

impl Item {
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        Self {
            label: label.into(),
            rect,
        }
    }
}

/// Items stacked in content coordinates plus fixed overlay labels.
#[derive(Debug, Default)]
pub struct ListSurface {
    items: Vec<Item>,
    overlays: Vec<Item>,
    offset: PerAxis<f32>,
    height: Rc<Cell<f32>>,
}

impl ListSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content height, shared so bounce handlers can read it.
    pub fn height_handle(&self) -> Rc<Cell<f32>> {
        Rc::clone(&self.height)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn visible_labels(&self, viewport: Size) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| {
                let shown = item.rect.translate(self.offset.x, self.offset.y);
                shown.bottom() > 0.0 && shown.y < viewport.height
            })
            .map(|item| item.label.as_str())
            .collect()
    }

    /// Overlays uncovered by the current overscroll.
    pub fn revealed_overlays(&self, viewport: Size) -> Vec<&str> {
        let top = self.offset.y;
        let bottom = self.offset.y + self.content_length(Axis::Y);
        self.overlays
            .iter()
            .filter(|overlay| overlay.rect.y < top || overlay.rect.bottom() > bottom)
            .filter(|overlay| overlay.rect.y < viewport.height)
            .map(|overlay| overlay.label.as_str())
            .collect()
    }

    fn update_height(&mut self) {
        let height = self
            .items
            .iter()
            .map(|item| item.rect.bottom())
            .fold(0.0, f32::max);
        self.height.set(height);
    }
}

impl ScrollSurface for ListSurface {
    type Child = Item;

    fn offset(&self, axis: Axis) -> f32 {
        self.offset[axis]
    }

    fn set_offset(&mut self, axis: Axis, offset: f32) {
        self.offset[axis] = offset;
    }

    fn content_length(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self
                .items
                .iter()
                .map(|item| item.rect.right())
                .fold(0.0, f32::max),
            Axis::Y => self.height.get(),
        }
    }

    fn attach(&mut self, child: Item, layer: Layer) {
        match layer {
            Layer::Scrollable => {
                self.items.push(child);
                self.update_height();
            }
            Layer::Static => self.overlays.push(child),
        }
    }

    fn detach(&mut self, child: &Item) {
        self.items.retain(|item| item != child);
        self.overlays.retain(|overlay| overlay != child);
        self.update_height();
    }

    fn detach_all(&mut self) {
        self.items.clear();
        self.overlays.clear();
        self.update_height();
    }
}
