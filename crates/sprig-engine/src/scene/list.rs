use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;

use super::{DrawCmd, RoundedRectCmd};

/// Recorded draw stream for a frame.
///
/// Items are painted in insertion order, so whatever is pushed last ends up
/// on top. `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a rounded rectangle. Empty or non-finite rectangles are dropped.
    pub fn push_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, color: Color) {
        if rect.is_empty() || !rect.is_finite() {
            return;
        }
        self.push(DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radii, color)));
    }

    /// Records a rounded rectangle with a uniform corner radius.
    #[inline]
    pub fn push_solid_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.push_rounded_rect(rect, CornerRadii::all(radius), color);
    }

    /// Records a sharp-cornered rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        self.push_rounded_rect(rect, CornerRadii::zero(), color);
    }
}
