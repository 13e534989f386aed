use super::{Size, Vec2};

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Never stored on scene nodes; derived on demand from a position and a size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// Builds the rectangle covering `size` with its top-left corner at `position`.
    #[inline]
    pub const fn from_position_size(position: Vec2, size: Size) -> Self {
        Self { origin: position, size }
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.height
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.width * 0.5,
            self.origin.y + self.size.height * 0.5,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Strict-interior containment: every edge is excluded.
    ///
    /// A point lying exactly on the boundary is not contained. This is the
    /// hit test used for pointer routing.
    #[inline]
    pub fn contains_strict(self, p: Vec2) -> bool {
        let max = self.max();
        p.x > self.origin.x && p.x < max.x && p.y > self.origin.y && p.y < max.y
    }

    /// Shrinks the rectangle by `d` on every side. Extents never go negative.
    #[inline]
    pub fn inset(self, d: f32) -> Rect {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            (self.size.width - 2.0 * d).max(0.0),
            (self.size.height - 2.0 * d).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── from_position_size ────────────────────────────────────────────────

    #[test]
    fn from_position_size_copies_components() {
        let rect = Rect::from_position_size(Vec2::new(3.5, -2.0), Size::new(40.0, 12.0));
        assert_eq!(rect.x(), 3.5);
        assert_eq!(rect.y(), -2.0);
        assert_eq!(rect.width(), 40.0);
        assert_eq!(rect.height(), 12.0);
        assert_eq!(rect, r(3.5, -2.0, 40.0, 12.0));
    }

    // ── contains_strict ───────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains_strict(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn edges_are_excluded() {
        let rect = r(10.0, 20.0, 30.0, 40.0);
        // left, right, top, bottom
        assert!(!rect.contains_strict(Vec2::new(10.0, 30.0)));
        assert!(!rect.contains_strict(Vec2::new(40.0, 30.0)));
        assert!(!rect.contains_strict(Vec2::new(20.0, 20.0)));
        assert!(!rect.contains_strict(Vec2::new(20.0, 60.0)));
        // corners
        assert!(!rect.contains_strict(Vec2::new(10.0, 20.0)));
        assert!(!rect.contains_strict(Vec2::new(40.0, 60.0)));
    }

    #[test]
    fn one_unit_inside_each_edge_hits() {
        let rect = r(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains_strict(Vec2::new(11.0, 30.0)));
        assert!(rect.contains_strict(Vec2::new(39.0, 30.0)));
        assert!(rect.contains_strict(Vec2::new(20.0, 21.0)));
        assert!(rect.contains_strict(Vec2::new(20.0, 59.0)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!r(5.0, 5.0, 0.0, 0.0).contains_strict(Vec2::new(5.0, 5.0)));
    }

    // ── inset / center ────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_each_side() {
        assert_eq!(r(0.0, 0.0, 100.0, 80.0).inset(10.0), r(10.0, 10.0, 80.0, 60.0));
    }

    #[test]
    fn inset_clamps_to_zero() {
        let i = r(0.0, 0.0, 6.0, 6.0).inset(5.0);
        assert_eq!(i.size, Size::zero());
        assert!(i.is_empty());
    }

    #[test]
    fn center_of_rect() {
        assert_eq!(r(10.0, 10.0, 20.0, 40.0).center(), Vec2::new(20.0, 30.0));
    }
}
