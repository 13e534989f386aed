use sprig_engine::coords::{CornerRadii, Rect};
use sprig_engine::paint::Color;
use sprig_engine::scene::DrawList;

/// Drawing surface passed to [`Widget::draw`](crate::widget::Widget::draw).
///
/// Wraps the frame's `DrawList`. Commands are painted in call order, so
/// whatever is drawn later ends up on top.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list }
    }

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_solid_rect(rect, color);
    }

    /// Rounded rectangle. Pass `radius = 0.0` for sharp corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.draw_list.push_solid_rounded_rect(rect, radius, color);
    }

    /// Rounded rectangle with per-corner radii.
    pub fn fill_rounded_rect_corners(&mut self, rect: Rect, radii: CornerRadii, color: Color) {
        self.draw_list.push_rounded_rect(rect, radii, color);
    }

    /// Number of commands recorded so far this frame.
    pub fn len(&self) -> usize {
        self.draw_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use sprig_engine::scene::DrawCmd;

    use super::*;

    #[test]
    fn records_in_call_order_with_radii() {
        let mut dl = DrawList::new();
        {
            let mut p = Painter::new(&mut dl);
            p.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE);
            p.fill_rounded_rect(Rect::new(1.0, 1.0, 4.0, 4.0), 2.0, Color::BLACK);
            assert_eq!(p.len(), 2);
        }

        let radii: Vec<CornerRadii> = dl.items().iter().map(|DrawCmd::RoundedRect(r)| r.radii).collect();
        assert_eq!(radii, vec![CornerRadii::zero(), CornerRadii::all(2.0)]);
    }

    #[test]
    fn empty_rects_are_dropped() {
        let mut dl = DrawList::new();
        let mut p = Painter::new(&mut dl);
        p.fill_rect(Rect::new(0.0, 0.0, 0.0, 10.0), Color::WHITE);
        assert!(p.is_empty());
    }
}
