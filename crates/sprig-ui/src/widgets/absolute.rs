use sprig_engine::coords::Rect;
use sprig_engine::paint::Color;

use crate::ctx::UiCtx;
use crate::input::PointerSnapshot;
use crate::painter::Painter;
use crate::widget::{ChildLayout, Propagation, Widget};

/// Container that places each child at its relative offset from the
/// container's own absolute position.
///
/// Pointer snapshots are forwarded to every child under the pointer; there
/// is no occlusion between overlapping children.
#[derive(Debug, Clone, Default)]
pub struct AbsoluteLayout {
    background: Option<Color>,
}

impl AbsoluteLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the container's rect before its children are drawn.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

impl Widget for AbsoluteLayout {
    fn draw(&self, painter: &mut Painter<'_>, rect: Rect) {
        if let Some(color) = self.background {
            painter.fill_rect(rect, color);
        }
    }

    fn on_pointer(&mut self, _pointer: &PointerSnapshot, _ctx: &mut UiCtx<'_>) -> Propagation {
        Propagation::HitChildren
    }

    fn child_layout(&self) -> ChildLayout {
        ChildLayout::Absolute
    }
}

#[cfg(test)]
mod tests {
    use sprig_engine::coords::{Size, Vec2};
    use sprig_engine::scene::DrawList;

    use super::*;
    use crate::tree::Tree;

    #[test]
    fn background_is_optional() {
        let mut dl = DrawList::new();
        let mut painter = Painter::new(&mut dl);
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        AbsoluteLayout::new().draw(&mut painter, rect);
        assert!(painter.is_empty());

        AbsoluteLayout::new().background(Color::GRAY).draw(&mut painter, rect);
        assert_eq!(painter.len(), 1);
    }

    #[test]
    fn background_draws_under_children() {
        let mut tree = Tree::new(
            AbsoluteLayout::new().background(Color::GRAY),
            Vec2::zero(),
            Size::new(100.0, 100.0),
        );
        tree.add_child(
            tree.root(),
            Vec2::new(10.0, 10.0),
            Size::new(10.0, 10.0),
            AbsoluteLayout::new().background(Color::BLUE),
        )
        .unwrap();

        let mut dl = DrawList::new();
        tree.full_draw(&mut Painter::new(&mut dl));

        let colors: Vec<Color> = dl
            .items()
            .iter()
            .map(|sprig_engine::scene::DrawCmd::RoundedRect(r)| r.color)
            .collect();
        assert_eq!(colors, vec![Color::GRAY, Color::BLUE]);
    }
}
