use std::any::Any;

use sprig_engine::coords::Rect;

use crate::ctx::UiCtx;
use crate::input::{KeySnapshot, PointerSnapshot};
use crate::painter::Painter;

// ── Propagation / ChildLayout ─────────────────────────────────────────────

/// What the tree does after a widget handled an input snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Propagation {
    /// The widget consumed the snapshot; children see nothing.
    Stop,
    /// Forward to every active direct child. Pointer snapshots only reach
    /// children whose rect strictly contains the pointer.
    HitChildren,
}

/// How a node positions its direct children during `Tree::update`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChildLayout {
    /// Children keep whatever absolute position they already have.
    None,
    /// `child.absolute = child.relative + self.absolute`.
    Absolute,
}

// ── Widget trait ──────────────────────────────────────────────────────────

/// Downcasting support, implemented for every `'static` type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Behavior attached to a tree node.
///
/// The tree owns traversal: widgets never recurse into children themselves.
/// Every method has a no-op default so a widget only overrides what it needs.
///
/// ```rust,ignore
/// struct Swatch(Color);
///
/// impl Widget for Swatch {
///     fn draw(&self, painter: &mut Painter<'_>, rect: Rect) {
///         painter.fill_rect(rect, self.0);
///     }
/// }
/// ```
pub trait Widget: AsAny {
    /// Per-frame state update, run before the node's children are laid out.
    fn update(&mut self, _ctx: &mut UiCtx<'_>) {}

    /// Paints the widget at its absolute rect.
    fn draw(&self, _painter: &mut Painter<'_>, _rect: Rect) {}

    fn on_pointer(&mut self, _pointer: &PointerSnapshot, _ctx: &mut UiCtx<'_>) -> Propagation {
        Propagation::Stop
    }

    fn on_key(&mut self, _keys: &KeySnapshot, _ctx: &mut UiCtx<'_>) -> Propagation {
        Propagation::Stop
    }

    fn child_layout(&self) -> ChildLayout {
        ChildLayout::None
    }
}
