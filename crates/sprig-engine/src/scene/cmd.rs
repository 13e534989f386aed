use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;

/// Filled rounded rectangle. A plain rectangle is the zero-radius case.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub color: Color,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadii, color: Color) -> Self {
        Self { rect, radii, color }
    }
}

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a payload type and a variant here
/// - add a push helper on `DrawList`
/// - teach the renderer in `render` to consume it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
}
