//! Coordinate and geometry types shared across the renderer and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The renderer converts to NDC in the vertex shader using a viewport uniform.

mod corner_radii;
mod rect;
mod size;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
pub use viewport::Viewport;
