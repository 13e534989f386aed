//! GPU rendering subsystem.
//!
//! The renderer consumes a `scene::DrawList` and issues GPU commands via wgpu.
//! It owns its GPU resources (pipeline, buffers) and rebuilds them lazily.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod rounded_rect;

pub use ctx::{RenderCtx, RenderTarget};
pub use rounded_rect::RoundedRectRenderer;
