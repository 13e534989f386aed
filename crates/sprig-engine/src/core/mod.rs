//! Contract between the runtime loop and the layers built on it.
//!
//! The runtime owns the window, GPU and raw input; an `App` only sees them
//! through the per-frame `FrameCtx`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
