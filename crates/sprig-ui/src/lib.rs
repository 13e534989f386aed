//! Sprig UI: a retained node tree with capture-based input dispatch on top
//! of `sprig-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sprig_ui::prelude::*;
//!
//! Application::new()
//!     .title("sprig")
//!     .run(|size| {
//!         let mut tree = Tree::new(AbsoluteLayout::new(), Vec2::zero(), size);
//!         tree.add_child(
//!             tree.root(),
//!             Vec2::new(100.0, 280.0),
//!             Size::new(200.0, 40.0),
//!             Slider::new().min(0.0).max(100.0),
//!         )?;
//!         Ok(tree)
//!     })
//! ```
//!
//! # Frame sequence
//!
//! Each frame the application samples input into snapshots, hands them to the
//! [`Dispatcher`](dispatch::Dispatcher), updates the [`Tree`](tree::Tree)
//! top-down, optionally sweeps inactive nodes, drains signals, then draws the
//! tree and the FPS overlay.
//!
//! # Custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any `'static` type and add it with
//! `Tree::add_child`. Override only the callbacks you need.

pub mod app;
pub mod ctx;
pub mod dispatch;
pub mod input;
pub mod overlay;
pub mod painter;
pub mod signal;
pub mod tree;
pub mod widget;
pub mod widgets;

pub use app::{Application, SweepPolicy};

/// Everything needed to build a scene and write widgets.
pub mod prelude {
    pub use crate::app::{Application, SweepPolicy};
    pub use crate::ctx::UiCtx;
    pub use crate::dispatch::Dispatcher;
    pub use crate::input::{KeySnapshot, PointerSnapshot};
    pub use crate::painter::Painter;
    pub use crate::signal::{Signals, UiSignal};
    pub use crate::tree::{NodeId, Tree, TreeError};
    pub use crate::widget::{ChildLayout, Propagation, Widget};
    pub use crate::widgets::{AbsoluteLayout, Slider, SliderState};

    // Engine primitives every scene needs.
    pub use sprig_engine::coords::{CornerRadii, Rect, Size, Vec2};
    pub use sprig_engine::input::Key;
    pub use sprig_engine::paint::Color;
}
