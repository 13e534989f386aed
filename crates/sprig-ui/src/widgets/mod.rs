//! Built-in widgets.

pub mod absolute;
pub mod slider;

pub use absolute::AbsoluteLayout;
pub use slider::{Slider, SliderState};
