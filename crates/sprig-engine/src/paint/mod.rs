//! Paint model shared between the UI and the renderer.
//!
//! Only solid fills exist. Colors are linear premultiplied RGBA.

pub mod color;

pub use color::Color;
