//! Sprig engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the UI layer: the winit
//! event loop, raw input tracking, frame timing, and a single instanced
//! rounded-rectangle renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
