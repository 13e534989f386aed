//! Frame timing.
//!
//! - `FrameClock` produces clamped per-frame deltas
//! - `FramePacer` computes the next frame deadline for a target rate
//! - `FpsCounter` averages presented frames over a sliding second

mod fps;
mod frame_clock;
mod pacer;

pub use fps::FpsCounter;
pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
