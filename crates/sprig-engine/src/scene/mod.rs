//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - preserve paint order: commands are drawn back-to-front in insertion order

mod cmd;
mod list;

pub use cmd::{DrawCmd, RoundedRectCmd};
pub use list::DrawList;
