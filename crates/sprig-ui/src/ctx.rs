use sprig_engine::coords::Rect;

use crate::dispatch::Captures;
use crate::signal::{Signals, UiSignal};
use crate::tree::NodeId;

/// Context handed to widget callbacks, bound to the node being visited.
///
/// Capture changes go through here so a widget can only claim or release a
/// channel on behalf of its own node.
pub struct UiCtx<'a> {
    node: NodeId,
    rect: Rect,
    captures: &'a mut Captures,
    signals: &'a mut Signals,
}

impl<'a> UiCtx<'a> {
    pub(crate) fn new(
        node: NodeId,
        rect: Rect,
        captures: &'a mut Captures,
        signals: &'a mut Signals,
    ) -> Self {
        Self { node, rect, captures, signals }
    }

    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Absolute rect of the node.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn emit(&mut self, signal: UiSignal) {
        self.signals.push(signal);
    }

    // ── pointer channel ───────────────────────────────────────────────────

    pub fn capture_pointer(&mut self) {
        self.captures.set_pointer(self.node);
    }

    /// Releases the pointer channel if this node holds it.
    pub fn release_pointer(&mut self) {
        self.captures.release_pointer_if(self.node);
    }

    pub fn has_pointer_capture(&self) -> bool {
        self.captures.pointer() == Some(self.node)
    }

    // ── keyboard channel ──────────────────────────────────────────────────

    pub fn capture_keys(&mut self) {
        self.captures.set_keys(self.node);
    }

    /// Releases the keyboard channel if this node holds it.
    pub fn release_keys(&mut self) {
        self.captures.release_keys_if(self.node);
    }

    pub fn has_key_capture(&self) -> bool {
        self.captures.keys() == Some(self.node)
    }
}
