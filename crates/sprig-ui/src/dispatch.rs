use crate::input::{KeySnapshot, PointerSnapshot};
use crate::signal::Signals;
use crate::tree::{NodeId, Tree};

/// Per-channel capture state.
///
/// Writable only from inside the crate: widgets go through `UiCtx`, which
/// binds every change to the calling node.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    pointer: Option<NodeId>,
    keys: Option<NodeId>,
}

impl Captures {
    #[inline]
    pub fn pointer(&self) -> Option<NodeId> {
        self.pointer
    }

    #[inline]
    pub fn keys(&self) -> Option<NodeId> {
        self.keys
    }

    pub(crate) fn set_pointer(&mut self, node: NodeId) {
        if self.pointer != Some(node) {
            log::debug!("pointer captured by {node:?}");
            self.pointer = Some(node);
        }
    }

    pub(crate) fn release_pointer_if(&mut self, node: NodeId) {
        if self.pointer == Some(node) {
            log::debug!("pointer released by {node:?}");
            self.pointer = None;
        }
    }

    pub(crate) fn set_keys(&mut self, node: NodeId) {
        if self.keys != Some(node) {
            log::debug!("keyboard captured by {node:?}");
            self.keys = Some(node);
        }
    }

    pub(crate) fn release_keys_if(&mut self, node: NodeId) {
        if self.keys == Some(node) {
            log::debug!("keyboard released by {node:?}");
            self.keys = None;
        }
    }
}

/// Routes input snapshots into a [`Tree`].
///
/// Each channel goes to its capturing node when one is set and still
/// reachable, otherwise to the root. Channels are independent: a pointer
/// capture never redirects keys and vice versa.
#[derive(Debug, Default)]
pub struct Dispatcher {
    captures: Captures,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Mutable access for `Tree::update`.
    #[inline]
    pub fn captures_mut(&mut self) -> &mut Captures {
        &mut self.captures
    }

    #[inline]
    pub fn pointer_capture(&self) -> Option<NodeId> {
        self.captures.pointer
    }

    #[inline]
    pub fn key_capture(&self) -> Option<NodeId> {
        self.captures.keys
    }

    /// Clears both channels.
    pub fn release_all(&mut self) {
        if self.captures != Captures::default() {
            log::debug!("releasing all captures");
        }
        self.captures = Captures::default();
    }

    /// Drops captures whose node was removed or deactivated.
    pub fn prune(&mut self, tree: &Tree) {
        resolve(&mut self.captures.pointer, tree, "pointer");
        resolve(&mut self.captures.keys, tree, "keyboard");
    }

    pub fn dispatch(
        &mut self,
        tree: &mut Tree,
        pointer: &PointerSnapshot,
        keys: &KeySnapshot,
        signals: &mut Signals,
    ) {
        let target = resolve(&mut self.captures.pointer, tree, "pointer");
        tree.deliver_pointer(target, pointer, &mut self.captures, signals);

        let target = resolve(&mut self.captures.keys, tree, "keyboard");
        tree.deliver_keys(target, keys, &mut self.captures, signals);
    }
}

fn resolve(slot: &mut Option<NodeId>, tree: &Tree, channel: &str) -> NodeId {
    match *slot {
        Some(id) if tree.is_reachable(id) => id,
        Some(id) => {
            log::debug!("dropping stale {channel} capture held by {id:?}");
            *slot = None;
            tree.root()
        }
        None => tree.root(),
    }
}
