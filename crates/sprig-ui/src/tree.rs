//! Arena-backed node tree.
//!
//! Nodes live in a `SlotMap` and refer to each other through `NodeId`
//! handles. A child's `parent` is a plain handle; only the arena owns nodes,
//! so cycles cannot be expressed and removal never dangles.

use std::fmt;

use slotmap::{SlotMap, new_key_type};

use sprig_engine::coords::{Rect, Size, Vec2};

use crate::ctx::UiCtx;
use crate::dispatch::Captures;
use crate::input::{KeySnapshot, PointerSnapshot};
use crate::painter::Painter;
use crate::signal::Signals;
use crate::widget::{ChildLayout, Propagation, Widget};

new_key_type! {
    /// Stable handle to a node in a [`Tree`]. Valid until the node is removed.
    pub struct NodeId;
}

// ── TreeError ─────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The handle does not refer to a live node.
    UnknownNode(NodeId),
    /// The root cannot be removed.
    RootRemoval,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnknownNode(id) => write!(f, "unknown node {id:?}"),
            TreeError::RootRemoval => f.write_str("the root node cannot be removed"),
        }
    }
}

impl std::error::Error for TreeError {}

// ── Node ──────────────────────────────────────────────────────────────────

struct Node {
    relative: Vec2,
    /// Cache, rewritten every `update` by the parent's layout.
    absolute: Vec2,
    size: Size,
    active: bool,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    widget: Box<dyn Widget>,
}

impl Node {
    fn new(relative: Vec2, absolute: Vec2, size: Size, widget: Box<dyn Widget>) -> Self {
        Self {
            relative,
            absolute,
            size,
            active: true,
            children: Vec::new(),
            parent: None,
            widget,
        }
    }

    #[inline]
    fn rect(&self) -> Rect {
        Rect::from_position_size(self.absolute, self.size)
    }
}

// ── Tree ──────────────────────────────────────────────────────────────────

pub struct Tree {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    warned_inactive_root: bool,
}

impl Tree {
    /// Creates a tree whose root sits at `position` in window coordinates.
    pub fn new(root: impl Widget, position: Vec2, size: Size) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(position, position, size, Box::new(root)));
        Self { nodes, root, warned_inactive_root: false }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Appends a node to the end of `parent`'s child list.
    ///
    /// The absolute position is provisional until the next `update`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        relative: Vec2,
        size: Size,
        widget: impl Widget,
    ) -> Result<NodeId, TreeError> {
        let origin = self
            .nodes
            .get(parent)
            .map(|p| p.absolute)
            .ok_or(TreeError::UnknownNode(parent))?;

        let mut node = Node::new(relative, relative + origin, size, Box::new(widget));
        node.parent = Some(parent);
        let id = self.nodes.insert(node);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(id);
        }
        Ok(id)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Direct children in list order; empty for unknown handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(&[], |n| n.children.as_slice())
    }

    pub fn absolute_position(&self, id: NodeId) -> Option<Vec2> {
        self.nodes.get(id).map(|n| n.absolute)
    }

    pub fn relative_position(&self, id: NodeId) -> Option<Vec2> {
        self.nodes.get(id).map(|n| n.relative)
    }

    /// Moves a node relative to its parent. The root has no parent, so its
    /// absolute position follows immediately.
    pub fn set_relative_position(&mut self, id: NodeId, position: Vec2) -> Result<(), TreeError> {
        let is_root = id == self.root;
        let node = self.nodes.get_mut(id).ok_or(TreeError::UnknownNode(id))?;
        node.relative = position;
        if is_root {
            node.absolute = position;
        }
        Ok(())
    }

    pub fn size(&self, id: NodeId) -> Option<Size> {
        self.nodes.get(id).map(|n| n.size)
    }

    pub fn set_size(&mut self, id: NodeId, size: Size) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(id).ok_or(TreeError::UnknownNode(id))?;
        node.size = size;
        Ok(())
    }

    /// Absolute rect, derived from the cached absolute position and size.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id).map(Node::rect)
    }

    /// False for unknown handles.
    pub fn is_active(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.active)
    }

    /// Inactive nodes and their subtrees are skipped by update, draw and
    /// dispatch until `sweep_inactive` removes them.
    pub fn set_active(&mut self, id: NodeId, active: bool) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(id).ok_or(TreeError::UnknownNode(id))?;
        node.active = active;
        if id == self.root && active {
            self.warned_inactive_root = false;
        }
        Ok(())
    }

    /// True when the node exists and neither it nor any ancestor is inactive.
    pub fn is_reachable(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.nodes.get(current) {
                Some(n) if n.active => cursor = n.parent,
                _ => return false,
            }
        }
        true
    }

    /// Strict-interior test of `point` against the node's absolute rect.
    pub fn hit_test(&self, id: NodeId, point: Vec2) -> bool {
        self.rect(id).is_some_and(|r| r.contains_strict(point))
    }

    /// The node's widget, if it is a `W`.
    pub fn widget<W: Widget>(&self, id: NodeId) -> Option<&W> {
        let widget: &dyn Widget = self.nodes.get(id)?.widget.as_ref();
        widget.as_any().downcast_ref::<W>()
    }

    pub fn widget_mut<W: Widget>(&mut self, id: NodeId) -> Option<&mut W> {
        let widget: &mut dyn Widget = self.nodes.get_mut(id)?.widget.as_mut();
        widget.as_any_mut().downcast_mut::<W>()
    }

    // ── traversal ─────────────────────────────────────────────────────────

    /// Updates every active node in pre-order, top-down.
    ///
    /// A node's widget runs first, then (for `ChildLayout::Absolute`) its
    /// direct children are positioned, then the children are visited. Each
    /// parent is therefore final before its children read their position, so
    /// any nesting depth converges in a single call.
    pub fn update(&mut self, captures: &mut Captures, signals: &mut Signals) {
        if let Some(root) = self.nodes.get_mut(self.root) {
            root.absolute = root.relative;
        }

        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id) else { continue };
            if !node.active {
                continue;
            }

            let mut ctx = UiCtx::new(id, node.rect(), captures, signals);
            node.widget.update(&mut ctx);

            let layout = node.widget.child_layout();
            let origin = node.absolute;
            let children = node.children.clone();

            if layout == ChildLayout::Absolute {
                for &child in &children {
                    if let Some(c) = self.nodes.get_mut(child) {
                        c.absolute = c.relative + origin;
                    }
                }
            }

            stack.extend(children.into_iter().rev());
        }
    }

    /// Draws every active node in full recursive pre-order: a node before its
    /// children, children in list order.
    pub fn full_draw(&self, painter: &mut Painter<'_>) {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else { continue };
            if !node.active {
                continue;
            }
            node.widget.draw(painter, node.rect());
            stack.extend(node.children.iter().rev().copied());
        }
    }

    /// Hands `pointer` to `target`, then to every active direct child that
    /// strictly contains the pointer when the widget asks for it. Overlapping
    /// children all receive the snapshot.
    pub(crate) fn deliver_pointer(
        &mut self,
        target: NodeId,
        pointer: &PointerSnapshot,
        captures: &mut Captures,
        signals: &mut Signals,
    ) {
        let Some(node) = self.nodes.get_mut(target) else { return };
        if !node.active {
            return;
        }

        let mut ctx = UiCtx::new(target, node.rect(), captures, signals);
        if node.widget.on_pointer(pointer, &mut ctx) == Propagation::Stop {
            return;
        }

        let children = node.children.clone();
        for child in children {
            if self.is_active(child) && self.hit_test(child, pointer.position) {
                self.deliver_pointer(child, pointer, captures, signals);
            }
        }
    }

    /// Keyboard counterpart of `deliver_pointer`. Keys carry no position, so
    /// `HitChildren` forwards to every active direct child.
    pub(crate) fn deliver_keys(
        &mut self,
        target: NodeId,
        keys: &KeySnapshot,
        captures: &mut Captures,
        signals: &mut Signals,
    ) {
        let Some(node) = self.nodes.get_mut(target) else { return };
        if !node.active {
            return;
        }

        let mut ctx = UiCtx::new(target, node.rect(), captures, signals);
        if node.widget.on_key(keys, &mut ctx) == Propagation::Stop {
            return;
        }

        let children = node.children.clone();
        for child in children {
            self.deliver_keys(child, keys, captures, signals);
        }
    }

    // ── removal ───────────────────────────────────────────────────────────

    /// Removes `id` and its whole subtree. Returns the number of removed nodes.
    pub fn remove(&mut self, id: NodeId) -> Result<usize, TreeError> {
        if id == self.root {
            return Err(TreeError::RootRemoval);
        }
        if !self.nodes.contains_key(id) {
            return Err(TreeError::UnknownNode(id));
        }
        Ok(self.remove_subtree(id))
    }

    /// Removes every inactive node together with its subtree.
    ///
    /// Surviving handles stay valid. The root is never removed; an inactive
    /// root only produces a warning.
    pub fn sweep_inactive(&mut self) -> usize {
        let root = self.root;
        if self.nodes.get(root).is_some_and(|n| !n.active) && !self.warned_inactive_root {
            log::warn!("root node is inactive; the root is never swept");
            self.warned_inactive_root = true;
        }

        let doomed: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(id, n)| *id != root && !n.active)
            .map(|(id, _)| id)
            .collect();

        let mut removed = 0;
        for id in doomed {
            // An earlier iteration may already have taken it with an ancestor.
            if self.nodes.contains_key(id) {
                removed += self.remove_subtree(id);
            }
        }

        if removed > 0 {
            log::debug!("swept {removed} inactive node(s)");
        }
        removed
    }

    fn remove_subtree(&mut self, id: NodeId) -> usize {
        if let Some(parent) = self.parent(id) {
            if let Some(p) = self.nodes.get_mut(parent) {
                p.children.retain(|&c| c != id);
            }
        }

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use sprig_engine::paint::Color;
    use sprig_engine::scene::{DrawCmd, DrawList};

    use super::*;
    use crate::widgets::AbsoluteLayout;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    /// Leaf that records updates and paints a 1:1 colored rect.
    struct Probe {
        name: &'static str,
        log: Log,
        color: Color,
    }

    impl Widget for Probe {
        fn update(&mut self, _ctx: &mut UiCtx<'_>) {
            self.log.borrow_mut().push(self.name);
        }

        fn draw(&self, painter: &mut Painter<'_>, rect: Rect) {
            painter.fill_rect(rect, self.color);
        }
    }

    fn probe(name: &'static str, log: &Log) -> Probe {
        Probe { name, log: log.clone(), color: Color::BLACK }
    }

    fn run_update(tree: &mut Tree) -> Signals {
        let mut captures = Captures::default();
        let mut signals = Signals::new();
        tree.update(&mut captures, &mut signals);
        signals
    }

    fn container_at(x: f32, y: f32) -> Tree {
        Tree::new(AbsoluteLayout::new(), Vec2::new(x, y), Size::new(200.0, 200.0))
    }

    // ── layout propagation ────────────────────────────────────────────────

    #[test]
    fn child_absolute_is_relative_plus_container() {
        let mut tree = container_at(10.0, 20.0);
        let child = tree
            .add_child(tree.root(), Vec2::new(5.0, 5.0), Size::new(10.0, 10.0), AbsoluteLayout::new())
            .unwrap();

        run_update(&mut tree);
        assert_eq!(tree.absolute_position(child), Some(Vec2::new(15.0, 25.0)));
    }

    #[test]
    fn grandchild_converges_in_one_update() {
        let mut tree = container_at(10.0, 20.0);
        let inner = tree
            .add_child(tree.root(), Vec2::new(5.0, 5.0), Size::new(50.0, 50.0), AbsoluteLayout::new())
            .unwrap();
        let leaf = tree
            .add_child(inner, Vec2::new(1.0, 2.0), Size::new(5.0, 5.0), AbsoluteLayout::new())
            .unwrap();

        // Move the outer container after construction so provisional
        // positions are stale.
        tree.set_relative_position(tree.root(), Vec2::new(100.0, 100.0)).unwrap();
        run_update(&mut tree);

        assert_eq!(tree.absolute_position(inner), Some(Vec2::new(105.0, 105.0)));
        assert_eq!(tree.absolute_position(leaf), Some(Vec2::new(106.0, 107.0)));
    }

    #[test]
    fn root_absolute_equals_relative() {
        let tree = container_at(3.0, 4.0);
        assert_eq!(tree.absolute_position(tree.root()), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(tree.parent(tree.root()), None);
    }

    #[test]
    fn non_layout_parent_does_not_move_children() {
        let log: Log = Rc::default();
        let mut tree = Tree::new(probe("root", &log), Vec2::new(50.0, 50.0), Size::new(10.0, 10.0));
        let child = tree
            .add_child(tree.root(), Vec2::new(1.0, 1.0), Size::new(1.0, 1.0), probe("c", &log))
            .unwrap();
        tree.set_relative_position(tree.root(), Vec2::new(0.0, 0.0)).unwrap();

        run_update(&mut tree);
        // provisional position from add_child is kept
        assert_eq!(tree.absolute_position(child), Some(Vec2::new(51.0, 51.0)));
    }

    // ── traversal order ───────────────────────────────────────────────────

    #[test]
    fn update_is_preorder_in_list_order() {
        let log: Log = Rc::default();
        let mut tree = Tree::new(probe("root", &log), Vec2::zero(), Size::new(10.0, 10.0));
        let a = tree.add_child(tree.root(), Vec2::zero(), Size::zero(), probe("a", &log)).unwrap();
        tree.add_child(a, Vec2::zero(), Size::zero(), probe("a1", &log)).unwrap();
        tree.add_child(a, Vec2::zero(), Size::zero(), probe("a2", &log)).unwrap();
        tree.add_child(tree.root(), Vec2::zero(), Size::zero(), probe("b", &log)).unwrap();

        run_update(&mut tree);
        assert_eq!(*log.borrow(), vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn full_draw_reaches_grandchildren_in_preorder() {
        let log: Log = Rc::default();
        let mut tree = Tree::new(AbsoluteLayout::new(), Vec2::zero(), Size::new(100.0, 100.0));
        let mid = tree
            .add_child(
                tree.root(),
                Vec2::new(10.0, 10.0),
                Size::new(50.0, 50.0),
                Probe { name: "mid", log: log.clone(), color: Color::BLUE },
            )
            .unwrap();
        tree.add_child(
            mid,
            Vec2::new(1.0, 1.0),
            Size::new(5.0, 5.0),
            Probe { name: "deep", log: log.clone(), color: Color::LIME },
        )
        .unwrap();
        run_update(&mut tree);

        let mut dl = DrawList::new();
        tree.full_draw(&mut Painter::new(&mut dl));

        let colors: Vec<Color> = dl
            .items()
            .iter()
            .map(|DrawCmd::RoundedRect(r)| r.color)
            .collect();
        assert_eq!(colors, vec![Color::BLUE, Color::LIME]);
    }

    #[test]
    fn inactive_subtree_is_skipped() {
        let log: Log = Rc::default();
        let mut tree = Tree::new(probe("root", &log), Vec2::zero(), Size::new(10.0, 10.0));
        let a = tree.add_child(tree.root(), Vec2::zero(), Size::new(1.0, 1.0), probe("a", &log)).unwrap();
        tree.add_child(a, Vec2::zero(), Size::new(1.0, 1.0), probe("a1", &log)).unwrap();
        tree.set_active(a, false).unwrap();

        run_update(&mut tree);
        assert_eq!(*log.borrow(), vec!["root"]);

        let mut dl = DrawList::new();
        tree.full_draw(&mut Painter::new(&mut dl));
        assert_eq!(dl.len(), 1);
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn hit_test_excludes_edges() {
        let tree = container_at(10.0, 20.0);
        let root = tree.root();
        assert!(tree.hit_test(root, Vec2::new(11.0, 21.0)));
        assert!(!tree.hit_test(root, Vec2::new(10.0, 50.0)));
        assert!(!tree.hit_test(root, Vec2::new(210.0, 50.0)));
        assert!(!tree.hit_test(root, Vec2::new(50.0, 220.0)));
    }

    // ── construction / errors ─────────────────────────────────────────────

    #[test]
    fn add_child_links_both_directions() {
        let mut tree = container_at(0.0, 0.0);
        let a = tree.add_child(tree.root(), Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        let b = tree.add_child(tree.root(), Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();

        assert_eq!(tree.children(tree.root()), &[a, b]);
        assert_eq!(tree.parent(a), Some(tree.root()));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn add_child_to_unknown_parent_fails() {
        let mut tree = container_at(0.0, 0.0);
        let gone = tree.add_child(tree.root(), Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        tree.remove(gone).unwrap();

        let err = tree
            .add_child(gone, Vec2::zero(), Size::zero(), AbsoluteLayout::new())
            .unwrap_err();
        assert_eq!(err, TreeError::UnknownNode(gone));
    }

    #[test]
    fn root_cannot_be_removed() {
        let mut tree = container_at(0.0, 0.0);
        assert_eq!(tree.remove(tree.root()), Err(TreeError::RootRemoval));
        assert_eq!(TreeError::RootRemoval.to_string(), "the root node cannot be removed");
    }

    #[test]
    fn typed_widget_access() {
        let log: Log = Rc::default();
        let mut tree = container_at(0.0, 0.0);
        let p = tree.add_child(tree.root(), Vec2::zero(), Size::zero(), probe("p", &log)).unwrap();

        assert!(tree.widget::<AbsoluteLayout>(tree.root()).is_some());
        assert!(tree.widget::<Probe>(tree.root()).is_none());
        tree.widget_mut::<Probe>(p).unwrap().name = "renamed";
        assert_eq!(tree.widget::<Probe>(p).unwrap().name, "renamed");
    }

    // ── sweep ─────────────────────────────────────────────────────────────

    #[test]
    fn sweep_removes_whole_inactive_subtrees() {
        let mut tree = container_at(0.0, 0.0);
        let keep = tree.add_child(tree.root(), Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        let doomed = tree.add_child(tree.root(), Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        let doomed_child = tree.add_child(doomed, Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        let keep_child = tree.add_child(keep, Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        tree.set_active(doomed, false).unwrap();

        assert_eq!(tree.sweep_inactive(), 2);
        assert!(!tree.contains(doomed));
        assert!(!tree.contains(doomed_child));
        assert_eq!(tree.children(tree.root()), &[keep]);
        assert_eq!(tree.parent(keep_child), Some(keep));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn sweep_handles_nested_inactive_nodes() {
        let mut tree = container_at(0.0, 0.0);
        let a = tree.add_child(tree.root(), Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        let b = tree.add_child(a, Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        tree.set_active(a, false).unwrap();
        tree.set_active(b, false).unwrap();

        assert_eq!(tree.sweep_inactive(), 2);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn sweep_never_removes_root() {
        let mut tree = container_at(0.0, 0.0);
        tree.set_active(tree.root(), false).unwrap();
        assert_eq!(tree.sweep_inactive(), 0);
        assert!(tree.contains(tree.root()));
    }

    #[test]
    fn reachability_follows_ancestors() {
        let mut tree = container_at(0.0, 0.0);
        let a = tree.add_child(tree.root(), Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        let b = tree.add_child(a, Vec2::zero(), Size::zero(), AbsoluteLayout::new()).unwrap();
        assert!(tree.is_reachable(b));

        tree.set_active(a, false).unwrap();
        assert!(tree.is_active(b));
        assert!(!tree.is_reachable(b));
    }

    #[test]
    fn update_emits_nothing_on_its_own() {
        let mut tree = container_at(0.0, 0.0);
        assert!(run_update(&mut tree).is_empty());
    }
}
