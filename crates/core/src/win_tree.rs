//! The recursive split tree that lays out the windows of one workspace.
//!
//! A [`WinTree`] node is either a `Leaf` (holding at most one [`Win`]) or
//! an `Internal` node that divides its rectangle among an arbitrary
//! number of children, alternating horizontal/vertical splits as new
//! containers are created. Nodes carry no parent pointer — `parent_of`
//! and `remove_subtree` search top-down from the root instead. For a
//! tree the size a single workspace ever holds this is simpler than
//! threading `Weak` back-references through an owning enum, and fast
//! enough that it never shows up in a profile.

use crate::utils::win32::WindowHandle;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{DirectorError, Result};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity for a node in a [`WinTree`], used because the tree
/// itself holds no parent pointers.
pub type NodeId = u64;

fn next_node_id() -> NodeId {
    NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed)
}

/// A rectangle with position and dimensions, in monitor/screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Split into `n` equal left-to-right strips.
    pub fn split_horizontal_n(&self, n: i32) -> Vec<Rect> {
        if n <= 0 {
            return Vec::new();
        }
        let base = self.width / n;
        let remainder = self.width % n;
        let mut x = self.x;
        (0..n)
            .map(|i| {
                let w = base + if i < remainder { 1 } else { 0 };
                let rect = Rect::new(x, self.y, w, self.height);
                x += w;
                rect
            })
            .collect()
    }

    /// Split into `n` equal top-to-bottom strips.
    pub fn split_vertical_n(&self, n: i32) -> Vec<Rect> {
        if n <= 0 {
            return Vec::new();
        }
        let base = self.height / n;
        let remainder = self.height % n;
        let mut y = self.y;
        (0..n)
            .map(|i| {
                let h = base + if i < remainder { 1 } else { 0 };
                let rect = Rect::new(self.x, y, self.width, h);
                y += h;
                rect
            })
            .collect()
    }

    /// Shrink on all sides, used to carve inner gaps between tiled cells.
    pub fn shrink(&self, amount: i32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2 * amount).max(0),
            (self.height - 2 * amount).max(0),
        )
    }
}

/// Split direction of an internal node: `Horizontal` arranges children
/// left-to-right, `Vertical` arranges them top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMode {
    Horizontal,
    Vertical,
}

impl SplitMode {
    pub fn opposite(self) -> SplitMode {
        match self {
            SplitMode::Horizontal => SplitMode::Vertical,
            SplitMode::Vertical => SplitMode::Horizontal,
        }
    }
}

/// Sibling-ordering direction used by [`WinTree::neighbour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighbourDir {
    Previous,
    Next,
}

/// The managed state of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinState {
    Normal,
    Maximized,
    Minimized,
}

/// A window placed in the tree.
#[derive(Debug, Clone, Copy)]
pub struct Win {
    pub handle: WindowHandle,
    pub state: WinState,
    pub floating: bool,
    pub rect: Rect,
}

impl Win {
    pub fn new(handle: WindowHandle, rect: Rect) -> Self {
        Win {
            handle,
            state: WinState::Normal,
            floating: false,
            rect,
        }
    }
}

/// A node of the recursive split tree: either a leaf holding at most
/// one window, or an internal node dividing space among children.
#[derive(Debug, Clone)]
pub enum WinTree {
    Leaf {
        id: NodeId,
        win: Option<Win>,
    },
    Internal {
        id: NodeId,
        mode: SplitMode,
        children: Vec<WinTree>,
    },
}

impl WinTree {
    /// A fresh, empty leaf — the initial shape of every new workspace.
    pub fn empty_leaf() -> Self {
        WinTree::Leaf {
            id: next_node_id(),
            win: None,
        }
    }

    pub fn leaf(win: Win) -> Self {
        WinTree::Leaf {
            id: next_node_id(),
            win: Some(win),
        }
    }

    pub fn internal(mode: SplitMode, children: Vec<WinTree>) -> Self {
        WinTree::Internal {
            id: next_node_id(),
            mode,
            children,
        }
    }

    pub fn id(&self) -> NodeId {
        match self {
            WinTree::Leaf { id, .. } => *id,
            WinTree::Internal { id, .. } => *id,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, WinTree::Leaf { .. })
    }

    pub fn win(&self) -> Option<&Win> {
        match self {
            WinTree::Leaf { win, .. } => win.as_ref(),
            WinTree::Internal { .. } => None,
        }
    }

    pub fn win_mut(&mut self) -> Option<&mut Win> {
        match self {
            WinTree::Leaf { win, .. } => win.as_mut(),
            WinTree::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> &[WinTree] {
        match self {
            WinTree::Leaf { .. } => &[],
            WinTree::Internal { children, .. } => children,
        }
    }

    /// Pre-order visit of every node in the subtree, root first.
    pub fn traverse<'a>(&'a self, f: &mut dyn FnMut(&'a WinTree)) {
        f(self);
        for child in self.children() {
            child.traverse(f);
        }
    }

    /// Find the node with the given id anywhere in this subtree.
    pub fn find(&self, id: NodeId) -> Option<&WinTree> {
        if self.id() == id {
            return Some(self);
        }
        for child in self.children() {
            if let Some(found) = child.find(id) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut WinTree> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            WinTree::Internal { children, .. } => {
                for child in children.iter_mut() {
                    if let Some(found) = child.find_mut(id) {
                        return Some(found);
                    }
                }
                None
            }
            WinTree::Leaf { .. } => None,
        }
    }

    /// Append `child` to the internal node identified by `parent_id`.
    pub fn add_child(&mut self, parent_id: NodeId, child: WinTree) -> Result<()> {
        match self.find_mut(parent_id) {
            Some(WinTree::Internal { children, .. }) => {
                children.push(child);
                Ok(())
            }
            Some(WinTree::Leaf { .. }) => Err(DirectorError::InvalidState(
                "add_child target is a leaf, not an internal node".into(),
            )),
            None => Err(DirectorError::InvalidState(format!(
                "no node with id {parent_id}"
            ))),
        }
    }

    /// Turn the leaf identified by `leaf_id` into an internal node with
    /// two children: the leaf's previous content, and `new_win`. Returns
    /// the id of the newly created leaf holding `new_win`.
    pub fn split_leaf(&mut self, leaf_id: NodeId, new_win: Win, mode: SplitMode) -> Result<NodeId> {
        let node = self
            .find_mut(leaf_id)
            .ok_or_else(|| DirectorError::InvalidState(format!("no node with id {leaf_id}")))?;

        let WinTree::Leaf { win, .. } = node else {
            return Err(DirectorError::InvalidState(
                "split_leaf target is not a leaf".into(),
            ));
        };

        let new_leaf = WinTree::leaf(new_win);
        let new_leaf_id = new_leaf.id();

        if let Some(existing) = win.take() {
            let old_leaf = WinTree::leaf(existing);
            *node = WinTree::internal(mode, vec![old_leaf, new_leaf]);
        } else {
            // Leaf was empty (the workspace's initial placeholder): just fill it.
            *win = Some(new_win);
            return Ok(leaf_id);
        }

        Ok(new_leaf_id)
    }

    /// Detach and return the subtree rooted at `id`. The root of `self`
    /// can never be removed this way — callers that want to clear the
    /// whole workspace should replace the root directly.
    pub fn remove_subtree(&mut self, id: NodeId) -> Result<WinTree> {
        match self {
            WinTree::Internal { children, .. } => {
                if let Some(pos) = children.iter().position(|c| c.id() == id) {
                    return Ok(children.remove(pos));
                }
                for child in children.iter_mut() {
                    if let Ok(removed) = child.remove_subtree(id) {
                        return Ok(removed);
                    }
                }
                Err(DirectorError::InvalidState(format!(
                    "no node with id {id}"
                )))
            }
            WinTree::Leaf { .. } => Err(DirectorError::InvalidState(format!(
                "no node with id {id}"
            ))),
        }
    }

    /// Find the id of the internal node that directly owns `id`, by
    /// searching top-down from the root. `None` if `id` is the root or
    /// doesn't exist.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        match self {
            WinTree::Internal {
                id: self_id,
                children,
                ..
            } => {
                if children.iter().any(|c| c.id() == id) {
                    return Some(*self_id);
                }
                children.iter().find_map(|c| c.parent_of(id))
            }
            WinTree::Leaf { .. } => None,
        }
    }

    /// Whether a window with this handle appears anywhere in the subtree.
    pub fn contains_win(&self, handle: WindowHandle) -> bool {
        let mut found = false;
        self.traverse(&mut |node| {
            if let Some(win) = node.win() {
                if win.handle == handle {
                    found = true;
                }
            }
        });
        found
    }

    /// True if this subtree holds no window. With `deep` set, recurses
    /// all the way down; otherwise only this node's own window (for a
    /// leaf) or its immediate children's windows (for an internal node,
    /// not recursing past them) are checked — an internal child counts
    /// as occupying, whatever it holds further down.
    pub fn is_empty(&self, deep: bool) -> bool {
        match self {
            WinTree::Leaf { win, .. } => win.is_none(),
            WinTree::Internal { children, .. } => {
                if deep {
                    children.iter().all(|c| c.is_empty(true))
                } else {
                    children.iter().all(|c| match c {
                        WinTree::Leaf { win, .. } => win.is_none(),
                        WinTree::Internal { .. } => false,
                    })
                }
            }
        }
    }

    /// The sibling of `id` in the parent's child list, in the requested
    /// direction. If the step would run off either end, wraps around when
    /// `rolling` is true and returns `None` otherwise. `None` if `id` is the
    /// root or has no siblings.
    pub fn neighbour(&self, id: NodeId, dir: NeighbourDir, rolling: bool) -> Option<NodeId> {
        let parent_id = self.parent_of(id)?;
        let parent = self.find(parent_id)?;
        let siblings = parent.children();
        let pos = siblings.iter().position(|c| c.id() == id)?;

        if siblings.len() <= 1 {
            return None;
        }

        let next_pos = match dir {
            NeighbourDir::Next if pos + 1 < siblings.len() => Some(pos + 1),
            NeighbourDir::Next if rolling => Some(0),
            NeighbourDir::Next => None,
            NeighbourDir::Previous if pos > 0 => Some(pos - 1),
            NeighbourDir::Previous if rolling => Some(siblings.len() - 1),
            NeighbourDir::Previous => None,
        };

        next_pos.map(|i| siblings[i].id())
    }

    /// The id of the internal node directly owning `id`, found by walking
    /// top-down from the root. Unlike [`Self::parent_of`] this also returns
    /// every further ancestor, root-first, for callers that need to walk up
    /// the tree (e.g. to find the nearest ancestor with a given split mode).
    pub fn ancestors_of(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// The leaf holding a window with the given handle, if any.
    pub fn find_by_handle(&self, handle: WindowHandle) -> Option<NodeId> {
        let mut result = None;
        self.traverse(&mut |node| {
            if result.is_none() {
                if let Some(win) = node.win() {
                    if win.handle == handle {
                        result = Some(node.id());
                    }
                }
            }
        });
        result
    }

    /// The first leaf (pre-order) in this subtree that holds a window.
    pub fn first_leaf_with_win(&self) -> Option<NodeId> {
        let mut result = None;
        self.traverse(&mut |node| {
            if result.is_none() && node.win().is_some() {
                result = Some(node.id());
            }
        });
        result
    }

    /// Turn the leaf identified by `leaf_id` into an internal node of the
    /// given split mode, containing the leaf's previous content as its sole
    /// child. The child reuses `leaf_id` so any outstanding focus pointer to
    /// it stays valid; the new internal node gets a freshly minted id.
    pub fn wrap_leaf(&mut self, leaf_id: NodeId, mode: SplitMode) -> Result<()> {
        let node = self
            .find_mut(leaf_id)
            .ok_or_else(|| DirectorError::InvalidState(format!("no node with id {leaf_id}")))?;

        let WinTree::Leaf { win, .. } = node else {
            return Err(DirectorError::InvalidState(
                "wrap_leaf target is not a leaf".into(),
            ));
        };

        let child = WinTree::Leaf {
            id: leaf_id,
            win: win.take(),
        };
        *node = WinTree::Internal {
            id: next_node_id(),
            mode,
            children: vec![child],
        };
        Ok(())
    }

    /// Remove internal nodes that no longer hold any window, collapsing
    /// single-child internal nodes into their remaining child. Leaves are
    /// never removed by this pass — an empty leaf at the root is the
    /// normal shape of a workspace with no windows.
    pub fn reorg(self) -> WinTree {
        match self {
            WinTree::Leaf { .. } => self,
            WinTree::Internal { id, mode, children } => {
                let mut reorged: Vec<WinTree> = children.into_iter().map(|c| c.reorg()).collect();
                reorged.retain(|c| !(c.is_leaf() && c.win().is_none()));

                match reorged.len() {
                    0 => WinTree::Leaf { id, win: None },
                    1 => reorged.pop().unwrap(),
                    _ => WinTree::Internal {
                        id,
                        mode,
                        children: reorged,
                    },
                }
            }
        }
    }

    /// The id of the single maximized leaf in this subtree, if any.
    /// Per the workspace invariant there is at most one at a time.
    pub fn maximized(&self) -> Option<NodeId> {
        let mut result = None;
        self.traverse(&mut |node| {
            if let Some(win) = node.win() {
                if win.state == WinState::Maximized {
                    result = Some(node.id());
                }
            }
        });
        result
    }

    /// True if any window in this subtree currently has `state`.
    pub fn any_win_has_state(&self, state: WinState) -> bool {
        let mut found = false;
        self.traverse(&mut |node| {
            if let Some(win) = node.win() {
                if win.state == state {
                    found = true;
                }
            }
        });
        found
    }

    /// Resets every window in this subtree currently in `from` to `to`.
    pub fn replace_state(&mut self, from: WinState, to: WinState) {
        match self {
            WinTree::Leaf { win: Some(w), .. } => {
                if w.state == from {
                    w.state = to;
                }
            }
            WinTree::Leaf { win: None, .. } => {}
            WinTree::Internal { children, .. } => {
                for child in children.iter_mut() {
                    child.replace_state(from, to);
                }
            }
        }
    }

    /// First window (in pre-order) whose rect contains the point.
    pub fn win_at_point(&self, x: i32, y: i32) -> Option<&Win> {
        match self {
            WinTree::Leaf { win, .. } => win.as_ref().filter(|w| w.rect.contains_point(x, y)),
            WinTree::Internal { children, .. } => {
                children.iter().find_map(|c| c.win_at_point(x, y))
            }
        }
    }

    /// True if this subtree contains at least one non-minimized window,
    /// i.e. it should be given screen space during `arrange`.
    fn occupies_space(&self) -> bool {
        match self {
            WinTree::Leaf { win, .. } => matches!(win, Some(w) if w.state != WinState::Minimized),
            WinTree::Internal { children, .. } => children.iter().any(|c| c.occupies_space()),
        }
    }

    /// Recursively divide `rect` among this subtree's windows. Leaves
    /// holding a minimized window are skipped (excluded from division
    /// and left at their previous rect); everything else gets an equal
    /// share, minus `gaps_in` between cells.
    ///
    /// A maximized leaf overrides all of this: per the workspace
    /// invariant there is at most one, and it takes the entire `rect`
    /// regardless of its depth in the tree, gaps included. Every other
    /// leaf is left untouched at its previous rect, same as a minimized
    /// one — they own no screen space while something is maximized.
    pub fn arrange(&mut self, rect: Rect, gaps_in: i32) {
        if let Some(max_id) = self.maximized() {
            if let Some(node) = self.find_mut(max_id) {
                if let Some(w) = node.win_mut() {
                    w.rect = rect;
                }
            }
            return;
        }

        match self {
            WinTree::Leaf { win, .. } => {
                if let Some(w) = win {
                    if w.state != WinState::Minimized {
                        w.rect = rect.shrink(gaps_in / 2);
                    }
                }
            }
            WinTree::Internal { mode, children, .. } => {
                let active: Vec<usize> = children
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.occupies_space())
                    .map(|(i, _)| i)
                    .collect();

                if active.is_empty() {
                    return;
                }

                let slots = match mode {
                    SplitMode::Horizontal => rect.split_horizontal_n(active.len() as i32),
                    SplitMode::Vertical => rect.split_vertical_n(active.len() as i32),
                };

                for (slot, &idx) in slots.into_iter().zip(active.iter()) {
                    children[idx].arrange(slot, gaps_in);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::Foundation::HWND;

    fn handle(n: isize) -> WindowHandle {
        WindowHandle::from_hwnd(HWND(n as _))
    }

    fn win(n: isize) -> Win {
        Win::new(handle(n), Rect::new(0, 0, 0, 0))
    }

    #[test]
    fn split_leaf_fills_empty_root() {
        let mut root = WinTree::empty_leaf();
        let root_id = root.id();
        let new_id = root.split_leaf(root_id, win(1), SplitMode::Horizontal).unwrap();
        assert_eq!(new_id, root_id);
        assert!(root.is_leaf());
        assert_eq!(root.win().unwrap().handle, handle(1));
    }

    #[test]
    fn split_leaf_converts_occupied_leaf_to_internal() {
        let mut root = WinTree::leaf(win(1));
        let root_id = root.id();
        let new_id = root.split_leaf(root_id, win(2), SplitMode::Horizontal).unwrap();
        assert!(!root.is_leaf());
        assert_eq!(root.children().len(), 2);
        assert!(root.find(new_id).unwrap().win().unwrap().handle == handle(2));
    }

    #[test]
    fn parent_of_and_remove_subtree() {
        let mut root = WinTree::leaf(win(1));
        let root_id = root.id();
        let second_id = root.split_leaf(root_id, win(2), SplitMode::Horizontal).unwrap();

        assert_eq!(root.parent_of(second_id), Some(root_id));
        assert_eq!(root.parent_of(root_id), None);

        let removed = root.remove_subtree(second_id).unwrap();
        assert_eq!(removed.win().unwrap().handle, handle(2));
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn neighbour_rolls_around() {
        let mut root = WinTree::leaf(win(1));
        let root_id = root.id();
        let id2 = root.split_leaf(root_id, win(2), SplitMode::Horizontal).unwrap();
        let id1 = root.children()[0].id();

        let id3 = {
            let parent_id = root.id();
            root.add_child(parent_id, WinTree::leaf(win(3))).unwrap();
            root.children().last().unwrap().id()
        };

        assert_eq!(root.neighbour(id1, NeighbourDir::Next, true), Some(id2));
        assert_eq!(root.neighbour(id3, NeighbourDir::Next, true), Some(id1));
        assert_eq!(root.neighbour(id1, NeighbourDir::Previous, true), Some(id3));

        // Non-rolling: stepping past the last sibling yields None.
        assert_eq!(root.neighbour(id3, NeighbourDir::Next, false), None);
        assert_eq!(root.neighbour(id1, NeighbourDir::Previous, false), None);
        assert_eq!(root.neighbour(id1, NeighbourDir::Next, false), Some(id2));
    }

    #[test]
    fn reorg_collapses_emptied_subtree() {
        let mut root = WinTree::leaf(win(1));
        let root_id = root.id();
        let id2 = root.split_leaf(root_id, win(2), SplitMode::Horizontal).unwrap();
        root.remove_subtree(id2).unwrap();

        // One empty leaf remains alongside the occupied one; reorg should
        // drop it and collapse the internal node down to the single leaf.
        let reorged = root.reorg();
        assert!(reorged.is_leaf());
        assert_eq!(reorged.win().unwrap().handle, handle(1));
    }

    #[test]
    fn is_empty_deep_and_shallow() {
        let mut root = WinTree::leaf(win(1));
        let root_id = root.id();
        root.split_leaf(root_id, win(2), SplitMode::Horizontal).unwrap();
        assert!(!root.is_empty(true));
        assert!(!root.is_empty(false));

        let empty = WinTree::internal(
            SplitMode::Horizontal,
            vec![WinTree::empty_leaf(), WinTree::empty_leaf()],
        );
        assert!(empty.is_empty(true));
        assert!(empty.is_empty(false));

        // A container whose only child is itself empty several levels
        // down: deep sees through it, shallow does not (an internal
        // immediate child always counts as occupying).
        let nested = WinTree::internal(
            SplitMode::Horizontal,
            vec![WinTree::internal(
                SplitMode::Vertical,
                vec![WinTree::empty_leaf()],
            )],
        );
        assert!(nested.is_empty(true));
        assert!(!nested.is_empty(false));
    }

    #[test]
    fn arrange_divides_equally_and_skips_minimized() {
        let mut root = WinTree::leaf(win(1));
        let root_id = root.id();
        root.split_leaf(root_id, win(2), SplitMode::Horizontal).unwrap();

        if let WinTree::Internal { children, .. } = &mut root {
            children[1].win_mut().unwrap().state = WinState::Minimized;
        }

        root.arrange(Rect::new(0, 0, 1000, 500), 0);

        if let WinTree::Internal { children, .. } = &root {
            // Only one active child, so it gets the whole rect.
            assert_eq!(children[0].win().unwrap().rect.width, 1000);
        } else {
            panic!("expected internal node");
        }
    }

    #[test]
    fn maximized_and_win_at_point() {
        let mut root = WinTree::leaf(win(1));
        let root_id = root.id();
        root.split_leaf(root_id, win(2), SplitMode::Horizontal).unwrap();
        root.arrange(Rect::new(0, 0, 100, 100), 0);

        assert_eq!(root.maximized(), None);
        if let WinTree::Internal { children, .. } = &mut root {
            children[0].win_mut().unwrap().state = WinState::Maximized;
        }
        let max_id = root.maximized().unwrap();
        assert_eq!(root.find(max_id).unwrap().win().unwrap().handle, handle(1));

        assert!(root.win_at_point(0, 0).is_some());
        assert!(root.win_at_point(10_000, 10_000).is_none());
    }

    #[test]
    fn arrange_gives_maximized_leaf_the_full_rect_and_leaves_siblings_untouched() {
        let mut root = WinTree::leaf(win(1));
        let root_id = root.id();
        root.split_leaf(root_id, win(2), SplitMode::Horizontal).unwrap();

        let full = Rect::new(0, 0, 1000, 500);
        root.arrange(full, 0);

        // Before toggling fullscreen, both windows share the rect equally.
        if let WinTree::Internal { children, .. } = &root {
            assert_eq!(children[0].win().unwrap().rect.width, 500);
            assert_eq!(children[1].win().unwrap().rect.width, 500);
        } else {
            panic!("expected internal node");
        }

        let other_rect_before = if let WinTree::Internal { children, .. } = &root {
            children[1].win().unwrap().rect
        } else {
            unreachable!()
        };

        if let WinTree::Internal { children, .. } = &mut root {
            children[0].win_mut().unwrap().state = WinState::Maximized;
        }
        root.arrange(full, 0);

        if let WinTree::Internal { children, .. } = &root {
            let maximized = children[0].win().unwrap();
            assert_eq!(maximized.rect, full);

            // The non-maximized sibling is not redrawn into the gap left
            // behind; it keeps whatever rect it last had.
            assert_eq!(children[1].win().unwrap().rect, other_rect_before);
        } else {
            panic!("expected internal node");
        }
    }
}
