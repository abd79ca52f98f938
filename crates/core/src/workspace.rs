//! A workspace owns one split tree and the floating windows that sit
//! outside it. [`WsManager`] is the per-monitor collection of workspaces,
//! built through a pluggable [`WorkspaceFactory`] and defaulted through a
//! pluggable [`WorkspaceSwitcher`] — the two seams the spec calls out as
//! externally supplied collaborators.

use crate::error::{DirectorError, Result};
use crate::utils::win32::WindowHandle;
use crate::win_tree::{NeighbourDir, NodeId, Rect, SplitMode, Win, WinState, WinTree};

/// Motion direction for cross-container and cross-monitor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The split axis a container must have for this direction to make
    /// sense as "a neighbour in this container": up/down move vertically,
    /// left/right move horizontally.
    pub fn axis(self) -> SplitMode {
        match self {
            Direction::Up | Direction::Down => SplitMode::Vertical,
            Direction::Left | Direction::Right => SplitMode::Horizontal,
        }
    }

    /// Up/Left step toward the previous sibling; Down/Right toward the next.
    pub fn neighbour_dir(self) -> NeighbourDir {
        match self {
            Direction::Up | Direction::Left => NeighbourDir::Previous,
            Direction::Down | Direction::Right => NeighbourDir::Next,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A named virtual desktop bound to one monitor: one split tree, a focus
/// pointer into it, and a list of windows excluded from tiling.
#[derive(Debug)]
pub struct Workspace {
    name: String,
    root: WinTree,
    focused: Option<NodeId>,
    floating: Vec<Win>,
    area: Rect,
}

impl Workspace {
    /// A fresh, empty workspace over `area`. The root starts as a single
    /// empty leaf; the workspace's default split mode (used the first time
    /// a second window needs a container) is horizontal.
    pub fn new(name: impl Into<String>, area: Rect) -> Self {
        Workspace {
            name: name.into(),
            root: WinTree::empty_leaf(),
            focused: None,
            floating: Vec::new(),
            area,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn root(&self) -> &WinTree {
        &self.root
    }

    pub fn floating(&self) -> &[Win] {
        &self.floating
    }

    /// True if any window in this workspace, tiled or floating, has `state`.
    pub fn any_win_has_state(&self, state: WinState) -> bool {
        self.floating.iter().any(|w| w.state == state) || self.root.any_win_has_state(state)
    }

    /// Resets every window in this workspace currently in `from` to `to`.
    pub fn replace_state(&mut self, from: WinState, to: WinState) {
        for w in self.floating.iter_mut() {
            if w.state == from {
                w.state = to;
            }
        }
        self.root.replace_state(from, to);
    }

    /// True if neither the tree nor the floating list holds a window.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty(true) && self.floating.is_empty()
    }

    /// Insert `win` into the workspace. If a window is already focused,
    /// `win` becomes a new sibling inside the focused window's container
    /// (or, if the focused leaf is the bare root with no container yet,
    /// the root is wrapped into one using `default_split`). If nothing is
    /// focused the workspace was empty, so `win` just fills the root leaf.
    /// The new window becomes focused.
    pub fn add_win(&mut self, win: Win, default_split: SplitMode) -> Result<()> {
        let new_id = match self.focused {
            None => {
                self.root = WinTree::leaf(win);
                self.root.id()
            }
            Some(focused_id) => match self.root.parent_of(focused_id) {
                Some(parent_id) => {
                    let new_leaf = WinTree::leaf(win);
                    let new_id = new_leaf.id();
                    self.root.add_child(parent_id, new_leaf)?;
                    new_id
                }
                None => {
                    // Focused leaf is the root itself: no container exists
                    // yet, so create one in the workspace's default mode.
                    self.root.wrap_leaf(focused_id, default_split)?;
                    let new_leaf = WinTree::leaf(win);
                    let new_id = new_leaf.id();
                    self.root.add_child(self.root.id(), new_leaf)?;
                    new_id
                }
            },
        };
        self.focused = Some(new_id);
        Ok(())
    }

    /// Detach and return the leaf holding `handle` from the tiled tree,
    /// reorg the tree, and move focus to the pre-order successor leaf with
    /// a window (or clear it if none remain). Does not look at the
    /// floating list — callers that don't already know which side `handle`
    /// is on should go through [`Self::remove_win`].
    fn take_tiled(&mut self, handle: WindowHandle) -> Result<Win> {
        let id = self
            .root
            .find_by_handle(handle)
            .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))?;

        let removed = if self.root.id() == id {
            // `id` is the root itself (a lone leaf): take it directly,
            // since `remove_subtree` only detaches from inside a parent.
            std::mem::replace(&mut self.root, WinTree::empty_leaf())
        } else {
            self.root.remove_subtree(id)?
        };

        self.root = std::mem::replace(&mut self.root, WinTree::empty_leaf()).reorg();

        let focus_still_valid = self.focused.map_or(false, |f| self.root.find(f).is_some());
        if !focus_still_valid {
            self.focused = self.root.first_leaf_with_win();
        }

        match removed {
            WinTree::Leaf { win: Some(w), .. } => Ok(w),
            _ => Err(DirectorError::UnknownWindow(handle.hwnd().0)),
        }
    }

    /// Detach the window holding `handle`, from the tree or the floating
    /// list, whichever it's in. Fails if `handle` isn't present here.
    pub fn remove_win(&mut self, handle: WindowHandle) -> Result<()> {
        if self.remove_floating(handle).is_some() {
            return Ok(());
        }
        self.take_tiled(handle)?;
        Ok(())
    }

    /// Move `handle` between the tiled tree and the floating list,
    /// returning the new floating state. The window reappears at the end
    /// of its destination (a new sibling of the focused leaf when tiling
    /// back in, per [`Self::add_win`]).
    pub fn toggle_floating(&mut self, handle: WindowHandle, default_split: SplitMode) -> Result<bool> {
        if let Some(mut win) = self.remove_floating(handle) {
            win.floating = false;
            self.add_win(win, default_split)?;
            return Ok(false);
        }

        let mut win = self.take_tiled(handle)?;
        win.floating = true;
        self.add_floating(win);
        Ok(true)
    }

    /// The window currently holding `handle`, tiled or floating.
    pub fn get_win_mut(&mut self, handle: WindowHandle) -> Option<&mut Win> {
        if let Some(w) = self.floating.iter_mut().find(|w| w.handle == handle) {
            return Some(w);
        }
        let id = self.root.find_by_handle(handle)?;
        self.root.find_mut(id)?.win_mut()
    }

    pub fn set_focused_win(&mut self, handle: WindowHandle) -> Result<()> {
        let id = self
            .root
            .find_by_handle(handle)
            .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))?;
        self.focused = Some(id);
        Ok(())
    }

    pub fn get_focused_win(&self) -> Option<&Win> {
        self.focused.and_then(|id| self.root.find(id)).and_then(|n| n.win())
    }

    pub fn get_focused_win_mut(&mut self) -> Option<&mut Win> {
        let id = self.focused?;
        self.root.find_mut(id)?.win_mut()
    }

    /// The window in `direction` relative to the focused leaf: walk up
    /// ancestors until one splits along `direction`'s axis, then step to
    /// the neighbouring child in that container and report the first
    /// window found in its subtree.
    pub fn get_win_rel_to_focused(&self, direction: Direction, rolling: bool) -> Option<WindowHandle> {
        let focused_id = self.focused?;
        let mut cur = focused_id;

        loop {
            let parent_id = self.root.parent_of(cur)?;
            let parent = self.root.find(parent_id)?;
            let WinTree::Internal { mode, .. } = parent else {
                return None;
            };

            if *mode == direction.axis() {
                let neighbour_id = self
                    .root
                    .neighbour(cur, direction.neighbour_dir(), rolling)?;
                let neighbour_node = self.root.find(neighbour_id)?;
                let leaf_id = neighbour_node.first_leaf_with_win()?;
                return self.root.find(leaf_id)?.win().map(|w| w.handle);
            }

            cur = parent_id;
        }
    }

    /// Move the focused window out of its current container and into the
    /// neighbouring one in `direction`: walk ancestors until one splits
    /// along `direction`'s axis (same rule as [`Self::get_win_rel_to_focused`]),
    /// then detach the focused leaf and drop it into that container's
    /// neighbour, wrapping the neighbour into a new container first if it
    /// is itself a leaf. Fails (without changing anything) if the focused
    /// window has no ancestor splitting on that axis, or no neighbour
    /// there — the director falls back to cross-monitor motion in that
    /// case.
    pub fn move_focused_win(&mut self, direction: Direction) -> Result<()> {
        let focused_id = self.focused.ok_or(DirectorError::NoFocusedWindow)?;

        let mut cur = focused_id;
        loop {
            let parent_id = self.root.parent_of(cur).ok_or(DirectorError::InvalidState(
                "focused window has no container to move within".into(),
            ))?;
            let mode = match self.root.find(parent_id) {
                Some(WinTree::Internal { mode, .. }) => *mode,
                _ => {
                    return Err(DirectorError::InvalidState(
                        "parent of focused window is not a container".into(),
                    ))
                }
            };
            if mode == direction.axis() {
                break;
            }
            cur = parent_id;
        }

        let neighbour_id = self
            .root
            .neighbour(cur, direction.neighbour_dir(), false)
            .ok_or(DirectorError::InvalidState("no neighbour in that direction".into()))?;

        let moved = self.root.remove_subtree(focused_id)?;
        let moved_id = moved.id();
        self.root = std::mem::replace(&mut self.root, WinTree::empty_leaf()).reorg();

        match self.root.find(neighbour_id) {
            Some(WinTree::Internal { .. }) => self.root.add_child(neighbour_id, moved)?,
            Some(WinTree::Leaf { .. }) => {
                self.root.wrap_leaf(neighbour_id, direction.axis().opposite())?;
                self.root.add_child(neighbour_id, moved)?;
            }
            None => {
                return Err(DirectorError::InvalidState(
                    "neighbour vanished while moving window".into(),
                ))
            }
        }

        self.focused = Some(moved_id);
        Ok(())
    }

    /// Replace the focused leaf with a new internal node of `mode`
    /// containing the old leaf as its sole child. A no-op error if nothing
    /// is focused.
    pub fn split(&mut self, mode: SplitMode) -> Result<()> {
        let id = self.focused.ok_or(DirectorError::NoFocusedWindow)?;
        self.root.wrap_leaf(id, mode)
    }

    /// Add `win` to the floating list (excluded from tiling).
    pub fn add_floating(&mut self, win: Win) {
        self.floating.push(win);
    }

    /// Remove and return the floating window with this handle, if any.
    pub fn remove_floating(&mut self, handle: WindowHandle) -> Option<Win> {
        let pos = self.floating.iter().position(|w| w.handle == handle)?;
        Some(self.floating.remove(pos))
    }

    pub fn is_floating(&self, handle: WindowHandle) -> bool {
        self.floating.iter().any(|w| w.handle == handle)
    }

    /// Recompute every tiled window's rectangle for the given area, then
    /// leave floating windows at their last-known rectangle.
    pub fn arrange(&mut self, area: Rect, gaps_in: i32) {
        self.area = area;
        self.root.arrange(area, gaps_in);
    }
}

/// Builds a fresh [`Workspace`] for an id. The director never constructs
/// workspaces itself — every workspace a [`WsManager`] manufactures goes
/// through this seam, so callers can vary naming/defaults without touching
/// director logic.
pub trait WorkspaceFactory: Send + Sync {
    fn create(&self, id: &str, area: Rect) -> Workspace;
}

/// The default factory: a plain workspace named after the requested id.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultWorkspaceFactory;

impl WorkspaceFactory for DefaultWorkspaceFactory {
    fn create(&self, id: &str, area: Rect) -> Workspace {
        Workspace::new(id, area)
    }
}

/// Chooses which workspace becomes focused when its monitor is focused and
/// no explicit choice was made (e.g. the monitor just got its first
/// window, or a previously focused workspace was removed).
pub trait WorkspaceSwitcher: Send + Sync {
    fn choose<'a>(&self, wsman: &'a WsManager) -> Option<&'a str>;
}

/// The default strategy: stick with whatever is already focused, else the
/// first workspace in creation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstWorkspaceSwitcher;

impl WorkspaceSwitcher for FirstWorkspaceSwitcher {
    fn choose<'a>(&self, wsman: &'a WsManager) -> Option<&'a str> {
        wsman
            .focused()
            .map(|ws| ws.name())
            .or_else(|| wsman.workspaces.first().map(|ws| ws.name()))
    }
}

/// The set of workspaces bound to one monitor: insertion-ordered (used for
/// display), with one focused at a time.
pub struct WsManager {
    workspaces: Vec<Workspace>,
    focused: Option<usize>,
    factory: Box<dyn WorkspaceFactory>,
}

impl WsManager {
    pub fn new(factory: Box<dyn WorkspaceFactory>) -> Self {
        WsManager {
            workspaces: Vec::new(),
            focused: None,
            factory,
        }
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn focused(&self) -> Option<&Workspace> {
        self.focused.map(|i| &self.workspaces[i])
    }

    pub fn focused_mut(&mut self) -> Option<&mut Workspace> {
        self.focused.map(|i| &mut self.workspaces[i])
    }

    pub fn get(&self, id: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.name() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Workspace> {
        self.workspaces.iter_mut().find(|ws| ws.name() == id)
    }

    pub fn contains_ws(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the existing workspace for `id` if present, else
    /// manufactures and registers one via the factory. Idempotent.
    pub fn add(&mut self, id: &str, area: Rect) -> &mut Workspace {
        if !self.contains_ws(id) {
            let ws = self.factory.create(id, area);
            self.workspaces.push(ws);
            if self.focused.is_none() {
                self.focused = Some(self.workspaces.len() - 1);
            }
        }
        self.get_mut(id).expect("just inserted or already present")
    }

    /// Detaches and returns the workspace named `id` regardless of focus,
    /// for relocating it to another monitor. If it was focused, focus
    /// moves to whatever now occupies its old slot, or clears if it was
    /// the last workspace here.
    pub fn take(&mut self, id: &str) -> Result<Workspace> {
        let pos = self
            .workspaces
            .iter()
            .position(|ws| ws.name() == id)
            .ok_or_else(|| DirectorError::UnknownWorkspace(id.to_string()))?;
        let removed = self.workspaces.remove(pos);
        self.focused = match self.focused {
            Some(f) if f == pos => {
                if self.workspaces.is_empty() {
                    None
                } else {
                    Some(pos.min(self.workspaces.len() - 1))
                }
            }
            Some(f) if f > pos => Some(f - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Adopts a workspace detached from another monitor via [`Self::take`],
    /// re-arranging it for `area` and appending it to this manager. Becomes
    /// focused only if this manager had no workspace yet.
    pub fn adopt(&mut self, mut ws: Workspace, area: Rect) {
        ws.arrange(area, 0);
        self.workspaces.push(ws);
        if self.focused.is_none() {
            self.focused = Some(self.workspaces.len() - 1);
        }
    }

    /// Removes the workspace named `id`. Fails if unknown, or if it is the
    /// currently focused workspace.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        if self.focused().map(|ws| ws.name()) == Some(id) {
            return Err(DirectorError::InvalidState(format!(
                "cannot remove focused workspace {id}"
            )));
        }
        let pos = self
            .workspaces
            .iter()
            .position(|ws| ws.name() == id)
            .ok_or_else(|| DirectorError::UnknownWorkspace(id.to_string()))?;
        self.workspaces.remove(pos);
        if let Some(focused) = self.focused {
            if focused > pos {
                self.focused = Some(focused - 1);
            }
        }
        Ok(())
    }

    /// True if any window on any workspace owned by this monitor currently
    /// has `state`. Used to enforce the fullscreen-exclusivity invariant:
    /// at most one MAXIMIZED window per monitor at a time.
    pub fn any_win_has_state(&self, state: WinState) -> bool {
        self.workspaces.iter().any(|ws| ws.any_win_has_state(state))
    }

    /// Resets every window on every workspace owned by this monitor
    /// currently in `from` back to `to`.
    pub fn clear_state(&mut self, from: WinState, to: WinState) {
        for ws in self.workspaces.iter_mut() {
            ws.replace_state(from, to);
        }
    }

    /// Linear search for the workspace holding a window with this handle.
    pub fn find_win(&self, handle: WindowHandle) -> Option<&Workspace> {
        self.workspaces
            .iter()
            .find(|ws| ws.root().find_by_handle(handle).is_some() || ws.is_floating(handle))
    }

    pub fn find_win_mut(&mut self, handle: WindowHandle) -> Option<&mut Workspace> {
        self.workspaces
            .iter_mut()
            .find(|ws| ws.root().find_by_handle(handle).is_some() || ws.is_floating(handle))
    }

    /// Sets the focused workspace. Returns a small status code matching the
    /// spec's `set_focused_ws` contract: negative if already focused, zero
    /// if switched, positive if `id` is unknown.
    pub fn set_focused_ws(&mut self, id: &str) -> i32 {
        if self.focused().map(|ws| ws.name()) == Some(id) {
            return -1;
        }
        match self.workspaces.iter().position(|ws| ws.name() == id) {
            Some(pos) => {
                self.focused = Some(pos);
                0
            }
            None => 1,
        }
    }

    /// Drops every workspace whose tree and floating list are both empty,
    /// except `keep` (normally the currently focused one).
    pub fn remove_empty(&mut self, keep: &str) {
        let mut i = 0;
        while i < self.workspaces.len() {
            let ws = &self.workspaces[i];
            if ws.name() != keep && ws.is_empty() {
                self.workspaces.remove(i);
                if let Some(focused) = self.focused {
                    if focused > i {
                        self.focused = Some(focused - 1);
                    } else if focused == i {
                        self.focused = None;
                    }
                }
            } else {
                i += 1;
            }
        }
    }
}

impl std::fmt::Debug for WsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WsManager")
            .field("workspaces", &self.workspaces)
            .field("focused", &self.focused)
            .finish()
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

    fn area() -> Rect {
        Rect::new(0, 0, 1920, 1080)
    }

    #[test]
    fn add_win_fills_empty_workspace() {
        let mut ws = Workspace::new("1", area());
        ws.add_win(win(1), SplitMode::Horizontal).unwrap();
        assert_eq!(ws.get_focused_win().unwrap().handle, handle(1));
        assert!(ws.root().is_leaf());
    }

    #[test]
    fn second_window_becomes_sibling_of_first() {
        let mut ws = Workspace::new("1", area());
        ws.add_win(win(1), SplitMode::Horizontal).unwrap();
        ws.add_win(win(2), SplitMode::Horizontal).unwrap();

        assert!(!ws.root().is_leaf());
        assert_eq!(ws.root().children().len(), 2);
        assert_eq!(ws.get_focused_win().unwrap().handle, handle(2));
    }

    #[test]
    fn remove_win_focuses_successor() {
        let mut ws = Workspace::new("1", area());
        ws.add_win(win(1), SplitMode::Horizontal).unwrap();
        ws.add_win(win(2), SplitMode::Horizontal).unwrap();
        ws.set_focused_win(handle(1)).unwrap();

        ws.remove_win(handle(1)).unwrap();

        assert!(ws.root().is_leaf());
        assert_eq!(ws.get_focused_win().unwrap().handle, handle(2));
    }

    #[test]
    fn remove_last_win_clears_focus() {
        let mut ws = Workspace::new("1", area());
        ws.add_win(win(1), SplitMode::Horizontal).unwrap();
        ws.remove_win(handle(1)).unwrap();

        assert!(ws.get_focused_win().is_none());
        assert!(ws.is_empty());
    }

    #[test]
    fn split_then_add_nests_new_window() {
        let mut ws = Workspace::new("1", area());
        ws.add_win(win(1), SplitMode::Horizontal).unwrap();
        ws.split(SplitMode::Vertical).unwrap();
        ws.add_win(win(2), SplitMode::Horizontal).unwrap();

        // root: Internal(Horizontal)[ Internal(Vertical)[leaf(1), leaf(2)] ]? No:
        // split() wraps the focused leaf (1) giving Internal(Vertical)[leaf(1)];
        // add_win appends leaf(2) as a sibling of leaf(1) inside that container.
        assert!(!ws.root().is_leaf());
        assert_eq!(ws.root().children().len(), 1);
        let inner = &ws.root().children()[0];
        assert_eq!(inner.children().len(), 2);
    }

    #[test]
    fn get_win_rel_to_focused_matches_axis() {
        let mut ws = Workspace::new("1", area());
        ws.add_win(win(1), SplitMode::Horizontal).unwrap();
        ws.add_win(win(2), SplitMode::Horizontal).unwrap(); // default split mode is horizontal
        ws.set_focused_win(handle(1)).unwrap();

        // Horizontal container -> Left/Right navigate; Up/Down do not.
        assert_eq!(
            ws.get_win_rel_to_focused(Direction::Right, false),
            Some(handle(2))
        );
        assert_eq!(ws.get_win_rel_to_focused(Direction::Down, false), None);
    }

    #[test]
    fn wsman_add_is_idempotent() {
        let mut wsman = WsManager::new(Box::new(DefaultWorkspaceFactory));
        wsman.add("1", area());
        let ptr_before = wsman.get("1").unwrap() as *const _;
        wsman.add("1", area());
        let ptr_after = wsman.get("1").unwrap() as *const _;
        assert_eq!(ptr_before, ptr_after);
        assert_eq!(wsman.workspaces().len(), 1);
    }

    #[test]
    fn wsman_take_detaches_even_when_focused() {
        let mut wsman = WsManager::new(Box::new(DefaultWorkspaceFactory));
        wsman.add("1", area());
        wsman.add("2", area());
        wsman.set_focused_ws("1");

        let taken = wsman.take("1").unwrap();
        assert_eq!(taken.name(), "1");
        assert_eq!(wsman.workspaces().len(), 1);
        assert_eq!(wsman.focused().map(|ws| ws.name()), Some("2"));
    }

    #[test]
    fn wsman_remove_rejects_focused_and_unknown() {
        let mut wsman = WsManager::new(Box::new(DefaultWorkspaceFactory));
        wsman.add("1", area());
        assert!(wsman.remove("1").is_err());
        assert!(wsman.remove("nope").is_err());
    }

    #[test]
    fn wsman_set_focused_ws_codes() {
        let mut wsman = WsManager::new(Box::new(DefaultWorkspaceFactory));
        wsman.add("1", area());
        wsman.add("2", area());

        assert_eq!(wsman.set_focused_ws("1"), -1); // already focused
        assert_eq!(wsman.set_focused_ws("2"), 0); // switched
        assert_eq!(wsman.set_focused_ws("missing"), 1); // not found
    }

    #[test]
    fn toggle_floating_moves_window_out_of_and_back_into_tree() {
        let mut ws = Workspace::new("1", area());
        ws.add_win(win(1), SplitMode::Horizontal).unwrap();
        ws.add_win(win(2), SplitMode::Horizontal).unwrap();

        assert!(ws.toggle_floating(handle(2), SplitMode::Horizontal).unwrap());
        assert!(ws.is_floating(handle(2)));
        assert!(ws.root().is_leaf());

        assert!(!ws.toggle_floating(handle(2), SplitMode::Horizontal).unwrap());
        assert!(!ws.is_floating(handle(2)));
        assert_eq!(ws.get_focused_win().unwrap().handle, handle(2));
    }

    #[test]
    fn move_focused_win_crosses_into_sibling_container() {
        let mut ws = Workspace::new("1", area());
        ws.add_win(win(1), SplitMode::Horizontal).unwrap();
        ws.add_win(win(2), SplitMode::Horizontal).unwrap();
        ws.set_focused_win(handle(1)).unwrap();

        ws.move_focused_win(Direction::Right).unwrap();

        // 1 moved into a new container alongside 2; root now holds just
        // that one container.
        assert_eq!(ws.root().children().len(), 1);
        let inner = &ws.root().children()[0];
        assert_eq!(inner.children().len(), 2);
        assert_eq!(ws.get_focused_win().unwrap().handle, handle(1));
    }

    #[test]
    fn move_focused_win_fails_with_no_neighbour() {
        let mut ws = Workspace::new("1", area());
        ws.add_win(win(1), SplitMode::Horizontal).unwrap();
        assert!(ws.move_focused_win(Direction::Right).is_err());
    }
}
