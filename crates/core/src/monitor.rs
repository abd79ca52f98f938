//! A physical display: its geometry, the workspaces bound to it, and the
//! status bar occupying the strip between its full rectangle and its
//! work rectangle.

use crate::error::{DirectorError, Result};
use crate::utils::win32::WindowHandle;
use crate::win_tree::{Rect, SplitMode, Win};
use crate::workspace::{Workspace, WorkspaceFactory, WorkspaceSwitcher, WsManager};

/// Per-monitor status surface. The director never draws it directly —
/// it only notifies the bar when something it might display changed, and
/// the bar decides whether and how to repaint itself.
pub trait Bar: Send + Sync {
    /// The monitor's active workspace or focused window changed.
    fn notify_changed(&self);

    /// The strip of the monitor rectangle this bar occupies, used to
    /// derive the monitor's work rectangle.
    fn height(&self) -> i32;
}

/// A bar that occupies no space and does nothing, for monitors with no
/// configured status surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBar;

impl Bar for NullBar {
    fn notify_changed(&self) {}
    fn height(&self) -> i32 {
        0
    }
}

/// One physical output: its device name, full and work rectangles, the
/// set of workspaces bound to it, and its bar.
pub struct Monitor {
    name: String,
    rect: Rect,
    work_rect: Rect,
    wsman: WsManager,
    bar: Box<dyn Bar>,
}

impl Monitor {
    pub fn new(
        name: impl Into<String>,
        rect: Rect,
        work_rect: Rect,
        factory: Box<dyn WorkspaceFactory>,
        bar: Box<dyn Bar>,
    ) -> Self {
        Monitor {
            name: name.into(),
            rect,
            work_rect,
            wsman: WsManager::new(factory),
            bar,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn work_rect(&self) -> Rect {
        self.work_rect
    }

    pub fn wsman(&self) -> &WsManager {
        &self.wsman
    }

    pub fn wsman_mut(&mut self) -> &mut WsManager {
        &mut self.wsman
    }

    pub fn bar(&self) -> &dyn Bar {
        self.bar.as_ref()
    }

    /// Ensure a workspace exists for this monitor, focusing it if it was
    /// just created via the monitor's switcher strategy.
    pub fn ensure_ws(&mut self, id: &str, switcher: &dyn WorkspaceSwitcher) -> &mut crate::workspace::Workspace {
        let existed = self.wsman.contains_ws(id);
        self.wsman.add(id, self.work_rect);
        if !existed {
            if let Some(chosen) = switcher.choose(&self.wsman).map(str::to_string) {
                self.wsman.set_focused_ws(&chosen);
            }
        }
        self.wsman.get_mut(id).expect("just ensured")
    }

    /// Recompute layout for the focused workspace and notify the bar.
    pub fn arrange(&mut self, gaps_in: i32) {
        if let Some(ws) = self.wsman.focused_mut() {
            ws.arrange(self.work_rect, gaps_in);
        }
        self.bar.notify_changed();
    }

    /// First window (in the focused workspace) whose rect contains the
    /// point, tiled or floating.
    pub fn win_at_point(&self, x: i32, y: i32) -> Option<WindowHandle> {
        let ws = self.wsman.focused()?;
        if let Some(floating) = ws.floating().iter().find(|w| w.rect.contains_point(x, y)) {
            return Some(floating.handle);
        }
        ws.root().win_at_point(x, y).map(|w| w.handle)
    }

    /// Add `win` to the focused workspace, creating a default one first if
    /// this monitor has none yet.
    pub fn add_win(&mut self, win: Win, default_split: SplitMode) -> Result<()> {
        if self.wsman.focused().is_none() {
            self.wsman.add("1", self.work_rect);
        }
        self.wsman
            .focused_mut()
            .expect("just ensured a focused workspace exists")
            .add_win(win, default_split)
    }

    /// Remove `handle` from whichever workspace on this monitor holds it.
    pub fn remove_win(&mut self, handle: WindowHandle) -> Result<()> {
        self.wsman
            .find_win_mut(handle)
            .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))?
            .remove_win(handle)
    }

    /// The workspace holding `handle`, if any is on this monitor.
    pub fn find_win(&self, handle: WindowHandle) -> Option<&Workspace> {
        self.wsman.find_win(handle)
    }

    pub fn toggle_floating_win(&mut self, handle: WindowHandle, default_split: SplitMode) -> Result<bool> {
        self.wsman
            .find_win_mut(handle)
            .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))?
            .toggle_floating(handle, default_split)
    }

    pub fn contains_ws(&self, id: &str) -> bool {
        self.wsman.contains_ws(id)
    }

    pub fn get_focused_win(&self) -> Option<&crate::win_tree::Win> {
        self.wsman.focused()?.get_focused_win()
    }
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("name", &self.name)
            .field("rect", &self.rect)
            .field("work_rect", &self.work_rect)
            .field("wsman", &self.wsman)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::DefaultWorkspaceFactory;

    fn monitor() -> Monitor {
        Monitor::new(
            "DISPLAY1",
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 0, 1920, 1050),
            Box::new(DefaultWorkspaceFactory),
            Box::new(NullBar),
        )
    }

    #[test]
    fn ensure_ws_creates_and_focuses_first_workspace() {
        let mut m = monitor();
        struct Switcher;
        impl WorkspaceSwitcher for Switcher {
            fn choose<'a>(&self, wsman: &'a WsManager) -> Option<&'a str> {
                wsman.workspaces().first().map(|w| w.name())
            }
        }
        m.ensure_ws("1", &Switcher);
        assert_eq!(m.wsman().focused().unwrap().name(), "1");
    }

    #[test]
    fn work_rect_excludes_bar_strip() {
        let m = monitor();
        assert_eq!(m.rect().height, 1080);
        assert_eq!(m.work_rect().height, 1050);
    }
}
