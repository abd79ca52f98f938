//! Cached window metadata, keyed by handle.
//!
//! The director already knows *where* a window lives — its monitor,
//! workspace and tree node are derivable by searching the monitor list.
//! This registry exists only for the metadata that isn't: title/class/
//! process name (for rule matching and display) and the rect to restore
//! to when a window leaves floating or fullscreen.

use crate::utils::win32::WindowHandle;
use std::collections::HashMap;

/// Metadata cached for a window under management, independent of its
/// current placement in any workspace tree.
#[derive(Debug, Clone)]
pub struct ManagedWindow {
    pub handle: WindowHandle,
    pub title: String,
    pub class: String,
    pub process_name: String,
    /// True if the user explicitly floated this window (as opposed to a
    /// rule or the default tiling placement).
    pub user_floating: bool,
    /// Rect to restore when exiting fullscreen or floating, if saved.
    pub original_rect: Option<crate::win_tree::Rect>,
    /// Set by a `RuleAction::NoFocus` match: the director places the
    /// window but never activates it on its behalf.
    pub no_focus: bool,
    /// Set by a `RuleAction::NoManage` match: the director leaves the
    /// window alone entirely (no tiling, no tracking).
    pub no_manage: bool,
}

impl ManagedWindow {
    pub fn new(handle: WindowHandle) -> Self {
        ManagedWindow {
            title: handle.get_title().unwrap_or_default(),
            class: handle.get_class_name().unwrap_or_default(),
            process_name: handle.get_process_name().unwrap_or_default(),
            handle,
            user_floating: false,
            original_rect: None,
            no_focus: false,
            no_manage: false,
        }
    }

    /// Refresh cached title/class from the live window.
    pub fn refresh_metadata(&mut self) {
        self.title = self.handle.get_title().unwrap_or_default();
        self.class = self.handle.get_class_name().unwrap_or_default();
    }
}

/// Handle-keyed store of [`ManagedWindow`] metadata.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: HashMap<isize, ManagedWindow>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        WindowRegistry {
            windows: HashMap::new(),
        }
    }

    pub fn register(&mut self, window: ManagedWindow) {
        self.windows.insert(window.handle.hwnd().0, window);
    }

    pub fn unregister(&mut self, handle: WindowHandle) -> Option<ManagedWindow> {
        self.windows.remove(&handle.hwnd().0)
    }

    pub fn get(&self, handle: WindowHandle) -> Option<&ManagedWindow> {
        self.windows.get(&handle.hwnd().0)
    }

    pub fn get_mut(&mut self, handle: WindowHandle) -> Option<&mut ManagedWindow> {
        self.windows.get_mut(&handle.hwnd().0)
    }

    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.windows.contains_key(&handle.hwnd().0)
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn get_all(&self) -> impl Iterator<Item = &ManagedWindow> {
        self.windows.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::Foundation::HWND;

    fn handle(n: isize) -> WindowHandle {
        WindowHandle::from_hwnd(HWND(n as _))
    }

    #[test]
    fn register_and_lookup_roundtrip() {
        let mut reg = WindowRegistry::new();
        reg.register(ManagedWindow::new(handle(42)));
        assert!(reg.contains(handle(42)));
        assert_eq!(reg.count(), 1);
        assert!(reg.get(handle(42)).is_some());
    }

    #[test]
    fn unregister_removes_entry() {
        let mut reg = WindowRegistry::new();
        reg.register(ManagedWindow::new(handle(1)));
        let removed = reg.unregister(handle(1));
        assert!(removed.is_some());
        assert!(!reg.contains(handle(1)));
    }
}
