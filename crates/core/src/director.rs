//! The director: the global state machine owning every monitor, the
//! window registry, the rule engine and focus history.
//!
//! One [`Director`] exists per running instance and is shared (via its
//! internal `Arc`s) between the event loop, the IPC server and the
//! keybind dispatcher. Every command is a `&self` method serialized
//! through a re-entrant lock, so a rule firing during [`Director::add_win`]
//! can call back into `set_win_floating`/`move_win_to_ws`/etc. on the same
//! thread without deadlocking — the same recursive-mutex shape the
//! original implementation got from Windows' recursive
//! `WaitForSingleObject`/`ReleaseMutex`.
//!
//! The rule list and the activation-suppression counter live outside the
//! `RefCell` deliberately: rules need `&Director` (not `&DirectorState`)
//! to call back into other commands, and iterating them while holding a
//! `Ref`/`RefMut` into the `RefCell` would panic on the first re-entrant
//! borrow. Keeping them in their own locks avoids that trap entirely.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};

use crate::config::schema::Config;
use crate::error::{DirectorError, Result};
use crate::focus::FocusManager;
use crate::monitor::{Monitor, NullBar};
use crate::rules::Rule;
use crate::utils::win32::{enumerate_monitors, WindowHandle};
use crate::win_tree::{Rect, SplitMode, Win, WinState};
use crate::window_registry::{ManagedWindow, WindowRegistry};
use crate::workspace::{DefaultWorkspaceFactory, Direction};

struct DirectorState {
    monitors: Vec<Monitor>,
    focused_monitor: Option<usize>,
    registry: WindowRegistry,
    focus: FocusManager,
    config: Config,
}

impl DirectorState {
    fn monitor_index(&self, name: &str) -> Result<usize> {
        self.monitors
            .iter()
            .position(|m| m.name() == name)
            .ok_or_else(|| DirectorError::UnknownMonitor(name.to_string()))
    }

    fn focused_monitor_index(&self) -> Result<usize> {
        self.focused_monitor
            .ok_or_else(|| DirectorError::InvalidState("no focused monitor".into()))
    }

    fn monitor_containing_win(&self, handle: WindowHandle) -> Option<usize> {
        self.monitors
            .iter()
            .position(|m| m.find_win(handle).is_some())
    }

    fn monitor_index_by_direction(&self, direction: Direction) -> Option<usize> {
        let focused = self.focused_monitor?;
        let focused_rect = self.monitors[focused].rect();
        self.monitors.iter().enumerate().find_map(|(i, m)| {
            if i == focused {
                return None;
            }
            let other = m.rect();
            let matches = match direction {
                Direction::Up => focused_rect.y >= other.y + other.height,
                Direction::Down => focused_rect.y + focused_rect.height <= other.y,
                Direction::Left => focused_rect.x >= other.x + other.width,
                Direction::Right => focused_rect.x + focused_rect.width <= other.x,
            };
            matches.then_some(i)
        })
    }
}

/// The global tiling state machine. Cheap to clone — every clone shares
/// the same underlying state through `Arc`.
#[derive(Clone)]
pub struct Director {
    state: Arc<ReentrantMutex<RefCell<DirectorState>>>,
    rules: Arc<RwLock<Vec<Box<dyn Rule>>>>,
    ignore_next_activation: Arc<AtomicU32>,
}

impl Director {
    pub fn new(config: Config) -> Self {
        Director {
            state: Arc::new(ReentrantMutex::new(RefCell::new(DirectorState {
                monitors: Vec::new(),
                focused_monitor: None,
                registry: WindowRegistry::new(),
                focus: FocusManager::new(),
                config,
            }))),
            rules: Arc::new(RwLock::new(Vec::new())),
            ignore_next_activation: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Run `f` against the locked state. `f` must not call back into any
    /// other `Director` method — the `RefCell` borrow it holds would
    /// panic on the re-entrant attempt. Commands that need to call back
    /// into `self` (rule firing, repaint, arrange) do so after this
    /// returns, while still under the outer re-entrant mutex guard.
    fn with_state<R>(&self, f: impl FnOnce(&mut DirectorState) -> R) -> R {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        f(&mut state)
    }

    pub fn config(&self) -> Config {
        self.with_state(|st| st.config.clone())
    }

    pub fn update_config(&self, config: Config) {
        self.with_state(|st| st.config = config);
    }

    pub fn add_rule(&self, rule: Box<dyn Rule>) {
        self.rules.write().push(rule);
    }

    /// Re-enumerate physical monitors from the OS, replacing the monitor
    /// list wholesale. Existing workspace contents are lost — callers
    /// normally do this once at startup, before any windows are managed.
    pub fn refresh(&self) -> Result<()> {
        let monitors = enumerate_monitors().map_err(|e| DirectorError::OsFailure(e.to_string()))?;
        if monitors.is_empty() {
            return Err(DirectorError::OsFailure("no monitors reported by the OS".into()));
        }

        self.with_state(|st| {
            st.monitors = monitors
                .into_iter()
                .map(|(name, rect, work_rect)| {
                    Monitor::new(
                        name,
                        rect,
                        work_rect,
                        Box::new(DefaultWorkspaceFactory),
                        Box::new(NullBar),
                    )
                })
                .collect();
            st.focused_monitor = if st.monitors.is_empty() { None } else { Some(0) };
        });

        self.repaint_all();
        Ok(())
    }

    fn default_split(&self) -> SplitMode {
        self.with_state(|st| st.config.general.default_split)
    }

    fn gaps_in(&self) -> i32 {
        self.with_state(|st| st.config.general.gaps_in)
    }

    // -- Monitor focus -------------------------------------------------

    pub fn get_monitor_by_direction(&self, direction: Direction) -> Option<String> {
        self.with_state(|st| {
            st.monitor_index_by_direction(direction)
                .map(|i| st.monitors[i].name().to_string())
        })
    }

    pub fn set_focused_monitor_by_name(&self, name: &str) -> Result<()> {
        self.with_state(|st| {
            let idx = st.monitor_index(name)?;
            st.focused_monitor = Some(idx);
            Ok(())
        })
    }

    /// Switches focus to the monitor in `direction` by switching to its
    /// currently focused workspace — switching workspace is what actually
    /// moves monitor focus, the same way the original implementation
    /// reuses `switch_to_ws` for this.
    pub fn set_focused_monitor_by_direction(&self, direction: Direction) -> Result<()> {
        let ws_id = self.with_state(|st| {
            let idx = st
                .monitor_index_by_direction(direction)
                .ok_or_else(|| DirectorError::InvalidState(format!("no monitor {direction:?}")))?;
            st.monitors[idx]
                .wsman()
                .focused()
                .map(|ws| ws.name().to_string())
                .ok_or_else(|| DirectorError::InvalidState("target monitor has no workspace".into()))
        })?;
        self.switch_to_ws(&ws_id)
    }

    // -- Workspace switching --------------------------------------------

    /// Switches to the workspace named `id`: finds the monitor owning it
    /// and focuses that monitor, or — diverging from the original, which
    /// silently failed here — creates `id` on the currently focused
    /// monitor if nobody owns it yet. Restores focus to whatever window
    /// was last focused there, suppressing the resulting OS activation
    /// callback via `ignore_next_activation`.
    pub fn switch_to_ws(&self, id: &str) -> Result<()> {
        let restore = self.with_state(|st| -> Result<Option<WindowHandle>> {
            match st.monitors.iter().position(|m| m.contains_ws(id)) {
                Some(idx) => st.focused_monitor = Some(idx),
                None => {
                    let idx = st.focused_monitor_index()?;
                    let work_rect = st.monitors[idx].work_rect();
                    st.monitors[idx].wsman_mut().add(id, work_rect);
                }
            }

            let idx = st.focused_monitor_index()?;
            st.monitors[idx].wsman_mut().set_focused_ws(id);

            Ok(st.monitors[idx]
                .wsman()
                .focused()
                .and_then(|ws| ws.get_focused_win())
                .map(|w| w.handle))
        })?;

        self.arrange_wins();

        if let Some(handle) = restore {
            self.ignore_next_activation.fetch_add(1, Ordering::SeqCst);
            let _ = handle.set_foreground();
        }

        self.repaint_all();
        Ok(())
    }

    // -- Window placement -------------------------------------------------

    /// Adds `win` to the monitor named `monitor_name`, then fires every
    /// registered rule against it in insertion order. Rules run whether or
    /// not the monitor placement itself needed to create a workspace.
    pub fn add_win(&self, monitor_name: &str, win: Win) -> Result<()> {
        let default_split = self.default_split();
        self.with_state(|st| {
            let idx = st.monitor_index(monitor_name)?;
            st.monitors[idx].add_win(win, default_split)
        })?;

        let rules = self.rules.read();
        for i in 0..rules.len() {
            let rule = &rules[i];
            if rule.applies(self, &win) {
                rule.exec(self, &win);
            }
        }
        drop(rules);

        self.arrange_wins();
        Ok(())
    }

    /// Removes `win` from whichever monitor currently holds it.
    pub fn remove_win(&self, handle: WindowHandle) -> Result<()> {
        self.with_state(|st| {
            let idx = st
                .monitor_containing_win(handle)
                .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))?;
            st.monitors[idx].remove_win(handle)
        })?;
        self.arrange_wins();
        Ok(())
    }

    pub fn arrange_wins(&self) {
        let gaps_in = self.gaps_in();
        self.with_state(|st| {
            for monitor in st.monitors.iter_mut() {
                monitor.arrange(gaps_in);
            }
        });
    }

    pub fn remove_empty_ws(&self) {
        self.with_state(|st| {
            for monitor in st.monitors.iter_mut() {
                let keep = monitor.wsman().focused().map(|ws| ws.name().to_string());
                if let Some(keep) = keep {
                    monitor.wsman_mut().remove_empty(&keep);
                }
            }
        });
        self.repaint_all();
    }

    /// First window under the point, tiled or floating, searching
    /// monitors in enumeration order.
    pub fn win_at_point(&self, x: i32, y: i32) -> Option<WindowHandle> {
        self.with_state(|st| st.monitors.iter().find_map(|m| m.win_at_point(x, y)))
    }

    // -- Focus / activation ----------------------------------------------

    /// Called back from the OS activation hook: records that `handle`
    /// became the foreground window. If this activation was triggered by
    /// the director's own `set_foreground` call (tracked via
    /// `ignore_next_activation`), it's consumed and swallowed instead of
    /// being treated as a user-driven focus change.
    pub fn set_active_win(&self, handle: WindowHandle) -> Result<()> {
        if self
            .ignore_next_activation
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                if n > 0 {
                    Some(n - 1)
                } else {
                    None
                }
            })
            .is_ok()
        {
            return Ok(());
        }

        let switch = self.with_state(|st| -> Result<Option<String>> {
            let idx = st
                .monitor_containing_win(handle)
                .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))?;
            let ws_name = st.monitors[idx]
                .wsman_mut()
                .find_win_mut(handle)
                .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))
                .and_then(|ws| {
                    if !ws.is_floating(handle) {
                        ws.set_focused_win(handle)?;
                    }
                    Ok(ws.name().to_string())
                })?;

            st.focus.record_focus(handle.hwnd().0);

            let already_current = st.focused_monitor == Some(idx)
                && st.monitors[idx]
                    .wsman()
                    .focused()
                    .map(|ws| ws.name() == ws_name)
                    .unwrap_or(false);

            Ok(if already_current { None } else { Some(ws_name) })
        })?;

        if let Some(ws_name) = switch {
            self.switch_to_ws(&ws_name)?;
        }

        Ok(())
    }

    pub fn active_win_toggle_floating(&self) -> Result<()> {
        let default_split = self.default_split();
        self.with_state(|st| {
            let idx = st.focused_monitor_index()?;
            let handle = st.monitors[idx]
                .get_focused_win()
                .ok_or(DirectorError::NoFocusedWindow)?
                .handle;
            st.monitors[idx].toggle_floating_win(handle, default_split)
        })?;
        self.arrange_wins();
        Ok(())
    }

    pub fn toggle_active_win_fullscreen(&self) -> Result<()> {
        self.with_state(|st| {
            let idx = st.focused_monitor_index()?;
            let currently_maximized = st.monitors[idx]
                .wsman()
                .focused()
                .and_then(|ws| ws.get_focused_win())
                .map(|w| w.state == WinState::Maximized)
                .ok_or(DirectorError::NoFocusedWindow)?;

            // Fullscreen is per-monitor exclusive: un-maximize whatever
            // else is before promoting the focused window.
            if !currently_maximized && st.monitors[idx].wsman().any_win_has_state(WinState::Maximized) {
                st.monitors[idx]
                    .wsman_mut()
                    .clear_state(WinState::Maximized, WinState::Normal);
            }

            let win = st.monitors[idx]
                .wsman_mut()
                .focused_mut()
                .and_then(|ws| ws.get_focused_win_mut())
                .ok_or(DirectorError::NoFocusedWindow)?;
            win.state = if win.state == WinState::Maximized {
                WinState::Normal
            } else {
                WinState::Maximized
            };
            Ok(())
        })?;
        self.arrange_wins();
        self.repaint_all();
        Ok(())
    }

    pub fn close_active_win(&self) -> Result<()> {
        let handle = self.with_state(|st| -> Result<WindowHandle> {
            let idx = st.focused_monitor_index()?;
            st.monitors[idx]
                .get_focused_win()
                .map(|w| w.handle)
                .ok_or(DirectorError::NoFocusedWindow)
        })?;
        handle
            .close()
            .map_err(|e| DirectorError::OsFailure(e.to_string()))
    }

    pub fn split(&self, mode: SplitMode) -> Result<()> {
        self.with_state(|st| {
            let idx = st.focused_monitor_index()?;
            st.monitors[idx]
                .wsman_mut()
                .focused_mut()
                .ok_or(DirectorError::NoFocusedWindow)?
                .split(mode)
        })
    }

    // -- Directional motion -----------------------------------------------

    pub fn set_active_win_by_direction(&self, direction: Direction) -> Result<()> {
        for rolling in [false, true] {
            let target = self.with_state(|st| -> Result<Option<WindowHandle>> {
                let idx = st.focused_monitor_index()?;
                let ws = st.monitors[idx]
                    .wsman()
                    .focused()
                    .ok_or(DirectorError::NoFocusedWindow)?;
                Ok(ws.get_win_rel_to_focused(direction, rolling))
            })?;

            if let Some(handle) = target {
                self.with_state(|st| -> Result<()> {
                    let idx = st.focused_monitor_index()?;
                    let ws = st.monitors[idx]
                        .wsman_mut()
                        .focused_mut()
                        .ok_or(DirectorError::NoFocusedWindow)?;
                    if let Some(w) = ws.get_focused_win_mut() {
                        w.state = WinState::Normal;
                    }
                    ws.set_focused_win(handle)
                })?;
                self.ignore_next_activation.fetch_add(1, Ordering::SeqCst);
                let _ = handle.set_foreground();
                self.arrange_wins();
                return Ok(());
            }

            if !rolling {
                // No neighbour in the current container at all (not even a
                // would-be wraparound one) — try the adjacent monitor
                // before falling back to rolling within this one.
                if self.set_focused_monitor_by_direction(direction).is_ok() {
                    return Ok(());
                }
            }
        }

        Err(DirectorError::InvalidState(format!(
            "no window {direction:?} of the focused window"
        )))
    }

    pub fn move_active_win(&self, direction: Direction) -> Result<()> {
        let maximized = self.with_state(|st| -> Result<bool> {
            let idx = st.focused_monitor_index()?;
            let win = st.monitors[idx]
                .wsman()
                .focused()
                .and_then(|ws| ws.get_focused_win())
                .ok_or(DirectorError::NoFocusedWindow)?;
            Ok(win.state == WinState::Maximized)
        })?;

        if maximized {
            return Ok(());
        }

        let moved_in_tree = self.with_state(|st| -> Result<()> {
            let idx = st.focused_monitor_index()?;
            st.monitors[idx]
                .wsman_mut()
                .focused_mut()
                .ok_or(DirectorError::NoFocusedWindow)?
                .move_focused_win(direction)
        });

        if moved_in_tree.is_ok() {
            self.arrange_wins();
            return Ok(());
        }

        self.move_focused_win_to_monitor_by_dir(direction)?;
        self.set_focused_monitor_by_direction(direction)
    }

    pub fn move_focused_ws_to_monitor_by_dir(&self, direction: Direction) -> Result<()> {
        let target_idx = self
            .with_state(|st| st.monitor_index_by_direction(direction))
            .ok_or_else(|| DirectorError::InvalidState(format!("no monitor {direction:?}")))?;

        let ws_id = self.with_state(|st| -> Result<String> {
            let focused_idx = st.focused_monitor_index()?;
            let ws_id = st.monitors[focused_idx]
                .wsman()
                .focused()
                .map(|ws| ws.name().to_string())
                .ok_or(DirectorError::NoFocusedWindow)?;
            let taken = st.monitors[focused_idx].wsman_mut().take(&ws_id)?;
            let target_work_rect = st.monitors[target_idx].work_rect();
            st.monitors[target_idx].wsman_mut().adopt(taken, target_work_rect);
            Ok(ws_id)
        })?;

        self.switch_to_ws(&ws_id)
    }

    pub fn move_focused_win_to_monitor_by_dir(&self, direction: Direction) -> Result<()> {
        let ws_id = self
            .with_state(|st| -> Option<String> {
                let idx = st.monitor_index_by_direction(direction)?;
                st.monitors[idx].wsman().focused().map(|ws| ws.name().to_string())
            })
            .ok_or_else(|| DirectorError::InvalidState(format!("no monitor {direction:?}")))?;

        self.move_active_win_to_ws(&ws_id)
    }

    // -- Moving windows between workspaces/monitors -----------------------

    /// Moves the currently focused window to workspace `id`, without
    /// following it — the currently displayed workspace doesn't change.
    pub fn move_active_win_to_ws(&self, id: &str) -> Result<()> {
        let active = self.with_state(|st| -> Result<Option<WindowHandle>> {
            let idx = st.focused_monitor_index()?;
            Ok(st.monitors[idx].get_focused_win().map(|w| w.handle))
        })?;

        let Some(handle) = active else {
            self.repaint_all();
            return Ok(());
        };

        let default_split = self.default_split();
        let target_found = self.with_state(|st| st.monitors.iter().any(|m| m.contains_ws(id)));
        if !target_found {
            let idx = self.with_state(|st| st.focused_monitor_index())?;
            self.with_state(|st| {
                let work_rect = st.monitors[idx].work_rect();
                st.monitors[idx].wsman_mut().add(id, work_rect);
            });
        }

        self.remove_win(handle)?;

        self.with_state(|st| -> Result<()> {
            let target_idx = st
                .monitors
                .iter()
                .position(|m| m.contains_ws(id))
                .ok_or_else(|| DirectorError::UnknownWorkspace(id.to_string()))?;
            let mut win = Win::new(handle, Rect::new(0, 0, 0, 0));
            win.state = WinState::Normal;
            st.monitors[target_idx]
                .wsman_mut()
                .get_mut(id)
                .expect("just ensured")
                .add_win(win, default_split)
        })?;

        self.arrange_wins();

        let remaining_focus = self.with_state(|st| -> Result<Option<WindowHandle>> {
            let idx = st.focused_monitor_index()?;
            Ok(st.monitors[idx].get_focused_win().map(|w| w.handle))
        })?;

        if let Some(handle) = remaining_focus {
            self.ignore_next_activation.fetch_add(1, Ordering::SeqCst);
            let _ = handle.set_foreground();
        }

        self.repaint_all();
        Ok(())
    }

    /// Like [`Self::move_active_win_to_ws`], but switches the visible
    /// workspace to follow the moved window.
    pub fn move_active_win_to_ws_and_follow(&self, id: &str) -> Result<()> {
        self.move_active_win_to_ws(id)?;
        self.switch_to_ws(id)
    }

    /// Moves an arbitrary (not necessarily focused) window to workspace
    /// `id`, creating it on the focused monitor if nobody owns it, then
    /// restores the previously displayed workspace. Used by the rule
    /// engine's `RuleAction::Workspace`.
    pub fn move_win_to_ws(&self, handle: WindowHandle, id: &str) -> Result<()> {
        let previous_ws = self.with_state(|st| -> Result<String> {
            let idx = st.focused_monitor_index()?;
            st.monitors[idx]
                .wsman()
                .focused()
                .map(|ws| ws.name().to_string())
                .ok_or(DirectorError::NoFocusedWindow)
        })?;

        if !self.with_state(|st| st.monitors.iter().any(|m| m.contains_ws(id))) {
            self.switch_to_ws(id)?;
        }

        self.remove_win(handle)?;

        let default_split = self.default_split();
        self.with_state(|st| -> Result<()> {
            let target_idx = st
                .monitors
                .iter()
                .position(|m| m.contains_ws(id))
                .ok_or_else(|| DirectorError::UnknownWorkspace(id.to_string()))?;
            let win = Win::new(handle, Rect::new(0, 0, 0, 0));
            st.monitors[target_idx]
                .wsman_mut()
                .get_mut(id)
                .expect("just ensured")
                .add_win(win, default_split)
        })?;

        self.arrange_wins();
        self.switch_to_ws(&previous_ws)
    }

    /// Moves `handle` to the (focused workspace of) monitor `monitor_name`.
    /// Grounded in the same shape as `move_win_to_ws` — no monitor-level
    /// equivalent exists in the original implementation to follow here,
    /// since it never modeled moving a window to an arbitrary monitor by
    /// name directly.
    pub fn move_win_to_monitor(&self, handle: WindowHandle, monitor_name: &str) -> Result<()> {
        self.with_state(|st| st.monitor_index(monitor_name))?;
        self.remove_win(handle)?;
        let default_split = self.default_split();
        self.with_state(|st| -> Result<()> {
            let idx = st.monitor_index(monitor_name)?;
            let win = Win::new(handle, Rect::new(0, 0, 0, 0));
            st.monitors[idx].add_win(win, default_split)
        })?;
        self.arrange_wins();
        Ok(())
    }

    // -- Per-window state used by the rule engine -------------------------

    pub fn set_win_floating(&self, handle: WindowHandle, floating: bool) -> Result<()> {
        let default_split = self.default_split();
        self.with_state(|st| -> Result<()> {
            let idx = st
                .monitor_containing_win(handle)
                .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))?;
            let currently = st.monitors[idx]
                .find_win(handle)
                .map(|ws| ws.is_floating(handle))
                .unwrap_or(false);
            if currently != floating {
                st.monitors[idx].toggle_floating_win(handle, default_split)?;
            }
            Ok(())
        })?;
        self.arrange_wins();
        Ok(())
    }

    pub fn set_win_fullscreen(&self, handle: WindowHandle, fullscreen: bool) -> Result<()> {
        self.with_state(|st| -> Result<()> {
            let idx = st
                .monitor_containing_win(handle)
                .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))?;

            if fullscreen && st.monitors[idx].wsman().any_win_has_state(WinState::Maximized) {
                st.monitors[idx]
                    .wsman_mut()
                    .clear_state(WinState::Maximized, WinState::Normal);
            }

            let win = st.monitors[idx]
                .wsman_mut()
                .find_win_mut(handle)
                .and_then(|ws| ws.get_win_mut(handle))
                .ok_or(DirectorError::UnknownWindow(handle.hwnd().0))?;
            win.state = if fullscreen {
                WinState::Maximized
            } else {
                WinState::Normal
            };
            Ok(())
        })?;
        self.arrange_wins();
        Ok(())
    }

    pub fn set_win_no_focus(&self, handle: WindowHandle) {
        self.with_state(|st| {
            st.registry
                .get_mut(handle)
                .map(|w| w.no_focus = true)
                .unwrap_or_else(|| {
                    let mut w = ManagedWindow::new(handle);
                    w.no_focus = true;
                    st.registry.register(w);
                });
        });
    }

    pub fn set_win_no_manage(&self, handle: WindowHandle) {
        self.with_state(|st| {
            st.registry
                .get_mut(handle)
                .map(|w| w.no_manage = true)
                .unwrap_or_else(|| {
                    let mut w = ManagedWindow::new(handle);
                    w.no_manage = true;
                    st.registry.register(w);
                });
        });
    }

    pub fn window_registry_snapshot(&self, handle: WindowHandle) -> Option<ManagedWindow> {
        self.with_state(|st| st.registry.get(handle).cloned())
    }

    // -- App-facing lifecycle ---------------------------------------------

    /// Whether a freshly seen OS window should come under management at
    /// all: already managed, or explicitly excluded via `NoManage`, are
    /// both reasons to skip it.
    pub fn should_manage(&self, handle: WindowHandle) -> bool {
        if self.is_window_managed(handle) {
            return false;
        }
        if self
            .window_registry_snapshot(handle)
            .map(|w| w.no_manage)
            .unwrap_or(false)
        {
            return false;
        }
        handle.is_app_window()
    }

    /// Registers `handle`'s metadata and adds it to the focused monitor,
    /// which also runs the rule engine against it. Activates it unless a
    /// rule has already marked it `NoFocus`.
    pub fn manage_window(&self, handle: WindowHandle) -> Result<()> {
        let rect = handle
            .get_rect()
            .ok()
            .map(|r| Rect::new(r.left, r.top, r.right - r.left, r.bottom - r.top))
            .unwrap_or(Rect::new(0, 0, 0, 0));

        let already_known = self.window_registry_snapshot(handle).is_some();
        if !already_known {
            self.with_state(|st| st.registry.register(ManagedWindow::new(handle)));
        }

        let monitor_name = self.with_state(|st| -> Result<String> {
            let idx = st.focused_monitor_index()?;
            Ok(st.monitors[idx].name().to_string())
        })?;

        self.add_win(&monitor_name, Win::new(handle, rect))?;

        let no_focus = self
            .window_registry_snapshot(handle)
            .map(|w| w.no_focus)
            .unwrap_or(false);
        if !no_focus {
            let _ = handle.set_foreground();
        }

        Ok(())
    }

    pub fn unmanage_window(&self, handle: WindowHandle) -> Result<()> {
        self.with_state(|st| st.registry.unregister(handle));
        self.remove_win(handle)
    }

    pub fn is_window_managed(&self, handle: WindowHandle) -> bool {
        self.with_state(|st| st.registry.contains(handle))
    }

    pub fn get_window(&self, handle: WindowHandle) -> Option<ManagedWindow> {
        self.window_registry_snapshot(handle)
    }

    // -- Repaint -----------------------------------------------------------

    pub fn show(&self) {
        self.with_state(|st| {
            for monitor in st.monitors.iter_mut() {
                monitor.arrange(0);
            }
        });
    }

    /// Broadcasts a repaint notification to every top-level window,
    /// fire-and-forget on a detached thread — mirrors the original's
    /// background `WM_NCPAINT` broadcast, which nothing ever waits on.
    pub fn repaint_all(&self) {
        std::thread::spawn(|| {
            use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
            use windows::Win32::UI::WindowsAndMessaging::{SendMessageW, WM_NCPAINT};
            unsafe {
                SendMessageW(HWND(0xffff), WM_NCPAINT, WPARAM(0), LPARAM(0));
            }
        });
    }

    // -- Queries for IPC/status surfaces -----------------------------------

    /// The handle currently recorded as focused, if any.
    pub fn active_window(&self) -> Option<WindowHandle> {
        self.with_state(|st| st.focus.current())
            .map(|raw| WindowHandle::from_hwnd(windows::Win32::Foundation::HWND(raw as _)))
    }

    pub fn monitors_snapshot(&self) -> Vec<MonitorSnapshot> {
        self.with_state(|st| {
            st.monitors
                .iter()
                .enumerate()
                .map(|(i, m)| MonitorSnapshot {
                    name: m.name().to_string(),
                    rect: m.rect(),
                    work_rect: m.work_rect(),
                    focused: st.focused_monitor == Some(i),
                    active_workspace: m.wsman().focused().map(|ws| ws.name().to_string()),
                })
                .collect()
        })
    }

    pub fn workspaces_snapshot(&self) -> Vec<WorkspaceSnapshot> {
        self.with_state(|st| {
            st.monitors
                .iter()
                .flat_map(|m| {
                    let active = m.wsman().focused().map(|ws| ws.name().to_string());
                    m.wsman().workspaces().iter().map(move |ws| WorkspaceSnapshot {
                        name: ws.name().to_string(),
                        monitor: m.name().to_string(),
                        window_count: ws.floating().len()
                            + {
                                let mut count = 0;
                                ws.root().traverse(&mut |node| {
                                    if node.win().is_some() {
                                        count += 1;
                                    }
                                });
                                count
                            },
                        active: active.as_deref() == Some(ws.name()),
                    })
                })
                .collect()
        })
    }

    /// Every managed window, optionally filtered to one workspace by name.
    pub fn windows_snapshot(&self, workspace: Option<&str>) -> Vec<WindowSnapshot> {
        self.with_state(|st| {
            let focused = st.focus.current();
            let mut out = Vec::new();
            for m in &st.monitors {
                for ws in m.wsman().workspaces() {
                    if workspace.is_some_and(|w| w != ws.name()) {
                        continue;
                    }
                    for win in ws.floating() {
                        out.push(Self::window_snapshot(&st.registry, m.name(), ws.name(), *win, focused));
                    }
                    ws.root().traverse(&mut |node| {
                        if let Some(win) = node.win() {
                            out.push(Self::window_snapshot(&st.registry, m.name(), ws.name(), *win, focused));
                        }
                    });
                }
            }
            out
        })
    }

    fn window_snapshot(
        registry: &WindowRegistry,
        monitor: &str,
        workspace: &str,
        win: Win,
        focused: Option<isize>,
    ) -> WindowSnapshot {
        let meta = registry.get(win.handle);
        WindowSnapshot {
            handle: win.handle,
            title: meta.map(|w| w.title.clone()).unwrap_or_default(),
            class: meta.map(|w| w.class.clone()).unwrap_or_default(),
            process_name: meta.map(|w| w.process_name.clone()).unwrap_or_default(),
            monitor: monitor.to_string(),
            workspace: workspace.to_string(),
            state: win.state,
            floating: win.floating,
            rect: win.rect,
            focused: focused == Some(win.handle.hwnd().0),
        }
    }
}

/// Snapshot of one monitor's state, for IPC queries and status surfaces.
#[derive(Debug, Clone)]
pub struct MonitorSnapshot {
    pub name: String,
    pub rect: Rect,
    pub work_rect: Rect,
    pub focused: bool,
    pub active_workspace: Option<String>,
}

/// Snapshot of one workspace's state.
#[derive(Debug, Clone)]
pub struct WorkspaceSnapshot {
    pub name: String,
    pub monitor: String,
    pub window_count: usize,
    pub active: bool,
}

/// Snapshot of one managed window's state.
#[derive(Debug, Clone)]
pub struct WindowSnapshot {
    pub handle: WindowHandle,
    pub title: String,
    pub class: String,
    pub process_name: String,
    pub monitor: String,
    pub workspace: String,
    pub state: WinState,
    pub floating: bool,
    pub rect: Rect,
    pub focused: bool,
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Config;
    use windows::Win32::Foundation::HWND;

    fn handle(n: isize) -> WindowHandle {
        WindowHandle::from_hwnd(HWND(n as _))
    }

    fn director_with_monitors(names: &[&str]) -> Director {
        let director = Director::new(Config::default());
        director.with_state(|st| {
            for (i, name) in names.iter().enumerate() {
                let rect = Rect::new(i as i32 * 1920, 0, 1920, 1080);
                st.monitors.push(Monitor::new(
                    *name,
                    rect,
                    rect,
                    Box::new(DefaultWorkspaceFactory),
                    Box::new(NullBar),
                ));
            }
            st.focused_monitor = Some(0);
        });
        director
    }

    #[test]
    fn switch_to_ws_creates_workspace_on_focused_monitor_when_unowned() {
        let director = director_with_monitors(&["DISPLAY1"]);
        director.switch_to_ws("code").unwrap();
        let owns = director.with_state(|st| st.monitors[0].contains_ws("code"));
        assert!(owns);
    }

    #[test]
    fn add_win_fires_matching_rule() {
        use std::sync::atomic::AtomicBool;

        struct Flag(Arc<AtomicBool>);
        impl Rule for Flag {
            fn applies(&self, _director: &Director, _win: &Win) -> bool {
                true
            }
            fn exec(&self, _director: &Director, _win: &Win) {
                self.0.store(true, Ordering::SeqCst);
            }
        }

        let director = director_with_monitors(&["DISPLAY1"]);
        let fired = Arc::new(AtomicBool::new(false));
        director.add_rule(Box::new(Flag(fired.clone())));

        director
            .add_win("DISPLAY1", Win::new(handle(1), Rect::new(0, 0, 100, 100)))
            .unwrap();

        assert!(fired.load(Ordering::SeqCst));
    }

    #[test]
    fn toggle_fullscreen_un_maximizes_other_window_on_same_monitor() {
        let director = director_with_monitors(&["DISPLAY1"]);
        director
            .add_win("DISPLAY1", Win::new(handle(1), Rect::new(0, 0, 1, 1)))
            .unwrap();
        director
            .add_win("DISPLAY1", Win::new(handle(2), Rect::new(0, 0, 1, 1)))
            .unwrap();

        // Window 2 is focused (last added); maximize it first.
        director.toggle_active_win_fullscreen().unwrap();
        assert!(director
            .with_state(|st| st.monitors[0].wsman().any_win_has_state(WinState::Maximized)));

        // Focus window 1 and maximize it too — window 2 must be demoted
        // back to Normal so only one MAXIMIZED window exists on the monitor.
        director.set_active_win(handle(1)).unwrap();
        director.toggle_active_win_fullscreen().unwrap();

        let win_state = |h: WindowHandle| {
            director.with_state(|st| {
                let ws = st.monitors[0].wsman().focused().unwrap();
                if let Some(w) = ws.floating().iter().find(|w| w.handle == h) {
                    return Some(w.state);
                }
                let id = ws.root().find_by_handle(h)?;
                ws.root().find(id)?.win().map(|w| w.state)
            })
        };
        assert_eq!(win_state(handle(1)), Some(WinState::Maximized));
        assert_eq!(win_state(handle(2)), Some(WinState::Normal));
    }

    #[test]
    fn add_win_unknown_monitor_fails() {
        let director = director_with_monitors(&["DISPLAY1"]);
        let err = director
            .add_win("NOPE", Win::new(handle(1), Rect::new(0, 0, 1, 1)))
            .unwrap_err();
        assert_eq!(err.code(), 1);
    }

    #[test]
    fn set_active_win_ignored_after_director_initiated_activation() {
        let director = director_with_monitors(&["DISPLAY1"]);
        director
            .add_win("DISPLAY1", Win::new(handle(1), Rect::new(0, 0, 1, 1)))
            .unwrap();

        director.ignore_next_activation.fetch_add(1, Ordering::SeqCst);
        assert!(director.set_active_win(handle(1)).is_ok());
        assert_eq!(director.ignore_next_activation.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn get_monitor_by_direction_is_strict_half_plane() {
        let director = director_with_monitors(&["LEFT", "RIGHT"]);
        // RIGHT sits strictly to the right of LEFT (focused).
        assert_eq!(
            director.get_monitor_by_direction(Direction::Right),
            Some("RIGHT".to_string())
        );
        assert_eq!(director.get_monitor_by_direction(Direction::Left), None);
    }

    #[test]
    fn close_active_win_fails_with_nothing_focused() {
        let director = director_with_monitors(&["DISPLAY1"]);
        let err = director.close_active_win().unwrap_err();
        assert!(matches!(err, DirectorError::NoFocusedWindow));
    }

    #[test]
    fn split_delegates_to_focused_workspace() {
        let director = director_with_monitors(&["DISPLAY1"]);
        director
            .add_win("DISPLAY1", Win::new(handle(1), Rect::new(0, 0, 1, 1)))
            .unwrap();
        assert!(director.split(SplitMode::Vertical).is_ok());
    }

    #[test]
    fn move_active_win_to_ws_creates_target_and_leaves_source_empty() {
        let director = director_with_monitors(&["DISPLAY1"]);
        director
            .add_win("DISPLAY1", Win::new(handle(1), Rect::new(0, 0, 1, 1)))
            .unwrap();

        director.move_active_win_to_ws("2").unwrap();

        let moved = director.with_state(|st| st.monitors[0].find_win(handle(1)).is_some());
        assert!(moved);
        let on_two = director.with_state(|st| {
            st.monitors[0]
                .wsman()
                .get("2")
                .map(|ws| ws.root().find_by_handle(handle(1)).is_some())
                .unwrap_or(false)
        });
        assert!(on_two);
    }
}
