//! Command system for window operations.
//!
//! This module provides a comprehensive command system for all window, layout,
//! focus, and workspace operations. Commands are executed through the
//! [`CommandExecutor`], which dispatches every variant to a single
//! [`Director`] method call — the executor holds no state of its own, it's
//! the variant-to-method mapping keybinds and IPC both go through.

use crate::director::Director;
use crate::utils::win32;
use crate::win_tree::SplitMode;
use crate::workspace::Direction;
use anyhow::Result;
use tracing::{debug, error, info};

/// Commands for window, layout, focus, and workspace operations.
///
/// Each variant represents a specific action that can be performed by
/// the window manager. Commands are executed through the CommandExecutor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Window commands
    /// Close the currently active window
    CloseActiveWindow,
    /// Toggle floating state for the active window
    ToggleFloating,
    /// Toggle fullscreen state for the active window
    ToggleFullscreen,

    // Focus commands
    /// Focus the window to the left
    FocusLeft,
    /// Focus the window to the right
    FocusRight,
    /// Focus the window above
    FocusUp,
    /// Focus the window below
    FocusDown,

    // Move commands
    /// Move active window left in the tree
    MoveWindowLeft,
    /// Move active window right in the tree
    MoveWindowRight,
    /// Move active window up in the tree
    MoveWindowUp,
    /// Move active window down in the tree

    MoveWindowDown,

    // Layout commands
    /// Split the focused container horizontally
    SplitHorizontal,
    /// Split the focused container vertically
    SplitVertical,

    // Monitor commands
    /// Focus the monitor to the left
    FocusMonitorLeft,
    /// Focus the monitor to the right
    FocusMonitorRight,
    /// Focus the monitor above
    FocusMonitorUp,
    /// Focus the monitor below
    FocusMonitorDown,

    // Workspace commands
    /// Switch to specified workspace
    SwitchWorkspace(String),
    /// Move active window to specified workspace
    MoveToWorkspace(String),
    /// Move active window to workspace and follow
    MoveToWorkspaceAndFollow(String),

    // System commands
    /// Reload configuration
    Reload,
    /// Quit the window manager
    Quit,
    /// Show command palette overlay
    ShowCommandPalette,
}

/// Executes commands against a [`Director`].
#[derive(Debug, Default)]
pub struct CommandExecutor {}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {}
    }

    /// Execute a command on the director.
    pub fn execute(&self, command: Command, director: &Director) -> Result<()> {
        debug!("Executing command: {:?}", command);

        let result: anyhow::Result<()> = match &command {
            Command::CloseActiveWindow => director.close_active_win().map_err(Into::into),
            Command::ToggleFloating => director.active_win_toggle_floating().map_err(Into::into),
            Command::ToggleFullscreen => director.toggle_active_win_fullscreen().map_err(Into::into),

            Command::FocusLeft => director.set_active_win_by_direction(Direction::Left).map_err(Into::into),
            Command::FocusRight => director.set_active_win_by_direction(Direction::Right).map_err(Into::into),
            Command::FocusUp => director.set_active_win_by_direction(Direction::Up).map_err(Into::into),
            Command::FocusDown => director.set_active_win_by_direction(Direction::Down).map_err(Into::into),

            Command::MoveWindowLeft => director.move_active_win(Direction::Left).map_err(Into::into),
            Command::MoveWindowRight => director.move_active_win(Direction::Right).map_err(Into::into),
            Command::MoveWindowUp => director.move_active_win(Direction::Up).map_err(Into::into),
            Command::MoveWindowDown => director.move_active_win(Direction::Down).map_err(Into::into),

            Command::SplitHorizontal => director.split(SplitMode::Horizontal).map_err(Into::into),
            Command::SplitVertical => director.split(SplitMode::Vertical).map_err(Into::into),

            Command::FocusMonitorLeft => director.set_focused_monitor_by_direction(Direction::Left).map_err(Into::into),
            Command::FocusMonitorRight => director.set_focused_monitor_by_direction(Direction::Right).map_err(Into::into),
            Command::FocusMonitorUp => director.set_focused_monitor_by_direction(Direction::Up).map_err(Into::into),
            Command::FocusMonitorDown => director.set_focused_monitor_by_direction(Direction::Down).map_err(Into::into),

            Command::SwitchWorkspace(id) => {
                info!("Switching to workspace {}", id);
                director.switch_to_ws(id).map_err(Into::into)
            }
            Command::MoveToWorkspace(id) => director.move_active_win_to_ws(id).map_err(Into::into),
            Command::MoveToWorkspaceAndFollow(id) => {
                director.move_active_win_to_ws_and_follow(id).map_err(Into::into)
            }

            Command::Reload => {
                info!("Reload command received");
                Ok(())
            }
            Command::Quit => {
                info!("Quit command received");
                Ok(())
            }
            Command::ShowCommandPalette => self.show_command_palette(),
        };

        if let Err(ref e) = result {
            error!("Command execution failed: {:?} - {}", command, e);
        } else {
            debug!("Command executed successfully: {:?}", command);
        }

        result
    }

    /// Show the command palette overlay.
    fn show_command_palette(&self) -> Result<()> {
        use std::process::Command;

        info!("Showing command palette");

        let parent_hwnd = win32::get_foreground_window()
            .map(|w| w.hwnd().0)
            .unwrap_or(0);

        let palette_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            .map(|dir| dir.join("splitwm-palette.exe"))
            .unwrap_or_else(|| "target/debug/splitwm-palette.exe".into());

        match Command::new(&palette_exe)
            .arg("--parent-hwnd")
            .arg(parent_hwnd.to_string())
            .spawn()
        {
            Ok(_) => {
                debug!("Command palette spawned successfully");
                Ok(())
            }
            Err(e) => {
                error!("Failed to spawn command palette: {}", e);
                Err(e.into())
            }
        }
    }
}
