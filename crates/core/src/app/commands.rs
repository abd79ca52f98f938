//! Command parsing and execution.
//!
//! This module handles converting string commands to Command enums and executing them.

use anyhow::Result;
use tracing::{debug, warn};

use crate::commands::{Command, CommandExecutor};
use crate::director::Director;

/// Execute a command from a string representation.
///
/// This function parses a command string and optional arguments, then executes
/// the corresponding command through the CommandExecutor. Workspace commands
/// take the workspace name as their single argument (`"workspace" ["2"]`);
/// every other command ignores `args`.
pub fn execute_command_from_string(
    executor: &CommandExecutor,
    director: &Director,
    command_str: &str,
    args: &[String],
) -> Result<()> {
    if !args.is_empty() {
        debug!("Command '{}' called with args: {:?}", command_str, args);
    }

    // Design Note: a simple match statement keeps command parsing readable and
    // compile-time checkable rather than reaching for a dynamic registry.
    //
    // To add new commands:
    // 1. Add the variant to Command enum in commands.rs
    // 2. Add a case to this match statement
    // 3. Document in KEYBINDINGS_GUIDE.md
    let command = match command_str {
        // Window commands
        "close" => Command::CloseActiveWindow,
        "toggle-floating" => Command::ToggleFloating,
        "toggle-fullscreen" => Command::ToggleFullscreen,

        // Focus commands
        "focus-left" => Command::FocusLeft,
        "focus-right" => Command::FocusRight,
        "focus-up" => Command::FocusUp,
        "focus-down" => Command::FocusDown,

        // Move commands
        "move-left" => Command::MoveWindowLeft,
        "move-right" => Command::MoveWindowRight,
        "move-up" => Command::MoveWindowUp,
        "move-down" => Command::MoveWindowDown,

        // Layout commands
        "split-horizontal" => Command::SplitHorizontal,
        "split-vertical" => Command::SplitVertical,

        // Monitor commands
        "focus-monitor-left" => Command::FocusMonitorLeft,
        "focus-monitor-right" => Command::FocusMonitorRight,
        "focus-monitor-up" => Command::FocusMonitorUp,
        "focus-monitor-down" => Command::FocusMonitorDown,

        // Workspace commands
        "workspace" if !args.is_empty() => Command::SwitchWorkspace(args[0].clone()),
        "move-to-workspace" if !args.is_empty() => Command::MoveToWorkspace(args[0].clone()),
        "move-to-workspace-and-follow" if !args.is_empty() => {
            Command::MoveToWorkspaceAndFollow(args[0].clone())
        }

        // System commands
        "reload-config" => Command::Reload,
        "exit" | "quit" => Command::Quit,
        "show-command-palette" => Command::ShowCommandPalette,

        // Unknown command
        _ => {
            warn!("Unknown command: {}", command_str);
            return Ok(());
        }
    };

    debug!("Parsed command: {:?}", command);

    executor.execute(command, director)?;

    Ok(())
}
