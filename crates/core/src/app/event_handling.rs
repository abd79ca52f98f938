//! Event handling logic.
//!
//! This module contains the main event loop and event handlers.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::commands::CommandExecutor;
use crate::config::{ConfigLoader, ConfigValidator, ConfigWatcher};
use crate::director::Director;
use crate::event_loop::{EventLoop, WindowEvent};
use crate::keybinds::KeybindManager;

#[cfg(target_os = "windows")]
use crate::utils::win32::WindowHandle;

/// Main event loop that processes Windows events and manages windows.
///
/// This is the core loop that:
/// - Processes Windows messages
/// - Polls for window events and hotkeys
/// - Checks for configuration changes and reloads
/// - Uses CommandExecutor for window operations
/// - Logs all significant events and command executions
pub fn run_event_loop(
    director: &Director,
    event_loop: &mut EventLoop,
    executor: &CommandExecutor,
    keybind_manager: &mut KeybindManager,
    running: &Arc<AtomicBool>,
    mut config_watcher: Option<ConfigWatcher>,
    config_loader: &ConfigLoader,
) -> Result<()> {
    debug!("Event loop started");

    while running.load(Ordering::SeqCst) {
        // Check for configuration changes
        if let Some(ref mut watcher) = config_watcher {
            if watcher.check_for_changes() {
                info!("Configuration changed, reloading...");
                match reload_configuration(director, keybind_manager, config_loader) {
                    Ok(()) => {
                        info!("Configuration reloaded successfully");
                    }
                    Err(e) => {
                        error!("Failed to reload configuration: {}", e);
                        error!("Continuing with previous configuration");
                    }
                }
            }
        }

        // Process Windows messages (includes hotkeys)
        if let Err(e) = event_loop.process_messages() {
            error!("Error processing messages: {}", e);
        }

        // Poll for window events and handle them via command system
        for event in event_loop.poll_events() {
            if let Err(e) = handle_event(director, executor, keybind_manager, event) {
                error!("Error handling event: {}", e);
            }
        }

        // Small sleep to prevent 100% CPU usage
        std::thread::sleep(Duration::from_millis(50));
    }

    info!("Event loop shutting down gracefully");
    Ok(())
}

/// Reload configuration from disk and apply to the director.
///
/// Loads the new configuration, validates it, applies it, and re-registers
/// keybindings. If any step fails, the previous configuration remains active.
fn reload_configuration(
    director: &Director,
    keybind_manager: &mut KeybindManager,
    config_loader: &ConfigLoader,
) -> Result<()> {
    use std::time::Instant;

    let start = Instant::now();

    let config = config_loader
        .load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    ConfigValidator::validate(&config)
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    director.update_config(config.clone());

    keybind_manager
        .register_keybinds(config.keybinds.clone())
        .map_err(|e| anyhow::anyhow!("Failed to register keybindings: {}", e))?;

    let elapsed = start.elapsed();
    info!("Configuration reload completed in {:?}", elapsed);

    if elapsed > Duration::from_millis(100) {
        warn!(
            "Configuration reload took {:?}, exceeds 100ms target",
            elapsed
        );
    }

    Ok(())
}

/// Handle an event (window or hotkey) by dispatching to the appropriate action.
///
/// All operations go through the `Director` for consistent state management,
/// and hotkeys go through the `CommandExecutor` for consistent logging.
#[cfg(target_os = "windows")]
fn handle_event(
    director: &Director,
    executor: &CommandExecutor,
    keybind_manager: &KeybindManager,
    event: WindowEvent,
) -> Result<()> {
    match event {
        WindowEvent::WindowCreated(hwnd) => {
            debug!("EVENT: Window created {:?}", hwnd);
            let window = WindowHandle::from_hwnd(hwnd);

            if director.should_manage(window) {
                let title = window
                    .get_title()
                    .unwrap_or_else(|_| String::from("<unknown>"));
                info!("Managing new window: {}", title);
                director.manage_window(window)?;
            }
        }

        WindowEvent::WindowDestroyed(hwnd) => {
            debug!("Window destroyed: {:?}", hwnd);
            let window = WindowHandle::from_hwnd(hwnd);

            if let Err(e) = director.unmanage_window(window) {
                debug!("Could not unmanage window: {}", e);
            }
        }

        WindowEvent::WindowShown(hwnd) => {
            debug!("Window shown: {:?}", hwnd);
            let window = WindowHandle::from_hwnd(hwnd);
            if director.should_manage(window) {
                if let Err(e) = director.manage_window(window) {
                    debug!("Window already managed: {}", e);
                }
            }
        }

        WindowEvent::WindowHidden(hwnd) => {
            debug!("Window hidden: {:?}", hwnd);
            // Window was hidden - we keep it managed but it won't be visible
        }

        WindowEvent::WindowMoved(hwnd) => {
            debug!("Window moved: {:?}", hwnd);
            let window = WindowHandle::from_hwnd(hwnd);

            if director.is_window_managed(window) {
                debug!("Tiled window may have been moved manually, re-arranging");
                director.arrange_wins();
            }
        }

        WindowEvent::WindowMinimized(hwnd) => {
            debug!("Window minimized: {:?}", hwnd);
        }

        WindowEvent::WindowRestored(hwnd) => {
            debug!("Window restored: {:?}", hwnd);
            let window = WindowHandle::from_hwnd(hwnd);
            if director.is_window_managed(window) {
                director.arrange_wins();
            }
        }

        WindowEvent::WindowFocused(hwnd) => {
            debug!("Window focused: {:?}", hwnd);
            let window = WindowHandle::from_hwnd(hwnd);
            if let Err(e) = director.set_active_win(window) {
                debug!("Activation of unmanaged window ignored: {}", e);
            }
        }

        WindowEvent::MonitorChanged => {
            // Monitor hot-plug rebuilds the monitor list from scratch, so any
            // windows tiled on a now-gone monitor drop out of management.
            info!("Monitor configuration changed");
            director.refresh()?;
            info!("Monitors refreshed");
        }

        WindowEvent::HotkeyPressed(hotkey_id) => {
            debug!("Hotkey pressed: {}", hotkey_id);

            if let Some((command, args)) = keybind_manager.get_command(hotkey_id) {
                debug!("Executing command: {} {:?}", command, args);
                if let Err(e) = crate::app::commands::execute_command_from_string(
                    executor, director, command, args,
                ) {
                    error!("Failed to execute hotkey command '{}': {}", command, e);
                }
            } else {
                warn!("Received hotkey event for unknown ID: {}", hotkey_id);
            }
        }
    }

    Ok(())
}

/// Handle an event by dispatching to the appropriate action (stub for non-Windows).
#[cfg(not(target_os = "windows"))]
fn handle_event(
    director: &Director,
    _executor: &CommandExecutor,
    _keybind_manager: &KeybindManager,
    event: WindowEvent,
) -> Result<()> {
    match event {
        WindowEvent::MonitorChanged => {
            info!("EVENT: Monitor configuration changed");
            director.refresh()?;
            info!("RESULT: Monitors refreshed and workspaces re-arranged");
        }
        WindowEvent::HotkeyPressed(_) => {
            warn!("Hotkey events are only supported on Windows");
        }
    }

    Ok(())
}
