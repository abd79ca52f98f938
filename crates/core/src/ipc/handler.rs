//! IPC request handler for window manager integration.
//!
//! This module provides the RequestHandler that processes IPC requests and
//! forwards them to the [`Director`] and the command executor.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use splitwm_core::config::schema::Config;
//! use splitwm_core::director::Director;
//! use splitwm_core::ipc::handler::RequestHandler;
//! use splitwm_core::ipc::protocol::Request;
//! use splitwm_core::commands::CommandExecutor;
//!
//! # async fn example() {
//! let director = Director::new(Config::default());
//! let executor = Arc::new(CommandExecutor::new());
//!
//! let handler = RequestHandler::new(director, executor);
//!
//! // Handle a request
//! let request = Request::GetVersion;
//! let response = handler.handle_request(request).await;
//! # }
//! ```

use super::protocol::{
    ConfigInfo, MonitorInfo, RectInfo, Request, Response, VersionInfo, WindowInfo, WindowState,
    WorkspaceInfo,
};
use crate::commands::{Command, CommandExecutor};
use crate::director::Director;
use crate::utils::win32::WindowHandle;
use crate::win_tree::WinState;
use std::sync::Arc;
use tracing::{debug, error, info};
use windows::Win32::Foundation::HWND;

/// Request handler that processes IPC requests and forwards them to the director.
///
/// The RequestHandler acts as a bridge between the IPC server and the
/// director, translating IPC requests into director operations and
/// formatting responses. `Director` already serializes its own state behind
/// a re-entrant lock and is cheap to clone, so the handler holds one
/// directly instead of wrapping it in its own mutex.
pub struct RequestHandler {
    director: Director,
    command_executor: Arc<CommandExecutor>,
}

impl RequestHandler {
    /// Create a new request handler.
    pub fn new(director: Director, command_executor: Arc<CommandExecutor>) -> Self {
        Self {
            director,
            command_executor,
        }
    }

    /// Handle an IPC request and return a response.
    pub async fn handle_request(&self, request: Request) -> Response {
        debug!("Handling IPC request: {:?}", request);

        match request {
            // Query requests
            Request::GetActiveWindow => self.get_active_window(),
            Request::GetWindows { workspace } => self.get_windows(workspace),
            Request::GetWorkspaces => self.get_workspaces(),
            Request::GetMonitors => self.get_monitors(),
            Request::GetConfig => self.get_config(),
            Request::GetVersion => self.get_version(),

            // Command execution
            Request::Execute { command, args } => self.execute_command(command, args),

            // Window commands
            Request::CloseWindow { hwnd } => self.close_window(hwnd),
            Request::FocusWindow { hwnd } => self.focus_window(hwnd),
            Request::MoveWindow { hwnd, workspace } => self.move_window(hwnd, workspace),
            Request::ToggleFloating { hwnd } => self.toggle_floating(hwnd),
            Request::ToggleFullscreen { hwnd } => self.toggle_fullscreen(hwnd),

            // Workspace commands
            Request::SwitchWorkspace { id } => self.switch_workspace(id),
            Request::MoveActiveToWorkspace { id } => self.move_active_to_workspace(id),

            // Monitor commands
            Request::FocusMonitor { name } => self.focus_monitor(name),

            // Configuration
            Request::ReloadConfig => self.reload_config(),

            // System commands - these are handled by the server
            Request::Ping => Response::Pong,
            Request::Subscribe { .. } => Response::error("Subscribe must be handled by IPC server"),
            Request::Unsubscribe => Response::error("Unsubscribe must be handled by IPC server"),
            Request::Quit => self.quit(),
        }
    }

    fn parse_hwnd(hwnd: &str) -> Result<WindowHandle, Response> {
        hwnd.parse::<isize>()
            .map(|v| WindowHandle::from_hwnd(HWND(v as _)))
            .map_err(|e| Response::error(format!("invalid hwnd: {e}")))
    }

    fn win_state_of(state: WinState, floating: bool) -> WindowState {
        if floating {
            WindowState::Floating
        } else {
            match state {
                WinState::Normal => WindowState::Tiled,
                WinState::Maximized => WindowState::Fullscreen,
                WinState::Minimized => WindowState::Minimized,
            }
        }
    }

    // Query handlers

    fn get_active_window(&self) -> Response {
        debug!("Getting active window");

        let Some(handle) = self.director.active_window() else {
            return Response::error("No active window");
        };

        match self
            .director
            .windows_snapshot(None)
            .into_iter()
            .find(|w| w.handle.hwnd().0 == handle.hwnd().0)
        {
            Some(w) => Response::success_with_data(serde_json::json!(WindowInfo {
                hwnd: w.handle.hwnd().0.to_string(),
                title: w.title,
                class: w.class,
                process_name: w.process_name,
                workspace: w.workspace,
                monitor: w.monitor,
                state: Self::win_state_of(w.state, w.floating),
                rect: RectInfo {
                    x: w.rect.x,
                    y: w.rect.y,
                    width: w.rect.width,
                    height: w.rect.height,
                },
                focused: Some(true),
            })),
            None => Response::error("Active window is not managed"),
        }
    }

    fn get_windows(&self, workspace: Option<String>) -> Response {
        debug!("Getting windows list for workspace: {:?}", workspace);

        let windows: Vec<WindowInfo> = self
            .director
            .windows_snapshot(workspace.as_deref())
            .into_iter()
            .map(|w| WindowInfo {
                hwnd: w.handle.hwnd().0.to_string(),
                title: w.title,
                class: w.class,
                process_name: w.process_name,
                workspace: w.workspace,
                monitor: w.monitor,
                state: Self::win_state_of(w.state, w.floating),
                rect: RectInfo {
                    x: w.rect.x,
                    y: w.rect.y,
                    width: w.rect.width,
                    height: w.rect.height,
                },
                focused: Some(w.focused),
            })
            .collect();

        Response::success_with_data(serde_json::json!(windows))
    }

    fn get_workspaces(&self) -> Response {
        debug!("Getting workspaces list");

        let workspaces: Vec<WorkspaceInfo> = self
            .director
            .workspaces_snapshot()
            .into_iter()
            .map(|ws| WorkspaceInfo {
                name: ws.name,
                monitor: ws.monitor,
                window_count: ws.window_count,
                active: ws.active,
            })
            .collect();

        match serde_json::to_value(workspaces) {
            Ok(data) => Response::success_with_data(data),
            Err(e) => {
                error!("Failed to serialize workspaces: {}", e);
                Response::error(format!("Failed to serialize workspaces: {}", e))
            }
        }
    }

    fn get_monitors(&self) -> Response {
        debug!("Getting monitors list");

        let monitors: Vec<MonitorInfo> = self
            .director
            .monitors_snapshot()
            .into_iter()
            .map(|m| MonitorInfo {
                name: m.name,
                width: m.rect.width,
                height: m.rect.height,
                x: m.rect.x,
                y: m.rect.y,
                focused: m.focused,
                active_workspace: m.active_workspace,
            })
            .collect();

        match serde_json::to_value(monitors) {
            Ok(data) => Response::success_with_data(data),
            Err(e) => {
                error!("Failed to serialize monitors: {}", e);
                Response::error(format!("Failed to serialize monitors: {}", e))
            }
        }
    }

    fn get_config(&self) -> Response {
        debug!("Getting configuration");

        let config = self.director.config();
        let config_info = ConfigInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            config_path: "config.toml".to_string(),
            window_rules_count: config.window_rules.len(),
            keybinds_count: config.keybinds.len(),
        };

        match serde_json::to_value(config_info) {
            Ok(data) => Response::success_with_data(data),
            Err(e) => {
                error!("Failed to serialize config: {}", e);
                Response::error(format!("Failed to serialize config: {}", e))
            }
        }
    }

    fn get_version(&self) -> Response {
        debug!("Getting version information");

        let version_info = VersionInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            build_date: option_env!("BUILD_DATE").unwrap_or("unknown").to_string(),
            git_commit: option_env!("GIT_COMMIT").map(String::from),
            rustc_version: option_env!("RUSTC_VERSION").unwrap_or("unknown").to_string(),
        };

        match serde_json::to_value(version_info) {
            Ok(data) => Response::success_with_data(data),
            Err(e) => {
                error!("Failed to serialize version: {}", e);
                Response::error(format!("Failed to serialize version: {}", e))
            }
        }
    }

    // Command handlers

    fn execute_command(&self, command: String, args: Vec<String>) -> Response {
        debug!("Executing command: {} with args: {:?}", command, args);

        let cmd = match command.as_str() {
            "close" => Some(Command::CloseActiveWindow),
            "toggle_floating" | "toggle-floating" => Some(Command::ToggleFloating),
            "toggle_fullscreen" | "toggle-fullscreen" => Some(Command::ToggleFullscreen),
            "focus_left" | "focus-left" => Some(Command::FocusLeft),
            "focus_right" | "focus-right" => Some(Command::FocusRight),
            "focus_up" | "focus-up" => Some(Command::FocusUp),
            "focus_down" | "focus-down" => Some(Command::FocusDown),
            "move_left" | "move-left" => Some(Command::MoveWindowLeft),
            "move_right" | "move-right" => Some(Command::MoveWindowRight),
            "move_up" | "move-up" => Some(Command::MoveWindowUp),
            "move_down" | "move-down" => Some(Command::MoveWindowDown),
            "split_horizontal" | "split-horizontal" => Some(Command::SplitHorizontal),
            "split_vertical" | "split-vertical" => Some(Command::SplitVertical),
            "reload" => Some(Command::Reload),
            "quit" => Some(Command::Quit),
            "workspace" if !args.is_empty() => Some(Command::SwitchWorkspace(args[0].clone())),
            "move_to_workspace" | "move-to-workspace" if !args.is_empty() => {
                Some(Command::MoveToWorkspace(args[0].clone()))
            }
            _ => None,
        };

        if let Some(cmd) = cmd {
            match self.command_executor.execute(cmd, &self.director) {
                Ok(_) => {
                    info!("Command executed successfully: {}", command);
                    Response::success()
                }
                Err(e) => {
                    error!("Command execution failed: {}", e);
                    Response::error(format!("Command execution failed: {}", e))
                }
            }
        } else {
            Response::error(format!("Unknown command: {}", command))
        }
    }

    fn close_window(&self, hwnd: Option<String>) -> Response {
        debug!("Closing window");

        if hwnd.is_some() {
            return Response::error("closing a specific window by hwnd is not supported, omit hwnd to close the active window");
        }

        match self.director.close_active_win() {
            Ok(_) => {
                info!("Window closed successfully");
                Response::success()
            }
            Err(e) => {
                error!("Failed to close window: {}", e);
                Response::error(format!("Failed to close window: {}", e))
            }
        }
    }

    fn focus_window(&self, hwnd: String) -> Response {
        debug!("Focusing window: {}", hwnd);

        let handle = match Self::parse_hwnd(&hwnd) {
            Ok(h) => h,
            Err(r) => return r,
        };

        match self.director.set_active_win(handle) {
            Ok(_) => {
                info!("Window focused successfully: {}", hwnd);
                Response::success()
            }
            Err(e) => {
                error!("Failed to focus window: {}", e);
                Response::error(format!("Failed to focus window: {}", e))
            }
        }
    }

    fn move_window(&self, hwnd: String, workspace: String) -> Response {
        debug!("Moving window {} to workspace {}", hwnd, workspace);

        let handle = match Self::parse_hwnd(&hwnd) {
            Ok(h) => h,
            Err(r) => return r,
        };

        match self.director.move_win_to_ws(handle, &workspace) {
            Ok(_) => {
                info!("Window moved successfully to workspace {}", workspace);
                Response::success()
            }
            Err(e) => {
                error!("Failed to move window: {}", e);
                Response::error(format!("Failed to move window: {}", e))
            }
        }
    }

    fn toggle_floating(&self, hwnd: Option<String>) -> Response {
        debug!("Toggling floating");

        if let Some(hwnd) = hwnd {
            let handle = match Self::parse_hwnd(&hwnd) {
                Ok(h) => h,
                Err(r) => return r,
            };
            return match self.director.set_win_floating(handle, true) {
                Ok(_) => Response::success(),
                Err(e) => Response::error(format!("Failed to toggle floating: {}", e)),
            };
        }

        match self.director.active_win_toggle_floating() {
            Ok(_) => {
                info!("Toggled floating successfully");
                Response::success()
            }
            Err(e) => {
                error!("Failed to toggle floating: {}", e);
                Response::error(format!("Failed to toggle floating: {}", e))
            }
        }
    }

    fn toggle_fullscreen(&self, hwnd: Option<String>) -> Response {
        debug!("Toggling fullscreen");

        if hwnd.is_some() {
            return Response::error("toggling fullscreen for a specific window is not supported, omit hwnd to toggle the active window");
        }

        match self.director.toggle_active_win_fullscreen() {
            Ok(_) => {
                info!("Toggled fullscreen successfully");
                Response::success()
            }
            Err(e) => {
                error!("Failed to toggle fullscreen: {}", e);
                Response::error(format!("Failed to toggle fullscreen: {}", e))
            }
        }
    }

    fn switch_workspace(&self, id: String) -> Response {
        debug!("Switching to workspace {}", id);

        match self.director.switch_to_ws(&id) {
            Ok(_) => {
                info!("Switched to workspace {} successfully", id);
                Response::success()
            }
            Err(e) => {
                error!("Failed to switch workspace: {}", e);
                Response::error(format!("Failed to switch workspace: {}", e))
            }
        }
    }

    fn move_active_to_workspace(&self, id: String) -> Response {
        debug!("Moving active window to workspace {}", id);

        match self.director.move_active_win_to_ws(&id) {
            Ok(_) => {
                info!("Moved active window to workspace {} successfully", id);
                Response::success()
            }
            Err(e) => {
                error!("Failed to move active window to workspace: {}", e);
                Response::error(format!("Failed to move active window to workspace: {}", e))
            }
        }
    }

    fn focus_monitor(&self, name: String) -> Response {
        debug!("Focusing monitor {}", name);

        match self.director.set_focused_monitor_by_name(&name) {
            Ok(_) => Response::success(),
            Err(e) => Response::error(format!("Failed to focus monitor: {}", e)),
        }
    }

    fn reload_config(&self) -> Response {
        debug!("Reloading configuration");

        use crate::config::ConfigLoader;

        let config_loader = match ConfigLoader::new() {
            Ok(loader) => loader,
            Err(e) => {
                error!("Failed to create config loader: {}", e);
                return Response::error(format!("Failed to load config: {}", e));
            }
        };

        let config = match config_loader.load() {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return Response::error(format!("Failed to load config: {}", e));
            }
        };

        self.director.update_config(config);
        info!("Configuration reloaded successfully");
        Response::success()
    }

    fn quit(&self) -> Response {
        info!("Quit command received");
        // The actual process shutdown is driven by the event loop, which
        // observes Command::Quit via the same executor this acknowledges.
        Response::success()
    }
}
