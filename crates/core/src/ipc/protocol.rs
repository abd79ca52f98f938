//! IPC Protocol definitions for the Tiling Window Manager.
//!
//! This module defines the JSON-based protocol for inter-process communication,
//! including request and response types, data structures, and protocol versioning.

use serde::{Deserialize, Serialize};

/// Protocol version constant
pub const PROTOCOL_VERSION: &str = "1.0.0";

/// Protocol version structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolVersion {
    pub version: String,
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
        }
    }
}

/// Request types for IPC communication
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    // Query requests
    /// Get information about the active window
    GetActiveWindow,

    /// Get list of all windows, optionally filtered by workspace name
    GetWindows {
        #[serde(default)]
        workspace: Option<String>,
    },

    /// Get list of all workspaces
    GetWorkspaces,

    /// Get list of all monitors
    GetMonitors,

    /// Get current configuration
    GetConfig,

    /// Get version information
    GetVersion,

    // Command execution
    /// Execute a generic command with arguments
    ///
    /// The command string should match one of the built-in commands supported
    /// by the window manager. Arguments are command-specific and should be
    /// validated by the command handler.
    Execute {
        command: String,
        #[serde(default)]
        args: Vec<String>,
    },

    // Window commands
    /// Close a window (active if hwnd is None)
    CloseWindow {
        hwnd: Option<String>,
    },

    /// Focus a specific window
    FocusWindow {
        hwnd: String,
    },

    /// Move a window to a different workspace, by name
    MoveWindow {
        hwnd: String,
        workspace: String,
    },

    /// Toggle floating state for a window (active if hwnd is None)
    ToggleFloating {
        hwnd: Option<String>,
    },

    /// Toggle fullscreen state for a window (active if hwnd is None)
    ToggleFullscreen {
        hwnd: Option<String>,
    },

    // Workspace commands
    /// Switch to a specific workspace, by name
    SwitchWorkspace {
        id: String,
    },

    /// Move the active window to a workspace, by name
    MoveActiveToWorkspace {
        id: String,
    },

    // Monitor commands
    /// Focus a specific monitor, by device name
    FocusMonitor {
        name: String,
    },

    // Event subscription
    /// Subscribe to specific events
    Subscribe {
        events: Vec<String>,
    },

    /// Unsubscribe from all events
    Unsubscribe,

    // Configuration
    /// Reload configuration from disk
    ReloadConfig,

    // System
    /// Ping the server (health check)
    Ping,

    /// Quit the window manager
    Quit,
}

/// Response types for IPC communication
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// Successful response with optional data
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    },

    /// Error response with message and optional error code
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },

    /// Event notification
    Event {
        name: String,
        data: serde_json::Value,
    },

    /// Pong response to Ping request
    Pong,
}

impl Response {
    /// Create a success response with no data
    pub fn success() -> Self {
        Self::Success { data: None }
    }

    /// Create a success response with data
    pub fn success_with_data(data: serde_json::Value) -> Self {
        Self::Success { data: Some(data) }
    }

    /// Create an error response with a message
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            code: None,
        }
    }

    /// Create an error response with a message and error code
    pub fn error_with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

/// Information about a window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowInfo {
    /// Window handle as a string
    pub hwnd: String,

    /// Window title
    pub title: String,

    /// Window class name
    pub class: String,

    /// Process name
    pub process_name: String,

    /// Name of the workspace the window belongs to
    pub workspace: String,

    /// Device name of the monitor the window is on
    pub monitor: String,

    /// Current window state
    pub state: WindowState,

    /// Window rectangle (position and size)
    pub rect: RectInfo,

    /// Whether this window is currently focused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
}

/// Window state enum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    /// Window is tiled (managed by layout)
    Tiled,

    /// Window is floating (not managed by layout)
    Floating,

    /// Window is in fullscreen mode
    Fullscreen,

    /// Window is minimized
    Minimized,
}

/// Rectangle information (position and size)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectInfo {
    /// X coordinate
    pub x: i32,

    /// Y coordinate
    pub y: i32,

    /// Width in pixels
    pub width: i32,

    /// Height in pixels
    pub height: i32,
}

/// Information about a workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    /// Workspace name, also used as its id
    pub name: String,

    /// Device name of the monitor this workspace is bound to
    pub monitor: String,

    /// Number of windows in this workspace
    pub window_count: usize,

    /// Whether this workspace is currently active on its monitor
    pub active: bool,
}

/// Information about a monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorInfo {
    /// Monitor device name, also used as its id
    pub name: String,

    /// Monitor width in pixels
    pub width: i32,

    /// Monitor height in pixels
    pub height: i32,

    /// Monitor X position
    pub x: i32,

    /// Monitor Y position
    pub y: i32,

    /// Whether this monitor currently holds director focus
    pub focused: bool,

    /// Name of the active workspace on this monitor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_workspace: Option<String>,
}

/// Configuration information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    /// Configuration version
    pub version: String,

    /// Path to the configuration file
    pub config_path: String,

    /// Number of window rules currently loaded
    pub window_rules_count: usize,

    /// Number of keybinds currently loaded
    pub keybinds_count: usize,
}

/// Version information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version string
    pub version: String,

    /// Build date
    pub build_date: String,

    /// Git commit hash (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_commit: Option<String>,

    /// Rust compiler version
    pub rustc_version: String,
}
