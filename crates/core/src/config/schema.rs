//! Configuration schema definitions
//!
//! This module defines all configuration data structures with serde support
//! for TOML parsing and serialization.

use crate::win_tree::SplitMode;
use serde::{Serialize, Deserialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General window manager settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Input and keyboard settings
    #[serde(default)]
    pub input: InputConfig,

    /// Window rules for automatic window management
    #[serde(default)]
    pub window_rules: Vec<WindowRule>,

    /// Workspace assignment rules
    #[serde(default)]
    pub workspace_rules: Vec<WorkspaceRule>,

    /// Keybinding configuration
    #[serde(default)]
    pub keybinds: Vec<Keybind>,

    /// Monitor configuration
    #[serde(default)]
    pub monitors: Vec<MonitorConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            input: InputConfig::default(),
            window_rules: Vec::new(),
            workspace_rules: Vec::new(),
            keybinds: Vec::new(),
            monitors: Vec::new(),
        }
    }
}

/// General window manager settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Gap size between windows (pixels)
    #[serde(default = "default_gaps_in")]
    pub gaps_in: i32,

    /// Gap size around screen edges (pixels)
    #[serde(default = "default_gaps_out")]
    pub gaps_out: i32,

    /// Border size around windows (pixels)
    #[serde(default = "default_border_size")]
    pub border_size: i32,

    /// Active window border color (hex)
    #[serde(default = "default_active_border_color")]
    pub active_border_color: String,

    /// Inactive window border color (hex)
    #[serde(default = "default_inactive_border_color")]
    pub inactive_border_color: String,

    /// Enable auto-tiling for new windows
    #[serde(default = "default_true")]
    pub auto_tile: bool,

    /// Split mode a workspace's root container starts in, and the mode
    /// `Workspace::add_win` uses the first time it needs to wrap a bare
    /// leaf into a container.
    #[serde(default = "default_split")]
    pub default_split: SplitMode,
}

fn default_gaps_in() -> i32 { 5 }
fn default_gaps_out() -> i32 { 10 }
fn default_border_size() -> i32 { 2 }
fn default_active_border_color() -> String { "#89b4fa".to_string() }
fn default_inactive_border_color() -> String { "#585b70".to_string() }
fn default_true() -> bool { true }
fn default_split() -> SplitMode { SplitMode::Horizontal }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            gaps_in: default_gaps_in(),
            gaps_out: default_gaps_out(),
            border_size: default_border_size(),
            active_border_color: default_active_border_color(),
            inactive_border_color: default_inactive_border_color(),
            auto_tile: default_true(),
            default_split: default_split(),
        }
    }
}

/// Input and keyboard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Keyboard repeat rate (characters per second)
    #[serde(default = "default_repeat_rate")]
    pub repeat_rate: u32,

    /// Keyboard repeat delay (milliseconds)
    #[serde(default = "default_repeat_delay")]
    pub repeat_delay: u32,

    /// Follow mouse focus
    #[serde(default = "default_false")]
    pub follow_mouse: bool,
}

fn default_repeat_rate() -> u32 { 25 }
fn default_repeat_delay() -> u32 { 600 }
fn default_false() -> bool { false }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            repeat_rate: default_repeat_rate(),
            repeat_delay: default_repeat_delay(),
            follow_mouse: default_false(),
        }
    }
}

/// Window rule for automatic window management
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRule {
    /// Match window by process name (regex)
    pub match_process: Option<String>,

    /// Match window by title (regex)
    pub match_title: Option<String>,

    /// Match window by class name (regex)
    pub match_class: Option<String>,

    /// Actions to apply when window matches
    pub actions: Vec<RuleAction>,
}

/// Actions that can be applied by window rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    /// Make window floating
    Float,

    /// Make window tiled
    Tile,

    /// Assign to specific workspace, by id
    Workspace(String),

    /// Assign to specific monitor, by device name
    Monitor(String),

    /// Start in fullscreen
    Fullscreen,

    /// Don't focus this window automatically
    NoFocus,

    /// Don't manage this window at all
    NoManage,

    /// Set opacity
    Opacity(f32),

    /// Pin window (show on all workspaces)
    Pin,
}

/// Workspace assignment rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceRule {
    /// Workspace id
    pub id: String,

    /// Monitor to assign workspace to, by device name
    pub monitor: String,

    /// Make this the default workspace for the monitor
    #[serde(default)]
    pub default: bool,

    /// Custom display name for workspace
    pub name: Option<String>,
}

/// Keybinding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keybind {
    /// Modifier keys (Win, Ctrl, Alt, Shift)
    pub modifiers: Vec<String>,

    /// Key to bind
    pub key: String,

    /// Command to execute
    pub command: String,

    /// Optional arguments for command
    #[serde(default)]
    pub args: Vec<String>,
}

/// Monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Monitor name or identifier
    pub name: String,

    /// Resolution (e.g., "1920x1080")
    pub resolution: Option<String>,

    /// Position (e.g., "0x0" or "auto")
    pub position: Option<String>,

    /// DPI scale factor
    pub scale: Option<f32>,

    /// Refresh rate (Hz)
    pub refresh_rate: Option<u32>,

    /// Rotation (0, 90, 180, 270)
    pub rotation: Option<u32>,
}
