//! Error taxonomy for the director and window tree.
//!
//! Every public entry point on [`crate::director::Director`] returns
//! `Result<T, DirectorError>`. The variants mirror the four failure
//! classes the rest of the crate distinguishes: the target of a lookup
//! doesn't exist, the operation doesn't make sense in the current state,
//! the OS adapter failed but state was only partially mutated, or
//! something unrecoverable happened.

use thiserror::Error;

/// Failures produced by director and window-tree operations.
#[derive(Debug, Error)]
pub enum DirectorError {
    /// No monitor matches the given name or index.
    #[error("unknown monitor: {0}")]
    UnknownMonitor(String),

    /// No workspace matches the given id.
    #[error("unknown workspace: {0}")]
    UnknownWorkspace(String),

    /// No window matches the given handle.
    #[error("unknown window: {0:?}")]
    UnknownWindow(isize),

    /// A command that requires a focused window found none.
    #[error("no focused window")]
    NoFocusedWindow,

    /// The operation is not valid given the current tree/workspace state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An OS adapter call failed. State may have been partially mutated;
    /// the next `arrange()` repairs layout from what the tree still
    /// believes is true.
    #[error("subsystem failure: {0}")]
    OsFailure(String),
}

impl DirectorError {
    /// Small positive return code for CLI/IPC boundaries, matching the
    /// convention: 0 success (not represented here), 1 not found,
    /// 2 invalid state, 3 subsystem failure.
    pub fn code(&self) -> i32 {
        match self {
            DirectorError::UnknownMonitor(_)
            | DirectorError::UnknownWorkspace(_)
            | DirectorError::UnknownWindow(_) => 1,
            DirectorError::NoFocusedWindow | DirectorError::InvalidState(_) => 2,
            DirectorError::OsFailure(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectorError>;
