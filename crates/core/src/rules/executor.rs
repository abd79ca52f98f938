//! Applies matched [`RuleAction`]s to a window by calling back through the
//! [`Director`]'s own command surface, so a rule mutates state exactly the
//! way a user command would — no direct field pokes.

use crate::config::schema::RuleAction;
use crate::director::Director;
use crate::win_tree::Win;
use anyhow::Result;

pub struct RuleExecutor;

impl RuleExecutor {
    /// Apply every action in order. A failing action is logged and
    /// skipped rather than aborting the remaining ones.
    pub fn execute_actions(director: &Director, win: &Win, actions: &[RuleAction]) -> Result<()> {
        for action in actions {
            if let Err(e) = Self::execute_action(director, win, action) {
                tracing::warn!("Failed to execute rule action {:?} on {:?}: {}", action, win.handle, e);
            }
        }
        Ok(())
    }

    fn execute_action(director: &Director, win: &Win, action: &RuleAction) -> Result<()> {
        match action {
            RuleAction::Float => {
                tracing::debug!("Rule: floating {:?}", win.handle);
                director.set_win_floating(win.handle, true)?;
            }
            RuleAction::Tile => {
                tracing::debug!("Rule: tiling {:?}", win.handle);
                director.set_win_floating(win.handle, false)?;
            }
            RuleAction::Workspace(id) => {
                tracing::debug!("Rule: assigning {:?} to workspace {}", win.handle, id);
                director.move_win_to_ws(win.handle, id)?;
            }
            RuleAction::Monitor(name) => {
                tracing::debug!("Rule: assigning {:?} to monitor {}", win.handle, name);
                director.move_win_to_monitor(win.handle, name)?;
            }
            RuleAction::Fullscreen => {
                tracing::debug!("Rule: fullscreening {:?}", win.handle);
                director.set_win_fullscreen(win.handle, true)?;
            }
            RuleAction::NoFocus => {
                tracing::debug!("Rule: {:?} marked no-focus", win.handle);
                director.set_win_no_focus(win.handle);
            }
            RuleAction::NoManage => {
                tracing::debug!("Rule: {:?} marked unmanaged", win.handle);
                director.set_win_no_manage(win.handle);
            }
            RuleAction::Opacity(_) => {
                tracing::debug!("Rule: opacity for {:?} (not yet implemented)", win.handle);
            }
            RuleAction::Pin => {
                tracing::debug!("Rule: pin for {:?} (not yet implemented)", win.handle);
            }
        }
        Ok(())
    }
}
