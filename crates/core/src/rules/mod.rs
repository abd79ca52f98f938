//! Window rules engine.
//!
//! A [`Rule`] is anything that can decide whether it applies to a newly
//! added window and, if so, act on it through the director. The shipped
//! implementation, [`WindowRuleSet`], wraps the regex-based [`RuleMatcher`]
//! matching language and dispatches matched actions through
//! [`RuleExecutor`].

pub mod matcher;
pub mod executor;

pub use matcher::{RuleMatcher, CompiledRule, RuleMatch};
pub use executor::RuleExecutor;

use crate::config::schema::Config;
use crate::director::Director;
use crate::win_tree::Win;
use crate::window_registry::ManagedWindow;

/// A rule the director consults for every newly added window, in
/// insertion order.
pub trait Rule: Send + Sync {
    fn applies(&self, director: &Director, win: &Win) -> bool;
    fn exec(&self, director: &Director, win: &Win);
}

/// The one shipped [`Rule`] implementation: matches windows against the
/// configured regex-based window rules and applies their actions.
pub struct WindowRuleSet {
    matcher: RuleMatcher,
}

impl WindowRuleSet {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(WindowRuleSet {
            matcher: RuleMatcher::new(config.window_rules.clone())?,
        })
    }

    fn managed_window(director: &Director, win: &Win) -> ManagedWindow {
        director
            .window_registry_snapshot(win.handle)
            .unwrap_or_else(|| ManagedWindow::new(win.handle))
    }
}

impl Rule for WindowRuleSet {
    fn applies(&self, director: &Director, win: &Win) -> bool {
        let window = Self::managed_window(director, win);
        !self.matcher.match_window(&window).is_empty()
    }

    fn exec(&self, director: &Director, win: &Win) {
        let window = Self::managed_window(director, win);
        let actions = self.matcher.match_window(&window);
        if let Err(e) = RuleExecutor::execute_actions(director, win, &actions) {
            tracing::warn!("rule execution failed for {:?}: {}", win.handle, e);
        }
    }
}
