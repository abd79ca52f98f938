//! Alt-Tab style focus history, independent of tree-order neighbour motion.
//!
//! The director's directional commands (`set_active_win_by_direction`,
//! `move_active_win`) walk the focused workspace's split tree — that's
//! [`crate::workspace::Direction`] and [`crate::win_tree::WinTree::neighbour`].
//! This module tracks the separate, flatter history of "what was focused
//! before this" that Alt-Tab-style cycling needs, which has no relationship
//! to tree topology.

use std::collections::VecDeque;

/// Tracks recently focused windows (most recent first) for history-based
/// cycling, keyed by raw handle value so it stays independent of platform
/// handle types.
#[derive(Debug)]
pub struct FocusManager {
    history: VecDeque<isize>,
    current: Option<isize>,
    history_size: usize,
}

impl FocusManager {
    pub fn new() -> Self {
        FocusManager::with_history_size(10)
    }

    pub fn with_history_size(size: usize) -> Self {
        FocusManager {
            history: VecDeque::with_capacity(size),
            current: None,
            history_size: size,
        }
    }

    /// Record that `handle` became focused, moving it to the front of the
    /// history and evicting the oldest entry if over capacity.
    pub fn record_focus(&mut self, handle: isize) {
        if let Some(pos) = self.history.iter().position(|&h| h == handle) {
            self.history.remove(pos);
        }
        self.history.push_front(handle);
        while self.history.len() > self.history_size {
            self.history.pop_back();
        }
        self.current = Some(handle);
    }

    pub fn current(&self) -> Option<isize> {
        self.current
    }

    /// The previously focused window (second in history), Alt-Tab style.
    /// Moves it to the front so repeated calls toggle between the two most
    /// recent windows.
    pub fn focus_previous(&mut self) -> Option<isize> {
        if self.history.len() > 1 {
            let prev = self.history[1];
            self.history.remove(1);
            self.history.push_front(prev);
            self.current = Some(prev);
            Some(prev)
        } else {
            None
        }
    }

    /// Cycles the oldest-of-recent entry to the front.
    pub fn focus_next(&mut self) -> Option<isize> {
        if self.history.len() > 1 {
            if let Some(front) = self.history.pop_front() {
                self.history.push_back(front);
            }
            let next = self.history[0];
            self.current = Some(next);
            Some(next)
        } else {
            None
        }
    }

    /// Drops `handle` from history, e.g. when its window closes. If it was
    /// the current focus, the new front of history becomes current.
    pub fn remove(&mut self, handle: isize) {
        self.history.retain(|&h| h != handle);
        if self.current == Some(handle) {
            self.current = self.history.front().copied();
        }
    }

    pub fn history(&self) -> &VecDeque<isize> {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.current = None;
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_toggles_previous() {
        let mut fm = FocusManager::new();
        fm.record_focus(1);
        fm.record_focus(2);
        assert_eq!(fm.current(), Some(2));
        assert_eq!(fm.focus_previous(), Some(1));
        assert_eq!(fm.current(), Some(1));
        assert_eq!(fm.focus_previous(), Some(2));
    }

    #[test]
    fn remove_falls_back_to_history_front() {
        let mut fm = FocusManager::new();
        fm.record_focus(1);
        fm.record_focus(2);
        fm.remove(2);
        assert_eq!(fm.current(), Some(1));
    }

    #[test]
    fn history_size_is_bounded() {
        let mut fm = FocusManager::with_history_size(2);
        fm.record_focus(1);
        fm.record_focus(2);
        fm.record_focus(3);
        assert_eq!(fm.history().len(), 2);
        assert!(!fm.history().contains(&1));
    }
}
