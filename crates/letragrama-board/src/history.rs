//! Bounded undo/redo history of board snapshots.
//!
//! Every committed edit pushes a full snapshot. Boards are a few dozen
//! cells, so snapshots are cheap and restoring one can never leave derived
//! state out of sync.

use std::collections::VecDeque;

/// Snapshot history with a baseline entry.
///
/// The entry at the back of the undo stack is the current state. Undo is
/// possible only while at least two entries exist, so the baseline is never
/// popped. Recording a new state discards the redo stack.
#[derive(Clone, Debug)]
pub struct History<T> {
    undo: VecDeque<T>,
    redo: Vec<T>,
    max_size: usize,
}

impl<T: Clone> History<T> {
    /// A history holding only `baseline`, retaining at most `max_size`
    /// entries (minimum 1).
    pub fn new(baseline: T, max_size: usize) -> Self {
        let mut undo = VecDeque::new();
        undo.push_back(baseline);
        Self {
            undo,
            redo: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record `state` as the new current state.
    pub fn record(&mut self, state: T) {
        self.undo.push_back(state);
        self.redo.clear();
        while self.undo.len() > self.max_size {
            self.undo.pop_front();
        }
    }

    /// Step back one entry and return the state to restore.
    pub fn undo(&mut self) -> Option<&T> {
        if self.undo.len() <= 1 {
            return None;
        }
        let current = self.undo.pop_back()?;
        self.redo.push(current);
        self.undo.back()
    }

    /// Step forward one entry and return the state to restore.
    pub fn redo(&mut self) -> Option<&T> {
        let state = self.redo.pop()?;
        self.undo.push_back(state);
        self.undo.back()
    }

    /// Returns `true` if [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    /// Returns `true` if [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// The current state.
    pub fn current(&self) -> Option<&T> {
        self.undo.back()
    }

    /// Number of entries on the undo stack, baseline included.
    pub fn depth(&self) -> usize {
        self.undo.len()
    }

    /// Drop all history and start over from `baseline`.
    pub fn reset(&mut self, baseline: T) {
        self.undo.clear();
        self.redo.clear();
        self.undo.push_back(baseline);
    }
}
