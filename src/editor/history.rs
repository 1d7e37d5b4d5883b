//! Undo/redo history for a draft
//!
//! Snapshots of the whole draft are kept on two bounded stacks. Recording a
//! new snapshot clears the redo stack.

/// Default maximum number of undo steps kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Undo/redo history of draft snapshots.
#[derive(Debug, Clone)]
pub struct History {
    /// The snapshot currently shown
    current: String,
    /// Older snapshots, most recent last
    undo_stack: Vec<String>,
    /// Snapshots undone, most recently undone last
    redo_stack: Vec<String>,
    /// Maximum undo history size
    max_undo_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create an empty history starting from an empty draft.
    pub fn new(max_undo_size: usize) -> Self {
        Self {
            current: String::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo_size: max_undo_size.max(1),
        }
    }

    /// The snapshot currently shown.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Record a new snapshot.
    ///
    /// Returns `false` (and records nothing) if `text` equals the current snapshot.
    pub fn record(&mut self, text: &str) -> bool {
        if text == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, text.to_string());
        self.undo_stack.push(previous);
        if self.undo_stack.len() > self.max_undo_size {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        true
    }

    /// Drop all history and start again from `text`.
    pub fn reset(&mut self, text: &str) {
        self.current = text.to_string();
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Step back one snapshot, returning the restored text.
    pub fn undo(&mut self) -> Option<&str> {
        let previous = self.undo_stack.pop()?;
        let current = std::mem::replace(&mut self.current, previous);
        self.redo_stack.push(current);
        Some(self.current.as_str())
    }

    /// Step forward one snapshot, returning the restored text.
    pub fn redo(&mut self) -> Option<&str> {
        let next = self.redo_stack.pop()?;
        let current = std::mem::replace(&mut self.current, next);
        self.undo_stack.push(current);
        Some(self.current.as_str())
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of items in the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of items in the redo stack.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
