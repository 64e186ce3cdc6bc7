use std::collections::VecDeque;

/// Bounded linear undo history of whole-layer snapshots.
///
/// The cursor points at the entry that reflects the visible state. Appending
/// after an undo discards the redo branch; appending at capacity evicts the
/// oldest entry.
#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    entries: VecDeque<T>,
    cursor: Option<usize>,
    capacity: usize,
}

impl<T> HistoryStack<T> {
    /// Panics when `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "history capacity must be at least 1");
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    pub fn append(&mut self, snapshot: T) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Steps back one entry (clamped at the oldest) and returns the entry now
    /// under the cursor. `None` only while the history is empty.
    pub fn undo(&mut self) -> Option<&T> {
        let cursor = self.cursor?;
        let cursor = cursor.saturating_sub(1);
        self.cursor = Some(cursor);
        Some(self.entry(cursor))
    }

    /// Steps forward one entry (clamped at the newest).
    pub fn redo(&mut self) -> Option<&T> {
        let cursor = self.cursor?;
        let cursor = if cursor + 1 < self.entries.len() {
            cursor + 1
        } else {
            cursor
        };
        self.cursor = Some(cursor);
        Some(self.entry(cursor))
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor.map(|cursor| self.entry(cursor))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.entries.len())
    }

    fn entry(&self, index: usize) -> &T {
        // An out-of-range cursor means the bookkeeping above is broken.
        &self.entries[index]
    }
}
