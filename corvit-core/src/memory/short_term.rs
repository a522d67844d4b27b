//! Short-term memory — bounded FIFO queue of raw inputs.
//!
//! Entries leave either by FIFO eviction when capacity is exceeded or
//! out-of-order when promoted to long-term memory.

use std::collections::VecDeque;

/// Bounded queue of the K most recent, not-yet-promoted inputs.
#[derive(Debug, Clone)]
pub struct ShortTermMemory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl ShortTermMemory {
    /// Create an empty queue with capacity `capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild from a persisted snapshot, evicting oldest entries if the
    /// snapshot exceeds `capacity`.
    #[must_use]
    pub fn from_entries(entries: Vec<String>, capacity: usize) -> Self {
        let mut queue = Self::new(capacity);
        for entry in entries {
            queue.ingest(entry);
        }
        queue
    }

    /// Append an entry, evicting the oldest if capacity is exceeded.
    pub fn ingest(&mut self, entry: String) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Remove and return the entry at `index` (promotion path).
    pub fn remove(&mut self, index: usize) -> Option<String> {
        self.entries.remove(index)
    }

    /// Entries oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity K.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot for persistence, oldest-first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_evicts_oldest_beyond_capacity() {
        let mut memory = ShortTermMemory::new(3);
        for entry in ["a", "b", "c", "d"] {
            memory.ingest(entry.to_string());
        }
        assert_eq!(memory.snapshot(), vec!["b", "c", "d"]);
        assert_eq!(memory.len(), 3);
    }

    #[test]
    fn remove_is_out_of_order() {
        let mut memory = ShortTermMemory::new(3);
        for entry in ["a", "b", "c"] {
            memory.ingest(entry.to_string());
        }
        assert_eq!(memory.remove(1).as_deref(), Some("b"));
        assert_eq!(memory.snapshot(), vec!["a", "c"]);
        assert!(memory.remove(5).is_none());
    }

    #[test]
    fn oversized_snapshot_is_truncated_on_restore() {
        let entries = (0..10).map(|i| format!("entry {i}")).collect();
        let memory = ShortTermMemory::from_entries(entries, 3);
        assert_eq!(
            memory.snapshot(),
            vec!["entry 7", "entry 8", "entry 9"]
        );
    }
}
