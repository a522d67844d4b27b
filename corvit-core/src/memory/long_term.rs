//! Long-term memory — bounded FIFO queue populated by promotion.
//!
//! Nothing enters here directly from raw input; entries arrive from
//! short-term memory when a later input mentions them.

use std::collections::VecDeque;

/// Bounded queue of promoted topics, capacity L, FIFO-capped.
#[derive(Debug, Clone)]
pub struct LongTermMemory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl LongTermMemory {
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
            queue.retain(entry);
        }
        queue
    }

    /// Append a promoted topic, evicting the oldest if capacity is exceeded.
    pub fn retain(&mut self, entry: String) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
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

    /// Configured capacity L.
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
