//! Bounded top-N ranking

use super::models::WordCount;

/// Keeps the `capacity` highest-counted entries in descending order.
///
/// Entries must be pushed in first-seen order. A new entry lands after every
/// retained entry with an equal or higher count, so ties keep push order and
/// the result matches a stable sort followed by truncation.
#[derive(Debug)]
pub struct TopN {
    capacity: usize,
    entries: Vec<WordCount>,
}

impl TopN {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // capacity + 1 leaves room for the entry about to be evicted
            entries: Vec::with_capacity(capacity.saturating_add(1).min(64)),
        }
    }

    /// Offer an entry. Returns `false` if it ranks below the current cut-off.
    pub fn push(&mut self, entry: WordCount) -> bool {
        let position = self
            .entries
            .partition_point(|held| held.count >= entry.count);
        if position >= self.capacity {
            return false;
        }

        self.entries.insert(position, entry);
        if self.entries.len() > self.capacity {
            self.entries.pop();
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<WordCount> {
        self.entries
    }
}
