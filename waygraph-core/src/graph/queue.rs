//! Binary min-heap used by the priority-ordered graph traversals.
//!
//! The queue has no decrease-key. Callers push a fresh entry whenever a
//! priority improves and discard stale entries when they surface. Equal
//! priorities pop in insertion order so traversals are deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

struct Entry<P, T> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with insertion-order tie-breaking.
pub(crate) struct MinQueue<P, T> {
    heap: BinaryHeap<Reverse<Entry<P, T>>>,
    next_sequence: u64,
}

impl<P: Ord, T> MinQueue<P, T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub(crate) fn push(&mut self, priority: P, item: T) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.heap.push(Reverse(Entry {
            priority,
            sequence,
            item,
        }));
    }

    /// Removes and returns the entry with the smallest priority.
    pub(crate) fn pop(&mut self) -> Option<(P, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.item))
    }
}
