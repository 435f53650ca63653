//! Priority frontier for greedy graph algorithms
//!
//! A binary min-heap over `(priority, item)` pairs, shared by Dijkstra
//! (items are nodes keyed by best-known distance) and Prim (items are
//! candidate edges keyed by weight). Duplicate entries for the same item
//! are permitted; staleness is resolved lazily by the caller at
//! extraction time, which avoids decrease-key entirely.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Heap entry ordered by priority, then by insertion sequence so that
/// equal priorities pop in insertion order (deterministic tie-breaking).
#[derive(Debug, Clone)]
struct FrontierEntry<T> {
    priority: u64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-priority frontier with O(log n) push and pop.
#[derive(Debug)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Reverse<FrontierEntry<T>>>,
    next_seq: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, priority: u64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            seq,
            item,
        }));
    }

    /// Remove and return the minimum-priority entry, or `None` when the
    /// frontier is exhausted.
    pub fn pop_min(&mut self) -> Option<(u64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_min_returns_smallest_priority() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(3, "c");
        frontier.push(1, "a");
        frontier.push(2, "b");

        assert_eq!(frontier.pop_min(), Some((1, "a")));
        assert_eq!(frontier.pop_min(), Some((2, "b")));
        assert_eq!(frontier.pop_min(), Some((3, "c")));
        assert_eq!(frontier.pop_min(), None);
    }

    #[test]
    fn test_equal_priorities_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(7, "first");
        frontier.push(7, "second");
        frontier.push(7, "third");

        assert_eq!(frontier.pop_min(), Some((7, "first")));
        assert_eq!(frontier.pop_min(), Some((7, "second")));
        assert_eq!(frontier.pop_min(), Some((7, "third")));
    }

    #[test]
    fn test_duplicate_items_are_permitted() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(5, 42usize);
        frontier.push(2, 42usize);

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop_min(), Some((2, 42)));
        assert_eq!(frontier.pop_min(), Some((5, 42)));
    }

    #[test]
    fn test_empty_frontier() {
        let mut frontier: PriorityFrontier<usize> = PriorityFrontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop_min(), None);
    }
}
