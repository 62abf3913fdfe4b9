use std::collections::BinaryHeap;

use crate::types::CostItem;

/// Capacity-limited max-heap of the lowest-valued fill candidates seen so far.
///
/// The root is always the weakest kept candidate under the [`CostItem`]
/// ordering (largest value, then largest index), so deciding whether a new
/// item displaces it is O(1) and the replacement itself is O(log k).
#[derive(Debug)]
pub struct BoundedCandidates {
    heap: BinaryHeap<CostItem>,
    capacity: usize,
}

impl BoundedCandidates {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Add an item while below capacity.
    ///
    /// Returns `false` and leaves the set untouched when it is already full.
    pub fn insert(&mut self, item: CostItem) -> bool {
        if self.is_full() {
            return false;
        }
        self.heap.push(item);
        true
    }

    /// Current weakest candidate, if any.
    pub fn peek_worst(&self) -> Option<&CostItem> {
        self.heap.peek()
    }

    /// Overwrite the weakest candidate with `item` and restore heap order.
    ///
    /// Returns the evicted item, or `None` if the set is empty.
    pub fn replace_worst(&mut self, item: CostItem) -> Option<CostItem> {
        let mut root = self.heap.peek_mut()?;
        let evicted = std::mem::replace(&mut *root, item);
        // Sift-down runs when the guard drops.
        drop(root);
        Some(evicted)
    }

    /// Consume the set and return its items in no particular order.
    pub fn drain(self) -> Vec<CostItem> {
        self.heap.into_vec()
    }
}
