use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;

/// Selection flag for one input position: `1` selected, `0` not selected.
pub type Flag = u8;

/// A single cost together with its position in the input.
///
/// Identity is the `index`; `value` may repeat across items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostItem {
    pub value: f64,
    pub index: usize,
}

impl CostItem {
    pub fn new(value: f64, index: usize) -> Self {
        Self { value, index }
    }
}

// Items never carry NaN: the selector rejects NaN before building any CostItem.
impl Eq for CostItem {}

/// Eviction order: a "greater" item is a weaker candidate.
///
/// `a > b` iff `a.value > b.value`, or the values are equal and
/// `a.index > b.index`. A max-heap over this order keeps the item that
/// should be evicted first at its root.
impl Ord for CostItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .partial_cmp(&other.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for CostItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-call observation payload handed to an [`Observer`](crate::traits::Observer).
///
/// Backend-agnostic: callers export it to logs, metrics or traces as they see fit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of input costs.
    pub item_count: usize,
    /// Number of flags set to 1 when the call finished.
    pub selected_count: usize,
    /// How many non-negative items were needed to reach the floor.
    pub items_needed_to_fill_floor: usize,
    /// Root replacements performed in the bounded candidate set.
    pub replacement_events: usize,
    /// Wall time spent inside the call.
    pub elapsed: Duration,
}
