use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use tracing::warn;

use crate::candidates::BoundedCandidates;
use crate::error::SelectError;
use crate::observer::ObserverVariant;
use crate::traits::Observer;
use crate::types::{CostItem, Flag, Stats};

/// Per-call options for [`select_with`].
#[derive(Debug, Default)]
pub struct SelectOptions {
    /// Notified exactly once per call. Defaults to a no-op.
    pub observer: ObserverVariant,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(mut self, observer: impl Into<ObserverVariant>) -> Self {
        self.observer = observer.into();
        self
    }
}

/// Counters accumulated while a call runs; reported even when it fails.
#[derive(Debug, Default)]
struct Counters {
    selected: usize,
    left_to_fill: usize,
    replacements: usize,
}

/// Minimum number of items a selection over `n` costs must include.
pub fn min_selection_size(n: usize) -> usize {
    n.div_ceil(2)
}

/// Select the cheapest subset containing at least half (rounded up) of `costs`.
///
/// See [`select_with`].
pub fn select(costs: &[f64]) -> Result<Vec<Flag>, SelectError> {
    select_with(costs, &SelectOptions::default())
}

/// Select the cheapest subset containing at least half (rounded up) of `costs`.
///
/// Every negative cost is selected. If that falls short of the floor, the
/// remaining slots go to the smallest non-negative costs, ties resolved in
/// favour of the lower index. Returns one flag per input position.
///
/// Fails with [`SelectError::EmptyInput`] on empty input and with
/// [`SelectError::InvalidNumber`] if any cost is NaN; no partial result is
/// produced. Infinities are ordinary values.
///
/// The observer in `options` is invoked exactly once before returning, on
/// success and on error. A panic inside the observer is caught and logged;
/// it does not change the returned value.
pub fn select_with(costs: &[f64], options: &SelectOptions) -> Result<Vec<Flag>, SelectError> {
    let start = Instant::now();
    let mut counters = Counters::default();

    let result = run(costs, &mut counters);

    let stats = Stats {
        item_count: costs.len(),
        selected_count: counters.selected,
        items_needed_to_fill_floor: counters.left_to_fill,
        replacement_events: counters.replacements,
        elapsed: start.elapsed(),
    };
    notify(&options.observer, &stats);

    result
}

fn run(costs: &[f64], counters: &mut Counters) -> Result<Vec<Flag>, SelectError> {
    if costs.is_empty() {
        return Err(SelectError::EmptyInput);
    }

    let min_size = min_selection_size(costs.len());
    let mut flags: Vec<Flag> = vec![0; costs.len()];

    for (index, &value) in costs.iter().enumerate() {
        if value.is_nan() {
            return Err(SelectError::InvalidNumber { index });
        }
        if value < 0.0 {
            flags[index] = 1;
            counters.selected += 1;
        }
    }

    // Negatives alone reach the floor.
    if counters.selected >= min_size {
        return Ok(flags);
    }

    counters.left_to_fill = min_size - counters.selected;
    let mut candidates = BoundedCandidates::new(counters.left_to_fill);

    for (index, &value) in costs.iter().enumerate() {
        if flags[index] == 1 {
            continue;
        }

        let item = CostItem::new(value, index);
        if candidates.insert(item) {
            continue;
        }

        // Smaller value wins; equal values go to the lower index.
        let displaces = candidates.peek_worst().is_some_and(|worst| item < *worst);
        if displaces {
            candidates.replace_worst(item);
            counters.replacements += 1;
        }
    }

    for item in candidates.drain() {
        flags[item.index] = 1;
        counters.selected += 1;
    }

    Ok(flags)
}

fn notify(observer: &ObserverVariant, stats: &Stats) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| observer.observe(stats)));
    if outcome.is_err() {
        warn!(observer = observer.name(), "observer panicked; selection result unaffected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::MockObserver;

    #[test]
    fn test_min_selection_size_rounds_up() {
        assert_eq!(min_selection_size(0), 0);
        assert_eq!(min_selection_size(1), 1);
        assert_eq!(min_selection_size(4), 2);
        assert_eq!(min_selection_size(5), 3);
    }

    #[test]
    fn test_single_positive_is_selected() {
        assert_eq!(select(&[42.0]), Ok(vec![1]));
    }

    #[test]
    fn test_negative_zero_is_a_fill_candidate() {
        // -0.0 is not negative, and compares equal to 0.0.
        assert_eq!(select(&[0.0, -0.0, 1.0, 2.0]), Ok(vec![1, 1, 0, 0]));
    }

    #[test]
    fn test_counters_for_fill_path() {
        let mock = MockObserver::new();
        let options = SelectOptions::new().with_observer(mock.clone());

        // Need 3; one negative, so 2 fill slots. Scan: 5, 3 inserted; 4 and 1
        // each displace the root.
        let flags = select_with(&[5.0, -1.0, 3.0, 4.0, 1.0], &options);
        assert_eq!(flags, Ok(vec![0, 1, 1, 0, 1]));

        let stats = mock.last().expect("observer was called");
        assert_eq!(stats.item_count, 5);
        assert_eq!(stats.selected_count, 3);
        assert_eq!(stats.items_needed_to_fill_floor, 2);
        assert_eq!(stats.replacement_events, 2);
    }

    #[test]
    fn test_counters_for_late_nan() {
        let mock = MockObserver::new();
        let options = SelectOptions::new().with_observer(mock.clone());

        let result = select_with(&[-1.0, -2.0, f64::NAN, -3.0], &options);
        assert_eq!(result, Err(SelectError::InvalidNumber { index: 2 }));

        let stats = mock.last().expect("observer was called");
        assert_eq!(stats.item_count, 4);
        assert_eq!(stats.selected_count, 2);
        assert_eq!(stats.items_needed_to_fill_floor, 0);
        assert_eq!(stats.replacement_events, 0);
    }
}
