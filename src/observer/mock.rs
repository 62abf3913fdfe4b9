use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::Observer;
use crate::types::Stats;

/// Mock observer for testing.
/// Records every notification in memory for verification.
#[derive(Debug, Clone)]
pub struct MockObserver {
    pub observed: Arc<Mutex<Vec<Stats>>>,
}

impl MockObserver {
    pub fn new() -> Self {
        Self {
            observed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get all recorded notifications.
    pub fn get_observed(&self) -> Vec<Stats> {
        self.lock().clone()
    }

    /// Most recent notification, if any.
    pub fn last(&self) -> Option<Stats> {
        self.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Clear recorded notifications.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panicking observer elsewhere may poison the lock; the data is still valid.
    fn lock(&self) -> MutexGuard<'_, Vec<Stats>> {
        self.observed.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MockObserver {
    fn name(&self) -> &'static str {
        "mock-observer"
    }

    fn observe(&self, stats: &Stats) {
        self.lock().push(stats.clone());
        tracing::debug!("MockObserver: recorded stats for {} items", stats.item_count);
    }
}
