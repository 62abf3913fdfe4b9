use crate::traits::Observer;
use crate::types::Stats;

/// Default observer: discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn name(&self) -> &'static str {
        "noop-observer"
    }

    fn observe(&self, _stats: &Stats) {}
}
