use tracing::info;

use crate::traits::Observer;
use crate::types::Stats;

/// Emits one structured `tracing` event per selection call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn name(&self) -> &'static str {
        "tracing-observer"
    }

    fn observe(&self, stats: &Stats) {
        info!(
            target: "costfloor::stats",
            n = stats.item_count,
            selected = stats.selected_count,
            left_to_fill = stats.items_needed_to_fill_floor,
            replacements = stats.replacement_events,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "selection finished"
        );
    }
}
