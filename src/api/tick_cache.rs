use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ScaleSequence, Tick, generate_ticks_for_mask};

/// Runtime metrics exposed by the in-engine tick cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Holds the tick set for the last active-set mask.
///
/// Tick output is a pure function of the mask, so reuse is exact and
/// needs no zoom quantization.
#[derive(Debug, Default)]
pub(super) struct TickCache {
    mask: Option<u64>,
    ticks: Vec<Tick>,
    hits: u64,
    misses: u64,
}

impl TickCache {
    pub(super) fn refresh(&mut self, active_mask: u64, sequence: &ScaleSequence) {
        if self.mask == Some(active_mask) {
            self.hits = self.hits.saturating_add(1);
            trace!(active_mask, "tick cache hit");
            return;
        }

        self.misses = self.misses.saturating_add(1);
        self.ticks = generate_ticks_for_mask(active_mask, sequence);
        self.mask = Some(active_mask);
    }

    pub(super) fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub(super) fn stats(&self) -> TickCacheStats {
        TickCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.ticks.len(),
        }
    }
}
