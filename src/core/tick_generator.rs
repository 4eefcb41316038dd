use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::label_format::format_magnitude;
use super::scale_sequence::{ScaleSequence, ScaleSet};
use super::tick::{Tick, TickLevel};
use super::types::{DOMAIN_SPAN_YEARS, TimeInstant, is_in_domain, sanitize_zoom};

pub const TODAY_INSTANT: TimeInstant = 0;
pub const TODAY_LABEL: &str = "TODAY";
const BILLION: TimeInstant = 1_000_000_000;
const BASE_GRID_LAST: TimeInstant = 13 * BILLION;
const BASE_GRID_MAJOR_STEP: TimeInstant = 5 * BILLION;

/// Generates the leveled, labeled tick set for `zoom`, sorted by ascending instant.
///
/// Non-positive or non-finite zoom is replaced by the minimum supported zoom.
#[must_use]
pub fn generate_ticks(zoom: f64, sequence: &ScaleSequence) -> Vec<Tick> {
    let zoom = sanitize_zoom(zoom);
    generate_ticks_for_mask(sequence.active_mask(zoom), sequence)
}

/// Generates ticks for an explicit active-set bitmask (bit `i` = `sequence.sets()[i]`).
///
/// Output depends on nothing but the mask, which makes the mask an exact memo key.
#[must_use]
pub fn generate_ticks_for_mask(active_mask: u64, sequence: &ScaleSequence) -> Vec<Tick> {
    let mut ticks = TickMap::default();
    ticks.seed_base_grid();
    ticks.seed_boundaries();

    let mut active_count = 0usize;
    for (index, set) in sequence.sets().iter().enumerate() {
        if index >= u64::BITS as usize || active_mask & (1u64 << index) == 0 {
            continue;
        }
        active_count += 1;
        ticks.apply_scale_set(set);
    }

    let ticks = ticks.into_sorted();
    debug!(
        active_mask,
        active_count,
        tick_count = ticks.len(),
        "generated timeline ticks"
    );
    ticks
}

/// Per-call instant -> tick map with overwrite-by-priority semantics.
#[derive(Debug, Default)]
struct TickMap {
    ticks: BTreeMap<TimeInstant, Tick>,
}

impl TickMap {
    fn seed_base_grid(&mut self) {
        for instant in (BILLION..=BASE_GRID_LAST).step_by(BILLION as usize) {
            let level = if instant % BASE_GRID_MAJOR_STEP == 0 {
                TickLevel::Major
            } else {
                TickLevel::Minor
            };
            self.insert(Tick::new(instant, format_magnitude(instant), level));
        }
    }

    fn seed_boundaries(&mut self) {
        self.ticks.insert(
            TODAY_INSTANT,
            Tick::new(TODAY_INSTANT, TODAY_LABEL, TickLevel::Maxi),
        );
        self.insert(
            Tick::new(
                DOMAIN_SPAN_YEARS,
                format_magnitude(DOMAIN_SPAN_YEARS),
                TickLevel::Maxi,
            )
            .with_dashed(true),
        );
    }

    /// Inserts unless an existing tick at the same instant is at least as prominent.
    fn insert(&mut self, tick: Tick) {
        if tick.instant == TODAY_INSTANT {
            return;
        }
        if !is_in_domain(tick.instant) {
            trace!(instant = tick.instant, "discarding out-of-domain tick");
            return;
        }

        match self.ticks.get(&tick.instant) {
            Some(existing) if existing.level >= tick.level => {}
            _ => {
                self.ticks.insert(tick.instant, tick);
            }
        }
    }

    fn apply_scale_set(&mut self, set: &ScaleSet) {
        let threshold = set.activation_threshold;

        // Pre-promotion levels, captured before this set adds fine ticks.
        let candidates: Vec<(TimeInstant, TickLevel)> = self
            .ticks
            .range(TODAY_INSTANT + 1..threshold)
            .filter(|(_, tick)| matches!(tick.level, TickLevel::Minor | TickLevel::Major))
            .map(|(instant, tick)| (*instant, tick.level))
            .collect();

        self.insert_fine_ticks(set);

        for (instant, level) in candidates {
            let Some(tick) = self.ticks.get_mut(&instant) else {
                continue;
            };
            match level {
                TickLevel::Major => {
                    tick.level = tick.level.max(level.promoted());
                }
                TickLevel::Minor if instant % set.medium == 0 => {
                    tick.level = tick.level.max(level.promoted());
                    tick.label = format_magnitude(instant);
                }
                _ => {}
            }
        }
    }

    fn insert_fine_ticks(&mut self, set: &ScaleSet) {
        for step in 1.. {
            let Some(instant) = set.fine.checked_mul(step) else {
                trace!(fine = set.fine, step, "fine tick instant overflowed");
                break;
            };
            if instant >= set.activation_threshold {
                break;
            }
            self.insert(Tick::new(instant, format_magnitude(instant), TickLevel::Minor));
        }
    }

    fn into_sorted(self) -> Vec<Tick> {
        self.ticks.into_values().collect()
    }
}
