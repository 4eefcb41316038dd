use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::types::{DOMAIN_SPAN_YEARS, MIN_SUPPORTED_ZOOM, TimeInstant};
use crate::error::{TimelineError, TimelineResult};

/// Magnitudes backing the standard ruler set, in years.
pub const STANDARD_MAGNITUDES: [TimeInstant; 21] = [
    10_000_000_000,
    5_000_000_000,
    1_000_000_000,
    500_000_000,
    100_000_000,
    50_000_000,
    10_000_000,
    5_000_000,
    1_000_000,
    500_000,
    100_000,
    50_000,
    10_000,
    5_000,
    1_000,
    500,
    100,
    50,
    10,
    5,
    1,
];

/// Active-set bitmasks are `u64`, which bounds the number of windows.
pub const MAX_SCALE_SETS: usize = 64;

/// Upper bound on `activation_threshold / fine` for one set.
pub const MAX_FINE_TICKS_PER_SET: TimeInstant = 10_000;

/// One threshold-activated bundle of nested tick granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSet {
    pub activation_threshold: TimeInstant,
    pub coarse: TimeInstant,
    pub medium: TimeInstant,
    pub fine: TimeInstant,
}

impl ScaleSet {
    /// A set is active once its threshold interval, magnified by `zoom`,
    /// is wider than the fully zoomed-out viewport.
    #[must_use]
    pub fn is_active(&self, zoom: f64) -> bool {
        let zoom = if zoom.is_finite() && zoom > 0.0 {
            zoom
        } else {
            MIN_SUPPORTED_ZOOM
        };
        self.activation_threshold as f64 / DOMAIN_SPAN_YEARS as f64 * zoom > 1.0
    }

    /// Smallest zoom at which the set would be active (exclusive bound).
    #[must_use]
    pub fn activation_zoom(&self) -> f64 {
        DOMAIN_SPAN_YEARS as f64 / self.activation_threshold as f64
    }
}

/// Ordered, strictly decreasing ruler magnitudes and the windows derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleSequence {
    magnitudes: Vec<TimeInstant>,
    sets: Vec<ScaleSet>,
}

impl ScaleSequence {
    /// Builds a sequence from descending magnitudes.
    ///
    /// Each window of four consecutive magnitudes becomes one `ScaleSet`
    /// `(threshold, coarse, medium, fine)`.
    pub fn from_magnitudes(magnitudes: Vec<TimeInstant>) -> TimelineResult<Self> {
        if magnitudes.len() < 4 {
            return Err(TimelineError::InvalidConfig(
                "scale sequence needs at least 4 magnitudes".to_owned(),
            ));
        }
        if magnitudes.iter().any(|magnitude| *magnitude <= 0) {
            return Err(TimelineError::InvalidConfig(
                "scale magnitudes must be > 0".to_owned(),
            ));
        }
        for pair in magnitudes.windows(2) {
            if pair[1] >= pair[0] {
                return Err(TimelineError::InvalidConfig(format!(
                    "scale magnitudes must be strictly decreasing: {} then {}",
                    pair[0], pair[1]
                )));
            }
            if pair[0] % pair[1] != 0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "scale magnitude {} must divide its predecessor {}",
                    pair[1], pair[0]
                )));
            }
        }

        let sets = derive_sets(&magnitudes);
        if let Some(set) = sets
            .iter()
            .find(|set| set.activation_threshold / set.fine > MAX_FINE_TICKS_PER_SET)
        {
            return Err(TimelineError::InvalidConfig(format!(
                "scale set at {} would emit more than {MAX_FINE_TICKS_PER_SET} fine ticks",
                set.activation_threshold
            )));
        }
        if sets.len() > MAX_SCALE_SETS {
            return Err(TimelineError::InvalidConfig(format!(
                "scale sequence yields {} sets, at most {MAX_SCALE_SETS} are supported",
                sets.len()
            )));
        }

        Ok(Self { magnitudes, sets })
    }

    /// Shared standard sequence, built once per process.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<ScaleSequence> = OnceLock::new();
        STANDARD.get_or_init(|| Self {
            magnitudes: STANDARD_MAGNITUDES.to_vec(),
            sets: derive_sets(&STANDARD_MAGNITUDES),
        })
    }

    #[must_use]
    pub fn magnitudes(&self) -> &[TimeInstant] {
        &self.magnitudes
    }

    #[must_use]
    pub fn sets(&self) -> &[ScaleSet] {
        &self.sets
    }

    /// Bitmask of sets active at `zoom`; bit `i` maps to `sets()[i]`.
    #[must_use]
    pub fn active_mask(&self, zoom: f64) -> u64 {
        self.sets
            .iter()
            .enumerate()
            .filter(|(_, set)| set.is_active(zoom))
            .fold(0u64, |mask, (index, _)| mask | (1u64 << index))
    }

    pub fn active_sets(&self, zoom: f64) -> impl Iterator<Item = &ScaleSet> + '_ {
        self.sets.iter().filter(move |set| set.is_active(zoom))
    }
}

/// Slides a window of four magnitudes into `(threshold, coarse, medium, fine)` sets.
fn derive_sets(magnitudes: &[TimeInstant]) -> Vec<ScaleSet> {
    magnitudes
        .windows(4)
        .map(|window| ScaleSet {
            activation_threshold: window[0],
            coarse: window[1],
            medium: window[2],
            fine: window[3],
        })
        .collect()
}
