use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::trace;

use super::period::{Period, PeriodCatalog};
use super::projection::DomainProjection;
use super::types::{DOMAIN_SPAN_YEARS, TimeInstant, sanitize_zoom, viewport_far_edge_years};
use crate::error::{TimelineError, TimelineResult};

/// Level visibility thresholds and band-height tuning for the period hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Far-edge threshold in years per level; level `L` is visible once the
    /// viewport far edge is at or below `level_thresholds[L]`.
    pub level_thresholds: Vec<TimeInstant>,
    pub base_height: f64,
    pub big_expansion_factor: f64,
    pub small_expansion_factor: f64,
    /// Fixed heights for the root levels, used while no deeper level is visible.
    pub root_override_heights: SmallVec<[f64; 2]>,
    /// Bands narrower than this (in percent of the viewport) are faded out.
    pub noise_floor_percent: f64,
    /// Bands are dropped once their near edge passes `100 + exit_buffer_percent`.
    pub exit_buffer_percent: f64,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            level_thresholds: vec![
                DOMAIN_SPAN_YEARS,
                DOMAIN_SPAN_YEARS,
                5_000_000_000,
                1_000_000_000,
                100_000_000,
                5_000_000,
                20_000,
            ],
            base_height: 64.0,
            big_expansion_factor: 1.0,
            small_expansion_factor: 0.5,
            root_override_heights: smallvec![96.0, 64.0],
            noise_floor_percent: 0.1,
            exit_buffer_percent: 10.0,
        }
    }
}

impl HierarchyConfig {
    pub fn validate(&self) -> TimelineResult<()> {
        if self.level_thresholds.is_empty() {
            return Err(TimelineError::InvalidConfig(
                "hierarchy needs at least one level threshold".to_owned(),
            ));
        }
        if self.level_thresholds.len() > usize::from(u8::MAX) + 1 {
            return Err(TimelineError::InvalidConfig(
                "hierarchy supports at most 256 levels".to_owned(),
            ));
        }
        if self.level_thresholds.iter().any(|threshold| *threshold <= 0) {
            return Err(TimelineError::InvalidConfig(
                "level thresholds must be > 0".to_owned(),
            ));
        }
        if self
            .level_thresholds
            .windows(2)
            .any(|pair| pair[1] > pair[0])
        {
            return Err(TimelineError::InvalidConfig(
                "level thresholds must be non-increasing with depth".to_owned(),
            ));
        }
        if !self.base_height.is_finite() || self.base_height <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "base height must be finite and > 0".to_owned(),
            ));
        }
        for (value, name) in [
            (self.big_expansion_factor, "big_expansion_factor"),
            (self.small_expansion_factor, "small_expansion_factor"),
            (self.noise_floor_percent, "noise_floor_percent"),
            (self.exit_buffer_percent, "exit_buffer_percent"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "hierarchy `{name}` must be finite and >= 0"
                )));
            }
        }
        if self.root_override_heights.len() > self.level_thresholds.len() {
            return Err(TimelineError::InvalidConfig(
                "root override heights cannot outnumber hierarchy levels".to_owned(),
            ));
        }
        if self
            .root_override_heights
            .iter()
            .any(|height| !height.is_finite() || *height <= 0.0)
        {
            return Err(TimelineError::InvalidConfig(
                "root override heights must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.level_thresholds.len()
    }

    #[must_use]
    pub fn level_threshold(&self, level: u8) -> Option<TimeInstant> {
        self.level_thresholds.get(usize::from(level)).copied()
    }

    #[must_use]
    pub fn is_level_visible(&self, level: u8, zoom: f64) -> bool {
        self.level_threshold(level)
            .is_some_and(|threshold| visibility_far_edge(zoom) <= threshold as f64)
    }

    /// Deepest (highest index) level visible at `zoom`, if any.
    #[must_use]
    pub fn lowest_visible_level(&self, zoom: f64) -> Option<u8> {
        let far_edge = visibility_far_edge(zoom);
        self.level_thresholds
            .iter()
            .enumerate()
            .filter(|(_, threshold)| far_edge <= **threshold as f64)
            .filter_map(|(index, _)| u8::try_from(index).ok())
            .max()
    }

    /// Band height of `level` given the deepest visible level.
    ///
    /// Levels at or below the deepest visible one get the base height; each
    /// step above adds the big factor once, then the small factor per step.
    #[must_use]
    pub fn level_height(&self, level: u8, lowest_visible: Option<u8>) -> f64 {
        let Some(lowest) = lowest_visible else {
            return self.base_height;
        };
        if level > lowest {
            return self.base_height;
        }

        if usize::from(lowest) < self.root_override_heights.len() {
            if let Some(height) = self.root_override_heights.get(usize::from(level)) {
                return *height;
            }
        }

        match lowest - level {
            0 => self.base_height,
            1 => self.base_height * (1.0 + self.big_expansion_factor),
            steps => {
                self.base_height
                    * (1.0
                        + self.big_expansion_factor
                        + f64::from(steps - 1) * self.small_expansion_factor)
            }
        }
    }

    /// Heights of all visible levels, keyed by level in ascending order.
    #[must_use]
    pub fn visible_level_heights(&self, zoom: f64) -> IndexMap<u8, f64> {
        let lowest = self.lowest_visible_level(zoom);
        let mut heights = IndexMap::new();
        if let Some(lowest) = lowest {
            for level in 0..=lowest {
                if self.is_level_visible(level, zoom) {
                    heights.insert(level, self.level_height(level, Some(lowest)));
                }
            }
        }
        heights
    }
}

/// Far edge used for level visibility; nothing lies further back than the domain.
fn visibility_far_edge(zoom: f64) -> f64 {
    viewport_far_edge_years(zoom).min(DOMAIN_SPAN_YEARS as f64)
}

/// Horizontal placement in percent of the viewport width, measured from the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalSpan {
    pub right_percent: f64,
    pub width_percent: f64,
}

impl HorizontalSpan {
    #[must_use]
    pub fn left_percent(self) -> f64 {
        self.right_percent + self.width_percent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderablePeriod<'a> {
    pub period: &'a Period,
    pub visible: bool,
    pub relative_height: f64,
    pub span: HorizontalSpan,
    /// `1.0` when drawn, `0.0` when faded (invisible level or sub-noise width).
    pub opacity: f64,
    /// `false` once the band is far enough past the viewport edge to drop.
    pub displayed: bool,
}

/// Computes one renderable entry per catalog period, in catalog order.
#[must_use]
pub fn compute_renderable<'a>(
    zoom: f64,
    catalog: &'a PeriodCatalog,
    hierarchy: &HierarchyConfig,
) -> Vec<RenderablePeriod<'a>> {
    let zoom = sanitize_zoom(zoom);
    let projection = DomainProjection::new(zoom);
    let lowest_visible = hierarchy.lowest_visible_level(zoom);
    let display_limit = 100.0 + hierarchy.exit_buffer_percent;

    let renderable: Vec<RenderablePeriod<'a>> = catalog
        .periods()
        .iter()
        .map(|period| {
            let visible = hierarchy.is_level_visible(period.level, zoom);
            let relative_height = if visible {
                hierarchy.level_height(period.level, lowest_visible)
            } else {
                hierarchy.base_height
            };
            let span = projection.span(period.start_year, period.end_year);
            let opacity = if visible && span.width_percent >= hierarchy.noise_floor_percent {
                1.0
            } else {
                0.0
            };

            RenderablePeriod {
                period,
                visible,
                relative_height,
                span,
                opacity,
                displayed: span.right_percent <= display_limit,
            }
        })
        .collect();

    trace!(
        zoom,
        lowest_visible,
        period_count = renderable.len(),
        "computed renderable periods"
    );
    renderable
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use smallvec::smallvec;

    use super::{HierarchyConfig, compute_renderable};
    use crate::core::period::{Period, PeriodCatalog};

    #[test]
    fn default_config_is_valid() {
        HierarchyConfig::default().validate().expect("valid");
    }

    #[test]
    fn increasing_thresholds_are_rejected() {
        let config = HierarchyConfig {
            level_thresholds: vec![100, 200],
            ..HierarchyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn too_many_overrides_are_rejected() {
        let config = HierarchyConfig {
            level_thresholds: vec![100],
            root_override_heights: smallvec![1.0, 2.0],
            ..HierarchyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn roots_use_overrides_until_third_level_unlocks() {
        let config = HierarchyConfig::default();
        assert_eq!(config.lowest_visible_level(1.0), Some(1));
        assert_relative_eq!(config.level_height(0, Some(1)), 96.0);
        assert_relative_eq!(config.level_height(1, Some(1)), 64.0);

        // Level 2 unlocks once the far edge reaches 5B years.
        assert_eq!(config.lowest_visible_level(3.0), Some(2));
        assert_relative_eq!(config.level_height(0, Some(2)), 160.0);
        assert_relative_eq!(config.level_height(1, Some(2)), 128.0);
        assert_relative_eq!(config.level_height(2, Some(2)), 64.0);
    }

    #[test]
    fn roots_stay_visible_when_zoomed_out_past_the_domain() {
        let config = HierarchyConfig::default();
        for zoom in [0.2, 0.5, 0.95] {
            assert_eq!(config.lowest_visible_level(zoom), Some(1), "zoom {zoom}");
            let levels: Vec<u8> = config.visible_level_heights(zoom).keys().copied().collect();
            assert_eq!(levels, vec![0, 1]);
        }
    }

    #[test]
    fn nothing_is_visible_when_every_threshold_is_below_the_far_edge() {
        let config = HierarchyConfig {
            level_thresholds: vec![1_000_000_000, 100_000_000],
            root_override_heights: smallvec![],
            ..HierarchyConfig::default()
        };
        assert_eq!(config.lowest_visible_level(1.0), None);
        assert!(config.visible_level_heights(1.0).is_empty());
    }

    #[test]
    fn visible_heights_are_ordered_by_level() {
        let heights = HierarchyConfig::default().visible_level_heights(1.0e6);
        let levels: Vec<u8> = heights.keys().copied().collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn narrow_band_is_faded_but_kept() {
        let hierarchy = HierarchyConfig::default();
        let catalog = PeriodCatalog::new(
            vec![Period::new("Sliver", 1_000, 0, "grey", 0)],
            &hierarchy,
        )
        .expect("catalog");

        let renderable = compute_renderable(1.0, &catalog, &hierarchy);
        assert_eq!(renderable.len(), 1);
        assert!(renderable[0].visible);
        assert!(renderable[0].displayed);
        assert_eq!(renderable[0].opacity, 0.0);
    }

    #[test]
    fn band_past_exit_buffer_is_dropped() {
        let hierarchy = HierarchyConfig::default();
        let catalog = PeriodCatalog::new(
            vec![
                Period::new("Near exit", 4_000_000_000, 1_450_000_000, "grey", 0),
                Period::new("Gone", 4_000_000_000, 1_600_000_000, "grey", 0),
            ],
            &hierarchy,
        )
        .expect("catalog");

        // At zoom 10 the viewport covers 1.38B years.
        let renderable = compute_renderable(10.0, &catalog, &hierarchy);
        assert!(renderable[0].displayed);
        assert!(!renderable[1].displayed);
    }
}
