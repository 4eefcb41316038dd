use serde::{Deserialize, Serialize};
use tracing::debug;

use super::geological_catalog::GEOLOGICAL_PERIODS;
use super::period_visibility::HierarchyConfig;
use super::types::{TimeInstant, is_in_domain};
use crate::error::{TimelineError, TimelineResult};

/// Named, colored interval of deep time drawn as a band.
///
/// `start_year` is further in the past than `end_year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub name: String,
    pub start_year: TimeInstant,
    pub end_year: TimeInstant,
    pub color: String,
    /// Hierarchy depth, `0` is the broadest.
    pub level: u8,
}

impl Period {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start_year: TimeInstant,
        end_year: TimeInstant,
        color: impl Into<String>,
        level: u8,
    ) -> Self {
        Self {
            name: name.into(),
            start_year,
            end_year,
            color: color.into(),
            level,
        }
    }
}

/// Immutable, validated list of periods in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodCatalog {
    periods: Vec<Period>,
    deepest_level: Option<u8>,
}

impl PeriodCatalog {
    /// Validates `periods` against `hierarchy` and freezes them.
    ///
    /// Fails when a period is not ordered past-to-present, leaves the domain,
    /// or sits on a level without a configured visibility threshold.
    pub fn new(periods: Vec<Period>, hierarchy: &HierarchyConfig) -> TimelineResult<Self> {
        for period in &periods {
            validate_period(period, hierarchy)?;
        }

        let deepest_level = periods.iter().map(|period| period.level).max();
        debug!(
            period_count = periods.len(),
            deepest_level, "loaded period catalog"
        );
        Ok(Self {
            periods,
            deepest_level,
        })
    }

    /// Parses a JSON array of periods and validates it.
    pub fn from_json_str(input: &str, hierarchy: &HierarchyConfig) -> TimelineResult<Self> {
        let periods: Vec<Period> = serde_json::from_str(input).map_err(|e| {
            TimelineError::CatalogInconsistency(format!("failed to parse catalog: {e}"))
        })?;
        Self::new(periods, hierarchy)
    }

    /// Reference catalog from cosmic eras down to Holocene chronozones.
    pub fn geological(hierarchy: &HierarchyConfig) -> TimelineResult<Self> {
        let periods = GEOLOGICAL_PERIODS
            .iter()
            .map(|&(name, start_year, end_year, color, level)| {
                Period::new(name, start_year, end_year, color, level)
            })
            .collect();
        Self::new(periods, hierarchy)
    }

    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    #[must_use]
    pub fn deepest_level(&self) -> Option<u8> {
        self.deepest_level
    }

    /// Re-checks every period level against another hierarchy config.
    pub fn validate_against(&self, hierarchy: &HierarchyConfig) -> TimelineResult<()> {
        self.periods
            .iter()
            .try_for_each(|period| validate_period(period, hierarchy))
    }

    pub fn at_level(&self, level: u8) -> impl Iterator<Item = &Period> + '_ {
        self.periods
            .iter()
            .filter(move |period| period.level == level)
    }
}

fn validate_period(period: &Period, hierarchy: &HierarchyConfig) -> TimelineResult<()> {
    if period.start_year <= period.end_year {
        return Err(TimelineError::CatalogInconsistency(format!(
            "period `{}` must start before it ends (start={}, end={})",
            period.name, period.start_year, period.end_year
        )));
    }
    if !is_in_domain(period.start_year) || !is_in_domain(period.end_year) {
        return Err(TimelineError::CatalogInconsistency(format!(
            "period `{}` lies outside the timeline domain",
            period.name
        )));
    }
    if hierarchy.level_threshold(period.level).is_none() {
        return Err(TimelineError::CatalogInconsistency(format!(
            "period `{}` uses level {} which has no visibility threshold",
            period.name, period.level
        )));
    }
    Ok(())
}
