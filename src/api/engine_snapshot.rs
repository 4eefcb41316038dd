use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{HorizontalSpan, ScaleSet, Tick, Viewport};

use super::TickCacheStats;

/// Owned view of one renderable period inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSnapshot {
    pub name: String,
    pub level: u8,
    pub visible: bool,
    pub relative_height: f64,
    pub span: HorizontalSpan,
    pub opacity: f64,
    pub displayed: bool,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub viewport: Viewport,
    pub zoom: f64,
    pub viewport_far_edge_years: f64,
    pub active_scale_sets: Vec<ScaleSet>,
    pub ticks: Vec<Tick>,
    pub visible_level_heights: IndexMap<u8, f64>,
    pub periods: Vec<PeriodSnapshot>,
    pub tick_cache: TickCacheStats,
}
