use serde::{Deserialize, Serialize};

use crate::core::{HierarchyConfig, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::ZoomLimits;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load timeline
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,
    #[serde(default)]
    pub zoom_limits: ZoomLimits,
    #[serde(default)]
    pub hierarchy: HierarchyConfig,
}

impl TimelineEngineConfig {
    /// Creates a config at the fully zoomed-out default view.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            initial_zoom: default_initial_zoom(),
            zoom_limits: ZoomLimits::default(),
            hierarchy: HierarchyConfig::default(),
        }
    }

    /// Sets the zoom the engine starts at.
    #[must_use]
    pub fn with_initial_zoom(mut self, initial_zoom: f64) -> Self {
        self.initial_zoom = initial_zoom;
        self
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, zoom_limits: ZoomLimits) -> Self {
        self.zoom_limits = zoom_limits;
        self
    }

    /// Sets level thresholds and band-height tuning.
    #[must_use]
    pub fn with_hierarchy(mut self, hierarchy: HierarchyConfig) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.zoom_limits.validate()?;
        self.hierarchy.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_initial_zoom() -> f64 {
    1.0
}
