mod zoom_input;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TimelineError, TimelineResult};

pub use zoom_input::{resolve_pinch_zoom_factor, resolve_wheel_zoom_direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Clamp range and per-event step for the zoom scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier applied per discrete zoom-in event (divisor for zoom-out).
    pub step_factor: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_zoom: 0.2,
            max_zoom: 2.0e9,
            step_factor: 1.1,
        }
    }
}

impl ZoomLimits {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.min_zoom.is_finite() || self.min_zoom <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "min zoom must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_zoom.is_finite() || self.max_zoom < self.min_zoom {
            return Err(TimelineError::InvalidConfig(
                "max zoom must be finite and >= min zoom".to_owned(),
            ));
        }
        if !self.step_factor.is_finite() || self.step_factor <= 1.0 {
            return Err(TimelineError::InvalidConfig(
                "zoom step factor must be finite and > 1".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

/// The only long-lived mutable state of the timeline: the zoom scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    zoom: f64,
    limits: ZoomLimits,
}

impl ZoomState {
    /// Creates a state at `initial_zoom`, clamped into `limits`.
    pub fn new(limits: ZoomLimits, initial_zoom: f64) -> TimelineResult<Self> {
        let limits = limits.validate()?;
        let mut state = Self {
            zoom: limits.min_zoom,
            limits,
        };
        state.set_zoom(initial_zoom);
        Ok(state)
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn limits(self) -> ZoomLimits {
        self.limits
    }

    #[must_use]
    pub fn is_at_max(self) -> bool {
        self.zoom >= self.limits.max_zoom
    }

    #[must_use]
    pub fn is_at_min(self) -> bool {
        self.zoom <= self.limits.min_zoom
    }

    /// Sets the zoom scalar, clamped into limits.
    ///
    /// Non-finite or non-positive input is recovered as the minimum zoom.
    /// Returns `true` when the stored zoom changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let target = if zoom.is_finite() && zoom > 0.0 {
            self.limits.clamp(zoom)
        } else {
            let err = TimelineError::InvalidZoomInput { value: zoom };
            warn!(error = %err, "recovering with minimum zoom");
            self.limits.min_zoom
        };
        self.replace(target)
    }

    /// Applies one discrete zoom step.
    pub fn step(&mut self, direction: ZoomDirection) -> bool {
        let target = match direction {
            ZoomDirection::In => self.zoom * self.limits.step_factor,
            ZoomDirection::Out => self.zoom / self.limits.step_factor,
        };
        self.replace(self.limits.clamp(target))
    }

    /// Applies one wheel event; negative `delta_y` zooms in.
    pub fn apply_wheel_delta(&mut self, delta_y: f64) -> bool {
        match resolve_wheel_zoom_direction(delta_y) {
            Ok(Some(direction)) => self.step(direction),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "ignoring wheel event");
                false
            }
        }
    }

    /// Multiplies zoom by a pinch gesture scale factor.
    pub fn apply_pinch(&mut self, scale_factor: f64) -> bool {
        match resolve_pinch_zoom_factor(scale_factor) {
            Ok(Some(factor)) => self.replace(self.limits.clamp(self.zoom * factor)),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "ignoring pinch event");
                false
            }
        }
    }

    fn replace(&mut self, target: f64) -> bool {
        if target == self.zoom {
            return false;
        }
        debug!(from = self.zoom, to = target, "zoom changed");
        self.zoom = target;
        true
    }
}
