use serde::{Deserialize, Serialize};
use tracing::warn;

/// Years before present. `0` is today, positive values lie in the past.
pub type TimeInstant = i64;

/// Age of the universe in years; the oldest instant on the timeline.
pub const DOMAIN_SPAN_YEARS: TimeInstant = 13_800_000_000;

/// Zoom substituted for non-positive or non-finite zoom input.
pub const MIN_SUPPORTED_ZOOM: f64 = 0.2;

#[must_use]
pub fn is_in_domain(instant: TimeInstant) -> bool {
    (0..=DOMAIN_SPAN_YEARS).contains(&instant)
}

/// Returns `zoom` unchanged when usable, otherwise `MIN_SUPPORTED_ZOOM`.
#[must_use]
pub fn sanitize_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        warn!(zoom, "substituting minimum supported zoom for invalid input");
        MIN_SUPPORTED_ZOOM
    }
}

/// Far (oldest) edge of the viewport in years at the given zoom.
#[must_use]
pub fn viewport_far_edge_years(zoom: f64) -> f64 {
    DOMAIN_SPAN_YEARS as f64 / sanitize_zoom(zoom)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
