use super::period_visibility::HorizontalSpan;
use super::types::{DOMAIN_SPAN_YEARS, TimeInstant, Viewport, sanitize_zoom};
use crate::error::{TimelineError, TimelineResult};

/// Linear instant -> viewport mapping anchored at the right edge (today).
///
/// Percentages are measured leftwards from the right edge; `100.0` is the
/// viewport's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainProjection {
    zoom: f64,
}

impl DomainProjection {
    #[must_use]
    pub fn new(zoom: f64) -> Self {
        Self {
            zoom: sanitize_zoom(zoom),
        }
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn right_percent(self, instant: TimeInstant) -> f64 {
        instant as f64 / DOMAIN_SPAN_YEARS as f64 * 100.0 * self.zoom
    }

    #[must_use]
    pub fn span(self, start_year: TimeInstant, end_year: TimeInstant) -> HorizontalSpan {
        let right_percent = self.right_percent(end_year);
        let left_percent = self.right_percent(start_year);
        HorizontalSpan {
            right_percent,
            width_percent: (left_percent - right_percent).abs(),
        }
    }

    /// Whether an instant falls inside the viewport.
    #[must_use]
    pub fn is_on_screen(self, instant: TimeInstant) -> bool {
        let percent = self.right_percent(instant);
        (0.0..=100.0).contains(&percent)
    }

    /// Pixel x of `instant`, measured from the viewport's left edge.
    pub fn instant_to_pixel(self, instant: TimeInstant, viewport: Viewport) -> TimelineResult<f64> {
        validate_viewport(viewport)?;
        let width = f64::from(viewport.width);
        Ok(width - self.right_percent(instant) / 100.0 * width)
    }
}

fn validate_viewport(viewport: Viewport) -> TimelineResult<()> {
    if viewport.is_valid() {
        Ok(())
    } else {
        Err(TimelineError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}
