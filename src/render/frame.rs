use crate::core::{DomainProjection, RenderablePeriod, Tick, Viewport};
use crate::error::{TimelineError, TimelineResult};

/// Backend-agnostic scene for one timeline draw pass.
///
/// Carries the tick and period layout for the current zoom plus the
/// projection needed to place them; no styling decisions live here.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineFrame<'a> {
    pub viewport: Viewport,
    pub projection: DomainProjection,
    pub ticks: &'a [Tick],
    pub periods: Vec<RenderablePeriod<'a>>,
}

impl<'a> TimelineFrame<'a> {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        projection: DomainProjection,
        ticks: &'a [Tick],
        periods: Vec<RenderablePeriod<'a>>,
    ) -> Self {
        Self {
            viewport,
            projection,
            ticks,
            periods,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if self
            .ticks
            .windows(2)
            .any(|pair| pair[0].instant >= pair[1].instant)
        {
            return Err(TimelineError::InvalidConfig(
                "frame ticks must be strictly ascending by instant".to_owned(),
            ));
        }

        for period in &self.periods {
            if !period.relative_height.is_finite() || period.relative_height <= 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "period `{}` has a non-positive band height",
                    period.period.name
                )));
            }
        }

        Ok(())
    }

    /// Ticks whose instant falls inside the viewport.
    pub fn on_screen_ticks(&self) -> impl Iterator<Item = &'a Tick> + use<'a> {
        let projection = self.projection;
        self.ticks
            .iter()
            .filter(move |tick| projection.is_on_screen(tick.instant))
    }

    /// Periods still inside the exit buffer.
    pub fn displayed_periods(&self) -> impl Iterator<Item = &RenderablePeriod<'a>> + '_ {
        self.periods.iter().filter(|period| period.displayed)
    }

    /// Pixel x of each on-screen tick, measured from the viewport's left edge.
    pub fn on_screen_tick_positions(&self) -> TimelineResult<Vec<(f64, &'a Tick)>> {
        let projection = self.projection;
        let viewport = self.viewport;
        self.on_screen_ticks()
            .map(|tick| {
                projection
                    .instant_to_pixel(tick.instant, viewport)
                    .map(|x| (x, tick))
            })
            .collect()
    }
}
