use crate::error::TimelineResult;
use crate::render::{Renderer, TimelineFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch inconsistent layout
/// before a real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: u64,
    pub last_tick_count: usize,
    pub last_on_screen_tick_count: usize,
    pub last_displayed_period_count: usize,
    /// Leftmost and rightmost on-screen tick x of the last frame.
    pub last_tick_x_range: Option<(f64, f64)>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &TimelineFrame<'_>) -> TimelineResult<()> {
        frame.validate()?;
        self.frames_rendered = self.frames_rendered.saturating_add(1);
        self.last_tick_count = frame.ticks.len();
        let positions = frame.on_screen_tick_positions()?;
        self.last_on_screen_tick_count = positions.len();
        self.last_tick_x_range = positions.iter().fold(None, |range, (x, _)| match range {
            None => Some((*x, *x)),
            Some((min, max)) => Some((min.min(*x), max.max(*x))),
        });
        self.last_displayed_period_count = frame.displayed_periods().count();
        Ok(())
    }
}
