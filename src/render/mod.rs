mod frame;
mod null_renderer;

pub use frame::TimelineFrame;
pub use null_renderer::NullRenderer;

use crate::error::TimelineResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully computed `TimelineFrame`, so drawing code owns
/// no timeline logic and never caches layout across zoom changes.
pub trait Renderer {
    fn render(&mut self, frame: &TimelineFrame<'_>) -> TimelineResult<()>;
}
