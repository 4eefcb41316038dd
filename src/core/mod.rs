mod geological_catalog;
pub mod label_format;
pub mod period;
pub mod period_visibility;
pub mod projection;
pub mod scale_sequence;
pub mod tick;
pub mod tick_generator;
pub mod types;

pub use label_format::format_magnitude;
pub use period::{Period, PeriodCatalog};
pub use period_visibility::{HierarchyConfig, HorizontalSpan, RenderablePeriod, compute_renderable};
pub use projection::DomainProjection;
pub use scale_sequence::{STANDARD_MAGNITUDES, ScaleSequence, ScaleSet};
pub use tick::{Tick, TickLevel};
pub use tick_generator::{TODAY_INSTANT, TODAY_LABEL, generate_ticks, generate_ticks_for_mask};
pub use types::{
    DOMAIN_SPAN_YEARS, MIN_SUPPORTED_ZOOM, TimeInstant, Viewport, is_in_domain, sanitize_zoom,
    viewport_far_edge_years,
};
