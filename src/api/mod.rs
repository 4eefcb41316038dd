mod engine;
mod engine_config;
mod engine_snapshot;
mod tick_cache;

pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use engine_snapshot::{PeriodSnapshot, TimelineSnapshot};
pub use tick_cache::TickCacheStats;
