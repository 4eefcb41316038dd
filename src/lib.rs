//! deep-timeline: adaptive multi-resolution scale engine for a zoomable
//! timeline spanning today back to the Big Bang.
//!
//! A single zoom scalar drives two pure computations: the leveled, labeled
//! tick grid and the visibility/height layout of nested period bands.
//! Drawing is delegated to a `Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
