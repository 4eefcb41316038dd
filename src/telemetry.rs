//! Telemetry helpers for applications embedding `deep-timeline`.
//!
//! The engine only emits `tracing` events (zoom changes, tick regeneration,
//! catalog loads, recovered input). Hosts either call `init_default_tracing`
//! or install their own subscriber.

/// Filter applied when `RUST_LOG` is unset: engine debug output, everything else at info.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info,deep_timeline=debug";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
