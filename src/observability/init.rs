//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, falling back to `level`
/// (typically [`IndexConfig::trace_level`](crate::gateway::IndexConfig)),
/// and finally to `info` if neither parses.
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect. Library consumers that install their own subscriber can simply
/// skip this.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}
