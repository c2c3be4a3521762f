//! Logging setup for applications using the date parser.
//!
//! The parser itself only emits `tracing` events: `debug` when a lenient
//! parse keeps its input as nonstandard text, `trace` for each parsed date,
//! `warn` when a [`DateCollector`](crate::DateCollector) rejects a field.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the default `info` filter.
///
/// Returns false if a global subscriber was already installed.
pub fn init() -> bool {
    init_with_filter("info")
}

/// Initialize tracing with a custom default filter.
///
/// `RUST_LOG` takes precedence over `default_filter` when set.
pub fn init_with_filter(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init()
        .is_ok()
}
