//! Tracing bootstrap.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, filtered by the `DUNN_LOG`
/// environment variable (same syntax as `RUST_LOG`, default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env("DUNN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
