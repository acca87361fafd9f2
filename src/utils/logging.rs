//! Logging initialization helpers

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for library consumers.
///
/// Honors `RUST_LOG`, defaulting to `info` when unset. Safe to call from
/// tests and embedders that may have already installed a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}
