//! Ambient logging, wired up only for the `cli` binary. The library itself
//! only emits `tracing` events and never configures a subscriber — callers
//! embedding `rookery` pick their own.

use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber that writes to stderr, honoring
/// `ROOKERY_LOG` (falling back to `info`) for level filtering.
pub fn init() {
    let filter = EnvFilter::try_from_env("ROOKERY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("tracing subscriber already installed; skipping");
    }
}
