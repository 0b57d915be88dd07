//! Tracing setup for embedding applications
//!
//! The library itself only emits `tracing` events; the host decides where
//! they go. `init` wires up a sensible default subscriber.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with a RUST_LOG env filter
///
/// Default: warn for most crates, info for this crate (stage transitions
/// visible). Use RUST_LOG=debug for verbose per-request logs. Call once at
/// application startup.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,content_alchemist=info")),
        )
        .init();
}
