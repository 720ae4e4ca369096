//! Tracing initialization for the server binary.

use tracing_subscriber::EnvFilter;

/// Initialize the fmt subscriber with RUST_LOG filtering, defaulting to info.
pub fn init_telemetry() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
