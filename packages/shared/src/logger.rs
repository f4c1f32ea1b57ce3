//! Logging setup for the lobby client binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the given default log level.
///
/// Covers both the library crates and the binary itself; the `RUST_LOG`
/// environment variable overrides the default.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "muster-lobby")
/// * `default_log_level` - The default log level (e.g., "debug", "info")
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "muster_client={},muster_shared={},{}={}",
                    default_log_level,
                    default_log_level,
                    binary_name.replace("-", "_"),
                    default_log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
