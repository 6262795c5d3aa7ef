//! Tracing initialization for the binary.
//!
//! Logs go to stderr; stdout belongs to the menu.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `STOCKROOM_LOG=debug`.
pub const LOG_ENV: &str = "STOCKROOM_LOG";

/// Installs the global subscriber. `fallback` is used when `STOCKROOM_LOG`
/// is unset or unparsable.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
