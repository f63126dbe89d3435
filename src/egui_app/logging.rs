//! Tracing setup for the desktop binary.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `filter` (an `EnvFilter` directive).
/// Falls back to `info` when the directive does not parse.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("[STARTUP] Invalid log filter {:?} ({}), using info", filter, err);
        EnvFilter::new("info")
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("[STARTUP] Tracing subscriber already installed");
    }
}
