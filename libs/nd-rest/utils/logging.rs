//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize tracing with standard configuration.
///
/// Log level is taken from `RUST_LOG`; request/response traces are emitted at
/// debug level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .init();
}
