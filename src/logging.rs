//! Logging utilities for chinese-name-generator
//!
//! Re-exports tracing macros with log_* naming convention for consistency,
//! and installs the process-wide subscriber for the server binary.

use tracing_subscriber::EnvFilter;

// Re-export tracing macros with log_* naming
pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    warn as log_warn,
};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Install the global tracing subscriber, writing to stderr.
///
/// Honours `RUST_LOG`; falls back to [`DEFAULT_LOG_FILTER`]. Calling this more
/// than once is harmless, later calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
