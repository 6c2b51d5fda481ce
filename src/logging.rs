#![forbid(unsafe_code)]

//! Structured logging via `tracing`
//!
//! Events go to stderr so stdout stays reserved for the shell wrapper. The
//! filter is read from `DT_LOG` (e.g. `DT_LOG=debug`) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "DT_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the filter from `DT_LOG`, falling back to `warn`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber; later calls are no-ops
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
