//! Diagnostic logging to stderr.
//!
//! Filtered by `STRONGPASS_LOG` (tracing `EnvFilter` syntax), default `warn`
//! so the interactive menus stay clean. Passwords are never logged.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "STRONGPASS_LOG";
const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
