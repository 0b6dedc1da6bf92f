//! Diagnostic logging to stderr.
//!
//! Filter directives come from `YMO_LOG` (e.g. `YMO_LOG=ymo_format=debug`),
//! defaulting to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "YMO_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
