//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "LISKY_LOG";

/// Install the global subscriber, writing to stderr.
///
/// The filter comes from `LISKY_LOG` and defaults to `warn` so that command
/// output on stdout stays clean. Calling this twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
