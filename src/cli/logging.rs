/// Logging setup for the binary.
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive (e.g. `debug`).
pub const LOG_ENV: &str = "SRCARGS_LOG";

/// Install the stderr subscriber.
///
/// The filter comes from [`LOG_ENV`] when set, otherwise `debug` with
/// `--debug` and `warn` without. Calling this twice is harmless.
pub fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
