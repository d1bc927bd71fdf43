use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Keeps stderr quiet unless
/// something is worth a warning.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the fmt subscriber on stderr so stdout carries only the report.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
