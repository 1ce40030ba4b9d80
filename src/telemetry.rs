//! Tracing subscriber setup for binaries embedding the store.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The filter comes from the configured log level (`RUST_LOG` syntax is
/// accepted, e.g. `info` or `url_store=debug`); output is plain text or JSON
/// depending on `LOG_FORMAT`.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
