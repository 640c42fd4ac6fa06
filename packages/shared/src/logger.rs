//! Logging setup for the Tsudoi binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive used when `RUST_LOG` is not set.
///
/// Every crate in `crate_names` (and the binary itself) is logged at
/// `default_log_level`; everything else falls back to `warn`.
pub fn default_directive(binary_name: &str, crate_names: &[&str], default_log_level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        crate_names
            .iter()
            .chain(std::iter::once(&binary_name))
            .map(|name| format!("{}={}", name.replace('-', "_"), default_log_level)),
    );
    directives.join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "tsudoi-server")
/// * `crate_names` - Library crates whose logs should be shown (e.g., `["tsudoi-server"]`)
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use tsudoi_shared::logger::setup_logger;
///
/// setup_logger("tsudoi-server", &["tsudoi-server"], "info");
/// ```
pub fn setup_logger(binary_name: &str, crate_names: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                default_directive(binary_name, crate_names, default_log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
