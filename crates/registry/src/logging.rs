//! Structured logging infrastructure for the fleet registry.
//!
//! Provides centralized logging initialization with environment-based
//! filtering and optional structured JSON output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the logging system with plain formatted output.
///
/// Log level can be configured via the `RUST_LOG` environment variable.
/// If not set, defaults to `info` level.
///
/// # Example
/// ```no_run
/// rocketfleet_registry::logging::init();
/// tracing::info!("registry started");
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Initialize the logging system from a [`LoggingConfig`].
///
/// `RUST_LOG` still takes precedence over the configured level when set. The
/// JSON format is suitable for log aggregation systems and structured log
/// analysis.
///
/// # Example
/// ```no_run
/// use rocketfleet_registry::{logging, Config};
///
/// let config = Config::default_config();
/// logging::init_from(&config.logging);
/// tracing::info!(component = "registry", "service started");
/// ```
pub fn init_from(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}
