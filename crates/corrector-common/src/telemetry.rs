//! Tracing setup for hosts embedding the corrector crates.
//!
//! The library crates only emit `tracing` events. A native host (test
//! harness, desktop shell, server-side renderer) calls [`init`] once at
//! startup to get compact console output.
//!
//! ```ignore
//! use corrector_common::telemetry::{self, TelemetryConfig};
//!
//! telemetry::init(TelemetryConfig::from_env("corrector-demo"))?;
//! tracing::info!("ready");
//! ```

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer};

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event.
    pub service_name: String,
    /// Console log level (default: INFO, DEBUG in debug builds)
    pub console_level: Level,
}

impl TelemetryConfig {
    /// `RUST_LOG` still overrides `console_level` when set.
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        Self {
            service_name: service_name.into(),
            console_level,
        }
    }
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: TelemetryConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.console_level.as_str().to_lowercase()));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;

    tracing::debug!(service = %config.service_name, "telemetry initialized");
    Ok(())
}
