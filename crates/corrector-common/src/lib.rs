//! corrector-common: configuration and error types shared by the corrector crates.

pub mod config;
pub mod error;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use config::{CheckerConfig, OffsetUnit};
pub use error::{ConfigError, ServiceError, ValidationError};
