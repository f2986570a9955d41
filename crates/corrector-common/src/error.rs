//! Error taxonomy shared across the corrector crates.
//!
//! Nothing here is fatal. The session controller converts every one of these
//! into a render signal for the UI layer.

use std::path::PathBuf;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

/// Message shown to the user for any [`ServiceError`].
pub const SERVICE_UNREACHABLE_MESSAGE: &str = "No se pudo conectar con el servicio de verificación. \
     Comprueba tu conexión a internet e inténtalo de nuevo.";

/// Configuration loading errors.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("invalid URL in {var}: {url}")]
    #[diagnostic(code(corrector::config::url))]
    UrlParse {
        var: &'static str,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid value for {var}: {value} (expected {expected})")]
    #[diagnostic(code(corrector::config::value))]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("failed to read config file {}", path.display())]
    #[diagnostic(code(corrector::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported config file format: {}", path.display())]
    #[diagnostic(
        code(corrector::config::format),
        help("use a .json or .toml file")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse config file {}", path.display())]
    #[diagnostic(code(corrector::config::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Input rejected before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("text is empty")]
    #[diagnostic(code(corrector::validation::empty))]
    Empty,

    #[error("text is too long: {len} characters, maximum is {max}")]
    #[diagnostic(code(corrector::validation::too_long))]
    TooLong { len: usize, max: usize },
}

impl ValidationError {
    /// Localized message for the UI layer.
    pub fn user_message(&self) -> String {
        match self {
            Self::Empty => "Por favor escribe algún texto antes de verificar.".to_owned(),
            Self::TooLong { max, .. } => {
                format!("El texto es demasiado largo. Máximo {max} caracteres.")
            }
        }
    }
}

/// Failure talking to the checking service.
///
/// Every variant is presented to the user as the same opaque message (see
/// [`ServiceError::user_message`]); the variants exist for logging.
#[derive(Debug, Error, Diagnostic)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    #[diagnostic(code(corrector::service::transport))]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("checking service returned HTTP {status}")]
    #[diagnostic(code(corrector::service::status))]
    Status { status: u16 },

    #[error("malformed response from checking service")]
    #[diagnostic(code(corrector::service::malformed))]
    Malformed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("checking service did not answer within {after:?}")]
    #[diagnostic(code(corrector::service::timeout))]
    Timeout { after: Duration },
}

impl ServiceError {
    pub fn user_message(&self) -> &'static str {
        SERVICE_UNREACHABLE_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::TooLong { len: 20001, max: 20000 }.user_message(),
            "El texto es demasiado largo. Máximo 20000 caracteres."
        );
        assert!(ValidationError::Empty.user_message().starts_with("Por favor"));
    }

    #[test]
    fn test_service_errors_share_user_message() {
        let status = ServiceError::Status { status: 503 };
        let timeout = ServiceError::Timeout {
            after: Duration::from_secs(30),
        };
        assert_eq!(status.user_message(), timeout.user_message());
        assert_eq!(status.to_string(), "checking service returned HTTP 503");
    }
}
