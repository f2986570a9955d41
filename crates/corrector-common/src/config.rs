use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use url::Url;

use crate::error::ConfigError;

/// Indexing unit the checking service reports span offsets in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values.
    Char,
    /// UTF-16 code units (LanguageTool, and anything backed by JS/Java strings).
    #[default]
    Utf16,
}

impl OffsetUnit {
    /// Length of `text` in this unit.
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Char => text.chars().count(),
            Self::Utf16 => text.encode_utf16().count(),
        }
    }
}

impl FromStr for OffsetUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "char" | "chars" => Ok(Self::Char),
            "utf16" | "utf-16" => Ok(Self::Utf16),
            _ => Err(()),
        }
    }
}

/// Checker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Check endpoint of a LanguageTool-compatible service.
    pub endpoint: Url,
    /// Language code sent with every request.
    pub language: SmolStr,
    /// When false, the service is asked for every rule category, not just the
    /// curated default set.
    pub enabled_only: bool,
    /// Texts longer than this, measured in `offset_unit`, are rejected before
    /// any request.
    pub max_chars: usize,
    /// Suggestions shown per flagged span.
    pub max_suggestions: usize,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    pub offset_unit: OffsetUnit,
}

impl CheckerConfig {
    /// Public LanguageTool endpoint.
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.languagetool.org/v2/check";
    pub const DEFAULT_LANGUAGE: &'static str = "es";
    pub const DEFAULT_MAX_CHARS: usize = 20_000;
    pub const DEFAULT_MAX_SUGGESTIONS: usize = 6;
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from environment variables.
    ///
    /// All env vars are optional and fall back to the defaults:
    /// - `CORRECTOR_ENDPOINT`: check endpoint URL
    /// - `CORRECTOR_LANGUAGE`: language code (default: es)
    /// - `CORRECTOR_ENABLED_ONLY`: `true`/`false` (default: false)
    /// - `CORRECTOR_MAX_CHARS`: input size limit (default: 20000)
    /// - `CORRECTOR_MAX_SUGGESTIONS`: suggestions per span (default: 6)
    /// - `CORRECTOR_TIMEOUT_MS`: request timeout (default: 30000)
    /// - `CORRECTOR_OFFSET_UNIT`: `utf16` or `char` (default: utf16)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary key lookup, with the same rules as
    /// [`CheckerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("CORRECTOR_ENDPOINT") {
            config.endpoint = Url::parse(&endpoint).map_err(|source| ConfigError::UrlParse {
                var: "CORRECTOR_ENDPOINT",
                url: endpoint.clone(),
                source,
            })?;
        }
        if let Some(language) = lookup("CORRECTOR_LANGUAGE") {
            config.language = SmolStr::new(language);
        }
        if let Some(value) = lookup("CORRECTOR_ENABLED_ONLY") {
            config.enabled_only = parse_var("CORRECTOR_ENABLED_ONLY", value, "true or false")?;
        }
        if let Some(value) = lookup("CORRECTOR_MAX_CHARS") {
            config.max_chars = parse_var("CORRECTOR_MAX_CHARS", value, "a character count")?;
        }
        if let Some(value) = lookup("CORRECTOR_MAX_SUGGESTIONS") {
            config.max_suggestions =
                parse_var("CORRECTOR_MAX_SUGGESTIONS", value, "a suggestion count")?;
        }
        if let Some(value) = lookup("CORRECTOR_TIMEOUT_MS") {
            config.timeout_ms = parse_var("CORRECTOR_TIMEOUT_MS", value, "milliseconds")?;
        }
        if let Some(value) = lookup("CORRECTOR_OFFSET_UNIT") {
            config.offset_unit = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "CORRECTOR_OFFSET_UNIT",
                value: value.clone(),
                expected: "utf16 or char",
            })?;
        }

        tracing::debug!(
            target: "corrector::config",
            endpoint = %config.endpoint,
            language = %config.language,
            max_chars = config.max_chars,
            offset_unit = ?config.offset_unit,
            "checker config loaded"
        );
        Ok(config)
    }

    /// Load configuration from a `.json` or `.toml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_err = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents).map_err(|e| parse_err(e.into()))?,
            Some("toml") => toml::from_str(&contents).map_err(|e| parse_err(e.into()))?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        tracing::debug!(
            target: "corrector::config",
            path = %path.display(),
            endpoint = %config.endpoint,
            "checker config loaded from file"
        );
        Ok(config)
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(Self::DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            language: SmolStr::new_static(Self::DEFAULT_LANGUAGE),
            enabled_only: false,
            max_chars: Self::DEFAULT_MAX_CHARS,
            max_suggestions: Self::DEFAULT_MAX_SUGGESTIONS,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            offset_unit: OffsetUnit::default(),
        }
    }
}

fn parse_var<T: FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            var,
            value,
            expected,
        })
}
