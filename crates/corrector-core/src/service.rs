//! The checking service seam.
//!
//! Implementations are provided by the consuming application or by
//! `corrector-client` (LanguageTool over HTTP).

use corrector_common::{CheckerConfig, ServiceError};
use smol_str::SmolStr;

use crate::span::Span;

/// One check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub text: String,
    pub language: SmolStr,
    /// Ask for every rule category instead of the curated default set.
    pub all_categories: bool,
}

impl CheckRequest {
    pub fn new(text: impl Into<String>, config: &CheckerConfig) -> Self {
        Self {
            text: text.into(),
            language: config.language.clone(),
            all_categories: !config.enabled_only,
        }
    }
}

/// Submits text to a checking service and returns the flagged spans.
///
/// Spans are returned as reported, in service order and service offset
/// units. Callers validate them against the request text.
#[trait_variant::make(CheckingService: Send)]
pub trait LocalCheckingService {
    async fn check(&self, request: &CheckRequest) -> Result<Vec<Span>, ServiceError>;
}
