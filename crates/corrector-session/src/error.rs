use corrector_common::ValidationError;
use corrector_core::SpanError;
use miette::Diagnostic;
use thiserror::Error;

/// Why a correction could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CorrectionError {
    /// The range does not fit the current text.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Span(#[from] SpanError),

    /// The corrected text can't be submitted.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),
}
