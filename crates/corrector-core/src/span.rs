//! Flagged spans reported by the checking service.

use std::ops::Range;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

use crate::category::category_label;
use crate::text::SourceText;

/// One flagged region of a checked text.
///
/// A span is only meaningful against the exact text it was computed from.
/// Offsets are in the service's [`OffsetUnit`](crate::OffsetUnit).
///
/// Identity for ignore tracking is the `offset` alone, so two spans that
/// start at the same offset are indistinguishable to the ignore set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
    /// Rule category id (e.g. `TYPOS`). None means unknown category.
    pub category_id: Option<SmolStr>,
    pub message: Option<String>,
    /// Candidate replacements, best first.
    pub replacements: Vec<String>,
}

impl Span {
    pub fn new(offset: usize, length: usize) -> Self {
        Self {
            offset,
            length,
            category_id: None,
            message: None,
            replacements: Vec::new(),
        }
    }

    pub fn with_category(mut self, category_id: impl Into<SmolStr>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_replacements<I, R>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.replacements = replacements.into_iter().map(Into::into).collect();
        self
    }

    /// End offset (exclusive), saturating on overflow.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    /// Tooltip text: the message, or the category display name when there is none.
    pub fn tooltip(&self) -> SmolStr {
        match &self.message {
            Some(message) if !message.is_empty() => SmolStr::new(message),
            _ => category_label(self.category_id.as_deref()).name,
        }
    }

    /// Check this span against the text it claims to describe, returning its char range.
    pub fn validate(&self, text: &SourceText) -> Result<Range<usize>, SpanError> {
        text.resolve(self.offset, self.length)
    }
}

/// Why a span can't be used against a text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SpanError {
    #[error("span at offset {offset} is empty")]
    #[diagnostic(code(corrector::span::empty))]
    Empty { offset: usize },

    #[error("span {offset}+{length} exceeds text length {text_len}")]
    #[diagnostic(code(corrector::span::out_of_bounds))]
    OutOfBounds {
        offset: usize,
        length: usize,
        text_len: usize,
    },

    #[error("span boundary at {position} falls inside a character")]
    #[diagnostic(code(corrector::span::splits_character))]
    SplitsCharacter { position: usize },
}

/// Drop spans that are invalid against `text`, keeping the rest in order.
pub fn retain_valid(text: &SourceText, spans: Vec<Span>) -> Vec<Span> {
    let before = spans.len();
    let valid: Vec<Span> = spans
        .into_iter()
        .filter(|span| match span.validate(text) {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(
                    target: "corrector::span",
                    offset = span.offset,
                    length = span.length,
                    %error,
                    "dropping invalid span"
                );
                false
            }
        })
        .collect();

    if valid.len() != before {
        tracing::debug!(
            target: "corrector::span",
            kept = valid.len(),
            dropped = before - valid.len(),
            "filtered service spans"
        );
    }
    valid
}
