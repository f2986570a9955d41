//! Detail view for an activated marker.

use serde::Serialize;
use smol_str::SmolStr;

use crate::category::{CategoryLabel, category_label};
use crate::span::Span;
use crate::text::SourceText;

/// Message shown when a span carries none.
pub const FALLBACK_MESSAGE: &str = "Error detectado.";

/// Everything the UI needs to show the popup for one marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerDetail {
    /// Active-span index the marker was rendered with.
    pub index: usize,
    pub offset: usize,
    pub length: usize,
    /// Flagged text, empty if the span no longer fits the text.
    pub text: SmolStr,
    pub category: CategoryLabel,
    pub message: String,
    /// First `max_suggestions` replacements.
    pub suggestions: Vec<String>,
}

impl MarkerDetail {
    pub fn new(index: usize, span: &Span, text: &SourceText, max_suggestions: usize) -> Self {
        let flagged = span
            .validate(text)
            .ok()
            .and_then(|range| text.slice(range))
            .unwrap_or_default();

        Self {
            index,
            offset: span.offset,
            length: span.length,
            text: flagged,
            category: category_label(span.category_id.as_deref()),
            message: span
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned()),
            suggestions: span
                .replacements
                .iter()
                .take(max_suggestions)
                .cloned()
                .collect(),
        }
    }

    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}
