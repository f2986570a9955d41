//! Text annotation: original text + active spans to rendering segments.
//!
//! The output is a flat sequence of literal text and addressable error
//! markers. Segments hold raw text; escaping happens when the document is
//! flattened to markup (see [`crate::html`]), so a non-markup consumer can use
//! the segments directly.

use std::borrow::Borrow;

use serde::Serialize;
use smol_str::{SmolStr, format_smolstr};

use crate::span::Span;
use crate::text::SourceText;

/// A rendered, clickable representation of one active span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    /// Index into the active-spans slice passed to [`annotate`]. Click dispatch
    /// resolves this against a freshly computed active list.
    pub index: usize,
    /// Offset and length as reported by the service.
    pub offset: usize,
    pub length: usize,
    /// The flagged text.
    pub text: SmolStr,
    pub tooltip: SmolStr,
    /// Accessible label combining the flagged text and the tooltip.
    pub label: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Literal { text: SmolStr },
    Marker(Marker),
}

impl Segment {
    /// The source text covered by this segment.
    pub fn source_text(&self) -> &str {
        match self {
            Segment::Literal { text } => text,
            Segment::Marker(marker) => &marker.text,
        }
    }
}

/// Ordered literal and marker segments for one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub segments: Vec<Segment>,
}

impl RenderedDocument {
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Marker(marker) => Some(marker),
            Segment::Literal { .. } => None,
        })
    }

    pub fn marker_count(&self) -> usize {
        self.markers().count()
    }

    /// Concatenated source text of every segment, markers unwrapped.
    pub fn source_text(&self) -> String {
        self.segments.iter().map(Segment::source_text).collect()
    }
}

/// Annotate `text` with `spans`.
///
/// Spans are expected to be valid against `text` (see
/// [`retain_valid`](crate::span::retain_valid)); any that are not are skipped.
/// Markers are emitted in ascending offset order, ties keeping their input
/// order. Overlapping spans are not merged: a span starting before the end of
/// the previous one still gets a marker, with no literal text between them.
/// The cursor is set to each span's end, so a span nested inside an earlier
/// one moves it back and the earlier span's tail is emitted again after it.
pub fn annotate<S: Borrow<Span>>(text: &SourceText, spans: &[S]) -> RenderedDocument {
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);

    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by_key(|&idx| spans[idx].borrow().offset);

    let mut cursor = 0;
    for index in order {
        let span = spans[index].borrow();
        let range = match span.validate(text) {
            Ok(range) => range,
            Err(error) => {
                tracing::warn!(
                    target: "corrector::annotate",
                    offset = span.offset,
                    length = span.length,
                    %error,
                    "skipping span that does not fit the text"
                );
                continue;
            }
        };

        if range.start > cursor {
            if let Some(literal) = text.slice(cursor..range.start) {
                segments.push(Segment::Literal { text: literal });
            }
        }

        let flagged = text.slice(range.clone()).unwrap_or_default();
        let tooltip = span.tooltip();
        segments.push(Segment::Marker(Marker {
            index,
            offset: span.offset,
            length: span.length,
            label: format_smolstr!("Error: {}. {}", flagged, tooltip),
            text: flagged,
            tooltip,
        }));

        cursor = range.end;
    }

    if cursor < text.len_chars() {
        if let Some(rest) = text.slice(cursor..text.len_chars()) {
            segments.push(Segment::Literal { text: rest });
        }
    }

    RenderedDocument { segments }
}
