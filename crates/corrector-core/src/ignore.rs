//! Session-scoped ignore tracking and the active-span view.
//!
//! Ignores are keyed on span offset. The active list is always recomputed
//! from `(spans, ignored)`; nothing here caches it.

use std::collections::HashSet;

use crate::span::Span;

/// Offsets of spans the user chose to suppress for the current text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoredOffsets {
    offsets: HashSet<usize>,
}

impl IgnoredOffsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the offset was already ignored.
    pub fn insert(&mut self, offset: usize) -> bool {
        self.offsets.insert(offset)
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.contains(&offset)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn clear(&mut self) {
        self.offsets.clear();
    }
}

/// Spans not suppressed by `ignored`, in their original order.
pub fn active_spans<'a>(spans: &'a [Span], ignored: &IgnoredOffsets) -> Vec<&'a Span> {
    spans
        .iter()
        .filter(|span| !ignored.contains(span.offset))
        .collect()
}

/// Resolve a marker index (an index into the active list) back to its span.
pub fn resolve_marker<'a>(
    spans: &'a [Span],
    ignored: &IgnoredOffsets,
    index: usize,
) -> Option<&'a Span> {
    spans
        .iter()
        .filter(|span| !ignored.contains(span.offset))
        .nth(index)
}

/// Ignore the span behind marker `index`.
///
/// Returns the offset that was ignored, or None (and changes nothing) when the
/// index no longer points at an active span.
pub fn ignore_marker(spans: &[Span], ignored: &mut IgnoredOffsets, index: usize) -> Option<usize> {
    let offset = resolve_marker(spans, ignored, index)?.offset;
    ignored.insert(offset);
    Some(offset)
}
