//! Checked text storage and offset resolution.
//!
//! The checking service reports spans in its own indexing unit (UTF-16 code
//! units for LanguageTool). `SourceText` keeps the text in a rope so that
//! service offsets can be mapped to char offsets without rescanning the
//! string for every span.

use std::fmt;
use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

use crate::OffsetUnit;
use crate::span::SpanError;

/// Text a set of spans was computed against.
///
/// Offsets accepted by [`SourceText::resolve`] are in the configured
/// [`OffsetUnit`]. Offsets returned from it (and accepted by `slice`) are
/// char offsets (Unicode scalar values, NOT bytes).
#[derive(Clone, Default)]
pub struct SourceText {
    rope: ropey::Rope,
    unit: OffsetUnit,
}

impl SourceText {
    pub fn new(text: &str, unit: OffsetUnit) -> Self {
        Self {
            rope: ropey::Rope::from_str(text),
            unit,
        }
    }

    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// Length in the service unit.
    pub fn len(&self) -> usize {
        match self.unit {
            OffsetUnit::Char => self.rope.len_chars(),
            OffsetUnit::Utf16 => self.rope.len_utf16_cu(),
        }
    }

    /// Length in chars (Unicode scalar values).
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Convert a service-unit offset to a char offset.
    ///
    /// Returns None if the offset is past the end, or if it lands inside a
    /// surrogate pair (only possible for UTF-16 offsets).
    pub fn to_char_offset(&self, offset: usize) -> Option<usize> {
        if offset > self.len() {
            return None;
        }
        match self.unit {
            OffsetUnit::Char => Some(offset),
            OffsetUnit::Utf16 => {
                let char_offset = self.rope.utf16_cu_to_char(offset);
                // ropey rounds down to the containing char.
                (self.rope.char_to_utf16_cu(char_offset) == offset).then_some(char_offset)
            }
        }
    }

    /// Map a service span to a char range, validating it against this text.
    pub fn resolve(&self, offset: usize, length: usize) -> Result<Range<usize>, SpanError> {
        if length == 0 {
            return Err(SpanError::Empty { offset });
        }
        let len = self.len();
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= len)
            .ok_or(SpanError::OutOfBounds {
                offset,
                length,
                text_len: len,
            })?;

        let start_char = self
            .to_char_offset(offset)
            .ok_or(SpanError::SplitsCharacter { position: offset })?;
        let end_char = self
            .to_char_offset(end)
            .ok_or(SpanError::SplitsCharacter { position: end })?;

        Ok(start_char..end_char)
    }

    /// Get a slice as SmolStr. Returns None if range is invalid.
    pub fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        if char_range.start > char_range.end || char_range.end > self.rope.len_chars() {
            return None;
        }
        Some(self.rope.slice(char_range).to_smolstr())
    }

    /// Copy of the text with `char_range` replaced by `replacement`.
    ///
    /// The receiver is left untouched: spans computed against it stay
    /// meaningful only for it.
    pub fn replaced(&self, char_range: Range<usize>, replacement: &str) -> Option<String> {
        if char_range.start > char_range.end || char_range.end > self.rope.len_chars() {
            return None;
        }
        let mut rope = self.rope.clone();
        rope.remove(char_range.clone());
        rope.insert(char_range.start, replacement);
        Some(rope.to_string())
    }

    /// Convert entire text to String.
    pub fn as_string(&self) -> String {
        self.rope.to_string()
    }
}

impl PartialEq for SourceText {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.rope == other.rope
    }
}

impl Eq for SourceText {}

impl fmt::Display for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rope, f)
    }
}

impl fmt::Debug for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceText")
            .field("text", &self.rope.to_string())
            .field("unit", &self.unit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_by_unit() {
        // "hola 🌍" - emoji is 1 char, 2 UTF-16 code units
        let utf16 = SourceText::new("hola 🌍", OffsetUnit::Utf16);
        assert_eq!(utf16.len_chars(), 6);
        assert_eq!(utf16.len(), 7);

        let chars = SourceText::new("hola 🌍", OffsetUnit::Char);
        assert_eq!(chars.len(), 6);
    }

    #[test]
    fn test_resolve_after_astral_char() {
        // "🌍 mundo": "mundo" starts at UTF-16 offset 3, char offset 2
        let text = SourceText::new("🌍 mundo", OffsetUnit::Utf16);
        assert_eq!(text.resolve(3, 5), Ok(2..7));
        assert_eq!(text.slice(2..7).as_deref(), Some("mundo"));

        let text = SourceText::new("🌍 mundo", OffsetUnit::Char);
        assert_eq!(text.resolve(2, 5), Ok(2..7));
    }

    #[test]
    fn test_resolve_rejects_surrogate_split() {
        let text = SourceText::new("a🌍b", OffsetUnit::Utf16);
        assert_eq!(
            text.resolve(2, 1),
            Err(SpanError::SplitsCharacter { position: 2 })
        );
        assert_eq!(
            text.resolve(1, 1),
            Err(SpanError::SplitsCharacter { position: 2 })
        );
        assert_eq!(text.resolve(1, 2), Ok(1..2));
    }

    #[test]
    fn test_resolve_bounds() {
        let text = SourceText::new("hello", OffsetUnit::Char);
        assert_eq!(text.resolve(0, 5), Ok(0..5));
        assert_eq!(text.resolve(2, 0), Err(SpanError::Empty { offset: 2 }));
        assert!(matches!(
            text.resolve(3, 3),
            Err(SpanError::OutOfBounds { text_len: 5, .. })
        ));
        assert!(matches!(
            text.resolve(usize::MAX, 2),
            Err(SpanError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_replaced_leaves_original() {
        let text = SourceText::new("hello world", OffsetUnit::Char);
        assert_eq!(text.replaced(6..11, "rust").as_deref(), Some("hello rust"));
        assert_eq!(text.as_string(), "hello world");
        assert_eq!(text.replaced(6..20, "rust"), None);
    }

    #[test]
    fn test_slice() {
        let text = SourceText::new("hello world", OffsetUnit::Char);
        assert_eq!(text.slice(0..5).as_deref(), Some("hello"));
        assert_eq!(text.slice(0..100), None);
    }
}
