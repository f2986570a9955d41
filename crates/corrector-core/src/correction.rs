//! Applying a suggested replacement.
//!
//! A correction is not incremental: every span held for the old text is
//! invalid against the new one, and the caller has to run a full check again.

use crate::span::SpanError;
use crate::text::SourceText;

/// `text[..offset] + replacement + text[offset + length..]`, offsets in the
/// service unit of `text`.
pub fn apply_correction(
    text: &SourceText,
    offset: usize,
    length: usize,
    replacement: &str,
) -> Result<String, SpanError> {
    let range = text.resolve(offset, length)?;
    // resolve() only returns ranges inside the text
    Ok(text.replaced(range, replacement).unwrap_or_else(|| text.as_string()))
}
