//! HTML escaping for annotated output.
//!
//! Span messages and replacements come from the checking service and are
//! untrusted, same as the user's own text. Everything written into markup,
//! body text and attribute values alike, goes through [`escape_markup`].

pub use pulldown_cmark_escape::{FmtWriter, StrWrite};
use pulldown_cmark_escape::escape_html;

/// Escape `&`, `<`, `>`, `"` and `'`.
pub fn escape_markup<W: StrWrite>(mut w: W, s: &str) -> Result<(), W::Error> {
    let mut pieces = s.split('\'');
    if let Some(first) = pieces.next() {
        escape_html(&mut w, first)?;
    }
    for piece in pieces {
        w.write_str("&#39;")?;
        escape_html(&mut w, piece)?;
    }
    Ok(())
}
