//! Markup flattening for a [`RenderedDocument`].

use std::fmt;

use crate::annotate::{Marker, RenderedDocument, Segment};
use crate::escape::{FmtWriter, StrWrite, escape_markup};

impl RenderedDocument {
    /// Flatten to HTML, escaping all text and attribute values.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        // fmt::Write for String never fails.
        let _ = self.write_html(&mut html);
        html
    }

    pub fn write_html<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let mut w = FmtWriter(w);
        for segment in &self.segments {
            match segment {
                Segment::Literal { text } => escape_markup(&mut w, text)?,
                Segment::Marker(marker) => write_marker(&mut w, marker)?,
            }
        }
        Ok(())
    }
}

fn write_marker<W: StrWrite>(w: &mut W, marker: &Marker) -> Result<(), W::Error> {
    write!(
        w,
        r#"<span class="error" data-match-index="{}" data-offset="{}" data-length="{}" title=""#,
        marker.index, marker.offset, marker.length
    )?;
    escape_markup(&mut *w, &marker.tooltip)?;
    w.write_str(r#"" tabindex="0" role="button" aria-label=""#)?;
    escape_markup(&mut *w, &marker.label)?;
    w.write_str(r#"">"#)?;
    escape_markup(&mut *w, &marker.text)?;
    w.write_str("</span>")
}
