//! corrector-core: framework-agnostic spellcheck annotation logic.
//!
//! This crate provides:
//! - `Span` - one flagged region reported by the checking service
//! - `SourceText` - ropey-backed text with service-unit offset resolution
//! - `annotate` - text + active spans to an escaped, addressable `RenderedDocument`
//! - ignore filtering, correction, category labels, summaries and marker details
//! - `CheckingService` - the seam the HTTP client plugs into

pub mod annotate;
pub mod category;
pub mod correction;
pub mod detail;
pub mod escape;
pub mod html;
pub mod ignore;
pub mod service;
pub mod span;
pub mod summary;
pub mod text;

pub use annotate::{Marker, RenderedDocument, Segment, annotate};
pub use category::{CategoryLabel, category_label};
pub use correction::apply_correction;
pub use detail::MarkerDetail;
pub use ignore::{IgnoredOffsets, active_spans, ignore_marker, resolve_marker};
pub use service::{CheckRequest, CheckingService, LocalCheckingService};
pub use smol_str::SmolStr;
pub use span::{Span, SpanError, retain_valid};
pub use summary::{CategoryCount, ErrorSummary, summarize};
pub use text::SourceText;

pub use corrector_common::OffsetUnit;
