//! LanguageTool `/v2/check` wire types.
//!
//! Only the fields the front-end uses are modelled; everything else in the
//! response is ignored.

use corrector_core::Span;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Signed on the wire so that bad values are rejected here rather than
    /// failing the whole response.
    pub offset: i64,
    pub length: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub replacements: Vec<Replacement>,
    #[serde(default)]
    pub rule: Option<Rule>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Replacement {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default)]
    pub id: Option<SmolStr>,
    #[serde(default)]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<SmolStr>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Match {
    pub fn category_id(&self) -> Option<&SmolStr> {
        self.rule.as_ref()?.category.as_ref()?.id.as_ref()
    }

    /// Convert to a [`Span`]. Returns None for negative offsets or
    /// non-positive lengths.
    pub fn into_span(self) -> Option<Span> {
        let offset = usize::try_from(self.offset).ok()?;
        let length = usize::try_from(self.length).ok().filter(|len| *len > 0)?;
        let category_id = self.category_id().cloned();

        Some(Span {
            offset,
            length,
            category_id,
            message: self.message,
            replacements: self.replacements.into_iter().map(|r| r.value).collect(),
        })
    }
}

impl CheckResponse {
    /// Convert every usable match, dropping (and logging) the rest.
    pub fn into_spans(self) -> Vec<Span> {
        self.matches
            .into_iter()
            .filter_map(|m| {
                let (offset, length) = (m.offset, m.length);
                let span = m.into_span();
                if span.is_none() {
                    tracing::warn!(
                        target: "corrector::client",
                        offset,
                        length,
                        "dropping match with invalid offset or length"
                    );
                }
                span
            })
            .collect()
    }
}
