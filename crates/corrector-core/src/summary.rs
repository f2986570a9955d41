//! Per-category error counts for the results panel.

use std::borrow::Borrow;

use serde::Serialize;
use smol_str::SmolStr;

use crate::category::{CategoryLabel, category_label};
use crate::span::Span;

/// Category id used for spans without one.
pub const OTHER_CATEGORY: &str = "OTHER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub id: SmolStr,
    pub label: CategoryLabel,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorSummary {
    pub total: usize,
    /// Most frequent first; ties in order of first appearance.
    pub categories: Vec<CategoryCount>,
}

pub fn summarize<S: Borrow<Span>>(spans: &[S]) -> ErrorSummary {
    let mut categories: Vec<CategoryCount> = Vec::new();

    for span in spans {
        let id = span
            .borrow()
            .category_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| SmolStr::new_static(OTHER_CATEGORY));
        match categories.iter().position(|c| c.id == id) {
            Some(pos) => categories[pos].count += 1,
            None => categories.push(CategoryCount {
                label: category_label(Some(id.as_str())),
                id,
                count: 1,
            }),
        }
    }

    // stable, so ties keep first-appearance order
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    ErrorSummary {
        total: spans.len(),
        categories,
    }
}
