//! Rule category display table.

use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

/// Known LanguageTool categories: (id, icon, display name).
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("TYPOS", "🔤", "Ortografía"),
    ("TYPOGRAPHY", "✏️", "Tipografía"),
    ("GRAMMAR", "📖", "Gramática"),
    ("CASING", "🔡", "Mayúsculas"),
    ("PUNCTUATION", "❓", "Puntuación"),
    ("CONFUSED_WORDS", "🔀", "Palabras confundidas"),
    ("REDUNDANCY", "♻️", "Redundancia"),
    ("STYLE", "✨", "Estilo"),
    ("GENDER_NEUTRALITY", "⚖️", "Género"),
    ("SEMANTICS", "💬", "Semántica"),
];

const FALLBACK_ICON: &str = "⚠️";
const FALLBACK_NAME: &str = "Otro";

/// Icon and display name for a rule category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLabel {
    pub icon: &'static str,
    pub name: SmolStr,
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

/// Look up the label for a category id.
///
/// Unknown ids keep the raw id as their name; a missing (or empty) id gets a
/// generic label.
pub fn category_label(id: Option<&str>) -> CategoryLabel {
    let id = id.filter(|id| !id.is_empty());
    match id {
        Some(id) => CATEGORIES
            .iter()
            .find(|(known, _, _)| *known == id)
            .map(|&(_, icon, name)| CategoryLabel {
                icon,
                name: SmolStr::new_static(name),
            })
            .unwrap_or_else(|| CategoryLabel {
                icon: FALLBACK_ICON,
                name: SmolStr::new(id),
            }),
        None => CategoryLabel {
            icon: FALLBACK_ICON,
            name: SmolStr::new_static(FALLBACK_NAME),
        },
    }
}
