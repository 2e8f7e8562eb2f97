//! Pre-flight checks for theme documents before they are handed to a
//! strict external validator.

use serde_json::Value;
use std::fmt;

use crate::theme::ThemeDocument;

const DOCUMENT_KEYS: [&str; 6] = [
    "name",
    "dataColors",
    "background",
    "foreground",
    "tableAccent",
    "visualStyles",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

impl Issue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Strict `#rrggbb`, unlike [`crate::color::Color::parse`].
fn is_long_hex(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn check_theme(theme: &ThemeDocument) -> Vec<Issue> {
    let mut issues = vec![];

    if theme.data_colors.is_empty() {
        issues.push(Issue::new("dataColors", "must contain at least one color"));
    }
    if theme.background.trim().is_empty() {
        issues.push(Issue::new("background", "is missing"));
    }
    if theme.foreground.trim().is_empty() {
        issues.push(Issue::new("foreground", "is missing"));
    }

    for (i, color) in theme.data_colors.iter().enumerate() {
        if !is_long_hex(color) {
            issues.push(Issue::new(
                format!("dataColors[{}]", i),
                format!("`{}` is not a #rrggbb color", color),
            ));
        }
    }

    issues
}

/// Checks a raw JSON document: unexpected top-level keys first, then the
/// document itself.
pub fn check_document(document: &Value) -> Vec<Issue> {
    let Some(object) = document.as_object() else {
        return vec![Issue::new("$", "must be a JSON object")];
    };

    let mut issues: Vec<Issue> = object
        .keys()
        .filter(|key| !DOCUMENT_KEYS.contains(&key.as_str()))
        .map(|key| Issue::new(key.as_str(), "is not part of the theme schema"))
        .collect();

    match serde_json::from_value::<ThemeDocument>(document.clone()) {
        Ok(theme) => issues.extend(check_theme(&theme)),
        Err(e) => issues.push(Issue::new("$", e.to_string())),
    }

    issues
}
