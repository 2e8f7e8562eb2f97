use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeDocument;
use crate::tokens::{SemanticTokens, TokenSet};
use crate::visual_styles::{StyleEntry, VisualStyles, GLOBAL};
use crate::{Error, Result};

/// User supplied overrides: `visualType -> cardName -> property -> value`.
///
/// A value is either the name of a semantic token (`"accent"`) or a literal
/// color string, used verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOverrides(IndexMap<String, IndexMap<String, IndexMap<String, String>>>);

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        visual: impl Into<String>,
        card: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.0
            .entry(visual.into())
            .or_default()
            .entry(card.into())
            .or_default()
            .insert(property.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.triples().next().is_none()
    }

    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::InvalidOverrides(e.to_string()))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidOverrides(e.to_string()))
    }

    /// `(visual, card, property, value)` in document order.
    pub fn triples(&self) -> impl Iterator<Item = (&str, &str, &str, &str)> {
        self.0.iter().flat_map(|(visual, cards)| {
            cards.iter().flat_map(move |(card, properties)| {
                properties.iter().map(move |(property, value)| {
                    (
                        visual.as_str(),
                        card.as_str(),
                        property.as_str(),
                        value.as_str(),
                    )
                })
            })
        })
    }
}

/// Appends every override to `theme.visualStyles[visual]["*"][card]`.
///
/// Token names resolve against the tokens of the theme's own data colors.
/// Existing entries are never touched, so merges layer.
pub fn merge<'a>(
    theme: &'a mut ThemeDocument,
    overrides: Option<&StyleOverrides>,
) -> &'a mut ThemeDocument {
    let Some(overrides) = overrides.filter(|overrides| !overrides.is_empty()) else {
        return theme;
    };

    let tokens = SemanticTokens::from_colors(&theme.data_colors);
    let styles = theme.visual_styles.get_or_insert_with(VisualStyles::new);

    for (visual, card, property, value) in overrides.triples() {
        let color = tokens.get(value).unwrap_or(value);
        debug!("Appending {visual}.{card}.{property} = {color}");

        styles
            .entry(visual.to_string())
            .or_default()
            .entry(GLOBAL.to_string())
            .or_default()
            .entry(card.to_string())
            .or_default()
            .push(StyleEntry::property(property, color));
    }

    theme
}

/// Parses `overrides` and merges it. A table of the wrong shape is reported
/// before anything is written.
pub fn merge_value(
    theme: &mut ThemeDocument,
    overrides: serde_json::Value,
) -> Result<&mut ThemeDocument> {
    let overrides = StyleOverrides::from_value(overrides)?;
    Ok(merge(theme, Some(&overrides)))
}
