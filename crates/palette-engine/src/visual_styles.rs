//! The `visualStyles` tree of a report theme.
//!
//! Shape: `visualType -> "*" -> cardName -> [entry, ...]`. The per-visual
//! defaults written by [`build`] come from [`CATALOGUE`], which is the only
//! place that decides which role colors which card.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tokens::Role::{Accent, Neutral, Primary};
use crate::tokens::{Role, SemanticTokens};

/// Selector used for both the global visual entry and the per-visual style.
pub const GLOBAL: &str = "*";

pub type VisualStyles = IndexMap<String, IndexMap<String, Cards>>;
pub type Cards = IndexMap<String, Vec<StyleEntry>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolidFill {
    pub solid: SolidColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolidColor {
    pub color: String,
}

impl SolidFill {
    pub fn new(color: impl Into<String>) -> Self {
        SolidFill {
            solid: SolidColor {
                color: color.into(),
            },
        }
    }
}

/// One element of a card array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleEntry {
    /// A bare `{solid: {color}}`, as used by `visualContainer`.
    Fill(SolidFill),
    /// `{property: {solid: {color}}}`.
    Properties(IndexMap<String, SolidFill>),
    /// Anything else found in a document read from disk. Kept untouched.
    Other(serde_json::Value),
}

impl StyleEntry {
    pub fn property(name: impl Into<String>, color: impl Into<String>) -> Self {
        let mut properties = IndexMap::new();
        properties.insert(name.into(), SolidFill::new(color));
        StyleEntry::Properties(properties)
    }

    pub fn fill(color: impl Into<String>) -> Self {
        StyleEntry::Fill(SolidFill::new(color))
    }

    /// The color of `property`, or of a bare fill when `property` is `None`.
    pub fn color(&self, property: Option<&str>) -> Option<&str> {
        match (self, property) {
            (StyleEntry::Fill(fill), None) => Some(&fill.solid.color),
            (StyleEntry::Properties(properties), Some(name)) => {
                properties.get(name).map(|fill| fill.solid.color.as_str())
            }
            _ => None,
        }
    }
}

/// Where a catalogue entry takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    Role(Role),
    Background,
    Foreground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBinding {
    pub card: &'static str,
    /// `None` writes a bare fill into the card array.
    pub property: Option<&'static str>,
    pub source: ColorSource,
}

const fn role(card: &'static str, property: &'static str, role: Role) -> StyleBinding {
    StyleBinding {
        card,
        property: Some(property),
        source: ColorSource::Role(role),
    }
}

const fn bare(card: &'static str, source: ColorSource) -> StyleBinding {
    StyleBinding {
        card,
        property: None,
        source,
    }
}

/// Visual type to card bindings, in output order. The first entry is the
/// global `*` visual.
pub const CATALOGUE: &[(&str, &[StyleBinding])] = &[
    (
        GLOBAL,
        &[role("title", "color", Primary), role("label", "color", Neutral)],
    ),
    (
        "barChart",
        &[
            role("dataPoint", "fill", Accent),
            role("categoryAxis", "labelColor", Neutral),
            role("valueAxis", "labelColor", Neutral),
        ],
    ),
    (
        "columnChart",
        &[
            role("dataPoint", "fill", Primary),
            role("categoryAxis", "labelColor", Neutral),
        ],
    ),
    (
        "lineChart",
        &[role("lines", "stroke", Primary), role("markers", "fill", Accent)],
    ),
    (
        "areaChart",
        &[role("dataPoint", "fill", Accent), role("lines", "stroke", Primary)],
    ),
    (
        "comboChart",
        &[
            role("primarySeries", "fill", Primary),
            role("secondarySeries", "fill", Accent),
        ],
    ),
    (
        "scatterChart",
        &[role("bubbles", "fill", Accent), role("marker", "outline", Neutral)],
    ),
    ("pieChart", &[role("slices", "fill", Accent)]),
    ("donutChart", &[role("slices", "fill", Accent)]),
    (
        "card",
        &[role("title", "color", Primary), role("label", "color", Neutral)],
    ),
    (
        "multiRowCard",
        &[role("title", "color", Primary), role("label", "color", Neutral)],
    ),
    (
        "table",
        &[
            role("header", "background", Primary),
            role("rows", "rowStripeColor", Neutral),
            role("grid", "color", Neutral),
        ],
    ),
    (
        "matrix",
        &[
            role("header", "background", Primary),
            role("rows", "rowStripeColor", Neutral),
        ],
    ),
    (
        "slicer",
        &[
            role("selection", "fill", Accent),
            role("header", "labelColor", Neutral),
        ],
    ),
    (
        "timeline",
        &[role("item", "fill", Accent), role("range", "fill", Primary)],
    ),
    (
        "visualContainer",
        &[
            bare("background", ColorSource::Background),
            bare("foreground", ColorSource::Foreground),
        ],
    ),
];

/// Every named visual type in the catalogue, without the global `*`.
pub fn visual_types() -> impl Iterator<Item = &'static str> {
    CATALOGUE
        .iter()
        .map(|(visual, _)| *visual)
        .filter(|visual| *visual != GLOBAL)
}

/// Writes the catalogue defaults for a palette.
pub fn build(tokens: &SemanticTokens, background: &str, foreground: &str) -> VisualStyles {
    let mut styles = VisualStyles::new();

    for (visual, bindings) in CATALOGUE {
        let mut cards = Cards::new();

        for binding in bindings.iter() {
            let color = match binding.source {
                ColorSource::Role(role) => tokens.role(role),
                ColorSource::Background => background,
                ColorSource::Foreground => foreground,
            };

            let entry = match binding.property {
                Some(property) => StyleEntry::property(property, color),
                None => StyleEntry::fill(color),
            };

            cards.entry(binding.card.to_string()).or_default().push(entry);
        }

        let mut selectors = IndexMap::new();
        selectors.insert(GLOBAL.to_string(), cards);
        styles.insert(visual.to_string(), selectors);
    }

    styles
}
