//! Browsable palettes: a normalized feed, tagged and named, with built-in
//! presets when the feed comes up empty.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::{classify, Tag, Tags};
use crate::naming::name_with_tags;
use crate::Result;

pub const MIN_COLORS: usize = 3;
pub const MAX_RECORDS: usize = 36;
const UNTITLED: &str = "Untitled";

/// `(id, label)` for every category a catalog can be filtered by.
pub const CATEGORIES: [(&str, &str); 11] = [
    ("all", "All"),
    ("dark", "Dark"),
    ("light", "Light"),
    ("warm", "Warm"),
    ("cool", "Cool"),
    ("blues", "Blues"),
    ("reds", "Reds"),
    ("greens", "Greens"),
    ("pastels", "Pastels"),
    ("neutrals", "Neutrals"),
    ("high-contrast", "High Contrast"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub colors: Vec<String>,
}

/// The shape palette feeds are published in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub palettes: Vec<PaletteRecord>,
}

static PRESETS: Lazy<Vec<PaletteRecord>> = Lazy::new(|| {
    let palettes: [[&str; 5]; 8] = [
        ["#264653", "#2A9D8F", "#E9C46A", "#F4A261", "#E76F51"],
        ["#0D1B2A", "#1B263B", "#415A77", "#778DA9", "#E0E1DD"],
        ["#F72585", "#7209B7", "#3A0CA3", "#4361EE", "#4CC9F0"],
        ["#22223B", "#4A4E69", "#9A8C98", "#C9ADA7", "#F2E9E4"],
        ["#2B2D42", "#8D99AE", "#EDF2F4", "#EF233C", "#D90429"],
        ["#073B4C", "#118AB2", "#06D6A0", "#FFD166", "#EF476F"],
        ["#0B132B", "#1C2541", "#3A506B", "#5BC0BE", "#6FFFE9"],
        ["#F6BD60", "#F7EDE2", "#F5CAC3", "#84A59D", "#F28482"],
    ];

    palettes
        .iter()
        .enumerate()
        .map(|(i, colors)| PaletteRecord {
            id: format!("preset-{}", i),
            title: "Preset".to_string(),
            author: None,
            colors: colors.iter().map(|c| c.to_string()).collect(),
        })
        .collect()
});

pub fn presets() -> &'static [PaletteRecord] {
    &PRESETS
}

/// Drops records with fewer than three colors, keeps the first 36, and
/// makes sure every color carries a leading `#`.
pub fn normalize(records: impl IntoIterator<Item = PaletteRecord>) -> Vec<PaletteRecord> {
    records
        .into_iter()
        .filter(|record| record.colors.len() >= MIN_COLORS)
        .take(MAX_RECORDS)
        .map(|mut record| {
            record.colors = record
                .colors
                .iter()
                .map(|color| format!("#{}", color.trim_start_matches('#')))
                .collect();
            if record.title.trim().is_empty() {
                record.title = UNTITLED.to_string();
            }
            record
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Feed,
    Presets,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Feed => write!(f, "feed"),
            Source::Presets => write!(f, "presets"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub record: PaletteRecord,
    pub tags: Tags,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(record: PaletteRecord) -> Self {
        let tags = classify(&record.colors);
        let name = name_with_tags(&record.colors, &tags);

        CatalogEntry { record, tags, name }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    source: Source,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Normalizes the records and tags each one. Falls back to the presets
    /// when nothing usable is left.
    pub fn build(records: impl IntoIterator<Item = PaletteRecord>) -> Self {
        let mut records = normalize(records);
        let mut source = Source::Feed;

        if records.is_empty() {
            info!("Palette feed is empty, using built-in presets");
            records = presets().to_vec();
            source = Source::Presets;
        }

        Catalog {
            source,
            entries: records.into_iter().map(CatalogEntry::new).collect(),
        }
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// `all` keeps every entry. Any other category must be a tag name.
    pub fn filter(&self, category: &str) -> Result<Vec<&CatalogEntry>> {
        if category == "all" {
            return Ok(self.entries.iter().collect());
        }

        let tag: Tag = category.parse()?;
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.tags.contains(&tag))
            .collect())
    }
}
