//! Reading palettes, override tables and feeds from disk.
//!
//! Files ending in `.yaml` or `.yml` are read as YAML, everything else as
//! JSON.

use palette_engine::{Feed, Palette, PaletteRecord, StyleOverrides};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

use crate::Result;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;

    if is_yaml(path) {
        Ok(serde_yaml::from_str(&contents)?)
    } else {
        Ok(serde_json::from_str(&contents)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteFile {
    Colors(Vec<String>),
    Palette(Palette),
}

/// A palette object, or a bare list of colors.
pub fn read_palette(path: &Path) -> Result<Palette> {
    let palette = match read(path)? {
        PaletteFile::Colors(colors) => Palette::new(colors),
        PaletteFile::Palette(palette) => palette,
    };
    debug!("Read {} colors from {}", palette.colors.len(), path.display());

    Ok(palette)
}

pub fn read_overrides(path: &Path) -> Result<StyleOverrides> {
    let value: serde_json::Value = read(path)?;
    Ok(StyleOverrides::from_value(value)?)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedFile {
    Records(Vec<PaletteRecord>),
    Feed(Feed),
}

/// A `{ provider, palettes }` feed, or a bare list of records.
pub fn read_feed(path: &Path) -> Result<Vec<PaletteRecord>> {
    let records = match read(path)? {
        FeedFile::Records(records) => records,
        FeedFile::Feed(feed) => {
            if let Some(provider) = &feed.provider {
                info!("Reading palettes from {}", provider);
            }
            feed.palettes
        }
    };

    Ok(records)
}
