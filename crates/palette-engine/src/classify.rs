//! Descriptive tags for a palette, derived from perceptual statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::color::{Color, Hsl};
use crate::{Error, Result};

const DARK_MAX_LIGHTNESS: f64 = 0.38;
const LIGHT_MIN_LIGHTNESS: f64 = 0.62;
const HIGH_CONTRAST_MIN_SPREAD: f64 = 0.45;
const PASTEL_MAX_SATURATION: f64 = 0.5;
const PASTEL_MIN_LIGHTNESS: f64 = 0.75;
const NEUTRAL_MAX_SATURATION: f64 = 0.22;
const NEUTRAL_MAX_MEAN_SATURATION: f64 = 0.25;
const NEUTRAL_MAX_HUE_DEVIATION: f64 = 60.0;
const FAMILY_SHARE: f64 = 0.4;
const FAMILY_MIN_COUNT: usize = 2;

/// Declaration order is the order tags are reported in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    Dark,
    Light,
    Warm,
    Cool,
    Reds,
    Blues,
    Greens,
    Pastels,
    Neutrals,
    HighContrast,
}

pub type Tags = BTreeSet<Tag>;

impl Tag {
    pub const ALL: [Tag; 10] = [
        Tag::Dark,
        Tag::Light,
        Tag::Warm,
        Tag::Cool,
        Tag::Reds,
        Tag::Blues,
        Tag::Greens,
        Tag::Pastels,
        Tag::Neutrals,
        Tag::HighContrast,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Dark => "dark",
            Tag::Light => "light",
            Tag::Warm => "warm",
            Tag::Cool => "cool",
            Tag::Reds => "reds",
            Tag::Blues => "blues",
            Tag::Greens => "greens",
            Tag::Pastels => "pastels",
            Tag::Neutrals => "neutrals",
            Tag::HighContrast => "high-contrast",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Aggregates over a non-empty palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteStats {
    pub count: usize,
    /// Plain average of hues, not a true circular mean.
    pub mean_hue: f64,
    pub mean_saturation: f64,
    pub mean_lightness: f64,
    /// Mean absolute angular distance of each hue from `mean_hue`.
    pub hue_deviation: f64,
    pub contrast_spread: f64,
    pub reds: usize,
    pub blues: usize,
    pub greens: usize,
    pub pastels: usize,
    pub low_saturation: usize,
}

impl PaletteStats {
    /// `None` for an empty palette.
    pub fn compute(colors: &[Color]) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }

        // Float sums depend on order, so always add in the same one.
        let mut colors = colors.to_vec();
        colors.sort_by_key(Color::rgb);

        let hsl: Vec<_> = colors.iter().map(Color::hsl).collect();
        let n = colors.len() as f64;

        let mean_hue = (hsl.iter().map(|c| c.hue).sum::<f64>() / n) % 360.0;
        let mean_saturation = hsl.iter().map(|c| c.saturation).sum::<f64>() / n;
        let mean_lightness = hsl.iter().map(|c| c.lightness).sum::<f64>() / n;

        let hue_deviation = hsl
            .iter()
            .map(|c| ((c.hue - mean_hue + 540.0).rem_euclid(360.0) - 180.0).abs())
            .sum::<f64>()
            / n;

        let luminance: Vec<f64> = colors.iter().map(Color::luminance).collect();
        let max = luminance.iter().copied().fold(f64::MIN, f64::max);
        let min = luminance.iter().copied().fold(f64::MAX, f64::min);

        let count = |predicate: fn(&Hsl) -> bool| hsl.iter().filter(|c| predicate(c)).count();

        Some(PaletteStats {
            count: colors.len(),
            mean_hue,
            mean_saturation,
            mean_lightness,
            hue_deviation,
            contrast_spread: max - min,
            reds: count(|c| c.hue < 25.0 || c.hue >= 345.0),
            blues: count(|c| (190.0..265.0).contains(&c.hue)),
            greens: count(|c| (85.0..165.0).contains(&c.hue)),
            pastels: count(|c| {
                c.saturation <= PASTEL_MAX_SATURATION && c.lightness >= PASTEL_MIN_LIGHTNESS
            }),
            low_saturation: count(|c| c.saturation < NEUTRAL_MAX_SATURATION),
        })
    }

    /// How many colors a hue family needs before it becomes a tag.
    pub fn threshold(&self) -> usize {
        let share = (self.count as f64 * FAMILY_SHARE).ceil() as usize;
        share.max(FAMILY_MIN_COUNT)
    }

    pub fn tags(&self) -> Tags {
        let threshold = self.threshold();
        let mut tags = Tags::new();

        let mut tag_if = |condition: bool, tag: Tag| {
            if condition {
                tags.insert(tag);
            }
        };

        tag_if(self.mean_lightness <= DARK_MAX_LIGHTNESS, Tag::Dark);
        tag_if(self.mean_lightness >= LIGHT_MIN_LIGHTNESS, Tag::Light);
        tag_if(self.mean_hue >= 330.0 || self.mean_hue < 70.0, Tag::Warm);
        tag_if((90.0..=300.0).contains(&self.mean_hue), Tag::Cool);
        tag_if(self.reds >= threshold, Tag::Reds);
        tag_if(self.blues >= threshold, Tag::Blues);
        tag_if(self.greens >= threshold, Tag::Greens);
        tag_if(self.pastels >= threshold, Tag::Pastels);
        tag_if(
            self.low_saturation >= threshold
                || (self.mean_saturation < NEUTRAL_MAX_MEAN_SATURATION
                    && self.hue_deviation < NEUTRAL_MAX_HUE_DEVIATION),
            Tag::Neutrals,
        );
        tag_if(
            self.contrast_spread >= HIGH_CONTRAST_MIN_SPREAD,
            Tag::HighContrast,
        );

        tags
    }
}

/// Tags a palette. A single unparseable color yields no tags at all.
pub fn classify<S: AsRef<str>>(colors: &[S]) -> Tags {
    let parsed: Result<Vec<Color>> = colors.iter().map(|c| Color::parse(c.as_ref())).collect();

    match parsed {
        Ok(colors) => match PaletteStats::compute(&colors) {
            Some(stats) => {
                debug!("Palette stats: {:?}", stats);
                stats.tags()
            }
            None => Tags::new(),
        },
        Err(e) => {
            debug!("Not classifying palette: {}", e);
            Tags::new()
        }
    }
}
