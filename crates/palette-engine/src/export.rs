//! Downloadable bundles for a palette.

use serde::Serialize;
use std::fmt;

use crate::css::to_css;
use crate::theme::{assemble, AssembleOptions, Palette};
use crate::tokens::UiTokens;
use crate::Result;

pub const DEFAULT_EXPORT_NAME: &str = "Untitled Theme";
const POWER_BI_BACKGROUND: &str = "#FFFFFF";
const POWER_BI_FOREGROUND: &str = "#0F172A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    PowerBi,
    Css,
    Json,
}

impl ExportFormat {
    fn file_suffix(self) -> &'static str {
        match self {
            ExportFormat::PowerBi => "_theme.json",
            ExportFormat::Css => "_variables.css",
            ExportFormat::Json => "_palette.json",
        }
    }

    fn content_type(self) -> &'static str {
        match self {
            ExportFormat::PowerBi | ExportFormat::Json => "application/json",
            ExportFormat::Css => "text/css",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::PowerBi => write!(f, "Power BI theme"),
            ExportFormat::Css => write!(f, "CSS variables"),
            ExportFormat::Json => write!(f, "palette JSON"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub content_type: &'static str,
    pub content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteBundle<'a> {
    name: &'a str,
    colors: &'a [String],
    semantic_tokens: UiTokens,
}

/// Whitespace runs become `_`, then everything is lowercased.
pub fn slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

pub fn export(palette: &Palette, format: ExportFormat) -> Result<Export> {
    let name = palette.name.as_deref().unwrap_or(DEFAULT_EXPORT_NAME);

    let content = match format {
        ExportFormat::PowerBi => {
            let palette = Palette {
                name: Some(name.to_string()),
                background: palette
                    .background
                    .clone()
                    .or_else(|| Some(POWER_BI_BACKGROUND.to_string())),
                foreground: palette
                    .foreground
                    .clone()
                    .or_else(|| Some(POWER_BI_FOREGROUND.to_string())),
                ..palette.clone()
            };
            let options = AssembleOptions {
                uppercase: true,
                ..Default::default()
            };
            assemble(&palette, &options).to_json_pretty()?
        }
        ExportFormat::Css => to_css(&palette.colors, &UiTokens::from_colors(&palette.colors)),
        ExportFormat::Json => serde_json::to_string_pretty(&PaletteBundle {
            name,
            colors: &palette.colors,
            semantic_tokens: UiTokens::from_colors(&palette.colors),
        })?,
    };

    Ok(Export {
        file_name: format!("{}{}", slug(name), format.file_suffix()),
        content_type: format.content_type(),
        content,
    })
}
