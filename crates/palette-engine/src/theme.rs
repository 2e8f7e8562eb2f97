use serde::{Deserialize, Serialize};

use crate::tokens::SemanticTokens;
use crate::visual_styles::{self, VisualStyles};
use crate::Result;

pub const MAX_DATA_COLORS: usize = 20;
pub const DEFAULT_THEME_NAME: &str = "Generated theme";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_FOREGROUND: &str = "#000000";
pub const DEFAULT_TABLE_ACCENT: &str = "#0078d4";

/// An ordered color list plus optional theme metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_accent: Option<String>,
}

impl Palette {
    pub fn new<S: Into<String>>(colors: impl IntoIterator<Item = S>) -> Self {
        Palette {
            colors: colors.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn tokens(&self) -> SemanticTokens {
        SemanticTokens::from_colors(&self.colors)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Write the per-visual style catalogue.
    pub include_visual_styles: bool,
    /// Write data colors as uppercase hex.
    pub uppercase: bool,
}

/// A Power BI report theme.
///
/// Deliberately has no room for the semantic tokens: the external schema
/// rejects unknown top-level keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    pub name: String,
    pub data_colors: Vec<String>,
    pub background: String,
    pub foreground: String,
    pub table_accent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_styles: Option<VisualStyles>,
}

impl ThemeDocument {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn assemble(palette: &Palette, options: &AssembleOptions) -> ThemeDocument {
    let data_colors: Vec<String> = palette
        .colors
        .iter()
        .take(MAX_DATA_COLORS)
        .map(|color| {
            if options.uppercase {
                color.to_uppercase()
            } else {
                color.clone()
            }
        })
        .collect();

    let background = palette
        .background
        .clone()
        .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());
    let foreground = palette
        .foreground
        .clone()
        .unwrap_or_else(|| DEFAULT_FOREGROUND.to_string());
    let table_accent = palette
        .table_accent
        .clone()
        .or_else(|| data_colors.first().cloned())
        .unwrap_or_else(|| DEFAULT_TABLE_ACCENT.to_string());

    let visual_styles = options.include_visual_styles.then(|| {
        let tokens = palette.tokens();
        debug!("Building visual styles from tokens {:?}", tokens);
        visual_styles::build(&tokens, &background, &foreground)
    });

    ThemeDocument {
        name: palette
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string()),
        data_colors,
        background,
        foreground,
        table_accent,
        visual_styles,
    }
}
