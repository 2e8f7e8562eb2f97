//! Turns an ordered list of colors into a Power BI report theme, a CSS
//! variable block, and a tagged, named palette for browsing.
//!
//! Everything in here is a pure function of its inputs. The only mutation is
//! [`merge::merge`], which appends into the document it is handed.

#[macro_use]
extern crate log;

pub mod catalog;
pub mod checks;
pub mod classify;
pub mod color;
pub mod css;
pub mod export;
pub mod harmony;
pub mod merge;
pub mod naming;
pub mod theme;
pub mod tokens;
pub mod visual_styles;

pub use catalog::{Catalog, CatalogEntry, Feed, PaletteRecord, Source};
pub use checks::{check_document, check_theme, Issue};
pub use classify::{classify, PaletteStats, Tag, Tags};
pub use color::{contrast_ratio, is_valid_hex, Color, Hsl};
pub use css::{palette_css_vars, parse_color_vars, to_css};
pub use export::{Export, ExportFormat};
pub use merge::{merge, StyleOverrides};
pub use naming::{name, name_with_tags};
pub use theme::{assemble, AssembleOptions, Palette, ThemeDocument};
pub use tokens::{Role, SemanticTokens, TokenSet, UiTokens};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid color `{0}` found")]
    InvalidColor(String),
    #[error("Invalid style overrides: {0}")]
    InvalidOverrides(String),
    #[error("Unknown palette category `{0}`")]
    UnknownCategory(String),
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
