use std::collections::BTreeMap;

use crate::theme::{Palette, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};
use crate::tokens::TokenSet;

/// Renders a `:root` block with one `--color-N` per color, then one line per
/// token in the token set's order.
pub fn to_css<S: AsRef<str>>(colors: &[S], tokens: &impl TokenSet) -> String {
    let mut css = String::from(":root {\n");

    for (i, color) in colors.iter().enumerate() {
        css.push_str(&format!("  --color-{}: {};\n", i + 1, color.as_ref()));
    }

    for (name, color) in tokens.entries() {
        css.push_str(&format!("  --{}: {};\n", name, color));
    }

    css.push('}');
    css
}

/// The variables written next to a generated report theme: the palette,
/// the report tokens, and the surface colors.
pub fn palette_css_vars(palette: &Palette) -> String {
    let mut css = to_css(&palette.colors, &palette.tokens());
    css.pop();

    css.push_str(&format!(
        "  --background: {};\n",
        palette.background.as_deref().unwrap_or(DEFAULT_BACKGROUND)
    ));
    css.push_str(&format!(
        "  --foreground: {};\n",
        palette.foreground.as_deref().unwrap_or(DEFAULT_FOREGROUND)
    ));

    css.push('}');
    css
}

/// Reads the `--color-N` variables back out of a CSS block, ordered by `N`.
pub fn parse_color_vars(css: &str) -> Vec<String> {
    let mut colors = BTreeMap::new();

    for line in css.lines() {
        let Some(rest) = line.trim().strip_prefix("--color-") else {
            continue;
        };
        let Some((index, value)) = rest.split_once(':') else {
            continue;
        };
        let Ok(index) = index.trim().parse::<usize>() else {
            continue;
        };

        let value = value.trim().trim_end_matches(';').trim();
        colors.insert(index, value.to_string());
    }

    colors.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{SemanticTokens, UiTokens};
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn renders_colors_then_tokens() {
        let colors = ["#264653", "#2a9d8f"];
        let css = to_css(&colors, &UiTokens::from_colors(&colors));

        assert_eq!(
            css,
            indoc! {"
                :root {
                  --color-1: #264653;
                  --color-2: #2a9d8f;
                  --primary: #264653;
                  --accent: #2a9d8f;
                  --success: #22c55e;
                  --warning: #f59e0b;
                  --error: #ef4444;
                  --background: #ffffff;
                  --foreground: #0f172a;
                  --muted: #64748b;
                }"}
        );
    }

    #[test]
    fn palette_vars_end_with_surface_colors() {
        let palette = Palette {
            background: Some("#0f0f0f".to_string()),
            ..Palette::new(["#0b6efd"])
        };
        let css = palette_css_vars(&palette);
        let lines: Vec<&str> = css.lines().collect();

        assert_eq!(lines[1], "  --color-1: #0b6efd;");
        assert_eq!(lines[2], "  --primary: #0b6efd;");
        assert_eq!(lines[8], "  --danger: #ef476f;");
        assert_eq!(lines[9], "  --background: #0f0f0f;");
        assert_eq!(lines[10], "  --foreground: #000000;");
        assert_eq!(lines[11], "}");
    }

    #[test]
    fn ignores_unrelated_lines_when_parsing() {
        let css = ":root {\n  --color-2: #222;\n  --primary: #0b6efd;\n  --color-1: #111;\n  --color-x: #333;\n}";

        assert_eq!(parse_color_vars(css), ["#111", "#222"]);
    }

    proptest! {
        #[test]
        fn color_vars_round_trip(raw in prop::collection::vec(any::<[u8; 3]>(), 0..25), upper in any::<bool>()) {
            let colors: Vec<String> = raw
                .iter()
                .map(|[r, g, b]| {
                    let hex = format!("#{r:02x}{g:02x}{b:02x}");
                    if upper { hex.to_uppercase() } else { hex }
                })
                .collect();

            let css = to_css(&colors, &SemanticTokens::from_colors(&colors));
            let parsed = parse_color_vars(&css);

            prop_assert_eq!(parsed.len(), colors.len());
            for (parsed, original) in parsed.iter().zip(&colors) {
                prop_assert!(parsed.eq_ignore_ascii_case(original));
            }
        }
    }
}
