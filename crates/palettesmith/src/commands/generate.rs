use crate::input::{read_overrides, read_palette};
use crate::Result;
use owo_colors::{OwoColorize as _, Stream};
use palette_engine::{assemble, merge, palette_css_vars, AssembleOptions};

use std::fs;
use std::path::Path;

pub const SEMANTIC_TOKENS_FILE_NAME: &str = "semantic.tokens.json";
pub const CSS_VARS_FILE_NAME: &str = "theme.vars.css";

pub struct GenerateArgs<'a, W: std::io::Write> {
    pub palette: &'a Path,
    pub out: &'a Path,
    /// Where the side files go. Defaults to the theme's directory.
    pub out_dir: Option<&'a Path>,
    pub mapping: Option<&'a Path>,
    pub visuals: bool,
    pub semantic: bool,
    pub css: bool,
    pub uppercase: bool,
    pub stdout: &'a mut W,
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

fn done<W: std::io::Write>(stdout: &mut W, message: &str, path: &Path) -> Result<()> {
    writeln!(
        stdout,
        "{} {} {}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green()),
        message,
        path.display()
    )?;
    Ok(())
}

pub fn run<W: std::io::Write>(args: GenerateArgs<W>) -> Result<()> {
    let palette = read_palette(args.palette)?;
    let out_dir = args
        .out_dir
        .or_else(|| args.out.parent())
        .unwrap_or_else(|| Path::new("."));

    let options = AssembleOptions {
        include_visual_styles: args.visuals,
        uppercase: args.uppercase,
    };
    let mut theme = assemble(&palette, &options);

    if let Some(mapping) = args.mapping {
        match read_overrides(mapping) {
            Ok(overrides) => {
                merge(&mut theme, Some(&overrides));
                done(args.stdout, "Merged visual mapping from", mapping)?;
            }
            Err(e) => {
                warn!("Skipping mapping {}: {}", mapping.display(), e);
                writeln!(
                    args.stdout,
                    "{} Failed to read mapping file {}: {}",
                    "!".if_supports_color(Stream::Stdout, |s| s.yellow()),
                    mapping.display(),
                    e
                )?;
            }
        }
    }

    if args.semantic {
        let path = out_dir.join(SEMANTIC_TOKENS_FILE_NAME);
        write_file(&path, &serde_json::to_string_pretty(&palette.tokens())?)?;
        done(args.stdout, "Wrote semantic tokens to", &path)?;
    }

    if args.css {
        let path = out_dir.join(CSS_VARS_FILE_NAME);
        write_file(&path, &palette_css_vars(&palette))?;
        done(args.stdout, "Wrote CSS variables to", &path)?;
    }

    write_file(args.out, &theme.to_json_pretty()?)?;
    done(args.stdout, "Wrote Power BI theme to", args.out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_engine::{SemanticTokens, ThemeDocument};
    use std::fs::read_to_string;
    use temp_dir::TempDir;

    const PALETTE: &str = r##"{ "colors": ["#0b6efd", "#0fcfdf", "#06d6a0"] }"##;

    fn args<'a, W: std::io::Write>(
        palette: &'a Path,
        out: &'a Path,
        stdout: &'a mut W,
    ) -> GenerateArgs<'a, W> {
        GenerateArgs {
            palette,
            out,
            out_dir: None,
            mapping: None,
            visuals: false,
            semantic: false,
            css: false,
            uppercase: false,
            stdout,
        }
    }

    #[test]
    fn writes_a_theme() {
        let temp_dir = TempDir::new().unwrap();
        let palette = temp_dir.path().join("palette.json");
        let out = temp_dir.path().join("out").join("report.theme.json");
        fs::write(&palette, PALETTE).unwrap();
        let mut fake_stdout = std::io::sink();

        let result = run(args(&palette, &out, &mut fake_stdout));

        if let Err(err) = result {
            panic!("{}", err);
        }

        let theme = ThemeDocument::from_json(&read_to_string(&out).unwrap()).unwrap();
        assert_eq!(theme.data_colors, ["#0b6efd", "#0fcfdf", "#06d6a0"]);
        assert!(theme.visual_styles.is_none());
        assert!(!temp_dir.path().join("out").join(SEMANTIC_TOKENS_FILE_NAME).exists());
    }

    #[test]
    fn writes_side_files_next_to_the_theme() {
        let temp_dir = TempDir::new().unwrap();
        let palette = temp_dir.path().join("palette.json");
        let out = temp_dir.path().join("report.theme.json");
        fs::write(&palette, PALETTE).unwrap();
        let mut fake_stdout = std::io::sink();

        let result = run(GenerateArgs {
            visuals: true,
            semantic: true,
            css: true,
            ..args(&palette, &out, &mut fake_stdout)
        });
        assert!(result.is_ok());

        let tokens: SemanticTokens = serde_json::from_str(
            &read_to_string(temp_dir.path().join(SEMANTIC_TOKENS_FILE_NAME)).unwrap(),
        )
        .unwrap();
        assert_eq!(tokens.accent, "#0fcfdf");
        assert_eq!(tokens.warning, "#ffd166");

        let css = read_to_string(temp_dir.path().join(CSS_VARS_FILE_NAME)).unwrap();
        assert!(css.contains("  --color-3: #06d6a0;"));

        let theme = read_to_string(&out).unwrap();
        assert!(theme.contains("\"visualStyles\""));
        assert!(!theme.contains("semanticTokens"));
    }

    #[test]
    fn honours_the_out_dir() {
        let temp_dir = TempDir::new().unwrap();
        let side_dir = TempDir::new().unwrap();
        let palette = temp_dir.path().join("palette.json");
        let out = temp_dir.path().join("report.theme.json");
        fs::write(&palette, PALETTE).unwrap();
        let mut fake_stdout = std::io::sink();

        run(GenerateArgs {
            out_dir: Some(side_dir.path()),
            css: true,
            ..args(&palette, &out, &mut fake_stdout)
        })
        .unwrap();

        assert!(side_dir.path().join(CSS_VARS_FILE_NAME).exists());
        assert!(!temp_dir.path().join(CSS_VARS_FILE_NAME).exists());
    }

    #[test]
    fn merges_a_mapping_file() {
        let temp_dir = TempDir::new().unwrap();
        let palette = temp_dir.path().join("palette.json");
        let mapping = temp_dir.path().join("mapping.yaml");
        let out = temp_dir.path().join("report.theme.json");
        fs::write(&palette, PALETTE).unwrap();
        fs::write(&mapping, "table:\n  header:\n    background: success\n").unwrap();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        run(GenerateArgs {
            mapping: Some(mapping.as_path()),
            ..args(&palette, &out, &mut fake_stdout)
        })
        .unwrap();

        let theme = ThemeDocument::from_json(&read_to_string(&out).unwrap()).unwrap();
        let styles = theme.visual_styles.unwrap();
        let header = &styles["table"]["*"]["header"];
        assert_eq!(header[0].color(Some("background")), Some("#06d6a0"));

        let output = String::from_utf8(fake_stdout.into_inner()).unwrap();
        assert!(output.contains("Merged visual mapping from"));
    }

    #[test]
    fn skips_a_broken_mapping_file() {
        let temp_dir = TempDir::new().unwrap();
        let palette = temp_dir.path().join("palette.json");
        let out = temp_dir.path().join("report.theme.json");
        fs::write(&palette, PALETTE).unwrap();
        let missing = temp_dir.path().join("missing.json");
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        let result = run(GenerateArgs {
            mapping: Some(missing.as_path()),
            ..args(&palette, &out, &mut fake_stdout)
        });

        assert!(result.is_ok());
        assert!(out.exists());

        let output = String::from_utf8(fake_stdout.into_inner()).unwrap();
        assert!(output.contains("Failed to read mapping file"));
        assert!(output.contains("Wrote Power BI theme to"));
    }
}
