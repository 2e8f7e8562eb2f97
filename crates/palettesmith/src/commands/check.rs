use crate::input::read;
use crate::{Error, Result};
use owo_colors::{OwoColorize as _, Stream};
use palette_engine::check_document;

use std::path::Path;

pub struct CheckArgs<'a, W: std::io::Write> {
    pub theme: &'a Path,
    pub stdout: &'a mut W,
}

/// Lists every issue, then fails with [`Error::FailedChecks`] if there were
/// any.
pub fn run<W: std::io::Write>(args: CheckArgs<W>) -> Result<()> {
    let document: serde_json::Value = read(args.theme)?;
    let issues = check_document(&document);

    if issues.is_empty() {
        writeln!(
            args.stdout,
            "{} Theme looks valid (basic checks passed)",
            "✓".if_supports_color(Stream::Stdout, |s| s.green())
        )?;
        return Ok(());
    }

    writeln!(args.stdout, "Validation failed:")?;
    for issue in &issues {
        writeln!(
            args.stdout,
            " {} {}",
            "✗".if_supports_color(Stream::Stdout, |s| s.red()),
            issue
        )?;
    }

    Err(Error::FailedChecks(issues))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use temp_dir::TempDir;

    fn check(contents: &str) -> (Result<()>, String) {
        let temp_dir = TempDir::new().unwrap();
        let theme = temp_dir.path().join("theme.json");
        fs::write(&theme, contents).unwrap();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        let result = run(CheckArgs {
            theme: &theme,
            stdout: &mut fake_stdout,
        });

        (result, String::from_utf8(fake_stdout.into_inner()).unwrap())
    }

    #[test]
    fn passes_a_clean_theme() {
        let (result, output) = check(
            r##"{ "name": "A", "dataColors": ["#0b6efd"], "background": "#ffffff",
                  "foreground": "#000000", "tableAccent": "#0b6efd" }"##,
        );

        assert!(result.is_ok());
        assert!(output.contains("Theme looks valid"));
    }

    #[test]
    fn lists_every_issue() {
        let (result, output) = check(
            r##"{ "name": "A", "dataColors": ["#0b6efd", "#fff"], "background": "",
                  "foreground": "#000000", "tableAccent": "#0b6efd", "cssVars": "" }"##,
        );

        match result {
            Err(Error::FailedChecks(issues)) => assert_eq!(issues.len(), 3),
            other => panic!("expected failed checks, got {:?}", other),
        }
        assert!(output.contains("cssVars: is not part of the theme schema"));
        assert!(output.contains("background: is missing"));
        assert!(output.contains("dataColors[1]"));
    }
}
