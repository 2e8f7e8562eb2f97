use crate::input::read_feed;
use crate::Result;
use owo_colors::{OwoColorize as _, Stream};
use palette_engine::Catalog;

use std::path::Path;

pub struct CatalogArgs<'a, W: std::io::Write> {
    /// Without a feed the built-in presets are listed.
    pub feed: Option<&'a Path>,
    pub category: &'a str,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: CatalogArgs<W>) -> Result<()> {
    let records = match args.feed {
        Some(feed) => read_feed(feed)?,
        None => vec![],
    };

    let catalog = Catalog::build(records);
    let entries = catalog.filter(args.category)?;

    writeln!(
        args.stdout,
        "Source: {} ({} of {} palettes)",
        catalog.source(),
        entries.len(),
        catalog.entries().len()
    )?;

    for entry in entries {
        let tags: Vec<&str> = entry.tags.iter().map(|tag| tag.as_str()).collect();

        writeln!(
            args.stdout,
            "{}  [{}]  {}",
            entry.name.if_supports_color(Stream::Stdout, |s| s.bold()),
            tags.join(", "),
            entry.record.colors.join(" ")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;
    use temp_dir::TempDir;

    fn output(feed: Option<&Path>, category: &str) -> Result<String> {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        run(CatalogArgs {
            feed,
            category,
            stdout: &mut fake_stdout,
        })?;

        Ok(String::from_utf8(fake_stdout.into_inner()).unwrap())
    }

    #[test]
    fn lists_presets_without_a_feed() {
        let output = output(None, "all").unwrap();

        assert!(output.starts_with("Source: presets (8 of 8 palettes)\n"));
        assert_eq!(output.lines().count(), 9);
        assert!(output.contains("#264653 #2A9D8F #E9C46A #F4A261 #E76F51"));
    }

    #[test]
    fn lists_a_filtered_feed() {
        let temp_dir = TempDir::new().unwrap();
        let feed = temp_dir.path().join("feed.json");
        fs::write(
            &feed,
            r#"{ "provider": "lospec", "palettes": [
                { "id": "blue", "title": "Blue", "colors": ["0D1B2A", "1B263B", "415A77", "778DA9", "E0E1DD"] },
                { "id": "pastel", "title": "Pastel", "colors": ["fde2e4", "fad2e1", "e2ece9", "bee1e6", "f0efeb"] }
            ] }"#,
        )
        .unwrap();

        let output = output(Some(feed.as_path()), "blues").unwrap();

        assert!(output.starts_with("Source: feed (1 of 2 palettes)\n"));
        assert!(output.contains("#0D1B2A #1B263B"));
        assert!(!output.contains("#fde2e4"));
    }

    #[test]
    fn rejects_unknown_categories() {
        assert!(matches!(
            output(None, "purples"),
            Err(Error::Engine(palette_engine::Error::UnknownCategory(_)))
        ));
    }
}
