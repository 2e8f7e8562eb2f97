use crate::input::read_palette;
use crate::Result;
use clap::ValueEnum;
use owo_colors::{OwoColorize as _, Stream};
use palette_engine::export::export;
use palette_engine::ExportFormat;

use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lowercase")]
pub enum Format {
    #[default]
    PowerBi,
    Css,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::PowerBi => ExportFormat::PowerBi,
            Format::Css => ExportFormat::Css,
            Format::Json => ExportFormat::Json,
        }
    }
}

pub struct ExportArgs<'a, W: std::io::Write> {
    pub palette: &'a Path,
    pub format: Format,
    pub out_dir: &'a Path,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ExportArgs<W>) -> Result<()> {
    let palette = read_palette(args.palette)?;
    let format = ExportFormat::from(args.format);
    let bundle = export(&palette, format)?;

    std::fs::create_dir_all(args.out_dir)?;
    let path = args.out_dir.join(&bundle.file_name);
    std::fs::write(&path, &bundle.content)?;
    debug!("Exported {} bytes of {}", bundle.content.len(), bundle.content_type);

    writeln!(
        args.stdout,
        "{} Wrote {} to {}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green()),
        format,
        path.display()
    )?;

    Ok(())
}
