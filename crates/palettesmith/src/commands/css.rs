use crate::input::read_palette;
use crate::Result;
use palette_engine::palette_css_vars;

use std::path::Path;

pub struct CssArgs<'a, W: std::io::Write> {
    pub palette: &'a Path,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: CssArgs<W>) -> Result<()> {
    let palette = read_palette(args.palette)?;
    writeln!(args.stdout, "{}", palette_css_vars(&palette))?;

    Ok(())
}
