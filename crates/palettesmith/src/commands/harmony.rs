use crate::Result;
use clap::ValueEnum;
use palette_engine::harmony::{analogous, complementary, triadic};

pub const DEFAULT_ANALOGOUS_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lowercase")]
pub enum HarmonyKind {
    #[default]
    Complementary,
    Triadic,
    Analogous,
}

pub struct HarmonyArgs<'a, W: std::io::Write> {
    pub base: &'a str,
    pub kind: HarmonyKind,
    /// Only used by [`HarmonyKind::Analogous`].
    pub count: usize,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: HarmonyArgs<W>) -> Result<()> {
    let colors = match args.kind {
        HarmonyKind::Complementary => complementary(args.base)?,
        HarmonyKind::Triadic => triadic(args.base)?,
        HarmonyKind::Analogous => analogous(args.base, args.count)?,
    };

    for color in colors {
        writeln!(args.stdout, "{}", color)?;
    }

    Ok(())
}
