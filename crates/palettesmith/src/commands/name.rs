use crate::Result;
use palette_engine::name;

pub struct NameArgs<'a, W: std::io::Write> {
    pub colors: &'a [String],
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: NameArgs<W>) -> Result<()> {
    writeln!(args.stdout, "{}", name(args.colors))?;

    Ok(())
}
