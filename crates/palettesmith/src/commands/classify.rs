use crate::Result;
use palette_engine::classify;

pub struct ClassifyArgs<'a, W: std::io::Write> {
    pub colors: &'a [String],
    pub stdout: &'a mut W,
}

/// Prints one tag per line, in vocabulary order.
pub fn run<W: std::io::Write>(args: ClassifyArgs<W>) -> Result<()> {
    for tag in classify(args.colors) {
        writeln!(args.stdout, "{}", tag)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(colors: &[&str]) -> String {
        let colors: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        run(ClassifyArgs {
            colors: &colors,
            stdout: &mut fake_stdout,
        })
        .unwrap();

        String::from_utf8(fake_stdout.into_inner()).unwrap()
    }

    #[test]
    fn prints_tags_one_per_line() {
        assert_eq!(
            output(&["#0D1B2A", "#1B263B", "#415A77", "#778DA9", "#E0E1DD"]),
            "cool\nblues\nhigh-contrast\n"
        );
    }

    #[test]
    fn prints_nothing_for_malformed_input() {
        assert_eq!(output(&["#0D1B2A", "navy"]), "");
    }
}
