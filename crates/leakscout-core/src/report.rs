//! Console reporting of collection counts and matched lines.

use crate::error::Result;
use colored::Colorize;
use std::io::Write;

/// Writes results to any sink, stdout in the binary.
pub struct Reporter<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> Reporter<W> {
    /// Reporter that prints matches in bold red.
    pub fn new(out: W) -> Self {
        Self { out, styled: true }
    }

    /// Reporter without any styling.
    pub fn plain(out: W) -> Self {
        Self { out, styled: false }
    }

    /// Announce how many diffs were collected for a phrase.
    pub fn grabbed(&mut self, count: usize) -> Result<()> {
        writeln!(self.out, "Managed to grab {} commits!\n", count)?;
        Ok(())
    }

    pub fn matched_line(&mut self, line: &str) -> Result<()> {
        if self.styled {
            writeln!(self.out, "{}", line.red().bold())?;
        } else {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output() {
        let mut reporter = Reporter::plain(Vec::new());
        reporter.grabbed(2).unwrap();
        reporter.matched_line("+MONGODB_URI=mongodb://host").unwrap();
        reporter.matched_line("+MONGODB_URI=mongodb://host").unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Managed to grab 2 commits!\n\n+MONGODB_URI=mongodb://host\n+MONGODB_URI=mongodb://host\n"
        );
    }

    #[test]
    fn test_styled_output_keeps_line_text() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.matched_line("secret=1").unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("secret=1"));
        assert!(output.ends_with('\n'));
    }
}
