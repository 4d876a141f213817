//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use asmtok_core::Analysis;
use std::io::Write;

/// Human-readable tokenization report
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_report(&mut self, analysis: &Analysis) -> Result<()> {
        writeln!(self.writer, "\nNormalized text: {}", analysis.normalized)?;
        writeln!(self.writer, "\nTokenization Analysis:")?;
        writeln!(self.writer, "Input text: {}", analysis.input)?;
        writeln!(self.writer, "Tokens: {:?}", analysis.tokens)?;
        writeln!(self.writer, "Token boundaries: {}", analysis.boundaries())?;
        writeln!(self.writer, "Number of tokens: {}", analysis.token_count())?;
        writeln!(self.writer, "\nCharacter-level analysis:")?;
        writeln!(self.writer, "{}", analysis.compact_boundaries())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
