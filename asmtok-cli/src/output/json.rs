//! JSON report formatter

use super::ReportFormatter;
use anyhow::Result;
use asmtok_core::Analysis;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs the analysis as one JSON object
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<ReportData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportData {
    /// Text as given
    pub input: String,
    /// Normalized text
    pub normalized: String,
    /// Tokens in order
    pub tokens: Vec<String>,
    /// Number of tokens
    pub token_count: usize,
}

impl From<&Analysis> for ReportData {
    fn from(analysis: &Analysis) -> Self {
        Self {
            input: analysis.input.clone(),
            normalized: analysis.normalized.clone(),
            tokens: analysis.tokens.clone(),
            token_count: analysis.token_count(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn write_report(&mut self, analysis: &Analysis) -> Result<()> {
        self.reports.push(ReportData::from(analysis));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // A single report is written as an object, several as an array
        match self.reports.as_slice() {
            [single] => serde_json::to_writer_pretty(&mut self.writer, single)?,
            reports => serde_json::to_writer_pretty(&mut self.writer, reports)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
