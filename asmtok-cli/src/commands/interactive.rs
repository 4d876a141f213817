//! Interactive command implementation

use crate::output::{JsonFormatter, ReportFormatter, TextFormatter};
use anyhow::Result;
use asmtok_core::{Analysis, Pipeline};
use std::io::Write;

/// Arguments for interactive mode
#[derive(Debug, Clone)]
pub struct InteractiveArgs {
    /// Text to analyze
    pub text: String,
    /// Report format
    pub format: ReportFormat,
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    Text,
    /// JSON object with the normalized text and tokens
    Json,
}

impl InteractiveArgs {
    /// Analyze the text and write the report to `writer`
    pub fn execute<W: Write>(&self, pipeline: &Pipeline, writer: W) -> Result<Analysis> {
        log::info!("Analyzing {} chars", self.text.chars().count());
        let analysis = pipeline.analyze(&self.text);

        match self.format {
            ReportFormat::Text => report(TextFormatter::new(writer), &analysis)?,
            ReportFormat::Json => report(JsonFormatter::new(writer), &analysis)?,
        }

        Ok(analysis)
    }
}

fn report<F: ReportFormatter>(mut formatter: F, analysis: &Analysis) -> Result<()> {
    formatter.write_report(analysis)?;
    formatter.finish()
}
