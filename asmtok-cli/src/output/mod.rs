//! Output formatting module

use anyhow::Result;
use asmtok_core::Analysis;

/// Trait for interactive report formatters
pub trait ReportFormatter {
    /// Format and output the analysis of one input
    fn write_report(&mut self, analysis: &Analysis) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod lines;
pub mod text;

pub use json::JsonFormatter;
pub use lines::LineWriter;
pub use text::TextFormatter;
