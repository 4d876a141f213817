//! Tokenize command implementation

use crate::config::PerformanceConfig;
use crate::input::FileReader;
use crate::output::LineWriter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use asmtok_core::batch::{par_process_lines, process_lines_with};
use asmtok_core::Pipeline;
use std::path::PathBuf;

/// Arguments for tokenize mode
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Source file, one sentence per line
    pub src: PathBuf,
    /// Destination file
    pub tgt: PathBuf,
}

/// Counts reported after a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Non-blank lines read from the source
    pub lines_read: usize,
    /// Lines written to the destination
    pub lines_written: usize,
}

impl TokenizeArgs {
    /// Tokenize every non-blank source line into the destination file
    pub fn execute(
        &self,
        pipeline: &Pipeline,
        performance: &PerformanceConfig,
        quiet: bool,
    ) -> Result<BatchSummary> {
        log::info!(
            "Tokenizing {} into {}",
            self.src.display(),
            self.tgt.display()
        );

        let lines = FileReader::read_lines(&self.src)?;
        let mut writer = LineWriter::create(&self.tgt)?;

        let mut progress = ProgressReporter::new(quiet);
        progress.init_lines(lines.len() as u64);

        let output = if performance.parallel {
            let threads = performance.thread_count();
            log::debug!("Processing {} lines on {threads} threads", lines.len());
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            let output = pool.install(|| par_process_lines(pipeline, &lines));
            progress.lines_completed(output.len() as u64);
            output
        } else {
            process_lines_with(pipeline, &lines, |_| progress.line_completed())
        };

        for line in &output {
            writer.write_line(line)?;
        }
        writer
            .finish()
            .with_context(|| format!("Failed to write output file: {}", self.tgt.display()))?;
        progress.finish();

        let summary = BatchSummary {
            lines_read: lines.len(),
            lines_written: writer.lines_written(),
        };

        println!("Tokenization complete!");
        println!("Source: {}", self.src.display());
        println!("Destination: {}", self.tgt.display());
        println!("Lines: {}", summary.lines_written);

        Ok(summary)
    }
}
