//! Line-oriented batch processing
//!
//! Blank lines are dropped after trimming; every other line maps to exactly
//! one output line, in input order.

use crate::pipeline::Pipeline;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Trimmed, non-blank lines of `text`
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Process lines sequentially, skipping blank ones
pub fn process_lines<S: AsRef<str>>(pipeline: &Pipeline, lines: &[S]) -> Vec<String> {
    process_lines_with(pipeline, lines, |_| {})
}

/// Process lines sequentially, calling `on_line` with each output line
pub fn process_lines_with<S, F>(pipeline: &Pipeline, lines: &[S], mut on_line: F) -> Vec<String>
where
    S: AsRef<str>,
    F: FnMut(&str),
{
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(|line| {
            let processed = pipeline.process_line(line);
            on_line(&processed);
            processed
        })
        .collect()
}

/// Process lines on the current rayon pool, skipping blank ones
///
/// Output order matches input order.
#[cfg(feature = "parallel")]
pub fn par_process_lines<S: AsRef<str> + Sync>(pipeline: &Pipeline, lines: &[S]) -> Vec<String> {
    lines
        .par_iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(|line| pipeline.process_line(line))
        .collect()
}
