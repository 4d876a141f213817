//! Text normalization
//!
//! Turns raw text into a form where almost every token is delimited by a
//! single space:
//!
//! 1. one-pass substitutions (quotes, visarga, ra, digits)
//! 2. split numerals from a following letter, pad double quotes
//! 3. pad punctuation that is always a boundary
//! 4. pad apostrophes, hyphens, periods and colons unless a context rule
//!    says they are lexical
//! 5. collapse whitespace
//!
//! The result is a fixed point: normalizing it again returns it unchanged.

use crate::character::{is_letter, is_numeral, DANDA};
use crate::config::PipelineConfig;
use crate::predicates::{
    is_abbreviation_period, is_compound_hyphen, is_decimal_period, is_time_colon,
    is_word_apostrophe,
};
use crate::tables::{CompoundPatterns, SubstitutionTable};
use crate::window::CharWindow;

/// Marks padded with spaces regardless of context
pub const BOUNDARY_PUNCTUATION: [char; 6] = [DANDA, ',', '!', '?', ';', '%'];

/// Paired delimiters, always padded
pub const PAIRED_DELIMITERS: [(char, char); 4] = [('(', ')'), ('[', ']'), ('{', '}'), ('«', '»')];

/// Check if a character is always boundary punctuation
pub fn is_boundary_punctuation(ch: char) -> bool {
    BOUNDARY_PUNCTUATION.contains(&ch)
        || PAIRED_DELIMITERS
            .iter()
            .any(|&(open, close)| ch == open || ch == close)
}

/// Configured text normalizer
#[derive(Debug, Clone)]
pub struct Normalizer {
    substitutions: SubstitutionTable,
    join_compound_hyphens: bool,
    compounds: CompoundPatterns,
}

impl Normalizer {
    /// Normalizer with production defaults
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    /// Normalizer for a specific configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            substitutions: config.substitution_table(),
            join_compound_hyphens: config.join_compound_hyphens,
            compounds: config.compound_patterns(),
        }
    }

    /// Normalize raw text
    pub fn normalize(&self, text: &str) -> String {
        let substituted = self.substitutions.apply(text);
        // Context rules must not see edge whitespace, or a mark's decision
        // could change once the output is trimmed.
        let separated = separate_numerals_and_quotes(substituted.trim());
        let padded = pad_boundary_punctuation(&separated);
        let resolved = self.resolve_ambiguous_marks(&padded);
        collapse_whitespace(&resolved)
    }

    fn resolve_ambiguous_marks(&self, text: &str) -> String {
        let window = CharWindow::new(text);
        let mut out = String::with_capacity(text.len() + text.len() / 4);

        for (index, &ch) in window.as_chars().iter().enumerate() {
            let lexical = match ch {
                '\'' => is_word_apostrophe(&window, index),
                '-' => {
                    self.join_compound_hyphens
                        && is_compound_hyphen(&window, index, &self.compounds)
                }
                '.' => is_abbreviation_period(&window, index) || is_decimal_period(&window, index),
                ':' => is_time_colon(&window, index),
                _ => true,
            };

            if lexical {
                out.push(ch);
            } else {
                pad(&mut out, ch);
            }
        }

        out
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize with production defaults
pub fn normalize(text: &str) -> String {
    Normalizer::new().normalize(text)
}

fn pad(out: &mut String, ch: char) {
    out.push(' ');
    out.push(ch);
    out.push(' ');
}

fn separate_numerals_and_quotes(text: &str) -> String {
    let window = CharWindow::new(text);
    let mut out = String::with_capacity(text.len() + 8);

    for (index, &ch) in window.as_chars().iter().enumerate() {
        let next = window.next_char(index);

        if is_numeral(ch) && next.is_some_and(is_letter) {
            out.push(ch);
            out.push(' ');
        } else if ch == '"' {
            if window.prev_char(index).is_some_and(|c| !c.is_whitespace()) {
                out.push(' ');
            }
            out.push(ch);
            if next.is_some_and(|c| !c.is_whitespace()) {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }

    out
}

fn pad_boundary_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        if is_boundary_punctuation(ch) {
            pad(&mut out, ch);
        } else {
            out.push(ch);
        }
    }
    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
