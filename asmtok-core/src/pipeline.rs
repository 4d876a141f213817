//! Normalize-then-segment pipeline

use crate::config::PipelineConfig;
use crate::normalizer::Normalizer;
use crate::segmenter::Segmenter;
use serde::{Deserialize, Serialize};

/// Configured tokenization pipeline
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    normalizer: Normalizer,
}

/// Diagnostic view of one tokenization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Text as given
    pub input: String,
    /// Normalized text
    pub normalized: String,
    /// Tokens of the normalized text
    pub tokens: Vec<String>,
}

impl Analysis {
    /// Number of tokens
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens joined by ` | `
    pub fn boundaries(&self) -> String {
        self.tokens.join(" | ")
    }

    /// Tokens joined by `|` with no padding
    pub fn compact_boundaries(&self) -> String {
        self.tokens.join("|")
    }
}

impl Pipeline {
    /// Pipeline with production defaults
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Pipeline for a specific configuration
    pub fn with_config(config: PipelineConfig) -> Self {
        let normalizer = Normalizer::from_config(&config);
        Self { config, normalizer }
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Normalize raw text
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Segment already-normalized text
    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        Segmenter::new(normalized).collect()
    }

    /// Normalize and segment a line, joining tokens with single spaces
    ///
    /// Tokens never contain whitespace, so the result has no repeated spaces.
    pub fn process_line(&self, line: &str) -> String {
        let normalized = self.normalize(line);
        let tokens = self.tokenize(&normalized);
        log::trace!("{} tokens from {} chars", tokens.len(), line.chars().count());
        tokens.join(" ")
    }

    /// Normalize and segment, keeping the intermediate text
    pub fn analyze(&self, text: &str) -> Analysis {
        let normalized = self.normalize(text);
        let tokens = self.tokenize(&normalized);
        Analysis {
            input: text.to_string(),
            normalized,
            tokens,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
