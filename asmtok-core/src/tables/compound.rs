//! Compound-word pattern table for the hyphen rule

use serde::{Deserialize, Serialize};

/// Built-in cardinal-direction compounds
const BUILTIN: [(&str, &str); 3] = [
    ("উত্তৰ", "পূৰ্ব"),
    ("দক্ষিণ", "পূৰ্ব"),
    ("পূৰ্ব", "পশ্চিম"),
];

/// A `first-second` word pair joined by a hyphen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundPattern {
    /// Word that must end the text before the hyphen
    pub first: String,
    /// Word that must start the text after the hyphen
    pub second: String,
}

impl CompoundPattern {
    /// Create a new pattern
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Check the pattern against the text on both sides of a hyphen
    pub fn matches(&self, before: &str, after: &str) -> bool {
        before.trim_end().ends_with(&self.first) && after.trim_start().starts_with(&self.second)
    }
}

/// Closed list of compound patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundPatterns {
    patterns: Vec<CompoundPattern>,
}

impl CompoundPatterns {
    /// Empty table
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Built-in table
    pub fn builtin() -> Self {
        Self {
            patterns: BUILTIN
                .iter()
                .map(|(first, second)| CompoundPattern::new(*first, *second))
                .collect(),
        }
    }

    /// Append patterns, skipping ones already present
    pub fn extend(&mut self, patterns: impl IntoIterator<Item = CompoundPattern>) {
        for pattern in patterns {
            if !self.patterns.contains(&pattern) {
                self.patterns.push(pattern);
            }
        }
    }

    /// Check if any pattern matches around a hyphen
    pub fn matches(&self, before: &str, after: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(before, after))
    }

    /// Length in chars of the longest first word
    pub fn longest_first(&self) -> usize {
        self.patterns
            .iter()
            .map(|p| p.first.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Length in chars of the longest second word
    pub fn longest_second(&self) -> usize {
        self.patterns
            .iter()
            .map(|p| p.second.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the table has no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over patterns
    pub fn iter(&self) -> impl Iterator<Item = &CompoundPattern> {
        self.patterns.iter()
    }
}

impl Default for CompoundPatterns {
    fn default() -> Self {
        Self::builtin()
    }
}
