//! Character-indexed view over a piece of text
//!
//! Context rules look at neighbours by character position, not byte
//! offset. `CharWindow` decodes the text once so that every lookup is O(1).

use crate::character::is_numeral;
use std::ops::Range;

/// Immutable, char-indexed view of a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharWindow {
    chars: Vec<char>,
}

impl CharWindow {
    /// Decode `text` into a window
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the window holds no characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Underlying characters
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Character before `index`
    #[inline]
    pub fn prev_char(&self, index: usize) -> Option<char> {
        index.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Character after `index`
    #[inline]
    pub fn next_char(&self, index: usize) -> Option<char> {
        self.get(index + 1)
    }

    /// Character two positions after `index`
    #[inline]
    pub fn next_next_char(&self, index: usize) -> Option<char> {
        self.get(index + 2)
    }

    /// Get a tuple of (prev, current, next) for pattern matching
    pub fn context_triple(&self, index: usize) -> (Option<char>, Option<char>, Option<char>) {
        (self.prev_char(index), self.get(index), self.next_char(index))
    }

    /// First or last position (or out of range)
    #[inline]
    pub fn is_at_edge(&self, index: usize) -> bool {
        index == 0 || index + 1 >= self.len()
    }

    /// End (exclusive) of the run starting at `start` whose characters all satisfy `pred`
    pub fn run_end(&self, start: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut end = start.min(self.len());
        while end < self.len() && pred(self.chars[end]) {
            end += 1;
        }
        end
    }

    /// Start of the run ending right before `end` whose characters all satisfy `pred`
    pub fn run_start(&self, end: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut start = end.min(self.len());
        while start > 0 && pred(self.chars[start - 1]) {
            start -= 1;
        }
        start
    }

    /// Candidate clock-time span around the colon at `index`
    ///
    /// Extends left over numerals only and right over numerals and colons.
    /// The caller is expected to have checked that both neighbours exist.
    pub fn time_span(&self, index: usize) -> Range<usize> {
        let start = self.run_start(index, is_numeral);
        let end = self.run_end(index + 1, |c| is_numeral(c) || c == ':');
        start..end
    }

    /// Characters in `range` as an owned string
    pub fn slice(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }
}

impl From<&str> for CharWindow {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl FromIterator<char> for CharWindow {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
