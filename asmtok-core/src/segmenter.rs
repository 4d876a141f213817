//! Left-to-right token segmentation
//!
//! [`Segmenter`] walks normalized text with an explicit cursor. Each call to
//! [`Segmenter::step`] consumes one or more characters and may complete up
//! to two tokens (a pending word and a standalone mark). The iterator yields
//! tokens in order; none is ever empty or contains whitespace.

use crate::character::{classify, is_numeral, CharClass};
use crate::predicates::{is_abbreviation_period, is_decimal_period, is_time_colon, is_word_apostrophe};
use crate::window::CharWindow;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Outcome of a single scan step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Characters consumed
    pub consumed: usize,
    /// Tokens completed
    pub emitted: usize,
}

/// Cursor-driven token iterator
#[derive(Debug, Clone)]
pub struct Segmenter {
    window: CharWindow,
    cursor: usize,
    buffer: String,
    ready: VecDeque<String>,
}

impl Segmenter {
    /// Start segmenting `text`
    pub fn new(text: &str) -> Self {
        Self {
            window: CharWindow::new(text),
            cursor: 0,
            buffer: String::new(),
            ready: VecDeque::with_capacity(2),
        }
    }

    /// Current character position
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Check if the whole input has been consumed
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.window.len()
    }

    /// Advance over the next character (plus anything it absorbs)
    ///
    /// Returns `None` once the input is exhausted.
    pub fn step(&mut self) -> Option<Step> {
        let ch = self.window.get(self.cursor)?;
        let before = self.ready.len();

        let consumed = match classify(ch) {
            CharClass::Whitespace => {
                self.flush();
                1
            }
            CharClass::Period => self.period(),
            CharClass::Colon => self.colon(),
            CharClass::Apostrophe => {
                if is_word_apostrophe(&self.window, self.cursor) {
                    self.buffer.push(ch);
                } else {
                    self.standalone(ch);
                }
                1
            }
            CharClass::Quote => {
                self.standalone(ch);
                let from = self.cursor + 1;
                1 + self.window.run_end(from, char::is_whitespace) - from
            }
            CharClass::FixedPunctuation => {
                self.standalone(ch);
                1
            }
            _ => {
                self.buffer.push(ch);
                1
            }
        };

        self.cursor += consumed;
        if self.is_finished() {
            self.flush();
        }

        Some(Step {
            consumed,
            emitted: self.ready.len() - before,
        })
    }

    fn period(&mut self) -> usize {
        if is_abbreviation_period(&self.window, self.cursor) {
            self.buffer.push('.');
            self.flush();
            1
        } else if is_decimal_period(&self.window, self.cursor) {
            self.buffer.push('.');
            1 + self.absorb(self.cursor + 1, is_numeral)
        } else {
            self.standalone('.');
            1
        }
    }

    fn colon(&mut self) -> usize {
        if is_time_colon(&self.window, self.cursor) {
            self.buffer.push(':');
            1 + self.absorb(self.cursor + 1, |c| is_numeral(c) || c == ':')
        } else {
            self.standalone(':');
            1
        }
    }

    /// Append the run starting at `from` to the buffer, returning its length
    fn absorb(&mut self, from: usize, pred: impl Fn(char) -> bool) -> usize {
        let end = self.window.run_end(from, pred);
        self.buffer.extend(&self.window.as_chars()[from..end]);
        end - from
    }

    /// Complete the pending token, then emit `mark` on its own
    fn standalone(&mut self, mark: char) {
        self.flush();
        self.ready.push_back(mark.to_string());
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.ready.push_back(std::mem::take(&mut self.buffer));
        }
    }
}

impl Iterator for Segmenter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(token);
            }
            self.step()?;
        }
    }
}

impl FusedIterator for Segmenter {}

/// Split normalized text into tokens
pub fn tokenize(text: &str) -> Vec<String> {
    Segmenter::new(text).collect()
}
