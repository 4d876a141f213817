//! Rule-based word tokenization for Assamese text
//!
//! Naive whitespace/punctuation splitting gets several things wrong in
//! Assamese: abbreviation stops, decimal points inside numerals, clock
//! times, contraction apostrophes and quotation marks. This crate resolves
//! those cases with a small set of context rules shared by two stages:
//!
//! - the **normalizer** canonicalizes the text and pads boundary
//!   punctuation with spaces,
//! - the **segmenter** scans the normalized text once and emits tokens.
//!
//! Both stages are pure, total functions of their input.
//!
//! # Example
//!
//! ```rust
//! use asmtok_core::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let normalized = pipeline.normalize("সময় 9:30 বজাত।");
//! assert_eq!(normalized, "সময় ৯:৩০ বজাত ।");
//!
//! let tokens = pipeline.tokenize(&normalized);
//! assert_eq!(tokens, vec!["সময়", "৯:৩০", "বজাত", "।"]);
//! ```

pub mod batch;
pub mod character;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod pipeline;
pub mod predicates;
pub mod segmenter;
pub mod tables;
pub mod window;

pub use character::{classify, CharClass};
pub use config::PipelineConfig;
pub use error::{CoreError, Result};
pub use normalizer::{normalize, Normalizer};
pub use pipeline::{Analysis, Pipeline};
pub use segmenter::{tokenize, Segmenter, Step};
pub use tables::{CompoundPattern, CompoundPatterns, SubstitutionTable};
pub use window::CharWindow;
