//! Core error types
//!
//! Normalization and tokenization are total; only loading a pipeline
//! configuration can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a pipeline configuration
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration file could not be read
    #[error("failed to read configuration {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid TOML for this schema
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A compound pattern has an empty side
    #[error("invalid compound pattern '{first}-{second}': both words must be non-empty")]
    InvalidPattern {
        /// First word as given
        first: String,
        /// Second word as given
        second: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
