//! Error handling for the CLI application

use std::fmt;
use std::io;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Source file not found or inaccessible
    FileNotFound(String),
    /// Destination could not be created or written
    WriteFailed {
        /// Destination path
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::WriteFailed { path, .. } => write!(f, "Cannot write output: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::WriteFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
