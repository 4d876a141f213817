//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use asmtok_core::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    /// Normalization and segmentation options
    pub pipeline: PipelineConfig,

    /// Performance configuration
    pub performance: PerformanceConfig,
}

/// File layout; the `[pipeline]` section is handed to asmtok-core as is
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    pipeline: toml::Table,

    #[serde(default)]
    performance: PerformanceConfig,
}

/// Performance-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Process batch lines on a thread pool
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker count, resolving 0 to the number of logical CPUs
    pub fn thread_count(&self) -> usize {
        if self.worker_threads == 0 {
            num_cpus::get()
        } else {
            self.worker_threads
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source).map_err(config_error)?;
        let pipeline = PipelineConfig::from_toml_table(file.pipeline).map_err(config_error)?;
        Ok(Self {
            pipeline,
            performance: file.performance,
        })
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Loading configuration from {}", path.display());
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let source = fs::read_to_string(path)
            .map_err(|e| config_error(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

fn config_error(err: impl std::fmt::Display) -> CliError {
    CliError::ConfigError(err.to_string())
}
