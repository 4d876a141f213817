//! Pipeline configuration
//!
//! Every field defaults to the production behaviour: hyphens always split,
//! the ya-nukta substitution is inert and only the built-in compound
//! patterns are known.

use crate::error::{CoreError, Result};
use crate::tables::{CompoundPattern, CompoundPatterns, SubstitutionTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for the normalization pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Keep hyphens inside compound words instead of splitting on them
    pub join_compound_hyphens: bool,

    /// Compose a decomposed ya + nukta into the single ya-nukta code point
    pub compose_ya_nukta: bool,

    /// Patterns appended to the built-in compound table
    pub extra_compound_patterns: Vec<CompoundPattern>,
}

impl PipelineConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable compound-hyphen joining
    pub fn join_compound_hyphens(mut self, enabled: bool) -> Self {
        self.join_compound_hyphens = enabled;
        self
    }

    /// Enable or disable ya-nukta composition
    pub fn compose_ya_nukta(mut self, enabled: bool) -> Self {
        self.compose_ya_nukta = enabled;
        self
    }

    /// Add a compound pattern
    pub fn with_compound_pattern(mut self, first: &str, second: &str) -> Self {
        self.extra_compound_patterns
            .push(CompoundPattern::new(first, second));
        self
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(source)?;
        Self::from_toml_table(table)
    }

    /// Build a configuration from an already parsed TOML table
    ///
    /// Used when the pipeline options are one section of a larger file.
    pub fn from_toml_table(table: toml::Table) -> Result<Self> {
        let config: Self = toml::Value::Table(table).try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Loading pipeline configuration from {}", path.display());
        let source = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject compound patterns with an empty side
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .extra_compound_patterns
            .iter()
            .find(|p| p.first.trim().is_empty() || p.second.trim().is_empty())
        {
            return Err(CoreError::InvalidPattern {
                first: bad.first.clone(),
                second: bad.second.clone(),
            });
        }
        Ok(())
    }

    /// Built-in compound table plus any extra patterns
    pub fn compound_patterns(&self) -> CompoundPatterns {
        let mut patterns = CompoundPatterns::builtin();
        patterns.extend(self.extra_compound_patterns.iter().cloned());
        patterns
    }

    /// Substitution table matching the ya-nukta setting
    pub fn substitution_table(&self) -> SubstitutionTable {
        if self.compose_ya_nukta {
            SubstitutionTable::with_ya_nukta_composition()
        } else {
            SubstitutionTable::standard()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_behaviour() {
        let config = PipelineConfig::default();
        assert!(!config.join_compound_hyphens);
        assert!(!config.compose_ya_nukta);
        assert!(config.extra_compound_patterns.is_empty());
        assert_eq!(config.compound_patterns(), CompoundPatterns::builtin());
        assert_eq!(config.substitution_table(), SubstitutionTable::standard());
    }

    #[test]
    fn test_builder_methods() {
        let config = PipelineConfig::new()
            .join_compound_hyphens(true)
            .compose_ya_nukta(true)
            .with_compound_pattern("উত্তৰ", "পশ্চিম");

        assert!(config.join_compound_hyphens);
        assert_eq!(
            config.substitution_table(),
            SubstitutionTable::with_ya_nukta_composition()
        );
        assert_eq!(config.compound_patterns().len(), 4);
    }

    #[test]
    fn test_from_toml_str() {
        let toml_str = r#"
join_compound_hyphens = true

[[extra_compound_patterns]]
first = "উত্তৰ"
second = "পশ্চিম"
"#;
        let config = PipelineConfig::from_toml_str(toml_str).unwrap();
        assert!(config.join_compound_hyphens);
        assert!(!config.compose_ya_nukta);
        assert_eq!(
            config.extra_compound_patterns,
            vec![CompoundPattern::new("উত্তৰ", "পশ্চিম")]
        );
    }

    #[test]
    fn test_from_toml_table() {
        let mut table = toml::Table::new();
        table.insert("join_compound_hyphens".to_string(), toml::Value::Boolean(true));
        let config = PipelineConfig::from_toml_table(table).unwrap();
        assert!(config.join_compound_hyphens);

        let mut table = toml::Table::new();
        table.insert("compose".to_string(), toml::Value::Boolean(true));
        assert!(matches!(
            PipelineConfig::from_toml_table(table),
            Err(CoreError::Toml(_))
        ));
        assert_eq!(
            PipelineConfig::from_toml_table(toml::Table::new()).unwrap(),
            PipelineConfig::default()
        );
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = PipelineConfig::from_toml_str("split_everything = true");
        assert!(matches!(result, Err(CoreError::Toml(_))));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let toml_str = r#"
[[extra_compound_patterns]]
first = "উত্তৰ"
second = " "
"#;
        let result = PipelineConfig::from_toml_str(toml_str);
        assert!(matches!(result, Err(CoreError::InvalidPattern { .. })));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pipeline.toml");
        fs::write(&path, "compose_ya_nukta = true\n").unwrap();

        let config = PipelineConfig::from_file(&path).unwrap();
        assert!(config.compose_ya_nukta);
    }

    #[test]
    fn test_from_missing_file() {
        let result = PipelineConfig::from_file(Path::new("/nonexistent/pipeline.toml"));
        assert!(matches!(result, Err(CoreError::Io { .. })));
    }
}
