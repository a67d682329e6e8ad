//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live
//! in a config file passed with `--config`:
//!
//! ```toml
//! # saf.toml
//! [sample]
//! item_count = 10
//! source = "filled_template.csv"
//!
//! [clean]
//! keep_going = true
//! ```
//!
//! Command-line flags take precedence over file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration structure for saf.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Settings for the sample command.
    #[serde(default)]
    pub sample: SampleConfig,

    /// Settings for the clean command.
    #[serde(default)]
    pub clean: CleanConfig,
}

/// Configuration for the sample command.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleConfig {
    /// Number of item directories to create.
    pub item_count: Option<usize>,

    /// Metadata sheet copied into every item.
    pub source: Option<PathBuf>,
}

/// Configuration for the clean command.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanConfig {
    /// Skip failing items instead of aborting.
    pub keep_going: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [sample]
            item_count = 10
            source = "filled.csv"

            [clean]
            keep_going = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.sample.item_count, Some(10));
        assert_eq!(config.sample.source, Some(PathBuf::from("filled.csv")));
        assert_eq!(config.clean.keep_going, Some(true));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [clean]
            keep_going = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.clean.keep_going, Some(false));
        assert_eq!(config.sample.item_count, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.sample.item_count, None);
        assert_eq!(config.clean.keep_going, None);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::from_str("[clean]\nkeep_goin = true\n").is_err());
    }
}
