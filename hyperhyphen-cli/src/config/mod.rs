//! Configuration module
//!
//! The configuration file is TOML. Every section and field is optional;
//! command-line options override whatever the file sets.

use crate::error::CliError;
use anyhow::{Context, Result};
use hyperhyphen_core::HyphenOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Dictionary selection
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Minimum character counts and word length limit
    #[serde(default)]
    pub hyphenation: HyphenOptions,
}

/// Dictionary-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary file to load
    pub path: Option<PathBuf>,

    /// Language code looked up in the dictionary store
    pub language: Option<String>,

    /// Dictionary store directory
    pub directory: Option<PathBuf>,

    /// Repository URL for `--install`
    pub repository: Option<String>,
}

impl CliConfig {
    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.hyphenation.max_word_len == 0 {
            return Err(CliError::ConfigError("max_word_len must be positive".to_string()).into());
        }
        Ok(config)
    }
}
