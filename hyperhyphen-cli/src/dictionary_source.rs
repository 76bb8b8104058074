//! Dictionary source management for CLI

use anyhow::{Context, Result};
use hyperhyphen_core::DictionaryStore;
use std::path::{Path, PathBuf};

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Dictionary file given directly
    File(PathBuf),
    /// Installed dictionary looked up by language code
    Installed {
        /// Language code, exact or prefix (`de` finds `de_DE`)
        language: String,
        /// Store directory; the default store when absent
        directory: Option<PathBuf>,
    },
}

impl DictionarySource {
    /// Get the display name for the dictionary source
    pub fn display_name(&self) -> String {
        match self {
            DictionarySource::File(path) => format!("File: {}", path.display()),
            DictionarySource::Installed {
                language,
                directory,
            } => match directory {
                Some(dir) => format!("Installed: {} (in {})", language, dir.display()),
                None => format!("Installed: {language}"),
            },
        }
    }

    /// Path of the dictionary file to load
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            DictionarySource::File(path) => Ok(path.clone()),
            DictionarySource::Installed {
                language,
                directory,
            } => {
                let store = open_store(directory.as_deref())?;
                store
                    .path_for(language)
                    .with_context(|| format!("No dictionary for language '{language}'"))
            }
        }
    }
}

/// Open the store at `directory`, or the default store
pub fn open_store(directory: Option<&Path>) -> Result<DictionaryStore> {
    match directory {
        Some(dir) => Ok(DictionaryStore::new(dir)),
        None => DictionaryStore::open_default().context("Failed to locate the dictionary store"),
    }
}
