//! Installed dictionary management
//!
//! Dictionaries live in one directory as `hyph_<language>.dic` files, the
//! naming used by LibreOffice and most distributions. The default
//! directory sits under the user data directory and is created on first
//! use; an explicitly chosen directory must already exist.

use crate::error::StoreError;
use glob::Pattern;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "hyph_";
const FILE_SUFFIX: &str = ".dic";

/// A directory of `hyph_*.dic` files
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    directory: PathBuf,
    is_default: bool,
}

impl DictionaryStore {
    /// Store over an existing directory
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            is_default: false,
        }
    }

    /// `<data dir>/hyperhyphen`, if the platform has a data directory
    pub fn default_location() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("hyperhyphen"))
    }

    /// Store over the default location
    pub fn open_default() -> Result<Self, StoreError> {
        let directory = Self::default_location().ok_or(StoreError::NoDataDirectory)?;
        Ok(Self {
            directory,
            is_default: true,
        })
    }

    /// The store directory, created first when it is the default one
    pub fn directory(&self) -> Result<&Path, StoreError> {
        if !self.directory.is_dir() {
            if !self.is_default {
                return Err(StoreError::DirectoryMissing(self.directory.clone()));
            }
            fs::create_dir_all(&self.directory)?;
        }
        Ok(&self.directory)
    }

    /// Installed language codes mapped to their files, sorted by code
    pub fn installed(&self) -> Result<BTreeMap<String, PathBuf>, StoreError> {
        let pattern = Pattern::new(&format!("{FILE_PREFIX}*{FILE_SUFFIX}"))?;
        let mut found = BTreeMap::new();
        for entry in fs::read_dir(self.directory()?)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if !pattern.matches(&name) || !entry.path().is_file() {
                continue;
            }
            let language = &name[FILE_PREFIX.len()..name.len() - FILE_SUFFIX.len()];
            if !language.is_empty() {
                found.insert(language.to_string(), entry.path());
            }
        }
        Ok(found)
    }

    /// Installed language codes, sorted
    pub fn installed_languages(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.installed()?.into_keys().collect())
    }

    /// True when a dictionary for `language` can be found
    pub fn is_installed(&self, language: &str) -> Result<bool, StoreError> {
        match self.path_for(language) {
            Ok(_) => Ok(true),
            Err(StoreError::NotInstalled(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Path of the dictionary for `language`
    ///
    /// An exact code match wins; otherwise the first installed code with the
    /// same language part is used, so `de` finds `de_DE` and `en_GB` falls
    /// back to `en_US`.
    pub fn path_for(&self, language: &str) -> Result<PathBuf, StoreError> {
        let installed = self.installed()?;
        if let Some(path) = installed.get(language) {
            return Ok(path.clone());
        }
        let prefix = format!("{}_", language_part(language));
        installed
            .iter()
            .find(|(code, _)| code.replace('-', "_").starts_with(&prefix))
            .map(|(_, path)| path.clone())
            .ok_or_else(|| StoreError::NotInstalled(language.to_string()))
    }

    /// Write `content` into the store as the dictionary for `language`
    pub fn add(&self, language: &str, content: &[u8]) -> Result<PathBuf, StoreError> {
        validate_language(language)?;
        let target = self.directory()?.join(file_name(language));
        fs::write(&target, content)?;
        log::info!("Installed dictionary for '{}' at {}", language, target.display());
        Ok(target)
    }

    /// Copy `source` into the store as the dictionary for `language`
    pub fn add_file(&self, language: &str, source: impl AsRef<Path>) -> Result<PathBuf, StoreError> {
        validate_language(language)?;
        let target = self.directory()?.join(file_name(language));
        fs::copy(source, &target)?;
        log::info!("Installed dictionary for '{}' at {}", language, target.display());
        Ok(target)
    }

    /// Delete the dictionary [`path_for`](Self::path_for) resolves for
    /// `language`; false when none was installed
    pub fn remove(&self, language: &str) -> Result<bool, StoreError> {
        validate_language(language)?;
        let target = match self.path_for(language) {
            Ok(path) => path,
            Err(StoreError::NotInstalled(_)) => return Ok(false),
            Err(err) => return Err(err),
        };
        fs::remove_file(&target)?;
        log::info!("Removed dictionary {}", target.display());
        Ok(true)
    }
}

/// Language part of a code: `en` for `en_US` or `en-US`
pub(crate) fn language_part(language: &str) -> &str {
    language.split(['_', '-']).next().unwrap_or(language)
}

fn file_name(language: &str) -> String {
    format!("{FILE_PREFIX}{language}{FILE_SUFFIX}")
}

fn validate_language(language: &str) -> Result<(), StoreError> {
    let valid = !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidLanguage(language.to_string()))
    }
}
