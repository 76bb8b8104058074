//! Per-call hyphenation options

use serde::{Deserialize, Serialize};

/// Minimum character counts around breaks and the word length limit
///
/// The effective minimum for each edge is the larger of the option and the
/// value declared by the dictionary header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyphenOptions {
    /// Characters required before the first break of a word
    pub left_min: usize,
    /// Characters required after the last break of a word
    pub right_min: usize,
    /// Characters required after a compound boundary
    pub compound_left_min: usize,
    /// Characters required before a compound boundary
    pub compound_right_min: usize,
    /// Longest word accepted, in bytes
    pub max_word_len: usize,
}

impl Default for HyphenOptions {
    fn default() -> Self {
        Self {
            left_min: 4,
            right_min: 3,
            compound_left_min: 2,
            compound_right_min: 2,
            max_word_len: 1000,
        }
    }
}

impl HyphenOptions {
    /// Options that defer entirely to the dictionary header
    pub fn dictionary_defaults() -> Self {
        Self {
            left_min: 0,
            right_min: 0,
            compound_left_min: 0,
            compound_right_min: 0,
            ..Self::default()
        }
    }
}
