//! Dictionary and hyphenation error types

use thiserror::Error;

/// Errors raised while reading a dictionary file
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No character set line was found
    #[error("dictionary is empty")]
    Empty,

    /// A header directive carries an unusable value
    #[error("line {line}: invalid value '{value}' for {directive}")]
    InvalidDirective {
        /// 1-based line number
        line: usize,
        /// Directive keyword
        directive: String,
        /// Offending value
        value: String,
    },

    /// A pattern line could not be parsed
    #[error("line {line}: invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// 1-based line number
        line: usize,
        /// Pattern text as found in the file
        pattern: String,
        /// Why the pattern was rejected
        reason: &'static str,
    },

    /// `NEXTLEVEL` appeared more than once
    #[error("line {line}: only two pattern levels are supported")]
    TooManyLevels {
        /// 1-based line number
        line: usize,
    },
}

/// Errors raised while hyphenating a single word
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HyphenateError {
    /// The word is longer than the configured limit
    #[error("word of {len} bytes exceeds the {max} byte limit")]
    WordTooLong {
        /// Word length in bytes
        len: usize,
        /// Configured limit in bytes
        max: usize,
    },
}

/// Result type for dictionary loading
pub type Result<T> = std::result::Result<T, DictionaryError>;
