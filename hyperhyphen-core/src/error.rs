//! Layered error types

use hyperhyphen_dict::HyphenateError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors while formatting a single word
#[derive(Error, Debug)]
pub enum FormatError {
    /// The dictionary could not hyphenate the word
    #[error("hyphenation error: {0}")]
    Hyphenation(#[from] HyphenateError),

    /// The output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the buffer-based batch entry point
#[derive(Error, Debug)]
pub enum BatchError {
    /// The output buffer filled up; output is truncated
    #[error("output buffer overflow after {written} bytes")]
    Overflow {
        /// Bytes written before the buffer filled up
        written: usize,
    },

    /// A word could not be hyphenated
    #[error("hyphenation of word {index} failed: {source}")]
    Hyphenation {
        /// Position of the word in the batch
        index: usize,
        /// Underlying failure
        source: HyphenateError,
    },

    /// Fewer NUL-terminated words than announced
    #[error("word {index} is not terminated by a NUL separator")]
    MissingSeparator {
        /// Position of the unterminated word
        index: usize,
    },

    /// Any other sink failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BatchError {
    /// Negative status code for callers that expect C-style results
    pub fn code(&self) -> i32 {
        match self {
            BatchError::Overflow { .. } => -1,
            BatchError::Hyphenation { .. } => -2,
            BatchError::MissingSeparator { .. } => -3,
            BatchError::Io(_) => -4,
        }
    }
}

/// Errors from the text API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// Nothing to hyphenate
    #[error("text is empty")]
    Empty,

    /// Chunk positions would not line up with the text
    #[error("text cannot start or end with whitespace")]
    SurroundingWhitespace,

    /// Text is UTF-8; an 8-bit dictionary would count bytes, not characters
    #[error("text hyphenation needs a UTF-8 dictionary, not {0}")]
    UnsupportedCharset(String),

    /// A word could not be hyphenated
    #[error("cannot hyphenate '{word}': {source}")]
    Hyphenation {
        /// The failing word
        word: String,
        /// Underlying failure
        source: HyphenateError,
    },
}

/// Errors from the dictionary store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A non-default store directory does not exist
    #[error("dictionary directory '{}' does not exist", .0.display())]
    DirectoryMissing(PathBuf),

    /// The platform has no user data directory
    #[error("no user data directory available")]
    NoDataDirectory,

    /// No dictionary matches the language code
    #[error("language '{0}' is not installed")]
    NotInstalled(String),

    /// The language code cannot name a file
    #[error("invalid language code '{0}'")]
    InvalidLanguage(String),

    /// File name pattern error
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while downloading dictionaries
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The request could not be made or the response not read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a failure status
    #[error("GET {url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The downloaded dictionary could not be stored
    #[error(transparent)]
    Store(#[from] StoreError),
}
