//! Word formatting, batch and text APIs over libhyphen dictionaries
//!
//! This crate builds the user-facing layers on top of `hyperhyphen-dict`:
//! - **Formatting**: one word in, one representation out (`format`)
//! - **Batch**: many words into a caller-supplied buffer (`batch`)
//! - **Text**: running text split into hyphenated chunks (`text`)
//! - **Store**: installed `hyph_*.dic` files by language code (`store`)
//! - **Repository**: dictionary download into the store (`repository`)
//!
//! # Example
//!
//! ```rust
//! use hyperhyphen_core::{Dictionary, FormatOptions, WordFormatter};
//!
//! let dictionary = Dictionary::parse(b"UTF-8\nr1a\nc1t\n").unwrap();
//! let formatter = WordFormatter::new(&dictionary);
//!
//! let mut out = Vec::new();
//! formatter.write_word(b"character", &mut out).unwrap();
//! assert_eq!(out, b"char=ac=ter\n");
//!
//! let formatter = formatter.with_format(FormatOptions {
//!     chunk_lengths: true,
//!     ..FormatOptions::default()
//! });
//! let mut out = Vec::new();
//! formatter.write_word(b"character", &mut out).unwrap();
//! assert_eq!(out, b"4 2 3\n");
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod error;
pub mod format;
pub mod repository;
pub mod store;
pub mod text;

pub use batch::{hyphenate_packed, hyphenate_words, hyphenate_words_numbers, hyphenate_words_simple};
pub use error::{BatchError, FormatError, RepositoryError, StoreError, TextError};
pub use format::{write_candidates, FormatOptions, WordFormatter};
pub use repository::{DictionaryLocation, Repository, DEFAULT_REPOSITORY};
pub use store::DictionaryStore;
pub use text::{Segment, TextHyphenator, TextMode, TextOutput};

pub use hyperhyphen_dict::{
    Dictionary, DictionaryError, HyphenOptions, HyphenateError, Hyphenation, Replacement,
};
