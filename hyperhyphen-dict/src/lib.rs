//! Hyphenation dictionaries in the libhyphen `.dic` format
//!
//! This crate reads the pattern files shipped with LibreOffice and most Linux
//! distributions (`hyph_en_US.dic` and friends) and hyphenates single words
//! with them, including non-standard breaks that change the spelling around
//! the hyphen.
//!
//! # Example
//!
//! ```rust
//! use hyperhyphen_dict::{Dictionary, HyphenOptions};
//!
//! let dictionary = Dictionary::parse(b"UTF-8\ny1p\nn1a\na1t\n").unwrap();
//! let options = HyphenOptions { left_min: 2, right_min: 2, ..HyphenOptions::default() };
//!
//! let result = dictionary.hyphenate(b"hyphenation", &options).unwrap();
//! assert_eq!(result.hyphenated(), b"hy=phen=a=tion");
//! assert_eq!(result.chunk_lengths(), vec![2, 4, 1, 4]);
//! ```

#![warn(missing_docs)]

pub mod dictionary;
pub mod error;
pub mod hyphenation;
pub mod options;
mod pattern;
pub mod utf8;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, HyphenateError, Result};
pub use hyphenation::{Hyphenation, Replacement, BREAK_MARKER};
pub use options::HyphenOptions;
