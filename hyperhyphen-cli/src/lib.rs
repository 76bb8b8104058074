//! Hyperhyphen CLI library
//!
//! This library provides the command-line interface that hyphenates words
//! read from standard input with a libhyphen dictionary.

pub mod commands;
pub mod config;
pub mod dictionary_source;
pub mod error;
pub mod input;

pub use error::{CliError, CliResult};
