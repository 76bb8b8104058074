//! Input handling module

pub mod word_reader;

pub use word_reader::WordReader;
