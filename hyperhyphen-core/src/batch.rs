//! Batch hyphenation into caller-supplied buffers

use crate::error::{BatchError, FormatError};
use crate::format::{FormatOptions, WordFormatter};
use hyperhyphen_dict::{Dictionary, HyphenOptions};
use std::io::{Cursor, ErrorKind};

/// Hyphenate `count` NUL-terminated words from `words` into `out`
///
/// Each word produces the formatter's output, newline included. Returns the
/// number of bytes written. On error, `out` keeps whatever was written before
/// the failure; an overflow leaves the buffer filled to its last byte.
pub fn hyphenate_packed(
    formatter: &WordFormatter<'_>,
    words: &[u8],
    count: usize,
    out: &mut [u8],
) -> Result<usize, BatchError> {
    let mut sink = Cursor::new(out);
    let mut rest = words;

    for index in 0..count {
        let Some(end) = rest.iter().position(|&b| b == 0) else {
            return Err(BatchError::MissingSeparator { index });
        };
        let word = &rest[..end];
        rest = &rest[end + 1..];

        match formatter.write_word(word, &mut sink) {
            Ok(()) => {}
            Err(FormatError::Hyphenation(source)) => {
                return Err(BatchError::Hyphenation { index, source });
            }
            Err(FormatError::Io(err)) if err.kind() == ErrorKind::WriteZero => {
                return Err(BatchError::Overflow {
                    written: sink.position() as usize,
                });
            }
            Err(FormatError::Io(err)) => return Err(BatchError::Io(err)),
        }
    }

    Ok(sink.position() as usize)
}

/// Hyphenate `words` and return one output line per word
///
/// Lines produced by `list_candidates` are included as they are written.
pub fn hyphenate_words<S: AsRef<[u8]>>(
    formatter: &WordFormatter<'_>,
    words: &[S],
) -> Result<Vec<String>, BatchError> {
    let mut out = Vec::new();
    for (index, word) in words.iter().enumerate() {
        match formatter.write_word(word.as_ref(), &mut out) {
            Ok(()) => {}
            Err(FormatError::Hyphenation(source)) => {
                return Err(BatchError::Hyphenation { index, source });
            }
            Err(FormatError::Io(err)) => return Err(BatchError::Io(err)),
        }
    }
    Ok(String::from_utf8_lossy(&out)
        .lines()
        .map(str::to_owned)
        .collect())
}

/// Chunk lengths for every word (`-nn` output parsed back into numbers)
pub fn hyphenate_words_numbers<S: AsRef<[u8]>>(
    dictionary: &Dictionary,
    options: HyphenOptions,
    words: &[S],
) -> Result<Vec<Vec<usize>>, BatchError> {
    let formatter = WordFormatter::new(dictionary)
        .with_hyphen_options(options)
        .with_format(FormatOptions {
            chunk_lengths: true,
            ..FormatOptions::default()
        });
    let lines = hyphenate_words(&formatter, words)?;
    Ok(lines
        .iter()
        .map(|line| line.split(' ').filter_map(|n| n.parse().ok()).collect())
        .collect())
}

/// Hyphenated words, leaving words with non-standard breaks untouched
pub fn hyphenate_words_simple<S: AsRef<[u8]>>(
    dictionary: &Dictionary,
    options: HyphenOptions,
    words: &[S],
) -> Result<Vec<String>, BatchError> {
    let formatter = WordFormatter::new(dictionary)
        .with_hyphen_options(options)
        .with_format(FormatOptions {
            standard_only: true,
            ..FormatOptions::default()
        });
    hyphenate_words(&formatter, words)
}
