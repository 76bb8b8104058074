//! Byte-class helpers for UTF-8 and 8-bit words
//!
//! Words are handled as raw bytes. When a dictionary is UTF-8, a character
//! starts at every byte whose top two bits are not `10`; otherwise every byte
//! is a character of its own. Invalid UTF-8 is never rejected, it is simply
//! split by the same rule.

use core::ops::Range;

/// Returns true for UTF-8 continuation bytes (`10xxxxxx`)
#[inline]
pub fn is_continuation(byte: u8) -> bool {
    byte >> 6 == 2
}

/// Count UTF-8 code points by counting non-continuation bytes
pub fn count_code_points(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| !is_continuation(b)).count()
}

/// Count characters in `bytes` under the given encoding mode
pub fn count_units(bytes: &[u8], utf8: bool) -> usize {
    if utf8 {
        count_code_points(bytes)
    } else {
        bytes.len()
    }
}

/// Byte offset of the `n`-th character of `word`
///
/// Advances one byte per character and then skips continuation bytes when
/// `utf8` is set. Offsets past the end clamp to `word.len()`.
pub fn char_offset(word: &[u8], n: usize, utf8: bool) -> usize {
    let mut offset = 0;
    for _ in 0..n {
        if offset >= word.len() {
            return word.len();
        }
        offset += 1;
        while utf8 && offset < word.len() && is_continuation(word[offset]) {
            offset += 1;
        }
    }
    offset.min(word.len())
}

/// Byte ranges of every character in `bytes`
pub fn unit_ranges(bytes: &[u8], utf8: bool) -> Vec<Range<usize>> {
    let mut ranges = Vec::with_capacity(bytes.len());
    let mut start = 0;
    while start < bytes.len() {
        let end = char_offset(&bytes[start..], 1, utf8) + start;
        ranges.push(start..end);
        start = end;
    }
    ranges
}
