//! Line-by-line word reading

use std::io::{self, BufRead};

/// Reads one word per line from a buffered reader
///
/// Words are raw bytes; the dictionary decides how to interpret them.
/// The trailing `\n` and a `\r` before it are removed. A last line without
/// a terminator is still returned.
pub struct WordReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> WordReader<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(64),
        }
    }

    /// The next word, or `None` at end of input
    pub fn next_word(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(&self.buf))
    }
}
