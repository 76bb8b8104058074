//! Word output formatting
//!
//! A single formatting path serves every caller: the command-line loop
//! writes to stdout, the batch API writes into a bounded buffer. Both go
//! through [`WordFormatter::write_word`] with a different [`Write`] sink.

use crate::error::FormatError;
use hyperhyphen_dict::utf8::char_offset;
use hyperhyphen_dict::{Dictionary, HyphenOptions, Hyphenation, BREAK_MARKER};
use std::io::{self, Write};

/// Which representation to print for each word
///
/// Flags combine; when several apply, the first match in this order wins:
/// `vector`, `standard_only` (only if the word has a substitution),
/// `chunk_lengths`, then the hyphenated word. `list_candidates` adds lines
/// after any of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Print the raw break values (`-n`)
    pub vector: bool,
    /// Print the word unchanged when a break would change its spelling (`-s`)
    pub standard_only: bool,
    /// Print character counts between breaks (`-nn`)
    pub chunk_lengths: bool,
    /// List every break candidate (`-d`)
    pub list_candidates: bool,
}

/// Hyphenates words with one dictionary and renders them
#[derive(Debug, Clone)]
pub struct WordFormatter<'a> {
    dictionary: &'a Dictionary,
    hyphen_options: HyphenOptions,
    format: FormatOptions,
}

impl<'a> WordFormatter<'a> {
    /// Formatter with default hyphenation options and plain output
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            hyphen_options: HyphenOptions::default(),
            format: FormatOptions::default(),
        }
    }

    /// Set the hyphenation options
    pub fn with_hyphen_options(mut self, options: HyphenOptions) -> Self {
        self.hyphen_options = options;
        self
    }

    /// Set the output representation
    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    /// The dictionary in use
    pub fn dictionary(&self) -> &Dictionary {
        self.dictionary
    }

    /// The active output representation
    pub fn format(&self) -> FormatOptions {
        self.format
    }

    /// Hyphenate `word` and write its representation to `out`
    ///
    /// Nothing is written when hyphenation fails.
    pub fn write_word<W: Write + ?Sized>(&self, word: &[u8], out: &mut W) -> Result<(), FormatError> {
        let hyphenation = self.dictionary.hyphenate(word, &self.hyphen_options)?;
        self.write_hyphenation(word, &hyphenation, out)?;
        Ok(())
    }

    /// Write an existing hyphenation result of `word`
    pub fn write_hyphenation<W: Write + ?Sized>(
        &self,
        word: &[u8],
        hyphenation: &Hyphenation,
        out: &mut W,
    ) -> io::Result<()> {
        if self.format.vector {
            out.write_all(hyphenation.vector().as_bytes())?;
        } else if self.format.standard_only && hyphenation.has_substitution() {
            out.write_all(word)?;
        } else if self.format.chunk_lengths {
            if hyphenation.has_substitution() {
                write!(out, "{}", word.len())?;
            } else {
                write_chunk_lengths(out, &hyphenation.chunk_lengths())?;
            }
        } else {
            out.write_all(hyphenation.hyphenated())?;
        }
        out.write_all(b"\n")?;

        if self.format.list_candidates {
            write_candidates(out, word, hyphenation, self.dictionary.is_utf8())?;
        }
        Ok(())
    }
}

fn write_chunk_lengths<W: Write + ?Sized>(out: &mut W, lengths: &[usize]) -> io::Result<()> {
    if lengths.is_empty() {
        return out.write_all(b"0");
    }
    for (i, length) in lengths.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{length}")?;
    }
    Ok(())
}

/// Write one ` - ` line per break candidate of `word`
///
/// Standard breaks print as `prefix=rest`. Non-standard breaks print the
/// prefix before the replaced span, the replacement, and the word after the
/// cut.
pub fn write_candidates<W: Write + ?Sized>(
    out: &mut W,
    word: &[u8],
    hyphenation: &Hyphenation,
    utf8: bool,
) -> io::Result<()> {
    let last = hyphenation.len().saturating_sub(1);
    for index in (0..last).filter(|&i| hyphenation.is_break(i)) {
        out.write_all(b" - ")?;
        match hyphenation.replacement(index) {
            Some(replacement) => {
                let start = char_offset(word, replacement.span_start(index), utf8);
                let end = start + char_offset(&word[start..], replacement.cut, utf8);
                out.write_all(&word[..start])?;
                out.write_all(&replacement.text)?;
                out.write_all(&word[end..])?;
            }
            None => {
                let split = char_offset(word, index + 1, utf8);
                out.write_all(&word[..split])?;
                out.write_all(&[BREAK_MARKER])?;
                out.write_all(&word[split..])?;
            }
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "UTF-8\ny1p\nn1a\na1t\nr1a\nc1t\né1ti\ns1sz/sz=sz,1,3\náb1c/bx=c,1,3\n";

    fn render(word: &str, format: FormatOptions) -> String {
        let dictionary = Dictionary::parse(SAMPLE.as_bytes()).unwrap();
        let formatter = WordFormatter::new(&dictionary).with_format(format);
        let mut out = Vec::new();
        formatter.write_word(word.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_output() {
        assert_eq!(render("hyphenation", FormatOptions::default()), "hyphen=a=tion\n");
        assert_eq!(render("rhythm", FormatOptions::default()), "rhythm\n");
    }

    #[test]
    fn test_vector_output() {
        let format = FormatOptions {
            vector: true,
            ..FormatOptions::default()
        };
        assert_eq!(render("hyphenation", format), "00000110000\n");
        assert_eq!(render("répétition", format), "0001000000\n");
    }

    #[test]
    fn test_vector_wins_over_other_flags() {
        let format = FormatOptions {
            vector: true,
            standard_only: true,
            chunk_lengths: true,
            ..FormatOptions::default()
        };
        assert_eq!(render("kisasszony", format), "0000100000\n");
    }

    #[test]
    fn test_standard_only() {
        let format = FormatOptions {
            standard_only: true,
            ..FormatOptions::default()
        };
        assert_eq!(render("kisasszony", format), "kisasszony\n");
        assert_eq!(render("character", format), "char=ac=ter\n");
    }

    #[test]
    fn test_chunk_lengths() {
        let format = FormatOptions {
            chunk_lengths: true,
            ..FormatOptions::default()
        };
        assert_eq!(render("hyphenation", format), "6 1 4\n");
        assert_eq!(render("répétition", format), "4 6\n");
        assert_eq!(render("rhythm", format), "6\n");
        assert_eq!(render("", format), "0\n");
    }

    #[test]
    fn test_chunk_lengths_fall_back_to_byte_length() {
        let format = FormatOptions {
            chunk_lengths: true,
            ..FormatOptions::default()
        };
        assert_eq!(render("kisasszony", format), "10\n");
    }

    #[test]
    fn test_standard_only_beats_chunk_lengths() {
        let format = FormatOptions {
            standard_only: true,
            chunk_lengths: true,
            ..FormatOptions::default()
        };
        assert_eq!(render("kisasszony", format), "kisasszony\n");
        assert_eq!(render("character", format), "4 2 3\n");
    }

    #[test]
    fn test_candidates() {
        let format = FormatOptions {
            list_candidates: true,
            ..FormatOptions::default()
        };
        assert_eq!(
            render("character", format),
            "char=ac=ter\n - char=acter\n - charac=ter\n"
        );
        assert_eq!(render("répétition", format), "répé=tition\n - répé=tition\n");
        assert_eq!(
            render("kisasszony", format),
            "kisasz=szony\n - kisasz=szony\n"
        );
        assert_eq!(render("rhythm", format), "rhythm\n");
    }

    #[test]
    fn test_replaced_span_before_the_break() {
        assert_eq!(render("őzábcdef", FormatOptions::default()), "őzbx=cdef\n");
        let format = FormatOptions {
            list_candidates: true,
            ..FormatOptions::default()
        };
        assert_eq!(render("őzábcdef", format), "őzbx=cdef\n - őzbx=cdef\n");
        let format = FormatOptions {
            chunk_lengths: true,
            ..FormatOptions::default()
        };
        assert_eq!(render("őzábcdef", format), "10\n");
    }

    #[test]
    fn test_hyphenation_error_writes_nothing() {
        let dictionary = Dictionary::parse(SAMPLE.as_bytes()).unwrap();
        let formatter = WordFormatter::new(&dictionary).with_hyphen_options(HyphenOptions {
            max_word_len: 3,
            ..HyphenOptions::default()
        });
        let mut out = Vec::new();
        let err = formatter.write_word(b"character", &mut out).unwrap_err();
        assert!(matches!(err, FormatError::Hyphenation(_)));
        assert!(out.is_empty());
    }
}
