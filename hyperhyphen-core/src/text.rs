//! Hyphenation of running text
//!
//! Text is split on whitespace runs, each word is lower-cased and
//! hyphenated, and the result is mapped back onto the original text.
//! Lower-casing keeps one character per character so that chunk lengths
//! computed on the folded word line up with the original. Only UTF-8
//! dictionaries count in characters, so 8-bit dictionaries are refused.

use crate::error::TextError;
use hyperhyphen_dict::{Dictionary, DictionaryError, HyphenOptions, Hyphenation};
use std::ops::Range;
use std::path::Path;

/// Output shape of [`TextHyphenator::hyphenate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Hyphenated words joined by newlines
    Raw,
    /// Slices of the original text, chunks and whitespace alternating
    #[default]
    Str,
    /// Chunk and whitespace lengths in characters
    Int,
}

/// One piece of hyphenated text, measured in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Part of a word between breaks
    Chunk(usize),
    /// A whitespace run between words
    Space(usize),
}

impl Segment {
    /// Length in characters
    pub fn len(&self) -> usize {
        match *self {
            Segment::Chunk(len) | Segment::Space(len) => len,
        }
    }

    /// True for zero-length segments
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of [`TextHyphenator::hyphenate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOutput<'t> {
    /// See [`TextMode::Raw`]
    Raw(String),
    /// See [`TextMode::Str`]
    Str(Vec<&'t str>),
    /// See [`TextMode::Int`]
    Int(Vec<Segment>),
}

/// Hyphenates whole texts with one dictionary
#[derive(Debug, Clone)]
pub struct TextHyphenator {
    dictionary: Dictionary,
    options: HyphenOptions,
}

impl TextHyphenator {
    /// Hyphenator over an already loaded dictionary
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            options: HyphenOptions::default(),
        }
    }

    /// Load the dictionary at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        Ok(Self::new(Dictionary::load(path)?))
    }

    /// Set the hyphenation options
    pub fn with_options(mut self, options: HyphenOptions) -> Self {
        self.options = options;
        self
    }

    /// Hyphenate `text` in the given mode
    pub fn hyphenate<'t>(&self, text: &'t str, mode: TextMode) -> Result<TextOutput<'t>, TextError> {
        Ok(match mode {
            TextMode::Raw => TextOutput::Raw(self.raw(text)?),
            TextMode::Str => TextOutput::Str(self.pieces(text)?),
            TextMode::Int => TextOutput::Int(self.segments(text)?),
        })
    }

    /// Hyphenated words, one per line; words whose breaks would change the
    /// spelling are left whole
    pub fn raw(&self, text: &str) -> Result<String, TextError> {
        self.check_charset()?;
        let mut lines = Vec::new();
        for word in text.split_whitespace() {
            let folded = fold_case(word);
            let hyphenation = self.hyphenate_word(&folded)?;
            if hyphenation.has_substitution() {
                lines.push(folded);
            } else {
                lines.push(String::from_utf8_lossy(hyphenation.hyphenated()).into_owned());
            }
        }
        Ok(lines.join("\n"))
    }

    /// Chunk lengths with whitespace runs in between
    pub fn segments(&self, text: &str) -> Result<Vec<Segment>, TextError> {
        self.check_charset()?;
        check_edges(text)?;
        let mut segments = Vec::new();
        for run in runs(text) {
            let piece = &text[run.range.clone()];
            if run.space {
                segments.push(Segment::Space(piece.chars().count()));
                continue;
            }
            let folded = fold_case(piece);
            let hyphenation = self.hyphenate_word(&folded)?;
            if hyphenation.has_substitution() {
                segments.push(Segment::Chunk(hyphenation.len()));
            } else {
                segments.extend(hyphenation.chunk_lengths().into_iter().map(Segment::Chunk));
            }
        }
        Ok(segments)
    }

    /// Slices of `text` for every chunk and whitespace run
    pub fn pieces<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, TextError> {
        let segments = self.segments(text)?;
        let mut pieces = Vec::with_capacity(segments.len());
        let mut chars = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len()));
        let mut start = chars.next().unwrap_or(0);
        for segment in segments {
            let end = chars.nth(segment.len().saturating_sub(1)).unwrap_or(text.len());
            pieces.push(&text[start..end]);
            start = end;
        }
        Ok(pieces)
    }

    /// Byte ranges of the chunks in `text`
    pub fn spans(&self, text: &str) -> Result<Vec<Range<usize>>, TextError> {
        let segments = self.segments(text)?;
        let pieces = self.pieces(text)?;
        let mut spans = Vec::new();
        let mut offset = 0;
        for (segment, piece) in segments.iter().zip(pieces) {
            if let Segment::Chunk(_) = segment {
                spans.push(offset..offset + piece.len());
            }
            offset += piece.len();
        }
        Ok(spans)
    }

    fn check_charset(&self) -> Result<(), TextError> {
        if self.dictionary.is_utf8() {
            Ok(())
        } else {
            Err(TextError::UnsupportedCharset(
                self.dictionary.charset().to_string(),
            ))
        }
    }

    fn hyphenate_word(&self, word: &str) -> Result<Hyphenation, TextError> {
        self.dictionary
            .hyphenate(word.as_bytes(), &self.options)
            .map_err(|source| TextError::Hyphenation {
                word: word.to_string(),
                source,
            })
    }
}

/// A maximal run of whitespace or non-whitespace characters
struct Run {
    range: Range<usize>,
    space: bool,
}

fn runs(text: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for (index, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        let end = index + ch.len_utf8();
        match runs.last_mut() {
            Some(run) if run.space == space => run.range.end = end,
            _ => runs.push(Run {
                range: index..end,
                space,
            }),
        }
    }
    runs
}

fn check_edges(text: &str) -> Result<(), TextError> {
    let (Some(first), Some(last)) = (text.chars().next(), text.chars().next_back()) else {
        return Err(TextError::Empty);
    };
    if first.is_whitespace() || last.is_whitespace() {
        return Err(TextError::SurroundingWhitespace);
    }
    Ok(())
}

/// Lower-case characters whose lower-case form is a single character
fn fold_case(word: &str) -> String {
    word.chars()
        .map(|ch| {
            let mut lower = ch.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => single,
                _ => ch,
            }
        })
        .collect()
}
