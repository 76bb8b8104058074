//! Dictionary loading and word hyphenation

use crate::error::{DictionaryError, HyphenateError, Result};
use crate::hyphenation::{Hyphenation, Replacement, BREAK_MARKER};
use crate::options::HyphenOptions;
use crate::pattern::PatternSet;
use crate::utf8::{count_units, unit_ranges};
use std::fs;
use std::io::Read;
use std::ops::Range;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Compound-level patterns used when a dictionary has no `NEXTLEVEL`
const DEFAULT_COMPOUND_PATTERNS: &[&str] = &["1-1", "1'1"];
const DEFAULT_COMPOUND_PATTERNS_UTF8: &[&str] = &["1\u{2013}1", "1\u{2019}1"];

/// A loaded hyphenation dictionary
///
/// Dictionaries are immutable once parsed and can be shared freely between
/// threads.
#[derive(Debug, Clone)]
pub struct Dictionary {
    charset: String,
    utf8: bool,
    left_min: usize,
    right_min: usize,
    compound_left_min: usize,
    compound_right_min: usize,
    /// Patterns that split compound words
    compound: PatternSet,
    /// Patterns that hyphenate each compound part
    patterns: PatternSet,
    nohyphen: Vec<Vec<u8>>,
}

/// Header directive keywords
#[derive(Debug, Clone, Copy)]
enum Directive {
    LeftMin,
    RightMin,
    CompoundLeftMin,
    CompoundRightMin,
    NoHyphen,
    NextLevel,
}

impl Directive {
    fn parse(keyword: &[u8]) -> Option<Self> {
        match keyword {
            b"LEFTHYPHENMIN" => Some(Self::LeftMin),
            b"RIGHTHYPHENMIN" => Some(Self::RightMin),
            b"COMPOUNDLEFTHYPHENMIN" => Some(Self::CompoundLeftMin),
            b"COMPOUNDRIGHTHYPHENMIN" => Some(Self::CompoundRightMin),
            b"NOHYPHEN" => Some(Self::NoHyphen),
            b"NEXTLEVEL" => Some(Self::NextLevel),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::LeftMin => "LEFTHYPHENMIN",
            Self::RightMin => "RIGHTHYPHENMIN",
            Self::CompoundLeftMin => "COMPOUNDLEFTHYPHENMIN",
            Self::CompoundRightMin => "COMPOUNDRIGHTHYPHENMIN",
            Self::NoHyphen => "NOHYPHEN",
            Self::NextLevel => "NEXTLEVEL",
        }
    }
}

impl Dictionary {
    /// Load a dictionary file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        Self::parse(&bytes)
    }

    /// Read a dictionary from any reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse(&bytes)
    }

    /// Parse dictionary contents
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut lines = bytes
            .split(|&b| b == b'\n')
            .map(|line| line.trim_ascii())
            .enumerate()
            .map(|(index, line)| (index + 1, line));

        let charset = lines
            .by_ref()
            .map(|(_, line)| line)
            .find(|line| !line.is_empty())
            .ok_or(DictionaryError::Empty)?;
        let charset = String::from_utf8_lossy(charset).into_owned();
        let utf8 = charset.eq_ignore_ascii_case("UTF-8") || charset.eq_ignore_ascii_case("UTF8");

        let mut dictionary = Self {
            charset,
            utf8,
            left_min: 0,
            right_min: 0,
            compound_left_min: 0,
            compound_right_min: 0,
            compound: PatternSet::default(),
            patterns: PatternSet::default(),
            nohyphen: Vec::new(),
        };

        let mut levels = vec![PatternSet::default()];
        let mut nohyphen_declared = false;

        for (line_no, line) in lines {
            if line.is_empty() || line.starts_with(b"%") {
                continue;
            }
            let mut fields = line.split(|b| b.is_ascii_whitespace()).filter(|f| !f.is_empty());
            let Some(first) = fields.next() else {
                continue;
            };

            match Directive::parse(first) {
                Some(Directive::NextLevel) => {
                    if levels.len() == 2 {
                        return Err(DictionaryError::TooManyLevels { line: line_no });
                    }
                    levels.push(PatternSet::default());
                }
                Some(Directive::NoHyphen) => {
                    nohyphen_declared = true;
                    for field in fields {
                        dictionary.nohyphen.extend(
                            field
                                .split(|&b| b == b',')
                                .filter(|item| !item.is_empty())
                                .map(<[u8]>::to_vec),
                        );
                    }
                }
                Some(directive) => {
                    let value = fields.next().unwrap_or_default();
                    let number = parse_min(value).ok_or_else(|| DictionaryError::InvalidDirective {
                        line: line_no,
                        directive: directive.name().to_string(),
                        value: String::from_utf8_lossy(value).into_owned(),
                    })?;
                    match directive {
                        Directive::LeftMin => dictionary.left_min = number,
                        Directive::RightMin => dictionary.right_min = number,
                        Directive::CompoundLeftMin => dictionary.compound_left_min = number,
                        Directive::CompoundRightMin => dictionary.compound_right_min = number,
                        Directive::NoHyphen | Directive::NextLevel => {}
                    }
                }
                None => {
                    let level = levels.last_mut().ok_or(DictionaryError::Empty)?;
                    for token in std::iter::once(first).chain(fields) {
                        level.insert(token, utf8).map_err(|reason| {
                            DictionaryError::InvalidPattern {
                                line: line_no,
                                pattern: String::from_utf8_lossy(token).into_owned(),
                                reason,
                            }
                        })?;
                    }
                }
            }
        }

        if levels.len() == 2 {
            dictionary.patterns = levels.pop().unwrap_or_default();
            dictionary.compound = levels.pop().unwrap_or_default();
        } else {
            dictionary.patterns = levels.pop().unwrap_or_default();
            let defaults = DEFAULT_COMPOUND_PATTERNS
                .iter()
                .chain(if utf8 { DEFAULT_COMPOUND_PATTERNS_UTF8 } else { &[] });
            for pattern in defaults {
                dictionary
                    .compound
                    .insert(pattern.as_bytes(), utf8)
                    .map_err(|reason| DictionaryError::InvalidPattern {
                        line: 0,
                        pattern: (*pattern).to_string(),
                        reason,
                    })?;
                if !nohyphen_declared {
                    // "1-1" guards the character between the two digits
                    dictionary.nohyphen.push(pattern.trim_matches('1').as_bytes().to_vec());
                }
            }
        }

        Ok(dictionary)
    }

    /// Character set named on the first line
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// True when words are split into UTF-8 code points
    pub fn is_utf8(&self) -> bool {
        self.utf8
    }

    /// Number of word-level patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of compound-level patterns
    pub fn compound_pattern_count(&self) -> usize {
        self.compound.len()
    }

    /// Left and right minimums declared by the header
    pub fn header_minimums(&self) -> (usize, usize) {
        (self.left_min, self.right_min)
    }

    /// Hyphenate a single word
    ///
    /// The word is not case-folded; patterns are matched byte for byte.
    pub fn hyphenate(
        &self,
        word: &[u8],
        options: &HyphenOptions,
    ) -> std::result::Result<Hyphenation, HyphenateError> {
        if word.len() > options.max_word_len {
            return Err(HyphenateError::WordTooLong {
                len: word.len(),
                max: options.max_word_len,
            });
        }

        let units = unit_ranges(word, self.utf8);
        let len = units.len();
        if len == 0 {
            return Ok(Hyphenation::new(word, &units, Vec::new(), Vec::new()));
        }

        let compound = self.compound.apply(word, &units);
        let boundaries: Vec<usize> = (0..len - 1)
            .filter(|&i| compound.values[i] % 2 == 1)
            .collect();

        let (mut values, mut replacements) = if boundaries.is_empty() {
            let breaks = self.patterns.apply(word, &units);
            (breaks.values, breaks.replacements)
        } else {
            self.hyphenate_compound(word, &units, &boundaries, &compound.values, options)
        };

        let left_min = options.left_min.max(self.left_min);
        let right_min = options.right_min.max(self.right_min).max(1);
        self.enforce_minimums(&mut values, &mut replacements, left_min, right_min);
        self.clear_nohyphen(word, &units, &mut values, &mut replacements);

        for (value, replacement) in values.iter().zip(replacements.iter_mut()) {
            if value % 2 == 0 {
                *replacement = None;
            }
        }

        Ok(Hyphenation::new(word, &units, values, replacements))
    }

    /// Hyphenate each part of a compound word on its own
    fn hyphenate_compound(
        &self,
        word: &[u8],
        units: &[Range<usize>],
        boundaries: &[usize],
        compound_values: &[u8],
        options: &HyphenOptions,
    ) -> (Vec<u8>, Vec<Option<Replacement>>) {
        let len = units.len();
        let compound_left = options.compound_left_min.max(self.compound_left_min);
        let compound_right = options.compound_right_min.max(self.compound_right_min);

        let mut values = Vec::with_capacity(len);
        let mut replacements = Vec::with_capacity(len);
        let mut start = 0;
        for end in boundaries.iter().map(|&b| b + 1).chain(std::iter::once(len)) {
            let part = &units[start..end];
            let mut breaks = self.patterns.apply(word, part);
            let left = if start > 0 { compound_left } else { 0 };
            let right = if end < len { compound_right } else { 0 };
            self.enforce_minimums(&mut breaks.values, &mut breaks.replacements, left, right);
            values.extend(breaks.values);
            replacements.extend(breaks.replacements);
            start = end;
        }

        for &boundary in boundaries {
            values[boundary] = compound_values[boundary];
            replacements[boundary] = None;
        }
        (values, replacements)
    }

    /// Clear breaks that leave fewer than `left` characters before or
    /// `right` characters after them. A non-standard break is measured on
    /// its replacement text.
    fn enforce_minimums(
        &self,
        values: &mut [u8],
        replacements: &mut [Option<Replacement>],
        left: usize,
        right: usize,
    ) {
        let len = values.len();
        for index in 0..len {
            let measured = replacements[index]
                .as_ref()
                .filter(|_| values[index] % 2 == 1)
                .and_then(|r| self.replacement_sides(r, index, len));
            let (before, after) = measured.unwrap_or((index + 1, len - 1 - index));
            if before < left || after < right {
                values[index] = 0;
                replacements[index] = None;
            }
        }
    }

    /// Characters on each side of a non-standard break
    fn replacement_sides(
        &self,
        replacement: &Replacement,
        index: usize,
        len: usize,
    ) -> Option<(usize, usize)> {
        let marker = replacement.text.iter().position(|&b| b == BREAK_MARKER)?;
        let first = replacement.span_start(index);
        let remaining = len.checked_sub(first + replacement.cut)?;
        let before = first + count_units(&replacement.text[..marker], self.utf8);
        let after = count_units(&replacement.text[marker + 1..], self.utf8) + remaining;
        Some((before, after))
    }

    /// Clear breaks just before and at the end of every `NOHYPHEN` string
    fn clear_nohyphen(
        &self,
        word: &[u8],
        units: &[Range<usize>],
        values: &mut [u8],
        replacements: &mut [Option<Replacement>],
    ) {
        for guarded in &self.nohyphen {
            for (start, unit) in units.iter().enumerate() {
                if !word[unit.start..].starts_with(guarded) {
                    continue;
                }
                let end_byte = unit.start + guarded.len();
                let Some(span) = units[start..].iter().position(|u| u.end == end_byte) else {
                    continue;
                };
                let last = start + span;
                values[last] = 0;
                replacements[last] = None;
                if start > 0 {
                    values[start - 1] = 0;
                    replacements[start - 1] = None;
                }
            }
        }
    }
}

fn parse_min(value: &[u8]) -> Option<usize> {
    std::str::from_utf8(value).ok()?.parse().ok()
}
