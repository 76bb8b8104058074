//! Result of hyphenating one word

use std::ops::Range;

/// Break marker inserted into hyphenated words
pub const BREAK_MARKER: u8 = b'=';

/// A non-standard break: the spelling around the break changes
///
/// The replaced span starts `pos - 1` characters before the character
/// preceding the break and covers `cut` characters of the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Replacement text with [`BREAK_MARKER`] at the break
    pub text: Vec<u8>,
    /// Characters from the start of the replaced span up to and including
    /// the character before the break
    pub pos: usize,
    /// Characters of the word replaced by `text`
    pub cut: usize,
}

impl Replacement {
    /// Index of the first replaced character, given the break after `index`
    pub fn span_start(&self, index: usize) -> usize {
        (index + 1).saturating_sub(self.pos)
    }
}

/// Break values, replacements, and the rendered word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyphenation {
    values: Vec<u8>,
    replacements: Vec<Option<Replacement>>,
    hyphenated: Vec<u8>,
}

impl Hyphenation {
    pub(crate) fn new(
        word: &[u8],
        units: &[Range<usize>],
        values: Vec<u8>,
        replacements: Vec<Option<Replacement>>,
    ) -> Self {
        let hyphenated = render(word, units, &values, &replacements);
        Self {
            values,
            replacements,
            hyphenated,
        }
    }

    /// Number of characters in the word
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for the empty word
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw break values, one per character
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Break values as ASCII digits, one per character
    pub fn vector(&self) -> String {
        self.values.iter().map(|&v| char::from(b'0' + v)).collect()
    }

    /// True when a break is allowed after character `index`
    pub fn is_break(&self, index: usize) -> bool {
        self.values.get(index).is_some_and(|v| v % 2 == 1)
    }

    /// Indices of characters followed by a break
    pub fn breaks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.values.len()).filter(|&i| self.is_break(i))
    }

    /// Non-standard replacement of the break after character `index`
    pub fn replacement(&self, index: usize) -> Option<&Replacement> {
        self.replacements.get(index).and_then(Option::as_ref)
    }

    /// True when at least one break changes the spelling
    pub fn has_substitution(&self) -> bool {
        self.breaks().any(|i| self.replacement(i).is_some())
    }

    /// The word with [`BREAK_MARKER`] at every break
    pub fn hyphenated(&self) -> &[u8] {
        &self.hyphenated
    }

    /// Character counts of the pieces between breaks
    ///
    /// The counts always sum to [`len`](Self::len). The empty word has no
    /// pieces.
    pub fn chunk_lengths(&self) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut count = 0;
        for index in 0..self.values.len() {
            count += 1;
            if self.is_break(index) {
                lengths.push(count);
                count = 0;
            }
        }
        if count > 0 {
            lengths.push(count);
        }
        lengths
    }
}

/// Render the hyphenated form of `word`
fn render(
    word: &[u8],
    units: &[Range<usize>],
    values: &[u8],
    replacements: &[Option<Replacement>],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(word.len() + units.len());
    let mut starts = vec![0usize; units.len()];
    // Units before `floor` were consumed by a replacement
    let mut floor = 0;
    let mut index = 0;

    while index < units.len() {
        starts[index] = out.len();
        out.extend_from_slice(&word[units[index].clone()]);

        if values[index] % 2 == 1 {
            let replacement = replacements[index]
                .as_ref()
                .filter(|r| r.span_start(index) >= floor && r.pos >= 1);
            if let Some(replacement) = replacement {
                let first = replacement.span_start(index);
                out.truncate(starts[first]);
                out.extend_from_slice(&replacement.text);
                index = first + replacement.cut;
                floor = index;
                continue;
            }
            out.push(BREAK_MARKER);
        }
        index += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::unit_ranges;

    fn build(word: &str, values: Vec<u8>, replacements: Vec<Option<Replacement>>) -> Hyphenation {
        let units = unit_ranges(word.as_bytes(), true);
        Hyphenation::new(word.as_bytes(), &units, values, replacements)
    }

    #[test]
    fn test_render_standard_breaks() {
        let hyphenation = build(
            "hyphenation",
            vec![0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0],
            vec![None; 11],
        );
        assert_eq!(hyphenation.hyphenated(), b"hy=phen=a=tion");
        assert_eq!(hyphenation.chunk_lengths(), vec![2, 4, 1, 4]);
        assert_eq!(hyphenation.vector(), "01000110000");
    }

    #[test]
    fn test_render_replacement() {
        let mut replacements = vec![None; 10];
        replacements[4] = Some(Replacement {
            text: b"sz=sz".to_vec(),
            pos: 1,
            cut: 3,
        });
        let hyphenation = build("kisasszony", vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0], replacements);
        assert_eq!(hyphenation.hyphenated(), b"kisasz=szony");
        assert!(hyphenation.has_substitution());
    }

    #[test]
    fn test_even_value_ignores_replacement() {
        let mut replacements = vec![None; 3];
        replacements[1] = Some(Replacement {
            text: b"x=y".to_vec(),
            pos: 1,
            cut: 1,
        });
        let hyphenation = build("abc", vec![0, 2, 0], replacements);
        assert_eq!(hyphenation.hyphenated(), b"abc");
        assert!(!hyphenation.has_substitution());
    }

    #[test]
    fn test_multibyte_render() {
        let hyphenation = build("répétition", vec![0, 0, 0, 1, 0, 0, 0, 0, 0, 0], vec![None; 10]);
        assert_eq!(hyphenation.hyphenated(), "répé=tition".as_bytes());
        assert_eq!(hyphenation.chunk_lengths(), vec![4, 6]);
        assert_eq!(hyphenation.breaks().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_empty_word() {
        let hyphenation = build("", vec![], vec![]);
        assert!(hyphenation.is_empty());
        assert!(hyphenation.hyphenated().is_empty());
        assert!(hyphenation.chunk_lengths().is_empty());
    }
}
