//! Hyphenation patterns and the Liang-style matcher
//!
//! A pattern such as `hy3ph` is stored under its letters (`hyph`) together
//! with one value per gap between letters, edges included. Matching slides
//! every pattern over the word framed by `.` edge markers and keeps the
//! largest value seen for each gap; odd values are breaks.

use crate::hyphenation::Replacement;
use crate::utf8::{count_units, unit_ranges};
use smallvec::{smallvec, SmallVec};
use std::collections::HashMap;
use std::ops::Range;

/// Replacement attached to a non-standard pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PatternReplacement {
    /// Replacement text, `=` marks the break
    text: Vec<u8>,
    /// Offset of the first replaced letter within the pattern letters,
    /// edge dots included
    offset: usize,
    /// Number of replaced letters
    cut: usize,
}

impl PatternReplacement {
    /// Position the replacement for a match starting at `match_start` that
    /// sets gap `gap` of a segment of `len` units.
    ///
    /// Both indices are in framed coordinates where unit 0 is the leading
    /// edge dot. Returns `None` when the replaced span leaves the segment or
    /// does not contain the unit before the break.
    fn place(&self, match_start: usize, gap: usize, len: usize) -> Option<Replacement> {
        let first = (match_start + self.offset).checked_sub(1)?;
        if first + self.cut > len {
            return None;
        }
        let before_break = gap.checked_sub(2)?;
        if before_break < first || before_break >= first + self.cut {
            return None;
        }
        Some(Replacement {
            text: self.text.clone(),
            pos: before_break - first + 1,
            cut: self.cut,
        })
    }
}

/// A single parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern {
    /// One value per gap, `letters + 1` entries
    values: SmallVec<[u8; 8]>,
    replacement: Option<PatternReplacement>,
}

/// Values and replacements computed for one segment of a word
#[derive(Debug, Clone, Default)]
pub(crate) struct SegmentBreaks {
    /// Value of the gap after each unit
    pub values: Vec<u8>,
    /// Replacement for the gap after each unit
    pub replacements: Vec<Option<Replacement>>,
}

/// All patterns of one level, keyed by their letters
#[derive(Debug, Clone, Default)]
pub(crate) struct PatternSet {
    patterns: HashMap<Vec<u8>, Pattern>,
    /// Longest pattern, in units
    max_len: usize,
}

impl PatternSet {
    /// Parse and add a pattern token. A later definition of the same
    /// letters replaces the earlier one.
    pub fn insert(&mut self, token: &[u8], utf8: bool) -> Result<(), &'static str> {
        let (letters, units, pattern) = parse_pattern(token, utf8)?;
        self.max_len = self.max_len.max(units);
        self.patterns.insert(letters, pattern);
        Ok(())
    }

    /// Number of distinct patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Compute break values for the units `units` of `word`
    pub fn apply(&self, word: &[u8], units: &[Range<usize>]) -> SegmentBreaks {
        let len = units.len();

        // Framed word: edge dot, units with digits turned into dots, edge dot
        let mut framed = Vec::with_capacity(units.iter().map(|r| r.len()).sum::<usize>() + 2);
        let mut bounds = Vec::with_capacity(len + 3);
        bounds.push(0);
        framed.push(b'.');
        for range in units {
            bounds.push(framed.len());
            let unit = &word[range.clone()];
            if unit.len() == 1 && unit[0].is_ascii_digit() {
                framed.push(b'.');
            } else {
                framed.extend_from_slice(unit);
            }
        }
        bounds.push(framed.len());
        framed.push(b'.');
        bounds.push(framed.len());

        let total = len + 2;
        let mut gaps = vec![0u8; total + 1];
        let mut placed: Vec<Option<Replacement>> = vec![None; total + 1];

        for start in 0..total {
            let longest = self.max_len.min(total - start);
            for span in 1..=longest {
                let key = &framed[bounds[start]..bounds[start + span]];
                let Some(pattern) = self.patterns.get(key) else {
                    continue;
                };
                for (k, &value) in pattern.values.iter().enumerate() {
                    let gap = start + k;
                    if value > gaps[gap] {
                        gaps[gap] = value;
                        placed[gap] = pattern
                            .replacement
                            .as_ref()
                            .and_then(|r| r.place(start, gap, len));
                    }
                }
            }
        }

        // The gap after word unit i sits between framed units i + 1 and i + 2
        SegmentBreaks {
            values: (0..len).map(|i| gaps[i + 2]).collect(),
            replacements: (0..len).map(|i| placed[i + 2].take()).collect(),
        }
    }
}

/// Parse one pattern token into its letters, unit count, and pattern
fn parse_pattern(token: &[u8], utf8: bool) -> Result<(Vec<u8>, usize, Pattern), &'static str> {
    let (body, suffix) = match token.iter().position(|&b| b == b'/') {
        Some(slash) => (&token[..slash], Some(&token[slash + 1..])),
        None => (token, None),
    };

    let mut letters = Vec::with_capacity(body.len());
    let mut letter_units: Vec<&[u8]> = Vec::new();
    let mut values: SmallVec<[u8; 8]> = smallvec![0];
    for range in unit_ranges(body, utf8) {
        let unit = &body[range];
        if unit.len() == 1 && unit[0].is_ascii_digit() {
            if let Some(last) = values.last_mut() {
                *last = unit[0] - b'0';
            }
        } else {
            letters.extend_from_slice(unit);
            letter_units.push(unit);
            values.push(0);
        }
    }
    if letter_units.is_empty() {
        return Err("pattern has no letters");
    }

    let replacement = match suffix {
        Some(suffix) => Some(parse_replacement(suffix, &letter_units, utf8)?),
        None => None,
    };

    let units = letter_units.len();
    Ok((letters, units, Pattern { values, replacement }))
}

/// Parse `text[,start,cut]` following the `/` of a non-standard pattern
fn parse_replacement(
    suffix: &[u8],
    letter_units: &[&[u8]],
    utf8: bool,
) -> Result<PatternReplacement, &'static str> {
    let mut parts = suffix.splitn(3, |&b| b == b',');
    let text = parts.next().unwrap_or_default().to_vec();
    if text.is_empty() {
        return Err("empty replacement");
    }
    if !text.contains(&b'=') {
        return Err("replacement has no '=' break marker");
    }
    if count_units(&text, utf8) < 2 {
        return Err("replacement is too short");
    }

    let leading = usize::from(letter_units.first() == Some(&&b"."[..]));
    let trailing = usize::from(letter_units.len() > leading && letter_units.last() == Some(&&b"."[..]));
    let inner = letter_units.len() - leading - trailing;

    let (start, cut) = match (parts.next(), parts.next()) {
        (None, _) => (1, inner),
        (Some(start), Some(cut)) => (parse_number(start)?, parse_number(cut)?),
        (Some(_), None) => return Err("replacement needs both start and cut"),
    };
    if start == 0 {
        return Err("replacement start must be at least 1");
    }
    if cut == 0 {
        return Err("replacement must cut at least one letter");
    }
    let offset = leading + start - 1;
    if offset + cut > leading + inner {
        return Err("replacement range exceeds the pattern");
    }

    Ok(PatternReplacement { text, offset, cut })
}

fn parse_number(bytes: &[u8]) -> Result<usize, &'static str> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .ok_or("replacement position is not a number")
}
