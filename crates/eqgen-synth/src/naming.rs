//! Local identifier picking.
//!
//! The typed copy of `obj` is named after the most specific word of the
//! containing type's name: `CustomerId` yields `id`, `UIElement` yields
//! `element`. Parts are scanned from the end; the first one starting with a
//! letter wins. Names with no such part fall back to `v`.

/// Fallback local name when no word part starts with a letter.
pub const FALLBACK_LOCAL_NAME: &str = "v";

/// Byte range of one word part inside an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

/// Splits identifiers into word parts.
pub trait WordSegmenter {
    /// Word parts of `identifier`, left to right, as byte spans.
    fn word_parts(&self, identifier: &str) -> Vec<TextSpan>;
}

/// Word breaking on casing, digit and punctuation boundaries.
///
/// - `CustomerId` -> `Customer`, `Id`
/// - `UIElement` -> `UI`, `Element`
/// - `Vector3` -> `Vector`, `3`
/// - `snake_case` -> `snake`, `case`
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseSegmenter;

impl WordSegmenter for CamelCaseSegmenter {
    fn word_parts(&self, identifier: &str) -> Vec<TextSpan> {
        let chars: Vec<(usize, char)> = identifier.char_indices().collect();
        let byte_at = |i: usize| chars.get(i).map_or(identifier.len(), |&(b, _)| b);

        let mut parts = Vec::new();
        let mut start = 0;
        while start < chars.len() {
            let Some((word_start, word_end)) = next_word(&chars, start) else {
                break;
            };
            parts.push(TextSpan::new(byte_at(word_start), byte_at(word_end)));
            start = word_end;
        }
        parts
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

fn all_punctuation(chars: &[(usize, char)]) -> bool {
    chars.iter().all(|&(_, c)| is_punctuation(c))
}

/// Find the next word starting at char index `word_start`.
/// Returns char indices `(start, end)`.
fn next_word(chars: &[(usize, char)], mut word_start: usize) -> Option<(usize, usize)> {
    for i in word_start + 1..chars.len() {
        let prev = chars[i - 1].1;
        let current = chars[i].1;

        let boundary = is_punctuation(prev)
            || is_punctuation(current)
            || prev.is_numeric() != current.is_numeric()
            || (current.is_uppercase() && !prev.is_uppercase())
            || starts_capitalized_word(chars, i, word_start);

        if boundary {
            if !all_punctuation(&chars[word_start..i]) {
                return Some((word_start, i));
            }
            word_start = i;
        }
    }

    if all_punctuation(&chars[word_start..]) {
        None
    } else {
        Some((word_start, chars.len()))
    }
}

/// `UIElement`: the `E` starts a new word because it is followed by a
/// lower-case letter and everything before it in the current word is
/// upper-case. `Foo` does not split at `o`.
fn starts_capitalized_word(chars: &[(usize, char)], index: usize, word_start: usize) -> bool {
    if index == word_start || index + 1 >= chars.len() {
        return false;
    }
    chars[index].1.is_uppercase()
        && chars[index + 1].1.is_lowercase()
        && chars[word_start..index].iter().all(|&(_, c)| c.is_uppercase())
}

/// Lower the first character. An all-capitals word (`HTML`, `ID`) is
/// lowered entirely, so `CustomerID` picks `id` rather than the `iD` that
/// first-letter lowering alone would give.
pub fn to_camel_case(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let is_acronym = word.chars().nth(1).is_some()
        && word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .all(|c| !c.is_alphabetic() || c.is_uppercase());
    if is_acronym {
        return word.to_lowercase();
    }

    first.to_lowercase().chain(chars).collect()
}

/// Pick the local variable name for the typed copy of `obj`.
pub fn pick_local_name(type_name: &str, segmenter: &dyn WordSegmenter) -> String {
    segmenter
        .word_parts(type_name)
        .into_iter()
        .rev()
        .map(|span| span.slice(type_name))
        .find(|part| part.chars().next().is_some_and(char::is_alphabetic))
        .map(to_camel_case)
        .unwrap_or_else(|| FALLBACK_LOCAL_NAME.to_string())
}
