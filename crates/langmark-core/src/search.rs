//! Selection resolution.
//!
//! Hosts usually only know the *text* a user selected, not where it sits in the document. These
//! helpers map that text back to a [`TextRange`] over the logical text, using **character
//! offsets** (not byte offsets) for all public outputs.
//!
//! [`resolve`] addresses the leftmost occurrence only. When the selected text repeats, later
//! occurrences cannot be addressed through it; [`find_all`] lets a host detect that case.

use crate::error::SegmentError;
use crate::range::TextRange;
use regex::{Regex, RegexBuilder};

/// Options that control how selected text is matched against the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// If `true`, performs a case-sensitive search.
    pub case_sensitive: bool,
    /// If `true`, matches only whole words (alphanumeric and `_`).
    pub whole_word: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            whole_word: false,
        }
    }
}

#[derive(Debug)]
struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .cloned()
            .unwrap_or(self.text_len)
    }

    fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }

    fn char_at(&self, text: &str, char_offset: usize) -> Option<char> {
        if char_offset >= self.char_count() {
            return None;
        }
        let start = self.char_to_byte[char_offset];
        let end = self.char_to_byte[char_offset + 1];
        text.get(start..end)?.chars().next()
    }
}

fn compile_search_regex(query: &str, options: SearchOptions) -> Result<Regex, SegmentError> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(SegmentError::InvalidPattern)
}

fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

fn is_whole_word(text: &str, index: &CharIndex, m: TextRange) -> bool {
    if m.is_empty() {
        return false;
    }

    let before = if m.start == 0 {
        None
    } else {
        index.char_at(text, m.start - 1)
    };
    let after = index.char_at(text, m.end);

    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Resolve selected text to the range of its first (leftmost) exact occurrence in `full_text`.
///
/// Fails with [`SegmentError::NotFound`] if `selected` is empty or does not occur, e.g. when the
/// selection is stale after an edit.
pub fn resolve(full_text: &str, selected: &str) -> Result<TextRange, SegmentError> {
    resolve_with(full_text, selected, SearchOptions::default())
}

/// Like [`resolve`], with explicit matching options.
pub fn resolve_with(
    full_text: &str,
    selected: &str,
    options: SearchOptions,
) -> Result<TextRange, SegmentError> {
    if selected.is_empty() {
        return Err(SegmentError::NotFound);
    }

    let re = compile_search_regex(selected, options)?;
    let index = CharIndex::new(full_text);

    let mut start_char = 0usize;
    loop {
        let start_byte = index.char_to_byte(start_char);
        let Some(m) = re.find_at(full_text, start_byte) else {
            return Err(SegmentError::NotFound);
        };

        let candidate = TextRange::new(index.byte_to_char(m.start()), index.byte_to_char(m.end()));

        if options.whole_word && !is_whole_word(full_text, &index, candidate) {
            start_char = candidate.start + 1;
            if start_char >= index.char_count() {
                return Err(SegmentError::NotFound);
            }
            continue;
        }

        return Ok(candidate);
    }
}

/// Every non-overlapping occurrence of `selected` in `full_text`, left to right.
///
/// Returns an empty list if `selected` is empty.
pub fn find_all(
    full_text: &str,
    selected: &str,
    options: SearchOptions,
) -> Result<Vec<TextRange>, SegmentError> {
    if selected.is_empty() {
        return Ok(Vec::new());
    }

    let re = compile_search_regex(selected, options)?;
    let index = CharIndex::new(full_text);

    let matches = re
        .find_iter(full_text)
        .map(|m| TextRange::new(index.byte_to_char(m.start()), index.byte_to_char(m.end())))
        .filter(|candidate| !candidate.is_empty())
        .filter(|candidate| !options.whole_word || is_whole_word(full_text, &index, *candidate))
        .collect();

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_leftmost() {
        assert_eq!(
            resolve("la casa y la mesa", "la").unwrap(),
            TextRange::new(0, 2)
        );
    }

    #[test]
    fn test_resolve_counts_chars_not_bytes() {
        assert_eq!(
            resolve("añejo vino", "vino").unwrap(),
            TextRange::new(6, 10)
        );
    }

    #[test]
    fn test_resolve_empty_selection_is_not_found() {
        assert!(matches!(resolve("abc", ""), Err(SegmentError::NotFound)));
    }

    #[test]
    fn test_resolve_treats_selection_literally() {
        assert_eq!(resolve("a.b (c)", "(c)").unwrap(), TextRange::new(4, 7));
        assert!(matches!(resolve("axb", "a.b"), Err(SegmentError::NotFound)));
    }

    #[test]
    fn test_resolve_whole_word_skips_embedded_match() {
        let options = SearchOptions {
            case_sensitive: true,
            whole_word: true,
        };
        assert_eq!(
            resolve_with("sunday sun", "sun", options).unwrap(),
            TextRange::new(7, 10)
        );
        assert!(matches!(
            resolve_with("sunday", "sun", options),
            Err(SegmentError::NotFound)
        ));
    }

    #[test]
    fn test_find_all_case_insensitive() {
        let options = SearchOptions {
            case_sensitive: false,
            whole_word: false,
        };
        assert_eq!(
            find_all("Hola hola HOLA", "hola", options).unwrap(),
            vec![
                TextRange::new(0, 4),
                TextRange::new(5, 9),
                TextRange::new(10, 14)
            ]
        );
    }
}
