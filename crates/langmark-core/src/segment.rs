//! Tagged text segments.

use langmark_core_lang::Tag;

/// A contiguous run of text carrying one tag.
///
/// Segments inside a [`Document`](crate::Document) are never empty and no two neighbours share a
/// tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Tag applied to the whole run.
    pub tag: Tag,
    /// Text of the run.
    pub text: String,
}

impl Segment {
    /// Create a segment.
    pub fn new(tag: Tag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }

    /// Create a generic (untagged) segment.
    pub fn generic(text: impl Into<String>) -> Self {
        Self::new(Tag::GENERIC, text)
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the segment holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Characters `[lo, hi)` of the text, by char offset. Offsets past the end are clamped.
    pub(crate) fn slice_chars(&self, lo: usize, hi: usize) -> &str {
        let byte_at = |char_offset: usize| {
            self.text
                .char_indices()
                .nth(char_offset)
                .map(|(b, _)| b)
                .unwrap_or(self.text.len())
        };
        let start = byte_at(lo);
        let end = byte_at(hi).max(start);
        &self.text[start..end]
    }
}
