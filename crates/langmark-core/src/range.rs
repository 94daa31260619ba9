//! Half-open character ranges over the logical text.

use unicode_segmentation::UnicodeSegmentation;

/// A half-open range `[start, end)` of logical offsets.
///
/// Offsets count Unicode scalar values (`char`) from the start of the concatenated segment texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl TextRange {
    /// Create a new range. No ordering is enforced; see [`TextRange::is_empty`].
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in characters (0 for inverted ranges).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for zero-width and inverted ranges.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `offset` lies inside the range.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Non-empty intersection of two ranges.
    pub fn intersect(&self, other: &TextRange) -> Option<TextRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TextRange { start, end })
    }

    /// Returns `true` if the ranges share at least one offset.
    pub fn overlaps(&self, other: &TextRange) -> bool {
        self.intersect(other).is_some()
    }

    /// Widen the range so both ends fall on extended grapheme cluster boundaries of `text`.
    ///
    /// Ends beyond the text are left untouched so bounds checks still see them.
    pub fn snap_to_graphemes(&self, text: &str) -> TextRange {
        if self.is_empty() {
            return *self;
        }

        let mut start = self.start;
        let mut end = self.end;
        let mut offset = 0usize;

        for grapheme in text.graphemes(true) {
            let next = offset + grapheme.chars().count();
            if offset < self.start && self.start < next {
                start = offset;
            }
            if offset < self.end && self.end < next {
                end = next;
            }
            if next >= self.end {
                break;
            }
            offset = next;
        }

        TextRange { start, end }
    }
}

impl From<std::ops::Range<usize>> for TextRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<TextRange> for std::ops::Range<usize> {
    fn from(range: TextRange) -> Self {
        range.start..range.end
    }
}

impl std::fmt::Display for TextRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
