//! The segment store.
//!
//! A [`Document`] is an ordered list of tagged [`Segment`]s plus the [`TagSet`] its tags come
//! from. The logical text of a document is the concatenation of its segment texts; retagging
//! changes tags only, never characters or their order.
//!
//! Invariants held after every public operation:
//!
//! - no segment is empty
//! - no two neighbouring segments share a tag
//!
//! # Example
//!
//! ```rust
//! use langmark_core::{Document, TextRange};
//!
//! let doc = Document::with_default_tags("Hello world");
//! let english = doc.tag_set().tag("inglés").unwrap();
//!
//! let doc = doc.retag(TextRange::new(0, 5), english).unwrap();
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.full_text(), "Hello world");
//! ```

use crate::error::SegmentError;
use crate::export::SegmentRecord;
use crate::range::TextRange;
use crate::retag;
use crate::search::{self, SearchOptions};
use crate::segment::Segment;
use langmark_core_lang::{Tag, TagSet};
use std::ops::Range;
use std::sync::Arc;

/// An ordered, canonical sequence of tagged segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    tags: Arc<TagSet>,
    segments: Vec<Segment>,
}

impl Document {
    /// Create a document holding `text` as a single generic segment.
    ///
    /// An empty `text` yields a document with no segments.
    pub fn new(tags: Arc<TagSet>, text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::new(tags.generic(), text)]
        };
        Self { tags, segments }
    }

    /// Create a document over the built-in tag set.
    pub fn with_default_tags(text: &str) -> Self {
        Self::new(Arc::new(TagSet::default()), text)
    }

    /// Build a document from an existing segment list (e.g. loaded by a host).
    ///
    /// Empty segments are dropped and neighbours with equal tags are merged. Fails if a segment
    /// carries a tag outside `tags`.
    pub fn from_segments(
        tags: Arc<TagSet>,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Result<Self, SegmentError> {
        let segments: Vec<Segment> = segments.into_iter().collect();
        if let Some(bad) = segments.iter().find(|s| !tags.contains(s.tag)) {
            return Err(SegmentError::UnknownTag(bad.tag));
        }
        Ok(Self {
            tags,
            segments: retag::canonicalize(segments),
        })
    }

    /// Build a document from exported records, mapping labels through `tags`.
    pub fn from_records(
        tags: Arc<TagSet>,
        records: impl IntoIterator<Item = SegmentRecord>,
    ) -> Result<Self, SegmentError> {
        let segments = records
            .into_iter()
            .map(|record| {
                tags.tag(&record.tag)
                    .map(|tag| Segment::new(tag, record.text))
                    .ok_or(SegmentError::UnknownLabel(record.tag))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_segments(tags, segments)
    }

    /// Parse a JSON array of `{"tag": ..., "text": ...}` records.
    pub fn from_json(tags: Arc<TagSet>, json: &str) -> Result<Self, SegmentError> {
        let records: Vec<SegmentRecord> = serde_json::from_str(json)?;
        Self::from_records(tags, records)
    }

    /// The tag set this document draws its tags from.
    pub fn tag_set(&self) -> &Arc<TagSet> {
        &self.tags
    }

    /// The segments, in document order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the document has no segments (and therefore no text).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Length of the logical text in characters.
    pub fn char_count(&self) -> usize {
        self.segments.iter().map(Segment::char_len).sum()
    }

    /// Characters carrying a non-generic tag.
    pub fn tagged_char_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| !s.tag.is_generic())
            .map(Segment::char_len)
            .sum()
    }

    /// The logical text: all segment texts concatenated in order.
    pub fn full_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Each segment with the logical range it covers.
    pub fn spans(&self) -> impl Iterator<Item = (TextRange, &Segment)> + '_ {
        retag::spans(&self.segments)
    }

    /// Index and span of the segment containing `offset`.
    pub fn segment_at(&self, offset: usize) -> Option<(usize, TextRange)> {
        self.spans()
            .enumerate()
            .find(|(_, (span, _))| span.contains(offset))
            .map(|(idx, (span, _))| (idx, span))
    }

    /// Tag of the character at `offset`.
    pub fn tag_at(&self, offset: usize) -> Option<Tag> {
        self.segment_at(offset).map(|(idx, _)| self.segments[idx].tag)
    }

    /// Indices of the segments whose span intersects `range`.
    pub fn affected_segments(&self, range: TextRange) -> Range<usize> {
        retag::affected_segments(&self.segments, range)
    }

    /// Resolve selected text to the range of its first occurrence in the logical text.
    pub fn resolve(&self, selected: &str) -> Result<TextRange, SegmentError> {
        search::resolve(&self.full_text(), selected)
    }

    /// Like [`Document::resolve`], with explicit matching options.
    pub fn resolve_with(
        &self,
        selected: &str,
        options: SearchOptions,
    ) -> Result<TextRange, SegmentError> {
        search::resolve_with(&self.full_text(), selected, options)
    }

    /// Check that `range` lies within the logical text. Inverted ranges pass; they are no-ops.
    pub fn check_range(&self, range: TextRange) -> Result<(), SegmentError> {
        let len = self.char_count();
        if range.start > len || range.end > len {
            return Err(SegmentError::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        Ok(())
    }

    /// Return a copy of this document with `range` retagged to `tag`.
    ///
    /// - Empty and inverted ranges return an unchanged copy.
    /// - Endpoints past the end of the text fail with [`SegmentError::InvalidRange`].
    /// - Tags outside the document's tag set fail with [`SegmentError::UnknownTag`].
    pub fn retag(&self, range: TextRange, tag: Tag) -> Result<Document, SegmentError> {
        let mut next = self.clone();
        next.apply(range, tag)?;
        Ok(next)
    }

    /// Retag `range` in place. Returns whether the segment list changed.
    ///
    /// On error the document is left untouched.
    pub fn apply(&mut self, range: TextRange, tag: Tag) -> Result<bool, SegmentError> {
        if !self.tags.contains(tag) {
            return Err(SegmentError::UnknownTag(tag));
        }
        self.check_range(range)?;
        if range.is_empty() {
            return Ok(false);
        }

        let segments = self.retagged_segments(range, tag);
        let changed = segments != self.segments;
        log::debug!(
            "retag {} -> {:?}: {} segments (changed: {})",
            range,
            self.tags.label(tag).unwrap_or_default(),
            segments.len(),
            changed
        );
        self.segments = segments;
        Ok(changed)
    }

    /// Split, overwrite and merge only around the affected segments.
    ///
    /// The window is widened by one untouched neighbour on each side so merges with segments
    /// that already carry `tag` happen; everything outside the window is copied as-is.
    fn retagged_segments(&self, range: TextRange, tag: Tag) -> Vec<Segment> {
        let affected = self.affected_segments(range);
        let lo = affected.start.saturating_sub(1);
        let hi = (affected.end + 1).min(self.segments.len());

        let window_offset: usize = self.segments[..lo].iter().map(Segment::char_len).sum();
        let local = TextRange::new(range.start - window_offset, range.end - window_offset);

        let mut out = Vec::with_capacity(self.segments.len() + 2);
        out.extend_from_slice(&self.segments[..lo]);
        out.extend(retag::canonicalize(retag::split_and_overwrite(
            &self.segments[lo..hi],
            local,
            tag,
        )));
        out.extend_from_slice(&self.segments[hi..]);
        out
    }

    /// Ordered `{tag, text}` snapshot using tag labels.
    pub fn export(&self) -> Vec<SegmentRecord> {
        self.segments
            .iter()
            .map(|s| SegmentRecord::new(self.tags.label(s.tag).unwrap_or_default(), &s.text))
            .collect()
    }

    /// Serialize [`Document::export`] as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, SegmentError> {
        let records = self.export();
        let json = if pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        Ok(json)
    }
}
