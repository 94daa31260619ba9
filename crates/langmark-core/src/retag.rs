//! Range retagging: resolve the affected segments, split them at the range boundaries, overwrite
//! the covered pieces, then merge neighbours that ended up with the same tag.
//!
//! All functions here are pure. [`Document`](crate::Document) composes them and owns validation.

use crate::range::TextRange;
use crate::segment::Segment;
use langmark_core_lang::Tag;
use std::ops::Range;

/// Pair every segment with the logical range it covers.
///
/// The ranges are produced by a single running-offset fold; nothing is cached.
pub fn spans(segments: &[Segment]) -> impl Iterator<Item = (TextRange, &Segment)> + '_ {
    segments.iter().scan(0usize, |offset, segment| {
        let start = *offset;
        *offset += segment.char_len();
        Some((TextRange::new(start, *offset), segment))
    })
}

/// Indices of the segments whose span intersects `range`.
///
/// For an empty range, or a range past the end of the text, the result is an empty index range
/// positioned after the segments that end at or before `range.start`.
pub fn affected_segments(segments: &[Segment], range: TextRange) -> Range<usize> {
    let mut first = None;
    let mut last = 0usize;
    let mut before = 0usize;

    for (idx, (span, _)) in spans(segments).enumerate() {
        if span.overlaps(&range) {
            first.get_or_insert(idx);
            last = idx + 1;
        } else if span.end <= range.start {
            before = idx + 1;
        } else if span.start >= range.end && !span.is_empty() {
            break;
        }
    }

    match first {
        Some(first) => first..last,
        None => before..before,
    }
}

/// Split the segments overlapping `range` at its boundaries and give the covered pieces `tag`.
///
/// Segments outside the range are copied as-is. Leading and trailing pieces keep their original
/// tag and are only emitted when non-empty. The result preserves the logical text but may contain
/// neighbours with equal tags; pass it through [`canonicalize`].
pub fn split_and_overwrite(segments: &[Segment], range: TextRange, tag: Tag) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len() + 2);

    for (span, segment) in spans(segments) {
        let Some(overlap) = span.intersect(&range) else {
            out.push(segment.clone());
            continue;
        };

        let len = span.len();
        let lo = overlap.start - span.start;
        let hi = overlap.end - span.start;

        if lo > 0 {
            out.push(Segment::new(segment.tag, segment.slice_chars(0, lo)));
        }
        out.push(Segment::new(tag, segment.slice_chars(lo, hi)));
        if hi < len {
            out.push(Segment::new(segment.tag, segment.slice_chars(hi, len)));
        }
    }

    out
}

/// Merge adjacent segments that share a tag and drop empty ones.
///
/// Single left-to-right pass; the output never has two neighbours with the same tag.
pub fn canonicalize<I>(segments: I) -> Vec<Segment>
where
    I: IntoIterator<Item = Segment>,
{
    let mut out: Vec<Segment> = Vec::new();
    let mut current: Option<Segment> = None;

    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        if let Some(acc) = current.as_mut() {
            if acc.tag == segment.tag {
                log::trace!(
                    "merging {} chars into adjacent {:?} segment",
                    segment.char_len(),
                    acc.tag
                );
                acc.text.push_str(&segment.text);
                continue;
            }
        }
        if let Some(done) = current.replace(segment) {
            out.push(done);
        }
    }

    if let Some(done) = current {
        out.push(done);
    }
    out
}

/// Returns `true` if no segment is empty and no two neighbours share a tag.
pub fn is_canonical(segments: &[Segment]) -> bool {
    segments.iter().all(|s| !s.is_empty()) && segments.windows(2).all(|w| w[0].tag != w[1].tag)
}
