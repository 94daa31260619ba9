use langmark_core::{Document, Segment, SegmentError, SegmentRecord, TagSet, TextRange, resolve};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn records(items: &[(&str, &str)]) -> Vec<SegmentRecord> {
    items
        .iter()
        .map(|(tag, text)| SegmentRecord::new(*tag, *text))
        .collect()
}

fn document(items: &[(&str, &str)]) -> Document {
    Document::from_records(Arc::new(TagSet::default()), records(items)).unwrap()
}

#[test]
fn test_retag_prefix_of_seed_segment() {
    let doc = Document::with_default_tags("Hello world");
    let english = doc.tag_set().tag("inglés").unwrap();

    let doc = doc.retag(TextRange::new(0, 5), english).unwrap();

    assert_eq!(
        doc.export(),
        records(&[("inglés", "Hello"), ("generic", " world")])
    );
}

#[test]
fn test_non_adjacent_same_tag_segments_stay_separate() {
    let doc = document(&[("inglés", "Hello"), ("generic", " world")]);
    let english = doc.tag_set().tag("inglés").unwrap();

    let doc = doc.retag(TextRange::new(6, 11), english).unwrap();

    assert_eq!(
        doc.export(),
        records(&[("inglés", "Hello"), ("generic", " "), ("inglés", "world")])
    );
}

#[test]
fn test_full_coverage_merges_across_segments() {
    let doc = document(&[("generic", "abc"), ("francés", "def")]);
    let french = doc.tag_set().tag("francés").unwrap();

    let doc = doc.retag(TextRange::new(0, 6), french).unwrap();

    assert_eq!(doc.export(), records(&[("francés", "abcdef")]));
}

#[test]
fn test_resolve_first_occurrence_and_not_found() {
    assert_eq!(resolve("Hello world", "world").unwrap(), TextRange::new(6, 11));
    assert!(matches!(
        resolve("Hello world", "xyz"),
        Err(SegmentError::NotFound)
    ));
}

#[test]
fn test_exact_segment_span_collapses_into_neighbours() {
    let doc = document(&[("inglés", "one "), ("generic", "two"), ("inglés", " three")]);
    let english = doc.tag_set().tag("inglés").unwrap();
    let german = doc.tag_set().tag("alemán").unwrap();

    let merged = doc.retag(TextRange::new(4, 7), english).unwrap();
    assert_eq!(merged.export(), records(&[("inglés", "one two three")]));

    let replaced = doc.retag(TextRange::new(4, 7), german).unwrap();
    assert_eq!(
        replaced.export(),
        records(&[("inglés", "one "), ("alemán", "two"), ("inglés", " three")])
    );
}

#[test]
fn test_range_inside_one_segment_splits_in_three() {
    let doc = Document::with_default_tags("Bonjour tout le monde");
    let french = doc.tag_set().tag("francés").unwrap();

    let doc = doc.retag(TextRange::new(8, 12), french).unwrap();

    assert_eq!(
        doc.export(),
        records(&[
            ("generic", "Bonjour "),
            ("francés", "tout"),
            ("generic", " le monde")
        ])
    );
}

#[test]
fn test_range_spanning_three_segments() {
    let doc = document(&[("español", "uno"), ("italiano", "due"), ("portugués", "três")]);
    let generic = doc.tag_set().generic();

    let doc = doc.retag(TextRange::new(2, 7), generic).unwrap();

    assert_eq!(
        doc.export(),
        records(&[("español", "un"), ("generic", "oduet"), ("portugués", "rês")])
    );
}

#[test]
fn test_multibyte_text_uses_char_offsets() {
    let doc = Document::with_default_tags("¿Qué tal? Très bien");
    let spanish = doc.tag_set().tag("español").unwrap();
    let french = doc.tag_set().tag("francés").unwrap();

    let doc = doc.retag(TextRange::new(0, 9), spanish).unwrap();
    let range = doc.resolve("Très bien").unwrap();
    assert_eq!(range, TextRange::new(10, 19));
    let doc = doc.retag(range, french).unwrap();

    assert_eq!(
        doc.export(),
        records(&[
            ("español", "¿Qué tal?"),
            ("generic", " "),
            ("francés", "Très bien")
        ])
    );
}

#[test]
fn test_empty_and_inverted_ranges_are_noops() {
    let doc = document(&[("inglés", "Hello"), ("generic", " world")]);
    let german = doc.tag_set().tag("alemán").unwrap();

    for k in 0..=doc.char_count() {
        assert_eq!(doc.retag(TextRange::new(k, k), german).unwrap(), doc);
    }
    assert_eq!(doc.retag(TextRange::new(7, 2), german).unwrap(), doc);
}

#[test]
fn test_out_of_bounds_range_is_rejected() {
    let doc = Document::with_default_tags("abc");
    let english = doc.tag_set().tag("inglés").unwrap();

    let err = doc.retag(TextRange::new(1, 4), english).unwrap_err();
    assert!(matches!(
        err,
        SegmentError::InvalidRange {
            start: 1,
            end: 4,
            len: 3
        }
    ));
    assert_eq!(err.to_string(), "invalid range 1..4: document has 3 characters");

    assert!(matches!(
        doc.retag(TextRange::new(9, 9), english),
        Err(SegmentError::InvalidRange { .. })
    ));
}

#[test]
fn test_unknown_tag_is_rejected() {
    let small = Arc::new(TagSet::new("generic", ["en"]).unwrap());
    let foreign = TagSet::default().tag("portugués").unwrap();
    let mut doc = Document::new(small.clone(), "abc");

    assert!(matches!(
        doc.apply(TextRange::new(0, 1), foreign),
        Err(SegmentError::UnknownTag(tag)) if tag == foreign
    ));
    assert!(matches!(
        Document::from_segments(small, vec![Segment::new(foreign, "x")]),
        Err(SegmentError::UnknownTag(_))
    ));
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_empty_document_rejects_any_nonempty_range() {
    let doc = Document::with_default_tags("");
    let english = doc.tag_set().tag("inglés").unwrap();

    assert_eq!(doc.retag(TextRange::new(0, 0), english).unwrap(), doc);
    assert!(matches!(
        doc.retag(TextRange::new(0, 1), english),
        Err(SegmentError::InvalidRange { len: 0, .. })
    ));
}
