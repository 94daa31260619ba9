//! Randomized checks of the retag invariants against a per-character reference model.

use langmark_core::{Document, Segment, Tag, TagSet, TextRange, is_canonical};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

const ALPHABET: &[char] = &['a', 'b', ' ', 'ñ', 'é', 'ü', '語', '🙂'];

fn all_tags(tags: &TagSet) -> Vec<Tag> {
    tags.iter().map(|(tag, _)| tag).collect()
}

fn random_document(rng: &mut StdRng, tags: &Arc<TagSet>) -> Document {
    let choices = all_tags(tags);
    let pieces = rng.gen_range(0..8);
    let segments: Vec<Segment> = (0..pieces)
        .map(|_| {
            let len = rng.gen_range(0..6);
            let text: String = (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
                .collect();
            Segment::new(choices[rng.gen_range(0..choices.len())], text)
        })
        .collect();
    Document::from_segments(tags.clone(), segments).unwrap()
}

fn random_range(rng: &mut StdRng, len: usize) -> TextRange {
    TextRange::new(rng.gen_range(0..=len), rng.gen_range(0..=len))
}

/// One tag per character.
fn per_char_tags(doc: &Document) -> Vec<Tag> {
    doc.segments()
        .iter()
        .flat_map(|s| std::iter::repeat_n(s.tag, s.char_len()))
        .collect()
}

#[test]
fn test_retag_matches_reference_model() {
    let tags = Arc::new(TagSet::default());
    let choices = all_tags(&tags);
    let mut rng = StdRng::seed_from_u64(0x5eed_1a6);

    for _ in 0..2_000 {
        let doc = random_document(&mut rng, &tags);
        let range = random_range(&mut rng, doc.char_count());
        let tag = choices[rng.gen_range(0..choices.len())];

        let out = doc.retag(range, tag).unwrap();

        let mut expected = per_char_tags(&doc);
        for slot in expected.iter_mut().take(range.end).skip(range.start) {
            *slot = tag;
        }

        assert_eq!(out.full_text(), doc.full_text(), "coverage for {range}");
        assert_eq!(per_char_tags(&out), expected, "tags for {range}");
        assert!(is_canonical(out.segments()), "canonical for {range}");
    }
}

#[test]
fn test_retag_is_idempotent() {
    let tags = Arc::new(TagSet::default());
    let choices = all_tags(&tags);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1_000 {
        let doc = random_document(&mut rng, &tags);
        let range = random_range(&mut rng, doc.char_count());
        let tag = choices[rng.gen_range(0..choices.len())];

        let once = doc.retag(range, tag).unwrap();
        let twice = once.retag(range, tag).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_empty_range_is_identity() {
    let tags = Arc::new(TagSet::default());
    let choices = all_tags(&tags);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let doc = random_document(&mut rng, &tags);
        let k = rng.gen_range(0..=doc.char_count());
        let tag = choices[rng.gen_range(0..choices.len())];
        assert_eq!(doc.retag(TextRange::new(k, k), tag).unwrap(), doc);
    }
}

#[test]
fn test_sequences_of_retags_stay_canonical() {
    let tags = Arc::new(TagSet::default());
    let choices = all_tags(&tags);
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..200 {
        let mut doc = random_document(&mut rng, &tags);
        let text = doc.full_text();
        let mut model = per_char_tags(&doc);

        for _ in 0..20 {
            let range = random_range(&mut rng, doc.char_count());
            let tag = choices[rng.gen_range(0..choices.len())];
            doc.apply(range, tag).unwrap();
            for slot in model.iter_mut().take(range.end).skip(range.start) {
                *slot = tag;
            }
        }

        assert_eq!(doc.full_text(), text);
        assert_eq!(per_char_tags(&doc), model);
        assert!(is_canonical(doc.segments()));
    }
}
