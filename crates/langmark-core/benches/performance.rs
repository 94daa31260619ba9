use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use langmark_core::{Document, TagSet, TextRange};
use std::sync::Arc;

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} el rápido zorro marrón salta sobre the lazy dog (langmark)\n"
        ));
    }
    out
}

/// A document with `count` alternating tagged stripes.
fn striped_document(text: &str, count: usize) -> Document {
    let tags = Arc::new(TagSet::default());
    let english = tags.tag("inglés").unwrap();
    let mut doc = Document::new(tags, text);
    let stride = doc.char_count() / (count * 2);
    for i in 0..count {
        let start = i * 2 * stride;
        doc.apply(TextRange::new(start, start + stride), english)
            .unwrap();
    }
    doc
}

fn bench_retag_single_segment(c: &mut Criterion) {
    let text = large_text(10_000);
    let doc = Document::with_default_tags(&text);
    let french = doc.tag_set().tag("francés").unwrap();
    let mid = doc.char_count() / 2;

    c.bench_function("retag/single_segment_10k_lines", |b| {
        b.iter(|| {
            let out = doc
                .retag(black_box(TextRange::new(mid, mid + 40)), french)
                .unwrap();
            black_box(out.len());
        })
    });
}

fn bench_retag_many_segments(c: &mut Criterion) {
    let text = large_text(2_000);
    let doc = striped_document(&text, 1_000);
    let german = doc.tag_set().tag("alemán").unwrap();
    let len = doc.char_count();

    c.bench_function("retag/1000_stripes_cover_half", |b| {
        b.iter_batched(
            || doc.clone(),
            |mut doc| {
                doc.apply(TextRange::new(len / 4, len * 3 / 4), german)
                    .unwrap();
                black_box(doc.len());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_resolve_selection(c: &mut Criterion) {
    let text = large_text(10_000);
    let doc = Document::with_default_tags(&text);

    c.bench_function("resolve/late_selection_10k_lines", |b| {
        b.iter(|| black_box(doc.resolve(black_box("009999 el rápido")).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_retag_single_segment,
    bench_retag_many_segments,
    bench_resolve_selection
);
criterion_main!(benches);
