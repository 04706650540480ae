use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use verse_export_engine::{
    MarkdownConverter, RecordingSink, RunStyle, Verse, VerseSanitizer, segment,
};

fn generate_verses(count: u32) -> Vec<Verse> {
    // Every tenth verse is skipped so the segmenter has gaps to find
    (1..=count)
        .filter(|nr| nr % 10 != 0)
        .map(|nr| {
            Verse::new(
                "Ps",
                nr,
                nr / 30 + 1,
                nr % 30 + 1,
                format!("<span>Praise ye the LORD {nr}</span><div>[{nr}]</div>"),
            )
        })
        .collect()
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    for count in [100, 1_000, 10_000] {
        let verses = generate_verses(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &verses, |b, verses| {
            b.iter(|| std::hint::black_box(segment(std::hint::black_box(verses), None)));
        });
    }

    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    let sanitizer = VerseSanitizer::default();
    let markup = "<span>Blessed is the man</span><note/><div class=\"footnote\">that walketh not</div> in the counsel";

    c.bench_function("sanitize_verse", |b| {
        b.iter(|| std::hint::black_box(sanitizer.sanitize(std::hint::black_box(markup))));
    });
}

fn bench_convert_note(c: &mut Criterion) {
    let converter = MarkdownConverter::default();
    let note = "## Psalm 1\n\nThe **righteous** and the *wicked*, see `Jer 17:8`.\n\n- tree\n- chaff\n\n> [source](https://example.org)\n".repeat(10);

    c.bench_function("convert_note", |b| {
        b.iter(|| {
            let mut sink = RecordingSink::new();
            converter
                .convert(std::hint::black_box(&note), &RunStyle::default(), &mut sink)
                .unwrap();
            std::hint::black_box(sink.into_events());
        });
    });
}

criterion_group!(benches, bench_segment, bench_sanitize, bench_convert_note);
criterion_main!(benches);
