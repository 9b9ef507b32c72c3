use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::PathBuf;
use tanabib_processor::io::load_records;
use tanabib_processor::{Exporter, WriteSink};

fn bench_export(c: &mut Criterion) {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root_dir = manifest_dir.parent().unwrap().parent().unwrap();

    // Load records
    let records = load_records(&root_dir.join("tests/fixtures/items.json"))
        .expect("failed to load items.json");

    // Repeat the fixture to get a library-sized run
    let library: Vec<_> = records.iter().cycle().take(500).cloned().collect();

    let exporter = Exporter::default();

    c.bench_function("Export fixture items (to lines)", |b| {
        b.iter(|| {
            let mut lines = Vec::new();
            exporter
                .export(black_box(records.clone()), &mut lines)
                .unwrap();
            lines
        })
    });

    c.bench_function("Export 500 items (to writer)", |b| {
        b.iter(|| {
            let mut sink = WriteSink::new(Vec::with_capacity(64 * 1024));
            exporter
                .export(black_box(library.clone()), &mut sink)
                .unwrap();
            sink.into_inner()
        })
    });
}

criterion_group!(benches, bench_export);
criterion_main!(benches);
