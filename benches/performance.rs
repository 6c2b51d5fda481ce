use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirtag::store::{TagEntry, TagEntryStore, decode, edit_distance, encode};

fn sample_store(size: usize) -> TagEntryStore {
    (0..size)
        .map(|i| TagEntry::new(format!("tag{i:03}"), format!("/home/user/projects/p{i}")))
        .collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("edit_distance_16x16", |b| {
        b.iter(|| edit_distance(black_box("configuration_a"), black_box("confguration_bb")))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let store = sample_store(100);
    c.bench_function("lookup_100_entries", |b| {
        b.iter(|| store.lookup(black_box("tga042")))
    });
}

fn bench_decode(c: &mut Criterion) {
    let text = encode(&sample_store(100));
    c.bench_function("decode_100_lines", |b| b.iter(|| decode(black_box(&text))));
}

criterion_group!(benches, bench_edit_distance, bench_lookup, bench_decode);
criterion_main!(benches);
