//! Batch packer benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use semsync_protocol::BatchPacker;

/// Deterministic spread of small payload sizes.
fn payload_sizes(count: usize) -> Vec<usize> {
    (0..count).map(|i| 104 + (i % 64) * 8).collect()
}

/// Benchmark packing across input sizes.
fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for count in [1_000usize, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let packer = BatchPacker::new(65_536);
            let sizes = payload_sizes(count);

            b.iter(|| {
                let packed = packer.pack(black_box(sizes.clone()), |s| *s);
                black_box(packed);
            });
        });
    }
    group.finish();
}

/// Benchmark the degenerate case where every payload fills most of a batch.
fn bench_pack_large_payloads(c: &mut Criterion) {
    c.bench_function("pack_one_per_batch_1000", |b| {
        let packer = BatchPacker::new(65_536);
        let sizes = vec![40_000usize; 1_000];

        b.iter(|| {
            let packed = packer.pack(black_box(sizes.clone()), |s| *s);
            black_box(packed);
        });
    });
}

criterion_group!(benches, bench_pack, bench_pack_large_payloads);

criterion_main!(benches);
