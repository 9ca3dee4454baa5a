// benches/bit_ops.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use packed_bit_sequence::PackedBitSequence;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn create_sequence(size: usize) -> PackedBitSequence {
    let mut rng = StdRng::seed_from_u64(size as u64);
    PackedBitSequence::random_with(size, &mut rng)
}

fn bench_get(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("get");
    for size in sizes {
        let seq = create_sequence(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut ones = 0usize;
                for i in 0..seq.len() {
                    ones += black_box(seq.get(i).unwrap()) as usize;
                }
                ones
            });
        });
    }
    group.finish();
}

fn bench_count_ones(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("count_ones");
    for size in sizes {
        let seq = create_sequence(size);

        group.bench_with_input(BenchmarkId::new("popcount", size), &size, |b, _| {
            b.iter(|| black_box(seq.count_ones()));
        });
        group.bench_with_input(BenchmarkId::new("pattern", size), &size, |b, _| {
            b.iter(|| black_box(seq.count("1").unwrap()));
        });
    }
    group.finish();
}

fn bench_bitwise(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("xor");
    for size in sizes {
        let a = create_sequence(size);
        let b_seq = create_sequence(size + 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(&a ^ &b_seq));
        });
    }
    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000];

    let mut group = c.benchmark_group("insert_front");
    for size in sizes {
        let seq = create_sequence(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut s = seq.clone();
                s.insert(0, 1).unwrap();
                black_box(s)
            });
        });
    }
    group.finish();
}

fn bench_extend(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000];

    let mut group = c.benchmark_group("extend");
    for size in sizes {
        let tail = create_sequence(size);

        group.bench_with_input(BenchmarkId::new("aligned", size), &size, |b, _| {
            b.iter(|| {
                let mut s = PackedBitSequence::zeros(64);
                s.extend(&tail).unwrap();
                black_box(s)
            });
        });
        group.bench_with_input(BenchmarkId::new("unaligned", size), &size, |b, _| {
            b.iter(|| {
                let mut s = PackedBitSequence::zeros(63);
                s.extend(&tail).unwrap();
                black_box(s)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_get,
    bench_count_ones,
    bench_bitwise,
    bench_insert_front,
    bench_extend
);
criterion_main!(benches);
