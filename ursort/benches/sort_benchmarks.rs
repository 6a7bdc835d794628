//! Criterion benchmarks: radix sort vs the standard library sorts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use ursort::{Direction, RadixSorter, SortKind};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_i32(c: &mut Criterion) {
    let mut group = c.benchmark_group("i32");
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);

    for size in SIZES {
        let data: Vec<i32> = (0..size).map(|_| rng.gen()).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("radix", size), &data, |b, data| {
            let sorter = RadixSorter::ascending(SortKind::SignedInteger);
            b.iter(|| {
                let mut values = data.clone();
                sorter.sort(black_box(&mut values)).unwrap();
                values
            });
        });
        group.bench_with_input(BenchmarkId::new("std_unstable", size), &data, |b, data| {
            b.iter(|| {
                let mut values = data.clone();
                black_box(&mut values).sort_unstable();
                values
            });
        });
    }
    group.finish();
}

fn bench_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("f64");
    let mut rng = rand::rngs::StdRng::seed_from_u64(2);

    for size in SIZES {
        let data: Vec<f64> = (0..size).map(|_| rng.gen_range(-1.0e9..1.0e9)).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("radix", size), &data, |b, data| {
            let sorter = RadixSorter::ascending(SortKind::Float64);
            b.iter(|| {
                let mut values = data.clone();
                sorter.sort(black_box(&mut values)).unwrap();
                values
            });
        });
        group.bench_with_input(BenchmarkId::new("std_total_cmp", size), &data, |b, data| {
            b.iter(|| {
                let mut values = data.clone();
                black_box(&mut values).sort_unstable_by(f64::total_cmp);
                values
            });
        });
    }
    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);

    let width = 16;
    for size in SIZES {
        let words: Vec<String> = (0..size)
            .map(|_| {
                let len = rng.gen_range(3..width);
                (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
            })
            .collect();
        let slab = ursort::pad_to_records(&words, width).unwrap();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("fixed_width", size), &slab, |b, slab| {
            b.iter(|| {
                let mut records = slab.clone();
                ursort::sort_fixed_width(black_box(&mut records), width, Direction::Ascending)
                    .unwrap();
                records
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_i32, bench_f64, bench_strings);
criterion_main!(benches);
