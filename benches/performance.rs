use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dynarray::{DynArray, PairSeq};

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 1000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_empty", size), size, |b, &size| {
            b.iter(|| {
                let mut array = DynArray::new();
                for i in 0..size {
                    black_box(array.push(i).unwrap());
                }
                black_box(array.len())
            });
        });
        group.bench_with_input(
            BenchmarkId::new("from_default_capacity", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut array = DynArray::with_default_capacity().unwrap();
                    for i in 0..size {
                        black_box(array.push(i).unwrap());
                    }
                    black_box(array.len())
                });
            },
        );
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("get_operations", size), size, |b, &size| {
            let array = DynArray::try_from_iter(0..size).unwrap();

            b.iter(|| {
                for i in 0..size {
                    black_box(array.get(i).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("full_iteration", size), size, |b, &size| {
            let array = DynArray::try_from_iter(0..size).unwrap();

            b.iter(|| {
                for value in black_box(&array) {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

fn bench_insert_remove_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("front", size), size, |b, &size| {
            b.iter(|| {
                let mut array = DynArray::new();
                for i in 0..size {
                    array.insert(0, i).unwrap();
                }
                for _ in 0..size {
                    black_box(array.remove_at(0).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_sort_descending(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [1000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("descending", size), size, |b, &size| {
            let mut state = 0x9e37_79b9u32;
            let unsorted: DynArray<u32> = (0..size)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    state
                })
                .collect();

            b.iter(|| {
                let mut array = unsorted.clone();
                array.sort_descending();
                black_box(array.len())
            });
        });
    }
    group.finish();
}

fn bench_pair_seq_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_seq");

    for pairs in [50, 500].iter() {
        group.throughput(Throughput::Elements(*pairs as u64));
        group.bench_with_input(BenchmarkId::new("pair_iteration", pairs), pairs, |b, &pairs| {
            let mut seq = PairSeq::new();
            for i in 0..pairs {
                seq.push(format!("key_{}", i), i).unwrap();
            }

            b.iter(|| {
                for (key, value) in black_box(seq.iter()) {
                    black_box((key, value));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_iterator_performance,
    bench_insert_remove_front,
    bench_sort_descending,
    bench_pair_seq_operations
);
criterion_main!(benches);
