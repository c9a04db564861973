//! Benchmarks for heap construction, heap sort and queue throughput

use binheap::heap::{heapify, MinOrder};
use binheap::samples::{self, Shape};
use binheap::{heap_sort, PriorityQueue};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

const SEED: u64 = 0x5eed;

/// Floyd construction versus repeated insertion
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &size in &[64usize, 1024, 16384] {
        let data = samples::shuffled(size, Some(SEED));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("heapify_{}", size), |b| {
            b.iter_batched(
                || data.clone(),
                |mut v| {
                    heapify(&mut v, size, &MinOrder);
                    black_box(v)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("from_parts_{}", size), |b| {
            b.iter_batched(
                || (data.clone(), data.clone()),
                |(p, v)| black_box(PriorityQueue::from_parts(p, v)),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("enqueue_{}", size), |b| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_capacity(size);
                for &x in &data {
                    let _ = queue.enqueue(x, x);
                }
                black_box(queue)
            })
        });
    }

    group.finish();
}

/// Heap sort on each sample shape
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sort");
    let size = 10_000;
    group.throughput(Throughput::Elements(size as u64));

    for shape in Shape::ALL {
        let data = shape.generate(size, Some(SEED));
        group.bench_function(shape.label(), |b| {
            b.iter_batched(
                || data.clone(),
                |mut v| {
                    heap_sort(&mut v);
                    black_box(v)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Full drain of a bulk-built queue
fn bench_drain(c: &mut Criterion) {
    let data = samples::shuffled(4096, Some(SEED));

    c.bench_function("dequeue_all_4096", |b| {
        b.iter_batched(
            || PriorityQueue::from_parts(data.clone(), data.clone()).unwrap(),
            |mut queue| {
                while let Ok(x) = queue.dequeue() {
                    black_box(x);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_build, bench_sort, bench_drain);
criterion_main!(benches);
