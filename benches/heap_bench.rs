//! Criterion benchmarks for the array-backed heaps
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//! ```
//!
//! Compares the plain heap against the indexed priority queue for push/pop
//! throughput, arbitrary removal, `decrease_key`, and cursor sweeps.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_heaps::{MinHeap, MinPriorityQueue};

/// Identified by `id`, ordered by `key`
#[derive(Clone, Copy)]
struct Entry {
    id: u32,
    key: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn by_key(a: &Entry, b: &Entry) -> Ordering {
    a.key.cmp(&b.key)
}

/// Deterministic scrambled keys
fn keys(n: u32) -> Vec<u32> {
    (0..n).map(|i| i.wrapping_mul(2_654_435_761) % (n * 4)).collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for &n in &[1_000u32, 10_000, 100_000] {
        let input = keys(n);
        group.bench_with_input(BenchmarkId::new("min_heap", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = MinHeap::new();
                for &key in input {
                    heap.push(key).unwrap();
                }
                while let Some(key) = heap.pop() {
                    black_box(key);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("priority_queue", n), &n, |b, &n| {
            b.iter(|| {
                let mut queue = MinPriorityQueue::new();
                for key in 0..n {
                    queue.push(key).unwrap();
                }
                while let Some(key) = queue.pop() {
                    black_box(key);
                }
            })
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    group.sample_size(20);

    for &n in &[1_000u32, 10_000] {
        let heap: MinHeap<u32> = (0..n).rev().collect();
        let queue: MinPriorityQueue<u32> = (0..n).rev().collect();

        // Linear scan against hashed lookup
        group.bench_with_input(BenchmarkId::new("min_heap", n), &heap, |b, heap| {
            b.iter(|| {
                let mut heap = heap.clone();
                for value in (0..n).step_by(2) {
                    black_box(heap.remove(&value));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("priority_queue", n), &queue, |b, queue| {
            b.iter(|| {
                let mut queue = queue.clone();
                for value in (0..n).step_by(2) {
                    black_box(queue.remove(&value));
                }
            })
        });
    }

    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");

    for &n in &[1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut queue = MinPriorityQueue::with_comparator(by_key);
                for id in 0..n {
                    queue.push(Entry { id, key: u64::from(n) * 2 + u64::from(id) }).unwrap();
                }
                for id in 0..n {
                    queue.decrease_key(Entry { id, key: u64::from(n - id) }).unwrap();
                }
                black_box(queue.pop().map(|entry| entry.id))
            })
        });
    }

    group.finish();
}

fn bench_cursor_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_sweep");

    for &n in &[1_000u32, 10_000] {
        let queue: MinPriorityQueue<u32> = keys(n).into_iter().collect::<std::collections::BTreeSet<_>>().into_iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &queue, |b, queue| {
            b.iter(|| {
                let mut queue = queue.clone();
                let mut cursor = queue.cursor();
                while let Some(&value) = cursor.next(&queue).unwrap() {
                    if value % 3 == 0 {
                        cursor.remove(&mut queue).unwrap();
                    }
                }
                black_box(queue.len())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_remove,
    bench_decrease_key,
    bench_cursor_sweep
);
criterion_main!(benches);
