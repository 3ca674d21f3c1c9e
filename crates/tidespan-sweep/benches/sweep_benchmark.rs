// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tidespan_core::{TimeDelta, TimeRange, Timestamp};
use tidespan_sweep::{consolidate_sorted, exclude_sorted, overlap_of_sorted};

fn base_instant() -> Timestamp {
    "2022-02-13T00:00:00Z"
        .parse()
        .expect("base instant must parse")
}

/// Builds `count` sorted ranges where every other pair overlaps, so
/// consolidation merges roughly half of them.
fn overlapping_ranges(count: usize) -> Vec<TimeRange> {
    let base = base_instant();
    (0..count)
        .map(|i| {
            let start = base + TimeDelta::minutes(10 * i as i64);
            let length = if i % 2 == 0 { 15 } else { 5 };
            TimeRange::new(start, start + TimeDelta::minutes(length))
        })
        .collect()
}

/// Builds `count` sorted disjoint exclusions inside a single long range.
fn disjoint_ranges(count: usize) -> Vec<TimeRange> {
    let base = base_instant();
    (0..count)
        .map(|i| {
            let start = base + TimeDelta::minutes(10 * i as i64 + 2);
            TimeRange::new(start, start + TimeDelta::minutes(4))
        })
        .collect()
}

fn bench_consolidate(c: &mut Criterion) {
    let mut group = c.benchmark_group("consolidate_sorted");
    for size in [100, 1_000, 10_000] {
        let ranges = overlapping_ranges(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ranges, |b, ranges| {
            b.iter(|| consolidate_sorted(black_box(ranges), black_box(TimeDelta::zero())))
        });
    }
    group.finish();
}

fn bench_exclude(c: &mut Criterion) {
    let mut group = c.benchmark_group("exclude_sorted");
    for size in [100, 1_000, 10_000] {
        let exclusions = disjoint_ranges(size);
        let subject = TimeRange::new(
            base_instant(),
            base_instant() + TimeDelta::minutes(10 * size as i64 + 10),
        );
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &exclusions,
            |b, exclusions| b.iter(|| exclude_sorted(black_box(&subject), black_box(exclusions))),
        );
    }
    group.finish();
}

fn bench_overlap_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_of_sorted");
    for size in [100, 1_000, 10_000] {
        let a = overlapping_ranges(size);
        let b_side = disjoint_ranges(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(a, b_side),
            |b, (a, b_side)| b.iter(|| overlap_of_sorted(black_box(a), black_box(b_side))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_consolidate, bench_exclude, bench_overlap_join);
criterion_main!(benches);
