// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the procedural artwork pipeline: the demo pair rendering
//! and the per-frame composite the comparison widget rebuilds while dragging.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use uitrio::media::artwork;

fn bench_comparison_pair(c: &mut Criterion) {
    c.bench_function("render_comparison_pair", |b| {
        b.iter(|| artwork::comparison_pair(black_box((148, 92, 235))));
    });
}

fn bench_compose_split(c: &mut Criterion) {
    let (before, after) = artwork::comparison_pair((148, 92, 235));

    c.bench_function("compose_split_midway", |b| {
        b.iter(|| artwork::compose_split(black_box(&before), black_box(&after), black_box(62.5)));
    });
}

criterion_group!(benches, bench_comparison_pair, bench_compose_split);
criterion_main!(benches);
