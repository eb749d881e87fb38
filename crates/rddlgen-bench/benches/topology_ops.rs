//! Criterion micro-benchmarks for grid topology construction.

use criterion::{criterion_group, criterion_main, Criterion};
use rddlgen_space::{apply_omissions, axis_chain, neighbours, parse_omission, Connectivity, Grid};
use std::hint::black_box;

/// Benchmark: 8-connected neighbour relation of a 100x100 grid.
fn bench_neighbours_eight_10k(c: &mut Criterion) {
    c.bench_function("neighbours_eight_10k", |b| {
        b.iter(|| {
            let edges = neighbours(black_box(100), black_box(100), Connectivity::Eight);
            black_box(edges.len());
        });
    });
}

/// Benchmark: 4-connected neighbour relation of a 100x100 grid.
fn bench_neighbours_four_10k(c: &mut Criterion) {
    c.bench_function("neighbours_four_10k", |b| {
        b.iter(|| {
            let edges = neighbours(black_box(100), black_box(100), Connectivity::Four);
            black_box(edges.len());
        });
    });
}

/// Benchmark: axis chains of a 1000x1000 grid.
fn bench_axis_chain_1000(c: &mut Criterion) {
    c.bench_function("axis_chain_1000", |b| {
        b.iter(|| {
            let steps = axis_chain(black_box(1000), black_box(1000));
            black_box(steps.len());
        });
    });
}

/// Benchmark: remove 100 omissions from a 100x100 8-connected grid.
fn bench_apply_omissions_100(c: &mut Criterion) {
    let grid = Grid::plain(100, 100).unwrap();
    let omissions: Vec<_> = (1..=100)
        .map(|y| parse_omission(&grid, &format!("x50,y{y}->x51,y{y}")).unwrap())
        .collect();
    let edges = neighbours(100, 100, Connectivity::Eight);

    c.bench_function("apply_omissions_100", |b| {
        b.iter(|| {
            let outcome = apply_omissions(black_box(edges.clone()), &omissions);
            black_box(outcome.kept.len());
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_eight_10k,
    bench_neighbours_four_10k,
    bench_axis_chain_1000,
    bench_apply_omissions_100,
);
criterion_main!(benches);
