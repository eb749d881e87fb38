//! Criterion benchmarks for end-to-end instance generation.

use criterion::{criterion_group, criterion_main, Criterion};
use rddlgen_bench::{reference_navigation, reference_wildfire, stress_wildfire};
use rddlgen_domains::{seeded_rng, Domain, Navigation, ObfuscationMode, Wildfire};
use std::hint::black_box;

/// Benchmark: generate and render the 20x20 navigation instance.
fn bench_navigation_20(c: &mut Criterion) {
    let nav = Navigation::new(reference_navigation(ObfuscationMode::Normal));
    c.bench_function("navigation_20_render", |b| {
        b.iter(|| {
            let out = nav.generate("bench", &mut seeded_rng(42)).unwrap();
            black_box(rddlgen_rddl::render(&out.document));
        });
    });
}

/// Benchmark: the same instance through the obfuscation transform.
fn bench_navigation_20_obfuscated(c: &mut Criterion) {
    let nav = Navigation::new(reference_navigation(ObfuscationMode::Obfuscate));
    c.bench_function("navigation_20_obfuscated", |b| {
        b.iter(|| {
            let out = nav.generate("bench", &mut seeded_rng(42)).unwrap();
            black_box(rddlgen_rddl::render(&out.document));
        });
    });
}

/// Benchmark: 12x12 wildfire with omissions.
fn bench_wildfire_12(c: &mut Criterion) {
    let fire = Wildfire::new(reference_wildfire(ObfuscationMode::Normal));
    c.bench_function("wildfire_12_render", |b| {
        b.iter(|| {
            let out = fire.generate("bench", &mut seeded_rng(42)).unwrap();
            black_box(rddlgen_rddl::render(&out.document));
        });
    });
}

/// Benchmark: 100x100 wildfire document without rendering.
fn bench_wildfire_stress(c: &mut Criterion) {
    let fire = Wildfire::new(stress_wildfire());
    let mut group = c.benchmark_group("wildfire_stress");
    group.sample_size(20);
    group.bench_function("generate_100", |b| {
        b.iter(|| {
            let out = fire.generate("bench", &mut seeded_rng(42)).unwrap();
            black_box(out.document.non_fluents.len());
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_navigation_20,
    bench_navigation_20_obfuscated,
    bench_wildfire_12,
    bench_wildfire_stress,
);
criterion_main!(benches);
