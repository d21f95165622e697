//! Criterion benchmarks for whole-board generation.

use criterion::{criterion_group, criterion_main, Criterion};
use letragrama_bench::{
    reference_clues, reference_profile, stress_clues, stress_profile, SPANGRAM, STRESS_SPANGRAM,
};
use letragrama_engine::Generator;
use std::hint::black_box;

fn bench_locate_all_reference(c: &mut Criterion) {
    let mut generator = Generator::new(reference_profile(42)).unwrap();
    let clues = reference_clues();

    c.bench_function("locate_all_8x6", |b| {
        b.iter(|| {
            let report = generator.regenerate(SPANGRAM, &clues).unwrap();
            black_box(&report);
        });
    });
}

fn bench_locate_all_stress(c: &mut Criterion) {
    let mut generator = Generator::new(stress_profile(42)).unwrap();
    let clues = stress_clues();

    c.bench_function("locate_all_20x20", |b| {
        b.iter(|| {
            let report = generator.regenerate(STRESS_SPANGRAM, &clues).unwrap();
            black_box(&report);
        });
    });
}

fn bench_export(c: &mut Criterion) {
    let mut generator = Generator::new(reference_profile(42)).unwrap();
    generator.locate_all(SPANGRAM, reference_clues()).unwrap();

    c.bench_function("export_json_8x6", |b| {
        b.iter(|| {
            let json = generator.export("Cielo", "bench").unwrap().to_json().unwrap();
            black_box(json);
        });
    });
}

criterion_group!(
    benches,
    bench_locate_all_reference,
    bench_locate_all_stress,
    bench_export
);
criterion_main!(benches);
