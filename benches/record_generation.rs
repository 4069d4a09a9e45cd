// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use guest_gallery::ui::guests::GalleryConfig;
use std::hint::black_box;

fn record_generation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_generation");

    let default_shape = GalleryConfig::default();
    group.bench_function("generate_default_shape", |b| {
        b.iter(|| {
            // Use black_box to prevent the compiler from optimizing away the call
            let _ = black_box(default_shape.generate());
        });
    });

    let large_shape = GalleryConfig {
        max_guests: 10_000,
        ..GalleryConfig::default()
    };
    group.bench_function("generate_10k_records", |b| {
        b.iter(|| {
            let _ = black_box(large_shape.generate());
        });
    });

    group.finish();
}

criterion_group!(benches, record_generation_benchmark);
criterion_main!(benches);
