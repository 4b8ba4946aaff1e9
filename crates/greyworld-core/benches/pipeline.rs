//! Benchmarks for greyworld-core pipeline operations
//!
//! Run with: cargo bench -p greyworld-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use greyworld_core::pipeline::{correct, encode_display, estimate_illuminant, linearize};
use greyworld_core::{CorrectOptions, ImageBuffer};

/// Generate a synthetic test image with a warm color cast
fn generate_cast_image(width: u32, height: u32) -> ImageBuffer {
    let pixel_count = (width * height) as usize;
    let mut data = Vec::with_capacity(pixel_count * 3);

    for i in 0..pixel_count {
        let x = (i % width as usize) as f32 / width as f32;
        let y = (i / width as usize) as f32 / height as f32;

        // Red lifted, blue suppressed
        data.push((200.0 * x + 40.0) as u8);
        data.push((180.0 * y + 30.0) as u8);
        data.push((120.0 * (x + y) / 2.0 + 20.0) as u8);
    }

    ImageBuffer::new(width, height, data).expect("synthetic image is well-formed")
}

/// Benchmark gamma linearization and re-encoding
fn bench_linearize(c: &mut Criterion) {
    let mut group = c.benchmark_group("linearize");

    for size in [256, 512, 1024, 2048].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        let image = generate_cast_image(width, height);
        group.bench_with_input(
            BenchmarkId::new("linearize", format!("{}x{}", width, height)),
            &image,
            |b, image| {
                b.iter(|| linearize(black_box(image.data()), black_box(2.2)));
            },
        );

        let linear = linearize(image.data(), 2.2);
        group.bench_with_input(
            BenchmarkId::new("encode_display", format!("{}x{}", width, height)),
            &linear,
            |b, linear| {
                b.iter(|| encode_display(black_box(linear), black_box(2.2)));
            },
        );
    }

    group.finish();
}

/// Benchmark illuminant estimation
fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    let options = CorrectOptions::default();

    for size in [256, 512, 1024, 2048].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        let image = generate_cast_image(width, height);
        group.bench_with_input(
            BenchmarkId::new("estimate_illuminant", format!("{}x{}", width, height)),
            &image,
            |b, image| {
                b.iter(|| estimate_illuminant(black_box(image.clone()), black_box(&options)));
            },
        );
    }

    group.finish();
}

/// Benchmark the full correction pipeline
fn bench_correct(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let options = CorrectOptions::default();

    for size in [512, 1024, 2048].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        let image = generate_cast_image(width, height);
        group.bench_with_input(
            BenchmarkId::new("correct", format!("{}x{}", width, height)),
            &image,
            |b, image| {
                b.iter(|| correct(black_box(image.clone()), black_box(&options)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_linearize, bench_estimate, bench_correct);
criterion_main!(benches);
