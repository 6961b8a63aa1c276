//! Benchmarks for the lchgrad pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lchgrad::codec::{decode, encode};
use lchgrad::convert::{hex_to_lch, lch_to_display, lch_to_srgb};
use lchgrad::gradient::sample_selection;
use lchgrad::render::render_slice;
use lchgrad::types::{AxisOrder, Lch};

// -- Conversion benchmarks --

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let in_gamut = Lch::new(66.75, 45.04, 2.53);
    let clipped = Lch::new(50.0, 135.0, 0.0);

    group.bench_function("lch_to_srgb", |b| b.iter(|| lch_to_srgb(black_box(in_gamut))));

    group.bench_function("lch_to_display_clipped", |b| {
        b.iter(|| lch_to_display(black_box(clipped)))
    });

    group.bench_function("hex_to_lch", |b| b.iter(|| hex_to_lch(black_box("#c76584")).unwrap()));

    group.finish();
}

// -- Rasterization benchmarks --

fn bench_rasterization(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterization");
    group.sample_size(20);

    // Full canvas at scale 1, then the coarser grids calibration falls back to.
    for (side, scale) in [(420, 1), (210, 2), (105, 4)] {
        group.bench_function(format!("hlc_{}px", side), |b| {
            b.iter(|| render_slice(AxisOrder::HueLightness, black_box(45.0), side, scale))
        });
    }

    group.bench_function("hcl_210px", |b| {
        b.iter(|| render_slice(AxisOrder::HueChroma, black_box(60.0), 210, 2))
    });

    group.finish();
}

// -- Gradient and codec benchmarks --

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");

    let selection = decode("clh/12/c76584/30c2f8").to_selection().unwrap();

    group.bench_function("sample_12", |b| b.iter(|| sample_selection(black_box(&selection)).unwrap()));

    group.bench_function("encode", |b| b.iter(|| encode(black_box(&selection))));

    group.bench_function("decode", |b| b.iter(|| decode(black_box("hcl/7/c76584/30c2f8"))));

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_rasterization, bench_gradient);
criterion_main!(benches);
