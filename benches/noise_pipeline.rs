use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use noise_explorer::{
    generate_colour_grid, generate_noise_grid, generate_noise_grid_parallel_rayon,
    GradientColourMap, GradientPreset, GridSize, LayerConfig, OpenSimplexSource,
};

fn bench_noise_grid(c: &mut Criterion) {
    let source = OpenSimplexSource::new(42);
    let size = GridSize::new(200, 200).unwrap();
    let layers = LayerConfig::new(4, 0.5, 2.0).unwrap();

    c.bench_function("noise_grid_serial_200x200_4_octaves", |b| {
        b.iter(|| generate_noise_grid(&source, size, black_box(0.05), layers).unwrap())
    });

    c.bench_function("noise_grid_rayon_200x200_4_octaves", |b| {
        b.iter(|| {
            generate_noise_grid_parallel_rayon(&source, size, black_box(0.05), layers).unwrap()
        })
    });
}

fn bench_colour_grid(c: &mut Criterion) {
    let source = OpenSimplexSource::new(42);
    let size = GridSize::new(200, 200).unwrap();
    let layers = LayerConfig::new(4, 0.5, 2.0).unwrap();
    let noise = generate_noise_grid(&source, size, 0.05, layers).unwrap();
    let mapper = GradientColourMap::new(GradientPreset::VibrantRainbow.stops().unwrap());

    c.bench_function("colour_grid_200x200_six_stops", |b| {
        b.iter(|| generate_colour_grid(black_box(&noise), &mapper).unwrap())
    });
}

criterion_group!(benches, bench_noise_grid, bench_colour_grid);
criterion_main!(benches);
