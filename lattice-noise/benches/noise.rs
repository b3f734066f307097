#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lattice_noise::{
    CellularReturnType, Float, FractalType, NoiseConfig, NoiseGenerator, NoiseType, Vector3,
};
use std::hint::black_box;

const GRID: usize = 64;

fn generator(noise_type: NoiseType) -> NoiseGenerator {
    let mut config = NoiseConfig::new(1337);
    config.set_noise_type(noise_type);
    config.set_frequency(0.05);
    NoiseGenerator::new(config)
}

/// Sample a `GRID × GRID` plane through the field.
fn sample_plane_2d(noise: &NoiseGenerator) {
    for x in 0..GRID {
        for y in 0..GRID {
            black_box(noise.get_noise_2d(black_box(x as Float), black_box(y as Float)));
        }
    }
}

fn sample_plane_3d(noise: &NoiseGenerator) {
    for x in 0..GRID {
        for z in 0..GRID {
            black_box(noise.get_noise_3d(black_box(x as Float), 17.5, black_box(z as Float)));
        }
    }
}

// ── Primitives ──────────────────────────────────────────────────────────────

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive");
    group.throughput(Throughput::Elements((GRID * GRID) as u64));

    for noise_type in [
        NoiseType::Value,
        NoiseType::Perlin,
        NoiseType::Simplex,
        NoiseType::Cubic,
        NoiseType::Cellular,
        NoiseType::WhiteNoise,
    ] {
        let noise = generator(noise_type);
        group.bench_with_input(
            BenchmarkId::new("2d", format!("{noise_type:?}")),
            &noise,
            |b, noise| b.iter(|| sample_plane_2d(noise)),
        );
        group.bench_with_input(
            BenchmarkId::new("3d", format!("{noise_type:?}")),
            &noise,
            |b, noise| b.iter(|| sample_plane_3d(noise)),
        );
    }
    group.finish();
}

fn bench_simplex_4d(c: &mut Criterion) {
    let noise = generator(NoiseType::Simplex);

    c.bench_function("simplex_4d_plane", |b| {
        b.iter(|| {
            for x in 0..GRID {
                for w in 0..GRID {
                    black_box(noise.get_simplex_4d(x as Float, 3.0, -8.0, w as Float));
                }
            }
        });
    });
}

// ── Cellular ────────────────────────────────────────────────────────────────

fn bench_cellular_return_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("cellular");
    for return_type in [
        CellularReturnType::CellValue,
        CellularReturnType::Distance,
        CellularReturnType::Distance2Div,
    ] {
        let mut noise = generator(NoiseType::Cellular);
        noise.config_mut().set_cellular_return_type(return_type);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{return_type:?}")),
            &noise,
            |b, noise| b.iter(|| sample_plane_3d(noise)),
        );
    }
    group.finish();
}

// ── Fractal ─────────────────────────────────────────────────────────────────

fn bench_fractal_octaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex_fractal");
    for octaves in [1, 3, 6] {
        for fractal_type in [FractalType::Fbm, FractalType::RigidMulti] {
            let mut noise = generator(NoiseType::SimplexFractal);
            noise.config_mut().set_octaves(octaves);
            noise.config_mut().set_fractal_type(fractal_type);
            group.bench_with_input(
                BenchmarkId::new(format!("{fractal_type:?}"), octaves),
                &noise,
                |b, noise| b.iter(|| sample_plane_2d(noise)),
            );
        }
    }
    group.finish();
}

// ── Domain warp ─────────────────────────────────────────────────────────────

fn bench_gradient_perturb(c: &mut Criterion) {
    let mut noise = generator(NoiseType::Simplex);
    noise.config_mut().set_gradient_perturb_amp(30.0);

    c.bench_function("gradient_perturb_fractal_3d", |b| {
        b.iter(|| {
            for x in 0..GRID {
                for z in 0..GRID {
                    let p = Vector3::new(x as Float, 0.0, z as Float);
                    black_box(noise.gradient_perturb_fractal_3d(black_box(p)));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_primitives,
    bench_simplex_4d,
    bench_cellular_return_types,
    bench_fractal_octaves,
    bench_gradient_perturb
);
criterion_main!(benches);
