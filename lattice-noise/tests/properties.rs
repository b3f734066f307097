//! Behavioral properties that hold for every configuration.

#![allow(clippy::float_cmp)]

use lattice_noise::noise::cellular::{ranked_distances_2d, ranked_distances_3d};
use lattice_noise::noise::perlin::single_perlin_2d;
use lattice_noise::{
    CellularDistanceFunction, CellularReturnType, Float, FractalType, NoiseConfig, NoiseGenerator,
    NoiseType, Vector2, Vector3,
};
use rayon::prelude::*;

const ALL_TYPES: [NoiseType; 10] = [
    NoiseType::Value,
    NoiseType::ValueFractal,
    NoiseType::Perlin,
    NoiseType::PerlinFractal,
    NoiseType::Simplex,
    NoiseType::SimplexFractal,
    NoiseType::Cellular,
    NoiseType::WhiteNoise,
    NoiseType::Cubic,
    NoiseType::CubicFractal,
];

/// Deterministic sample points spread over a few hundred lattice cells.
fn sample_points(count: usize, seed: u64) -> impl Iterator<Item = [Float; 3]> {
    let mut state = seed;
    let mut next = move || {
        // xorshift64*
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        let bits = state.wrapping_mul(0x2545_f491_4f6c_dd1d) >> 40;
        (bits as Float / (1u64 << 24) as Float - 0.5) * 400.0
    };
    (0..count).map(move |_| [next(), next(), next()])
}

fn generator(noise_type: NoiseType, seed: i32) -> NoiseGenerator {
    let mut config = NoiseConfig::new(seed);
    config.set_noise_type(noise_type);
    config.set_frequency(0.37);
    NoiseGenerator::new(config)
}

#[test]
fn repeated_calls_are_bit_identical() {
    for noise_type in ALL_TYPES {
        let noise = generator(noise_type, 42);
        for [x, y, z] in sample_points(200, 1) {
            let a = noise.get_noise_3d(x, y, z);
            let b = noise.get_noise_3d(x, y, z);
            assert_eq!(a.to_bits(), b.to_bits(), "{noise_type:?} at {x},{y},{z}");
            assert_eq!(
                noise.get_noise_2d(x, y).to_bits(),
                noise.get_noise_2d(x, y).to_bits()
            );
        }
        let p = [1.5, -2.5, 3.5, 0.25];
        assert_eq!(
            noise.get_simplex_4d(p[0], p[1], p[2], p[3]).to_bits(),
            noise.get_simplex_4d(p[0], p[1], p[2], p[3]).to_bits()
        );
    }
}

#[test]
fn seed_changes_output() {
    for noise_type in ALL_TYPES {
        let a = generator(noise_type, 1);
        let b = generator(noise_type, 2);
        let differing = sample_points(100, 2)
            .filter(|&[x, y, z]| a.get_noise_3d(x, y, z) != b.get_noise_3d(x, y, z))
            .count();
        assert!(differing > 90, "{noise_type:?}: only {differing} of 100 differ");
    }
}

#[test]
fn fbm_and_billow_stay_in_soft_range() {
    for noise_type in [
        NoiseType::ValueFractal,
        NoiseType::PerlinFractal,
        NoiseType::SimplexFractal,
        NoiseType::CubicFractal,
    ] {
        for fractal_type in [FractalType::Fbm, FractalType::Billow] {
            for octaves in 1..=8 {
                for gain in [0.3, 0.5, 0.8] {
                    let mut noise = generator(noise_type, 7);
                    let config = noise.config_mut();
                    config.set_fractal_type(fractal_type);
                    config.set_octaves(octaves);
                    config.set_gain(gain);

                    for [x, y, z] in sample_points(10_000 / 8, u64::from(octaves)) {
                        let v2 = noise.get_noise_2d(x, y);
                        let v3 = noise.get_noise_3d(x, y, z);
                        for v in [v2, v3] {
                            assert!(
                                (-1.1..=1.1).contains(&v),
                                "{noise_type:?} {fractal_type:?} octaves={octaves} gain={gain}: {v}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn smooth_families_are_continuous() {
    let step = 1e-3;
    for noise_type in [
        NoiseType::Value,
        NoiseType::Perlin,
        NoiseType::Simplex,
        NoiseType::Cubic,
    ] {
        let mut noise = generator(noise_type, 3);
        noise.config_mut().set_frequency(1.0);

        // Crosses integer lattice lines, including the negative ones.
        let walk = |i: i32| -3.0 + i as Float * step;
        let mut prev2 = noise.get_noise_2d(walk(0), walk(0) * 0.7);
        let mut prev3 = noise.get_noise_3d(walk(0), walk(0) * 0.7, 1.3);
        for i in 1..6000 {
            let t = walk(i);
            let v2 = noise.get_noise_2d(t, t * 0.7);
            let v3 = noise.get_noise_3d(t, t * 0.7, 1.3);
            assert!((v2 - prev2).abs() < 0.05, "{noise_type:?} 2D jump at {t}");
            assert!((v3 - prev3).abs() < 0.05, "{noise_type:?} 3D jump at {t}");
            prev2 = v2;
            prev3 = v3;
        }
    }
}

#[test]
fn single_octave_fbm_equals_primitive() {
    for (fractal, single) in [
        (NoiseType::ValueFractal, NoiseType::Value),
        (NoiseType::PerlinFractal, NoiseType::Perlin),
        (NoiseType::SimplexFractal, NoiseType::Simplex),
        (NoiseType::CubicFractal, NoiseType::Cubic),
    ] {
        let mut fractal_noise = generator(fractal, 11);
        fractal_noise.config_mut().set_octaves(1);
        let bounding = fractal_noise.config().fractal_bounding();
        assert_eq!(bounding, 1.0);

        let single_noise = generator(single, 11);
        for [x, y, z] in sample_points(100, 3) {
            assert_eq!(
                fractal_noise.get_noise_2d(x, y),
                single_noise.get_noise_2d(x, y) * bounding
            );
            assert_eq!(
                fractal_noise.get_noise_3d(x, y, z),
                single_noise.get_noise_3d(x, y, z) * bounding
            );
        }
    }
}

#[test]
fn rigid_multi_skips_bounding_while_fbm_applies_it() {
    let mut config = NoiseConfig::new(19);
    config.set_frequency(1.0);
    config.set_octaves(3);
    config.set_noise_type(NoiseType::PerlinFractal);
    let bounding = config.fractal_bounding();
    assert!(bounding < 1.0);

    let (x, y) = (2.3, -7.9);
    let octave = |i: i32| {
        let scale = Float::from(2u8).powi(i);
        let amp = Float::from(0.5_f32).powi(i);
        let n = single_perlin_2d(config.interp(), 19 + i, x * scale, y * scale);
        (n, amp)
    };
    let octaves: Vec<(Float, Float)> = (0..3).map(octave).collect();

    let fbm_raw: Float = octaves.iter().map(|(n, amp)| n * amp).sum();
    let rigid_raw = 1.0 - octaves[0].0.abs()
        - octaves[1..]
            .iter()
            .map(|(n, amp)| (1.0 - n.abs()) * amp)
            .sum::<Float>();

    config.set_fractal_type(FractalType::Fbm);
    let fbm = NoiseGenerator::new(config.clone()).get_noise_2d(x, y);
    config.set_fractal_type(FractalType::RigidMulti);
    let rigid = NoiseGenerator::new(config).get_noise_2d(x, y);

    assert!((fbm - fbm_raw * bounding).abs() < 1e-5, "{fbm} vs {fbm_raw}");
    assert!((rigid - rigid_raw).abs() < 1e-5, "{rigid} vs {rigid_raw}");
}

#[test]
fn cellular_distances_are_ordered() {
    for function in [
        CellularDistanceFunction::Euclidean,
        CellularDistanceFunction::Manhattan,
        CellularDistanceFunction::Natural,
    ] {
        for jitter in [0.0, 0.45, 1.0] {
            let mut config = NoiseConfig::new(5);
            config.set_cellular_distance_function(function);
            config.set_cellular_return_type(CellularReturnType::Distance2);
            config.set_cellular_jitter(jitter);
            for [x, y, z] in sample_points(500, 4) {
                for d in [
                    ranked_distances_2d(&config, x, y),
                    ranked_distances_3d(&config, x, y, z),
                ] {
                    assert!(
                        d[0] <= d[1] && d[1] <= d[2] && d[2] <= d[3],
                        "{function:?} jitter={jitter}: {d:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn far_coordinates_wrap_instead_of_overflowing() {
    // Lattice corners past `i32::MAX` wrap around; the output only has to be
    // reproducible, not finite.
    let edge = 2_147_483_648.0;
    let far = [1e10, -1e10, edge, -edge, 1.5e9, 3.0e9, 5.0e9];
    let mut points = Vec::new();
    for &a in &far {
        points.push([a, 0.0, 1.0]);
        points.push([a, a, a]);
        points.push([0.5, -a, a]);
    }

    for noise_type in ALL_TYPES {
        let mut noise = generator(noise_type, 0);
        noise.config_mut().set_frequency(1.0);
        for &[x, y, z] in &points {
            let a = (noise.get_noise_2d(x, y), noise.get_noise_3d(x, y, z));
            let b = (noise.get_noise_2d(x, y), noise.get_noise_3d(x, y, z));
            assert_eq!(a.0.to_bits(), b.0.to_bits(), "{noise_type:?} 2D at {x},{y}");
            assert_eq!(a.1.to_bits(), b.1.to_bits(), "{noise_type:?} 3D at {x},{y},{z}");

            let w = noise.get_simplex_4d(x, y, z, -x);
            assert_eq!(w.to_bits(), noise.get_simplex_4d(x, y, z, -x).to_bits());
        }
    }

    let mut noise = generator(NoiseType::Cellular, 0);
    noise.config_mut().set_octaves(3);
    for &[x, y, z] in &points {
        let _ = noise.gradient_perturb_2d(Vector2::new(x, y));
        let _ = noise.gradient_perturb_fractal_3d(Vector3::new(x, y, z));
        let d = ranked_distances_3d(noise.config(), x, y, z);
        assert!(d[0] <= d[1] && d[1] <= d[2] && d[2] <= d[3], "{d:?}");
    }
}

#[test]
fn concurrent_reads_match_sequential() {
    let mut noise = generator(NoiseType::SimplexFractal, 1234);
    noise.config_mut().set_octaves(5);
    let points: Vec<[Float; 3]> = sample_points(4096, 5).collect();

    let sequential: Vec<Float> = points
        .iter()
        .map(|&[x, y, z]| noise.get_noise_3d(x, y, z))
        .collect();
    let parallel: Vec<Float> = points
        .par_iter()
        .map(|&[x, y, z]| noise.get_noise_3d(x, y, z))
        .collect();

    assert_eq!(sequential, parallel);
}
