//! Fixed reference outputs of value noise.
//!
//! Captured from a known-good 32-bit run. The tolerance also admits the
//! `f64` build, whose intermediates round differently.

#![allow(clippy::float_cmp)]

use lattice_noise::noise::hash::val_coord_2d;
use lattice_noise::{Float, NoiseConfig, NoiseGenerator, NoiseType};

const TOLERANCE: Float = 1e-5;

fn value_noise(seed: i32) -> NoiseGenerator {
    let mut config = NoiseConfig::new(seed);
    config.set_noise_type(NoiseType::Value);
    config.set_frequency(1.0);
    NoiseGenerator::new(config)
}

fn assert_close(actual: Float, expected: Float) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn value_at_origin_with_seed_zero() {
    let noise = value_noise(0);
    assert_eq!(noise.get_value_3d(0.0, 0.0, 0.0), 0.0);
    assert_eq!(noise.get_value_2d(0.0, 0.0), 0.0);
}

#[test]
fn value_2d_reference_points() {
    let noise = value_noise(1337);
    for (x, y, expected) in [
        (1.25, 2.5, -0.040_776_014),
        (-3.75, 0.5, -0.476_132_27),
        (10.125, -7.625, 0.105_769_93),
    ] {
        assert_close(noise.get_value_2d(x, y), expected);
        assert_close(noise.get_noise_2d(x, y), expected);
    }
}

#[test]
fn value_3d_reference_points() {
    let noise = value_noise(1337);
    for (x, y, z, expected) in [
        (0.5, 1.5, -2.25, -0.378_451_3),
        (4.75, -1.125, 3.0625, -0.715_383_77),
    ] {
        assert_close(noise.get_value_3d(x, y, z), expected);
    }
}

#[test]
fn lattice_scalar_reference_points() {
    assert_close(val_coord_2d(1337, 3, 4), 0.238_130_24);
    assert_close(val_coord_2d(0, 1, 0), 0.702_436_1);
}
