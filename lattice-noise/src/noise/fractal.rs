//! Multi-octave accumulation over any single-octave primitive.
//!
//! Each octave samples the primitive at the previous point scaled by the
//! lacunarity, with the seed incremented by one and the amplitude multiplied
//! by the gain. The first octave is always evaluated, so an octave count of
//! zero behaves like one.

use crate::config::{FractalType, NoiseConfig};
use crate::math::Float;

/// Accumulate octaves of `single` at a frequency-scaled point according to the
/// configured [`FractalType`].
///
/// `single` receives the octave seed and the octave point.
#[must_use]
pub fn fractal<const D: usize>(
    config: &NoiseConfig,
    point: [Float; D],
    single: impl FnMut(i32, [Float; D]) -> Float,
) -> Float {
    match config.fractal_type() {
        FractalType::Fbm => fbm(config, point, single),
        FractalType::Billow => billow(config, point, single),
        FractalType::RigidMulti => rigid_multi(config, point, single),
    }
}

/// Weighted sum of octaves, scaled by the fractal bounding.
#[must_use]
pub fn fbm<const D: usize>(
    config: &NoiseConfig,
    point: [Float; D],
    single: impl FnMut(i32, [Float; D]) -> Float,
) -> Float {
    let mut sum = 0.0;
    for_each_octave(config, point, single, |_, n, amp| sum += n * amp);
    sum * config.fractal_bounding()
}

/// Weighted sum of `|n| * 2 - 1`, scaled by the fractal bounding.
#[must_use]
pub fn billow<const D: usize>(
    config: &NoiseConfig,
    point: [Float; D],
    single: impl FnMut(i32, [Float; D]) -> Float,
) -> Float {
    let mut sum = 0.0;
    for_each_octave(config, point, single, |_, n, amp| {
        sum += (n.abs() * 2.0 - 1.0) * amp;
    });
    sum * config.fractal_bounding()
}

/// `1 - |n|` for the first octave, minus `(1 - |n|) * amp` for the rest.
///
/// Not scaled by the fractal bounding.
#[must_use]
pub fn rigid_multi<const D: usize>(
    config: &NoiseConfig,
    point: [Float; D],
    single: impl FnMut(i32, [Float; D]) -> Float,
) -> Float {
    let mut sum = 0.0;
    for_each_octave(config, point, single, |octave, n, amp| {
        if octave == 0 {
            sum = 1.0 - n.abs();
        } else {
            sum -= (1.0 - n.abs()) * amp;
        }
    });
    sum
}

/// Drive the octave loop, handing `visit` the octave index, the sample and its
/// amplitude (1 for the first octave).
#[inline]
fn for_each_octave<const D: usize>(
    config: &NoiseConfig,
    mut point: [Float; D],
    mut single: impl FnMut(i32, [Float; D]) -> Float,
    mut visit: impl FnMut(u32, Float, Float),
) {
    let lacunarity = config.lacunarity();
    let gain = config.gain();
    let mut seed = config.seed();
    let mut amp = 1.0;

    visit(0, single(seed, point), amp);
    for octave in 1..config.octaves() {
        point = point.map(|c| c * lacunarity);
        amp *= gain;
        seed = seed.wrapping_add(1);
        visit(octave, single(seed, point), amp);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn config(fractal_type: FractalType, octaves: u32) -> NoiseConfig {
        let mut config = NoiseConfig::new(10);
        config.set_fractal_type(fractal_type);
        config.set_octaves(octaves);
        config.set_gain(0.5);
        config.set_lacunarity(2.0);
        config
    }

    #[test]
    fn constant_primitive_sums() {
        let constant = |_: i32, _: [Float; 2]| 0.8;

        // (0.8 + 0.4 + 0.2) / 1.75
        let v = fractal(&config(FractalType::Fbm, 3), [0.0, 0.0], constant);
        assert!((v - 0.8).abs() < 1e-6);

        // (0.6 + 0.3 + 0.15) / 1.75
        let v = fractal(&config(FractalType::Billow, 3), [0.0, 0.0], constant);
        assert!((v - 0.6).abs() < 1e-6);

        // 0.2 - 0.1 - 0.05
        let v = fractal(&config(FractalType::RigidMulti, 3), [0.0, 0.0], constant);
        assert!((v - 0.05).abs() < 1e-6);
    }

    #[test]
    fn octaves_step_seed_and_point() {
        let mut calls = Vec::new();
        let _ = fbm(&config(FractalType::Fbm, 3), [1.0, -0.5, 3.0], |seed, p| {
            calls.push((seed, p));
            0.0
        });
        assert_eq!(
            calls,
            vec![
                (10, [1.0, -0.5, 3.0]),
                (11, [2.0, -1.0, 6.0]),
                (12, [4.0, -2.0, 12.0]),
            ]
        );
    }

    #[test]
    fn seed_wraps_at_i32_max() {
        let mut config = config(FractalType::Fbm, 2);
        config.set_seed(i32::MAX);
        let mut seeds = Vec::new();
        let _ = fbm(&config, [0.0], |seed, _| {
            seeds.push(seed);
            0.0
        });
        assert_eq!(seeds, vec![i32::MAX, i32::MIN]);
    }

    #[test]
    fn zero_octaves_evaluates_once() {
        let mut config = config(FractalType::Fbm, 1);
        config.set_octaves(0);
        let mut count = 0;
        let _ = fbm(&config, [0.0, 0.0], |_, _| {
            count += 1;
            0.5
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn single_octave_is_identity_for_fbm() {
        let config = config(FractalType::Fbm, 1);
        let v = fractal(&config, [0.0, 0.0], |_, _| -0.37);
        assert_eq!(v, -0.37);
    }
}
