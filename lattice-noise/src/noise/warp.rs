//! Gradient perturb: domain warping by a smooth vector field.
//!
//! Each lattice corner contributes its cell vector; the vectors are blended
//! with the configured kernel and the result, scaled by the amplitude, is added
//! to the input point. Every output axis is computed from the unmodified input.

use crate::config::{Interp, NoiseConfig};
use crate::math::{Float, fast_floor, lerp};

use super::hash::{cell_2d, cell_3d};

/// Displace a 2D point by one octave of the perturb field.
///
/// `frequency` scales the lattice lookup only; the displacement is applied to
/// the unscaled point.
#[must_use]
pub fn single_gradient_perturb_2d(
    interp: Interp,
    seed: i32,
    amp: Float,
    frequency: Float,
    [x, y]: [Float; 2],
) -> [Float; 2] {
    let xf = x * frequency;
    let yf = y * frequency;

    let x0 = fast_floor(xf);
    let y0 = fast_floor(yf);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let xs = interp.apply(xf - x0 as Float);
    let ys = interp.apply(yf - y0 as Float);

    let blend = |a: [Float; 2], b: [Float; 2]| [lerp(a[0], b[0], xs), lerp(a[1], b[1], xs)];
    let v0 = blend(cell_2d(seed, x0, y0), cell_2d(seed, x1, y0));
    let v1 = blend(cell_2d(seed, x0, y1), cell_2d(seed, x1, y1));

    [
        x + lerp(v0[0], v1[0], ys) * amp,
        y + lerp(v0[1], v1[1], ys) * amp,
    ]
}

/// Displace a 3D point by one octave of the perturb field.
#[must_use]
pub fn single_gradient_perturb_3d(
    interp: Interp,
    seed: i32,
    amp: Float,
    frequency: Float,
    [x, y, z]: [Float; 3],
) -> [Float; 3] {
    let xf = x * frequency;
    let yf = y * frequency;
    let zf = z * frequency;

    let x0 = fast_floor(xf);
    let y0 = fast_floor(yf);
    let z0 = fast_floor(zf);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xs = interp.apply(xf - x0 as Float);
    let ys = interp.apply(yf - y0 as Float);
    let zs = interp.apply(zf - z0 as Float);

    let blend = |a: [Float; 3], b: [Float; 3], t: Float| {
        [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
    };

    let v00 = blend(cell_3d(seed, x0, y0, z0), cell_3d(seed, x1, y0, z0), xs);
    let v10 = blend(cell_3d(seed, x0, y1, z0), cell_3d(seed, x1, y1, z0), xs);
    let v01 = blend(cell_3d(seed, x0, y0, z1), cell_3d(seed, x1, y0, z1), xs);
    let v11 = blend(cell_3d(seed, x0, y1, z1), cell_3d(seed, x1, y1, z1), xs);

    let near = blend(v00, v10, ys);
    let far = blend(v01, v11, ys);
    let [dx, dy, dz] = blend(near, far, zs);

    [x + dx * amp, y + dy * amp, z + dz * amp]
}

/// Apply successive perturb octaves, each warping the output of the last.
///
/// The first octave uses `gradient_perturb_amp * fractal_bounding`; later
/// octaves multiply the amplitude by the gain and the frequency by the
/// lacunarity, and increment the seed.
#[must_use]
pub fn gradient_perturb_fractal_2d(config: &NoiseConfig, point: [Float; 2]) -> [Float; 2] {
    let mut point = point;
    for_each_perturb_octave(config, |seed, amp, frequency| {
        point = single_gradient_perturb_2d(config.interp(), seed, amp, frequency, point);
    });
    point
}

/// 3D counterpart of [`gradient_perturb_fractal_2d`].
#[must_use]
pub fn gradient_perturb_fractal_3d(config: &NoiseConfig, point: [Float; 3]) -> [Float; 3] {
    let mut point = point;
    for_each_perturb_octave(config, |seed, amp, frequency| {
        point = single_gradient_perturb_3d(config.interp(), seed, amp, frequency, point);
    });
    point
}

fn for_each_perturb_octave(config: &NoiseConfig, mut octave: impl FnMut(i32, Float, Float)) {
    let mut seed = config.seed();
    let mut amp = config.gradient_perturb_amp() * config.fractal_bounding();
    let mut frequency = config.frequency();

    octave(seed, amp, frequency);
    for _ in 1..config.octaves() {
        frequency *= config.lacunarity();
        amp *= config.gain();
        seed = seed.wrapping_add(1);
        octave(seed, amp, frequency);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn zero_amplitude_is_identity() {
        let p = [12.5, -3.25];
        assert_eq!(single_gradient_perturb_2d(Interp::Quintic, 7, 0.0, 0.1, p), p);
        let p = [12.5, -3.25, 0.75];
        assert_eq!(single_gradient_perturb_3d(Interp::Quintic, 7, 0.0, 0.1, p), p);
    }

    #[test]
    fn lattice_point_moves_by_its_cell_vector() {
        // At an integer lattice point every kernel weight is zero, so only the
        // (x0, y0) corner contributes.
        let [x, y] = single_gradient_perturb_2d(Interp::Linear, 3, 2.0, 1.0, [4.0, 9.0]);
        let [vx, vy] = cell_2d(3, 4, 9);
        assert!((x - (4.0 + vx * 2.0)).abs() < 1e-6);
        assert!((y - (9.0 + vy * 2.0)).abs() < 1e-6);
    }

    #[test]
    fn displacement_bounded_by_amplitude() {
        for i in 0..500 {
            let t = i as Float * 0.37;
            let p = [t, t * 0.6, -t];
            let q = single_gradient_perturb_3d(Interp::Hermite, 11, 1.5, 0.25, p);
            let d: Float = p.iter().zip(q).map(|(a, b)| (a - b) * (a - b)).sum();
            assert!(d.sqrt() <= 1.5 + 1e-4, "{d} at {i}");
        }
    }

    #[test]
    fn single_octave_fractal_scales_by_bounding() {
        let mut config = NoiseConfig::new(21);
        config.set_octaves(1);
        config.set_gradient_perturb_amp(3.0);
        let p = [5.3, 1.7];
        let direct =
            single_gradient_perturb_2d(config.interp(), 21, 3.0, config.frequency(), p);
        assert_eq!(gradient_perturb_fractal_2d(&config, p), direct);
    }

    #[test]
    fn fractal_octaves_feed_forward() {
        let mut config = NoiseConfig::new(4);
        config.set_octaves(2);
        config.set_frequency(0.5);
        let p = [1.2, 3.4, 5.6];

        let amp = config.gradient_perturb_amp() * config.fractal_bounding();
        let first = single_gradient_perturb_3d(config.interp(), 4, amp, 0.5, p);
        let second =
            single_gradient_perturb_3d(config.interp(), 5, amp * config.gain(), 1.0, first);

        assert_eq!(gradient_perturb_fractal_3d(&config, p), second);
    }
}
