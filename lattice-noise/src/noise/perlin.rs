//! Gradient (Perlin) noise: each corner contributes the dot product of its
//! hashed gradient with the offset from that corner.

use crate::config::Interp;
use crate::math::{Float, fast_floor, lerp};

use super::hash::{grad_coord_2d, grad_coord_3d};

/// Gradient noise at a frequency-scaled 2D point.
#[must_use]
pub fn single_perlin_2d(interp: Interp, seed: i32, x: Float, y: Float) -> Float {
    let x0 = fast_floor(x);
    let y0 = fast_floor(y);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let xd0 = x - x0 as Float;
    let yd0 = y - y0 as Float;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;

    let xs = interp.apply(xd0);
    let ys = interp.apply(yd0);

    let xf0 = lerp(
        grad_coord_2d(seed, x0, y0, xd0, yd0),
        grad_coord_2d(seed, x1, y0, xd1, yd0),
        xs,
    );
    let xf1 = lerp(
        grad_coord_2d(seed, x0, y1, xd0, yd1),
        grad_coord_2d(seed, x1, y1, xd1, yd1),
        xs,
    );

    lerp(xf0, xf1, ys)
}

/// Gradient noise at a frequency-scaled 3D point.
#[must_use]
pub fn single_perlin_3d(interp: Interp, seed: i32, x: Float, y: Float, z: Float) -> Float {
    let x0 = fast_floor(x);
    let y0 = fast_floor(y);
    let z0 = fast_floor(z);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xd0 = x - x0 as Float;
    let yd0 = y - y0 as Float;
    let zd0 = z - z0 as Float;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;
    let zd1 = zd0 - 1.0;

    let xs = interp.apply(xd0);
    let ys = interp.apply(yd0);
    let zs = interp.apply(zd0);

    let xf00 = lerp(
        grad_coord_3d(seed, x0, y0, z0, xd0, yd0, zd0),
        grad_coord_3d(seed, x1, y0, z0, xd1, yd0, zd0),
        xs,
    );
    let xf10 = lerp(
        grad_coord_3d(seed, x0, y1, z0, xd0, yd1, zd0),
        grad_coord_3d(seed, x1, y1, z0, xd1, yd1, zd0),
        xs,
    );
    let xf01 = lerp(
        grad_coord_3d(seed, x0, y0, z1, xd0, yd0, zd1),
        grad_coord_3d(seed, x1, y0, z1, xd1, yd0, zd1),
        xs,
    );
    let xf11 = lerp(
        grad_coord_3d(seed, x0, y1, z1, xd0, yd1, zd1),
        grad_coord_3d(seed, x1, y1, z1, xd1, yd1, zd1),
        xs,
    );

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);

    lerp(yf0, yf1, zs)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn zero_on_lattice_points() {
        for (x, y, z) in [(0, 0, 0), (4, -3, 9), (-12, 5, -1)] {
            let v2 = single_perlin_2d(Interp::Quintic, 1337, x as Float, y as Float);
            let v3 = single_perlin_3d(Interp::Quintic, 1337, x as Float, y as Float, z as Float);
            assert_eq!(v2, 0.0);
            assert_eq!(v3, 0.0);
        }
    }

    #[test]
    fn varies_between_lattice_points() {
        let values: Vec<Float> = (0..40)
            .map(|i| single_perlin_2d(Interp::Quintic, 7, i as Float * 0.37 + 0.1, 0.55))
            .collect();
        let min = values.iter().copied().fold(Float::INFINITY, Float::min);
        let max = values.iter().copied().fold(Float::NEG_INFINITY, Float::max);
        assert!(max - min > 0.05, "gradient noise should vary spatially");
    }
}
