//! Cubic noise: value noise over a 4×4(×4) neighborhood blended with a
//! Catmull-Rom kernel, giving a C¹ field without an interpolation mode.

use crate::math::{Float, cubic_lerp, fast_floor};

use super::hash::{val_coord_2d, val_coord_3d};

/// Per-axis scale keeping Catmull-Rom overshoot inside `[-1, 1]`.
const CUBIC_2D_BOUNDING: Float = 1.0 / (1.5 * 1.5);
const CUBIC_3D_BOUNDING: Float = 1.0 / (1.5 * 1.5 * 1.5);

/// Cubic noise at a frequency-scaled 2D point.
#[must_use]
pub fn single_cubic_2d(seed: i32, x: Float, y: Float) -> Float {
    let x1 = fast_floor(x);
    let y1 = fast_floor(y);

    let xs = x - x1 as Float;
    let ys = y - y1 as Float;

    let row = |yi: i32| {
        cubic_lerp(
            val_coord_2d(seed, x1.wrapping_sub(1), yi),
            val_coord_2d(seed, x1, yi),
            val_coord_2d(seed, x1.wrapping_add(1), yi),
            val_coord_2d(seed, x1.wrapping_add(2), yi),
            xs,
        )
    };

    cubic_lerp(
        row(y1.wrapping_sub(1)),
        row(y1),
        row(y1.wrapping_add(1)),
        row(y1.wrapping_add(2)),
        ys,
    ) * CUBIC_2D_BOUNDING
}

/// Cubic noise at a frequency-scaled 3D point.
#[must_use]
pub fn single_cubic_3d(seed: i32, x: Float, y: Float, z: Float) -> Float {
    let x1 = fast_floor(x);
    let y1 = fast_floor(y);
    let z1 = fast_floor(z);

    let xs = x - x1 as Float;
    let ys = y - y1 as Float;
    let zs = z - z1 as Float;

    let row = |yi: i32, zi: i32| {
        cubic_lerp(
            val_coord_3d(seed, x1.wrapping_sub(1), yi, zi),
            val_coord_3d(seed, x1, yi, zi),
            val_coord_3d(seed, x1.wrapping_add(1), yi, zi),
            val_coord_3d(seed, x1.wrapping_add(2), yi, zi),
            xs,
        )
    };
    let plane = |zi: i32| {
        cubic_lerp(
            row(y1.wrapping_sub(1), zi),
            row(y1, zi),
            row(y1.wrapping_add(1), zi),
            row(y1.wrapping_add(2), zi),
            ys,
        )
    };

    cubic_lerp(
        plane(z1.wrapping_sub(1)),
        plane(z1),
        plane(z1.wrapping_add(1)),
        plane(z1.wrapping_add(2)),
        zs,
    ) * CUBIC_3D_BOUNDING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_points_return_scaled_corner_values() {
        let v = single_cubic_2d(11, 3.0, -4.0);
        assert!((v - val_coord_2d(11, 3, -4) * CUBIC_2D_BOUNDING).abs() < 1e-5);

        let v = single_cubic_3d(11, 3.0, -4.0, 8.0);
        assert!((v - val_coord_3d(11, 3, -4, 8) * CUBIC_3D_BOUNDING).abs() < 1e-5);
    }

    #[test]
    fn bounded_by_construction() {
        for i in 0..2000 {
            let t = i as Float * 0.0731;
            let v2 = single_cubic_2d(2, t, t * 0.61 - 5.0);
            let v3 = single_cubic_3d(2, t * 0.3, -t, t * 1.7);
            assert!(v2.abs() <= 1.0 && v3.abs() <= 1.0, "{v2} {v3}");
        }
    }
}
