//! Value noise: a hashed scalar per lattice corner, blended axis by axis.

use crate::config::Interp;
use crate::math::{Float, fast_floor, lerp};

use super::hash::{val_coord_2d, val_coord_3d};

/// Value noise at a frequency-scaled 2D point.
#[must_use]
pub fn single_value_2d(interp: Interp, seed: i32, x: Float, y: Float) -> Float {
    let x0 = fast_floor(x);
    let y0 = fast_floor(y);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let xs = interp.apply(x - x0 as Float);
    let ys = interp.apply(y - y0 as Float);

    let xf0 = lerp(val_coord_2d(seed, x0, y0), val_coord_2d(seed, x1, y0), xs);
    let xf1 = lerp(val_coord_2d(seed, x0, y1), val_coord_2d(seed, x1, y1), xs);

    lerp(xf0, xf1, ys)
}

/// Value noise at a frequency-scaled 3D point.
#[must_use]
pub fn single_value_3d(interp: Interp, seed: i32, x: Float, y: Float, z: Float) -> Float {
    let x0 = fast_floor(x);
    let y0 = fast_floor(y);
    let z0 = fast_floor(z);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xs = interp.apply(x - x0 as Float);
    let ys = interp.apply(y - y0 as Float);
    let zs = interp.apply(z - z0 as Float);

    let xf00 = lerp(val_coord_3d(seed, x0, y0, z0), val_coord_3d(seed, x1, y0, z0), xs);
    let xf10 = lerp(val_coord_3d(seed, x0, y1, z0), val_coord_3d(seed, x1, y1, z0), xs);
    let xf01 = lerp(val_coord_3d(seed, x0, y0, z1), val_coord_3d(seed, x1, y0, z1), xs);
    let xf11 = lerp(val_coord_3d(seed, x0, y1, z1), val_coord_3d(seed, x1, y1, z1), xs);

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);

    lerp(yf0, yf1, zs)
}
