//! Simplex noise in 2D, 3D and 4D.
//!
//! The input is skewed onto a lattice of simplices, the simplex containing the
//! point is found by ranking the skewed offsets, and each of its `d + 1` corners
//! contributes `max(0, r² - |offset|²)⁴ · (gradient · offset)`.
//!
//! Corner selection must be reproduced exactly: choosing a different simplex
//! sums a different corner set and tears the field along simplex faces.

use std::array;

use crate::math::{Float, fast_floor};

use super::hash::{grad_coord_2d, grad_coord_3d, grad_coord_4d};
use super::tables::SIMPLEX_4D;

#[allow(
    clippy::unreadable_literal,
    clippy::excessive_precision,
    reason = "mathematical constant"
)]
const SQRT3: Float = 1.7320508075688772935274463415059;
/// Skewing factor for 2D simplex: `(sqrt(3) - 1) / 2`
const F2: Float = 0.5 * (SQRT3 - 1.0);
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
const G2: Float = (3.0 - SQRT3) / 6.0;

/// Skewing factor for 3D simplex: `1/3`
const F3: Float = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
const G3: Float = 1.0 / 6.0;
const G33: Float = G3 * 3.0 - 1.0;

/// Skewing factor for 4D simplex: `(sqrt(5) - 1) / 4`
const F4: Float = ((2.236_067_97 - 1.0) / 4.0) as Float;
/// Unskewing factor for 4D simplex: `(5 - sqrt(5)) / 20`
const G4: Float = ((5.0 - 2.236_067_97) / 20.0) as Float;

/// Radial falloff of one corner. The gradient is only hashed when the corner
/// is in range.
#[inline]
fn corner(t: Float, gradient: impl FnOnce() -> Float) -> Float {
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * gradient()
    }
}

/// Simplex noise at a frequency-scaled 2D point.
///
/// Returns a value roughly in `[-1, 1]` (scaled by 50).
#[must_use]
pub fn single_simplex_2d(seed: i32, x: Float, y: Float) -> Float {
    let t = (x + y) * F2;
    let i = fast_floor(x + t);
    let j = fast_floor(y + t);

    let t = i.wrapping_add(j) as Float * G2;
    let x0 = x - (i as Float - t);
    let y0 = y - (j as Float - t);

    // Lower or upper triangle of the skewed unit square
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as Float + G2;
    let y1 = y0 - j1 as Float + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let n0 = corner(0.5 - x0 * x0 - y0 * y0, || {
        grad_coord_2d(seed, i, j, x0, y0)
    });
    let n1 = corner(0.5 - x1 * x1 - y1 * y1, || {
        grad_coord_2d(seed, i.wrapping_add(i1), j.wrapping_add(j1), x1, y1)
    });
    let n2 = corner(0.5 - x2 * x2 - y2 * y2, || {
        grad_coord_2d(seed, i.wrapping_add(1), j.wrapping_add(1), x2, y2)
    });

    50.0 * (n0 + n1 + n2)
}

/// Simplex noise at a frequency-scaled 3D point.
///
/// Returns a value roughly in `[-1, 1]` (scaled by 32).
#[must_use]
pub fn single_simplex_3d(seed: i32, x: Float, y: Float, z: Float) -> Float {
    let t = (x + y + z) * F3;
    let i = fast_floor(x + t);
    let j = fast_floor(y + t);
    let k = fast_floor(z + t);

    let t = i.wrapping_add(j).wrapping_add(k) as Float * G3;
    let x0 = x - (i as Float - t);
    let y0 = y - (j as Float - t);
    let z0 = z - (k as Float - t);

    // Determine which of the six tetrahedra of the skewed cube we're in
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0)
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    let x1 = x0 - i1 as Float + G3;
    let y1 = y0 - j1 as Float + G3;
    let z1 = z0 - k1 as Float + G3;
    let x2 = x0 - i2 as Float + F3;
    let y2 = y0 - j2 as Float + F3;
    let z2 = z0 - k2 as Float + F3;
    let x3 = x0 + G33;
    let y3 = y0 + G33;
    let z3 = z0 + G33;

    let n0 = corner(0.6 - x0 * x0 - y0 * y0 - z0 * z0, || {
        grad_coord_3d(seed, i, j, k, x0, y0, z0)
    });
    let n1 = corner(0.6 - x1 * x1 - y1 * y1 - z1 * z1, || {
        grad_coord_3d(
            seed,
            i.wrapping_add(i1),
            j.wrapping_add(j1),
            k.wrapping_add(k1),
            x1,
            y1,
            z1,
        )
    });
    let n2 = corner(0.6 - x2 * x2 - y2 * y2 - z2 * z2, || {
        grad_coord_3d(
            seed,
            i.wrapping_add(i2),
            j.wrapping_add(j2),
            k.wrapping_add(k2),
            x2,
            y2,
            z2,
        )
    });
    let n3 = corner(0.6 - x3 * x3 - y3 * y3 - z3 * z3, || {
        grad_coord_3d(
            seed,
            i.wrapping_add(1),
            j.wrapping_add(1),
            k.wrapping_add(1),
            x3,
            y3,
            z3,
        )
    });

    32.0 * (n0 + n1 + n2 + n3)
}

/// Offsets of the three intermediate 4D simplex corners along one axis,
/// derived from that axis' rank.
#[inline]
fn rank_steps(rank: u8) -> [i32; 3] {
    [
        i32::from(rank >= 3),
        i32::from(rank >= 2),
        i32::from(rank >= 1),
    ]
}

/// Lattice coordinates of a 4D simplex corner offset from `base`.
#[inline]
fn corner_4d(base: [i32; 4], step: [i32; 4]) -> [i32; 4] {
    array::from_fn(|n| base[n].wrapping_add(step[n]))
}

/// Simplex noise at a frequency-scaled 4D point.
///
/// Returns a value roughly in `[-1, 1]` (scaled by 27).
#[must_use]
pub fn single_simplex_4d(seed: i32, x: Float, y: Float, z: Float, w: Float) -> Float {
    let t = (x + y + z + w) * F4;
    let i = fast_floor(x + t);
    let j = fast_floor(y + t);
    let k = fast_floor(z + t);
    let l = fast_floor(w + t);

    let t = i.wrapping_add(j).wrapping_add(k).wrapping_add(l) as Float * G4;
    let x0 = x - (i as Float - t);
    let y0 = y - (j as Float - t);
    let z0 = z - (k as Float - t);
    let w0 = w - (l as Float - t);

    // Six pairwise comparisons rank the axes; the code indexes the rank table.
    let mut c = 0;
    if x0 > y0 {
        c += 32;
    }
    if x0 > z0 {
        c += 16;
    }
    if y0 > z0 {
        c += 8;
    }
    if x0 > w0 {
        c += 4;
    }
    if y0 > w0 {
        c += 2;
    }
    if z0 > w0 {
        c += 1;
    }
    let c = c << 2;

    let [i1, i2, i3] = rank_steps(SIMPLEX_4D[c]);
    let [j1, j2, j3] = rank_steps(SIMPLEX_4D[c + 1]);
    let [k1, k2, k3] = rank_steps(SIMPLEX_4D[c + 2]);
    let [l1, l2, l3] = rank_steps(SIMPLEX_4D[c + 3]);

    let x1 = x0 - i1 as Float + G4;
    let y1 = y0 - j1 as Float + G4;
    let z1 = z0 - k1 as Float + G4;
    let w1 = w0 - l1 as Float + G4;
    let x2 = x0 - i2 as Float + 2.0 * G4;
    let y2 = y0 - j2 as Float + 2.0 * G4;
    let z2 = z0 - k2 as Float + 2.0 * G4;
    let w2 = w0 - l2 as Float + 2.0 * G4;
    let x3 = x0 - i3 as Float + 3.0 * G4;
    let y3 = y0 - j3 as Float + 3.0 * G4;
    let z3 = z0 - k3 as Float + 3.0 * G4;
    let w3 = w0 - l3 as Float + 3.0 * G4;
    let x4 = x0 - 1.0 + 4.0 * G4;
    let y4 = y0 - 1.0 + 4.0 * G4;
    let z4 = z0 - 1.0 + 4.0 * G4;
    let w4 = w0 - 1.0 + 4.0 * G4;

    let n0 = corner(0.6 - x0 * x0 - y0 * y0 - z0 * z0 - w0 * w0, || {
        grad_coord_4d(seed, [i, j, k, l], x0, y0, z0, w0)
    });
    let n1 = corner(0.6 - x1 * x1 - y1 * y1 - z1 * z1 - w1 * w1, || {
        grad_coord_4d(seed, corner_4d([i, j, k, l], [i1, j1, k1, l1]), x1, y1, z1, w1)
    });
    let n2 = corner(0.6 - x2 * x2 - y2 * y2 - z2 * z2 - w2 * w2, || {
        grad_coord_4d(seed, corner_4d([i, j, k, l], [i2, j2, k2, l2]), x2, y2, z2, w2)
    });
    let n3 = corner(0.6 - x3 * x3 - y3 * y3 - z3 * z3 - w3 * w3, || {
        grad_coord_4d(seed, corner_4d([i, j, k, l], [i3, j3, k3, l3]), x3, y3, z3, w3)
    });
    let n4 = corner(0.6 - x4 * x4 - y4 * y4 - z4 * z4 - w4 * w4, || {
        grad_coord_4d(seed, corner_4d([i, j, k, l], [1, 1, 1, 1]), x4, y4, z4, w4)
    });

    27.0 * (n0 + n1 + n2 + n3 + n4)
}
