//! Lattice coordinate hashing.
//!
//! Maps `(seed, integer lattice point)` to 32 pseudo-random bits using only
//! wrapping multiply, xor and arithmetic shift, so results are identical on
//! every platform. The bits are either masked to index a direction table or
//! scaled into a scalar in `[-1, 1)`.

use crate::math::Float;

use super::tables::{CELL_2D, CELL_3D, GRAD_2D, GRAD_3D};

const X_PRIME: i32 = 1619;
const Y_PRIME: i32 = 31337;
const Z_PRIME: i32 = 6971;
const W_PRIME: i32 = 1013;

/// `2^31`, maps a full-range `i32` into `[-1, 1)`.
const INT_SCALE: Float = 2_147_483_648.0;

#[inline]
const fn avalanche(hash: i32) -> i32 {
    let hash = hash
        .wrapping_mul(hash)
        .wrapping_mul(hash)
        .wrapping_mul(60493);
    (hash >> 13) ^ hash
}

#[inline]
fn scramble_to_unit(n: i32) -> Float {
    n.wrapping_mul(n).wrapping_mul(n).wrapping_mul(60493) as Float / INT_SCALE
}

#[inline]
const fn mix_2d(seed: i32, x: i32, y: i32) -> i32 {
    seed ^ X_PRIME.wrapping_mul(x) ^ Y_PRIME.wrapping_mul(y)
}

#[inline]
const fn mix_3d(seed: i32, x: i32, y: i32, z: i32) -> i32 {
    mix_2d(seed, x, y) ^ Z_PRIME.wrapping_mul(z)
}

#[inline]
const fn mix_4d(seed: i32, x: i32, y: i32, z: i32, w: i32) -> i32 {
    mix_3d(seed, x, y, z) ^ W_PRIME.wrapping_mul(w)
}

/// Hash a 2D lattice point.
#[inline]
#[must_use]
pub const fn hash_2d(seed: i32, x: i32, y: i32) -> i32 {
    avalanche(mix_2d(seed, x, y))
}

/// Hash a 3D lattice point.
#[inline]
#[must_use]
pub const fn hash_3d(seed: i32, x: i32, y: i32, z: i32) -> i32 {
    avalanche(mix_3d(seed, x, y, z))
}

/// Hash a 4D lattice point.
#[inline]
#[must_use]
pub const fn hash_4d(seed: i32, x: i32, y: i32, z: i32, w: i32) -> i32 {
    avalanche(mix_4d(seed, x, y, z, w))
}

/// Scalar in `[-1, 1)` for a 2D lattice point.
#[inline]
#[must_use]
pub fn val_coord_2d(seed: i32, x: i32, y: i32) -> Float {
    scramble_to_unit(mix_2d(seed, x, y))
}

/// Scalar in `[-1, 1)` for a 3D lattice point.
#[inline]
#[must_use]
pub fn val_coord_3d(seed: i32, x: i32, y: i32, z: i32) -> Float {
    scramble_to_unit(mix_3d(seed, x, y, z))
}

/// Scalar in `[-1, 1)` for a 4D lattice point.
#[inline]
#[must_use]
pub fn val_coord_4d(seed: i32, x: i32, y: i32, z: i32, w: i32) -> Float {
    scramble_to_unit(mix_4d(seed, x, y, z, w))
}

/// Dot product of the corner's gradient with the offset `(xd, yd)` from that corner.
#[inline]
pub(crate) fn grad_coord_2d(seed: i32, x: i32, y: i32, xd: Float, yd: Float) -> Float {
    let [gx, gy] = GRAD_2D[(hash_2d(seed, x, y) & 7) as usize];
    xd * gx + yd * gy
}

#[inline]
pub(crate) fn grad_coord_3d(
    seed: i32,
    x: i32,
    y: i32,
    z: i32,
    xd: Float,
    yd: Float,
    zd: Float,
) -> Float {
    let [gx, gy, gz] = GRAD_3D[(hash_3d(seed, x, y, z) & 15) as usize];
    xd * gx + yd * gy + zd * gz
}

/// 4D gradients are chosen from 32 directions without a table: the high two
/// bits pick which three axes take part, the low three bits their signs.
#[inline]
pub(crate) fn grad_coord_4d(
    seed: i32,
    [x, y, z, w]: [i32; 4],
    xd: Float,
    yd: Float,
    zd: Float,
    wd: Float,
) -> Float {
    let hash = hash_4d(seed, x, y, z, w) & 31;
    let (a, b, c) = match hash >> 3 {
        1 => (wd, xd, yd),
        2 => (zd, wd, xd),
        _ => (yd, zd, wd),
    };
    let a = if hash & 4 == 0 { -a } else { a };
    let b = if hash & 2 == 0 { -b } else { b };
    let c = if hash & 1 == 0 { -c } else { c };
    a + b + c
}

/// Feature-point direction of a 2D cell.
#[inline]
pub(crate) fn cell_2d(seed: i32, x: i32, y: i32) -> [Float; 2] {
    CELL_2D[(hash_2d(seed, x, y) & 255) as usize]
}

/// Feature-point direction of a 3D cell.
#[inline]
pub(crate) fn cell_3d(seed: i32, x: i32, y: i32, z: i32) -> [Float; 3] {
    CELL_3D[(hash_3d(seed, x, y, z) & 255) as usize]
}
