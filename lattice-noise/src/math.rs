//! Numeric width, lattice rounding and interpolation kernels.
//!
//! All noise code is written against [`Float`] so the whole crate switches
//! precision together; there is no mixed-width path.

/// Scalar type used for every coordinate, intermediate and result.
#[cfg(not(feature = "f64"))]
pub type Float = f32;
/// Scalar type used for every coordinate, intermediate and result.
#[cfg(feature = "f64")]
pub type Float = f64;

/// 2D coordinate matching [`Float`].
#[cfg(not(feature = "f64"))]
pub type Vector2 = glam::Vec2;
/// 2D coordinate matching [`Float`].
#[cfg(feature = "f64")]
pub type Vector2 = glam::DVec2;

/// 3D coordinate matching [`Float`].
#[cfg(not(feature = "f64"))]
pub type Vector3 = glam::Vec3;
/// 3D coordinate matching [`Float`].
#[cfg(feature = "f64")]
pub type Vector3 = glam::DVec3;

/// Lattice floor.
///
/// Negative integral inputs land one cell lower (`-1.0 -> -2`). The fractional
/// offset is then exactly `1.0`, which every kernel maps to the same value as
/// `0.0` in the next cell, so the output stays continuous.
///
/// Inputs outside the `i32` range saturate, and the offset wraps.
#[inline]
#[must_use]
pub fn fast_floor(f: Float) -> i32 {
    if f >= 0.0 {
        f as i32
    } else {
        (f as i32).wrapping_sub(1)
    }
}

/// Round half away from zero.
#[inline]
#[must_use]
pub fn fast_round(f: Float) -> i32 {
    if f >= 0.0 {
        (f + 0.5) as i32
    } else {
        (f - 0.5) as i32
    }
}

/// Linear blend of `a` and `b` by `t`.
#[inline]
#[must_use]
pub fn lerp(a: Float, b: Float, t: Float) -> Float {
    a + t * (b - a)
}

/// Hermite smoothstep: `t²(3 - 2t)`.
#[inline]
#[must_use]
pub fn interp_hermite(t: Float) -> Float {
    t * t * (3.0 - 2.0 * t)
}

/// Quintic smootherstep: `t³(t(6t - 15) + 10)`.
#[inline]
#[must_use]
pub fn interp_quintic(t: Float) -> Float {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Catmull-Rom cubic through `b` (t = 0) and `c` (t = 1), with `a` and `d` the
/// values one lattice step before and after. Tangents are scaled by 0.5.
#[inline]
#[must_use]
pub fn cubic_lerp(a: Float, b: Float, c: Float, d: Float, t: Float) -> Float {
    let t2 = t * t;
    let t3 = t2 * t;
    (-0.5 * a + 1.5 * b - 1.5 * c + 0.5 * d) * t3
        + (a - 2.5 * b + 2.0 * c - 0.5 * d) * t2
        + (-0.5 * a + 0.5 * c) * t
        + b
}
