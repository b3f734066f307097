//! White noise: a lattice value hash of the raw coordinate bits.
//!
//! Neighbouring inputs are uncorrelated, however close they are.

use crate::math::Float;

use super::hash::{val_coord_2d, val_coord_3d, val_coord_4d};

/// Fold the bit pattern of `f`, widened to 64 bits, into 32 bits.
///
/// The widening keeps the result independent of the build's float width for
/// any value representable in `f32`.
#[inline]
fn float_bits(f: Float) -> i32 {
    let bits = f64::from(f).to_bits() as i64;
    (bits ^ (bits >> 32)) as i32
}

/// White noise at a 2D point.
#[must_use]
pub fn white_noise_2d(seed: i32, x: Float, y: Float) -> Float {
    val_coord_2d(seed, float_bits(x), float_bits(y))
}

/// White noise at a 3D point.
#[must_use]
pub fn white_noise_3d(seed: i32, x: Float, y: Float, z: Float) -> Float {
    val_coord_3d(seed, float_bits(x), float_bits(y), float_bits(z))
}

/// White noise at a 4D point.
#[must_use]
pub fn white_noise_4d(seed: i32, x: Float, y: Float, z: Float, w: Float) -> Float {
    val_coord_4d(
        seed,
        float_bits(x),
        float_bits(y),
        float_bits(z),
        float_bits(w),
    )
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn zero_bits_fold_to_zero() {
        assert_eq!(float_bits(0.0), 0);
        assert_eq!(white_noise_2d(0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn sign_of_zero_is_significant() {
        assert_ne!(float_bits(0.0), float_bits(-0.0));
    }

    #[test]
    fn nearby_inputs_are_uncorrelated() {
        let a = white_noise_3d(9, 1.0, 2.0, 3.0);
        let b = white_noise_3d(9, 1.000_001, 2.0, 3.0);
        assert_ne!(a, b);
    }

    #[test]
    fn stays_in_value_range() {
        for i in 0..1000 {
            let t = i as Float * 0.731;
            let v = white_noise_4d(77, t, -t, t * 0.5, 1.0);
            assert!((-1.0..1.0).contains(&v), "{v}");
        }
    }
}
