//! Noise primitives and the components they share.
//!
//! - [`hash`] - Lattice coordinate hashing
//! - [`value`] - Interpolated lattice values
//! - [`perlin`] - Interpolated lattice gradients
//! - [`cubic`] - Catmull-Rom interpolated lattice values
//! - [`simplex`] - Simplex noise in 2D, 3D and 4D
//! - [`cellular`] - Worley noise
//! - [`white`] - Hash of raw coordinate bits
//! - [`fractal`] - Octave accumulation over any primitive
//! - [`warp`] - Gradient perturb (domain warp)
//!
//! Primitives here take coordinates already scaled by frequency. The public,
//! frequency-aware entry points live on [`NoiseGenerator`](crate::NoiseGenerator).

pub mod cellular;
pub mod cubic;
pub mod fractal;
pub mod hash;
pub mod perlin;
pub mod simplex;
mod tables;
pub mod value;
pub mod warp;
pub mod white;
