//! Noise parameters and the enums that select behavior within each family.
//!
//! A [`NoiseConfig`] is read-only for the duration of an evaluation: every
//! evaluation borrows it immutably, so it cannot change mid-call. Setters exist
//! for use between calls and keep derived values (the fractal bounding) in sync.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::NoiseSource;
use crate::math::{Float, interp_hermite, interp_quintic};

/// Highest rank index usable by the two-edge cellular return types.
pub const CELLULAR_INDEX_MAX: usize = 3;

/// Kernel used to blend lattice values along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interp {
    /// `t`
    Linear,
    /// `t²(3 - 2t)`
    Hermite,
    /// `t³(t(6t - 15) + 10)`
    #[default]
    Quintic,
}

impl Interp {
    /// Apply the kernel to a fractional lattice offset.
    #[inline]
    #[must_use]
    pub fn apply(self, t: Float) -> Float {
        match self {
            Self::Linear => t,
            Self::Hermite => interp_hermite(t),
            Self::Quintic => interp_quintic(t),
        }
    }
}

/// How successive octaves are combined by the fractal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalType {
    /// Fractional Brownian motion: plain weighted sum.
    #[default]
    Fbm,
    /// Sum of `|n| * 2 - 1`, giving rounded ridges.
    Billow,
    /// `1 - |n|` per octave, left unnormalized.
    RigidMulti,
}

/// Family evaluated by [`NoiseGenerator::get_noise_2d`](crate::NoiseGenerator::get_noise_2d)
/// and its 3D counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseType {
    /// Interpolated lattice values.
    Value,
    /// Fractal value noise.
    ValueFractal,
    /// Interpolated lattice gradients.
    Perlin,
    /// Fractal gradient noise.
    PerlinFractal,
    /// Simplex noise.
    #[default]
    Simplex,
    /// Fractal simplex noise.
    SimplexFractal,
    /// Worley noise.
    Cellular,
    /// Hash of the raw coordinate bits.
    WhiteNoise,
    /// Catmull-Rom interpolated lattice values.
    Cubic,
    /// Fractal cubic noise.
    CubicFractal,
}

/// Metric used to measure distance to cellular feature points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellularDistanceFunction {
    /// Squared Euclidean distance.
    #[default]
    Euclidean,
    /// L1 distance.
    Manhattan,
    /// L1 plus squared Euclidean.
    Natural,
}

impl CellularDistanceFunction {
    /// Distance of the offset `(x, y)`.
    #[inline]
    #[must_use]
    pub fn distance_2d(self, x: Float, y: Float) -> Float {
        match self {
            Self::Euclidean => x * x + y * y,
            Self::Manhattan => x.abs() + y.abs(),
            Self::Natural => (x.abs() + y.abs()) + (x * x + y * y),
        }
    }

    /// Distance of the offset `(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn distance_3d(self, x: Float, y: Float, z: Float) -> Float {
        match self {
            Self::Euclidean => x * x + y * y + z * z,
            Self::Manhattan => x.abs() + y.abs() + z.abs(),
            Self::Natural => (x.abs() + y.abs() + z.abs()) + (x * x + y * y + z * z),
        }
    }
}

/// Value produced by cellular noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellularReturnType {
    /// Hash of the nearest cell, in `[-1, 1)`.
    #[default]
    CellValue,
    /// Nested noise source sampled at the nearest feature point.
    NoiseLookup,
    /// Distance to the nearest feature point.
    Distance,
    /// Distance at rank `index1`.
    Distance2,
    /// `d[index1] + d[index0]`
    Distance2Add,
    /// `d[index1] - d[index0]`
    Distance2Sub,
    /// `d[index1] * d[index0]`
    Distance2Mul,
    /// `d[index0] / d[index1]`; NaN or infinite when `d[index1]` is zero.
    Distance2Div,
}

impl CellularReturnType {
    /// Whether this return type needs the ranked distance set rather than the
    /// single nearest feature.
    #[inline]
    #[must_use]
    pub const fn uses_ranked_distances(self) -> bool {
        !matches!(self, Self::CellValue | Self::NoiseLookup | Self::Distance)
    }
}

/// An error found while validating noise parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Frequency is zero, negative or not finite.
    #[error("Frequency must be finite and positive, got {0}")]
    InvalidFrequency(Float),
    /// Fractal variants need at least one octave.
    #[error("Octave count must be at least 1")]
    ZeroOctaves,
    /// A parameter that must be finite is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: Float,
    },
    /// Jitter is outside `[0, 1]`.
    #[error("Cellular jitter must be within [0, 1], got {0}")]
    JitterOutOfRange(Float),
    /// Rank indices are out of range or not strictly increasing.
    #[error("Cellular distance indices must satisfy index0 < index1 <= 3, got ({0}, {1})")]
    InvalidDistanceIndices(usize, usize),
    /// [`CellularReturnType::NoiseLookup`] was selected with no lookup source.
    #[error("Cellular return type noise_lookup requires a lookup source")]
    MissingLookup,
}

/// The full parameter set threaded through every evaluation.
#[derive(Clone)]
pub struct NoiseConfig {
    seed: i32,
    frequency: Float,
    interp: Interp,
    noise_type: NoiseType,

    octaves: u32,
    lacunarity: Float,
    gain: Float,
    fractal_type: FractalType,
    fractal_bounding: Float,

    cellular_distance_function: CellularDistanceFunction,
    cellular_return_type: CellularReturnType,
    cellular_noise_lookup: Option<Arc<dyn NoiseSource>>,
    cellular_distance_index0: usize,
    cellular_distance_index1: usize,
    cellular_jitter: Float,

    gradient_perturb_amp: Float,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self::new(1337)
    }
}

impl fmt::Debug for NoiseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseConfig")
            .field("seed", &self.seed)
            .field("frequency", &self.frequency)
            .field("interp", &self.interp)
            .field("noise_type", &self.noise_type)
            .field("octaves", &self.octaves)
            .field("lacunarity", &self.lacunarity)
            .field("gain", &self.gain)
            .field("fractal_type", &self.fractal_type)
            .field("fractal_bounding", &self.fractal_bounding)
            .field("cellular_distance_function", &self.cellular_distance_function)
            .field("cellular_return_type", &self.cellular_return_type)
            .field("cellular_noise_lookup", &self.cellular_noise_lookup.is_some())
            .field(
                "cellular_distance_indices",
                &(self.cellular_distance_index0, self.cellular_distance_index1),
            )
            .field("cellular_jitter", &self.cellular_jitter)
            .field("gradient_perturb_amp", &self.gradient_perturb_amp)
            .finish()
    }
}

impl NoiseConfig {
    /// Default parameters with the given seed.
    #[must_use]
    pub fn new(seed: i32) -> Self {
        let mut config = Self {
            seed,
            frequency: 0.01,
            interp: Interp::Quintic,
            noise_type: NoiseType::Simplex,
            octaves: 3,
            lacunarity: 2.0,
            gain: 0.5,
            fractal_type: FractalType::Fbm,
            fractal_bounding: 1.0,
            cellular_distance_function: CellularDistanceFunction::Euclidean,
            cellular_return_type: CellularReturnType::CellValue,
            cellular_noise_lookup: None,
            cellular_distance_index0: 0,
            cellular_distance_index1: 1,
            cellular_jitter: 0.45,
            gradient_perturb_amp: 1.0,
        };
        config.calculate_fractal_bounding();
        config
    }

    /// Inverse of the amplitude sum `1 + gain + gain² + ...` over all octaves,
    /// so FBM and Billow stay near `[-1, 1]` for any octave count.
    fn calculate_fractal_bounding(&mut self) {
        let mut amp = self.gain;
        let mut amp_fractal = 1.0;
        for _ in 1..self.octaves {
            amp_fractal += amp;
            amp *= self.gain;
        }
        self.fractal_bounding = 1.0 / amp_fractal;
    }

    /// Check every parameter an evaluation relies on.
    ///
    /// Evaluation itself never validates; an unchecked configuration produces
    /// garbage rather than an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(ConfigError::InvalidFrequency(self.frequency));
        }
        if self.octaves == 0 {
            return Err(ConfigError::ZeroOctaves);
        }
        for (name, value) in [
            ("lacunarity", self.lacunarity),
            ("gain", self.gain),
            ("gradient_perturb_amp", self.gradient_perturb_amp),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.cellular_jitter) {
            return Err(ConfigError::JitterOutOfRange(self.cellular_jitter));
        }
        if self.cellular_return_type == CellularReturnType::NoiseLookup
            && self.cellular_noise_lookup.is_none()
        {
            return Err(ConfigError::MissingLookup);
        }
        Ok(())
    }

    /// Seed of the first octave.
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    /// Set the seed.
    pub const fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    /// Multiplier applied to input coordinates before any lattice math.
    #[must_use]
    pub const fn frequency(&self) -> Float {
        self.frequency
    }

    /// Set the frequency.
    pub const fn set_frequency(&mut self, frequency: Float) {
        self.frequency = frequency;
    }

    /// Interpolation kernel for value, perlin and gradient-perturb lattices.
    #[must_use]
    pub const fn interp(&self) -> Interp {
        self.interp
    }

    /// Set the interpolation kernel.
    pub const fn set_interp(&mut self, interp: Interp) {
        self.interp = interp;
    }

    /// Family used by the `get_noise_*` dispatchers.
    #[must_use]
    pub const fn noise_type(&self) -> NoiseType {
        self.noise_type
    }

    /// Set the noise type.
    pub const fn set_noise_type(&mut self, noise_type: NoiseType) {
        self.noise_type = noise_type;
    }

    /// Octave count of the fractal variants.
    #[must_use]
    pub const fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Set the octave count and recompute the fractal bounding.
    pub fn set_octaves(&mut self, octaves: u32) {
        self.octaves = octaves;
        self.calculate_fractal_bounding();
    }

    /// Frequency multiplier between octaves.
    #[must_use]
    pub const fn lacunarity(&self) -> Float {
        self.lacunarity
    }

    /// Set the lacunarity.
    pub const fn set_lacunarity(&mut self, lacunarity: Float) {
        self.lacunarity = lacunarity;
    }

    /// Amplitude multiplier between octaves.
    #[must_use]
    pub const fn gain(&self) -> Float {
        self.gain
    }

    /// Set the gain and recompute the fractal bounding.
    pub fn set_gain(&mut self, gain: Float) {
        self.gain = gain;
        self.calculate_fractal_bounding();
    }

    /// Octave combination rule.
    #[must_use]
    pub const fn fractal_type(&self) -> FractalType {
        self.fractal_type
    }

    /// Set the fractal type.
    pub const fn set_fractal_type(&mut self, fractal_type: FractalType) {
        self.fractal_type = fractal_type;
    }

    /// Normalization factor derived from `octaves` and `gain`.
    #[must_use]
    pub const fn fractal_bounding(&self) -> Float {
        self.fractal_bounding
    }

    /// Metric for cellular noise.
    #[must_use]
    pub const fn cellular_distance_function(&self) -> CellularDistanceFunction {
        self.cellular_distance_function
    }

    /// Set the cellular distance function.
    pub const fn set_cellular_distance_function(&mut self, function: CellularDistanceFunction) {
        self.cellular_distance_function = function;
    }

    /// What cellular noise returns.
    #[must_use]
    pub const fn cellular_return_type(&self) -> CellularReturnType {
        self.cellular_return_type
    }

    /// Set the cellular return type.
    pub const fn set_cellular_return_type(&mut self, return_type: CellularReturnType) {
        self.cellular_return_type = return_type;
    }

    /// Source sampled by [`CellularReturnType::NoiseLookup`].
    #[must_use]
    pub fn cellular_noise_lookup(&self) -> Option<&dyn NoiseSource> {
        self.cellular_noise_lookup.as_deref()
    }

    /// Set the source sampled by [`CellularReturnType::NoiseLookup`].
    ///
    /// The source is shared, not owned; it must not (transitively) refer back
    /// to this configuration.
    pub fn set_cellular_noise_lookup(&mut self, lookup: Option<Arc<dyn NoiseSource>>) {
        self.cellular_noise_lookup = lookup;
    }

    /// Rank indices `(index0, index1)` used by the two-edge return types.
    #[must_use]
    pub const fn cellular_distance_indices(&self) -> (usize, usize) {
        (self.cellular_distance_index0, self.cellular_distance_index1)
    }

    /// Set the rank indices. The pair is ordered and clamped to
    /// `0..=CELLULAR_INDEX_MAX`, so evaluation never indexes out of bounds.
    pub fn set_cellular_distance_indices(&mut self, index0: usize, index1: usize) {
        self.cellular_distance_index0 = index0.min(index1).min(CELLULAR_INDEX_MAX);
        self.cellular_distance_index1 = index0.max(index1).min(CELLULAR_INDEX_MAX);
    }

    /// Scale of the feature-point displacement from each cell's integer corner.
    #[must_use]
    pub const fn cellular_jitter(&self) -> Float {
        self.cellular_jitter
    }

    /// Set the cellular jitter.
    pub const fn set_cellular_jitter(&mut self, jitter: Float) {
        self.cellular_jitter = jitter;
    }

    /// Displacement scale of the gradient perturb.
    #[must_use]
    pub const fn gradient_perturb_amp(&self) -> Float {
        self.gradient_perturb_amp
    }

    /// Set the gradient perturb amplitude.
    pub const fn set_gradient_perturb_amp(&mut self, amp: Float) {
        self.gradient_perturb_amp = amp;
    }
}
