//! The frequency-aware entry points for every noise family.

use crate::config::{NoiseConfig, NoiseType};
use crate::math::{Float, Vector2, Vector3};
use crate::noise::{cellular, cubic, fractal, perlin, simplex, value, warp, white};
use crate::noise::hash::{val_coord_2d, val_coord_3d, val_coord_4d};

/// Something that yields a scalar at a 2D or 3D point.
///
/// Cellular noise samples a `NoiseSource` at each winning feature point when
/// its return type is [`NoiseLookup`](crate::CellularReturnType::NoiseLookup).
pub trait NoiseSource: Send + Sync {
    /// Sample at a 2D point.
    fn sample_2d(&self, x: Float, y: Float) -> Float;

    /// Sample at a 3D point.
    fn sample_3d(&self, x: Float, y: Float, z: Float) -> Float;
}

/// A [`NoiseConfig`] together with the operations that evaluate it.
///
/// All evaluation goes through `&self`, so one generator can be shared between
/// threads for read-only sampling.
///
/// # Example
///
/// ```
/// use lattice_noise::{NoiseConfig, NoiseGenerator, NoiseType};
///
/// let mut config = NoiseConfig::new(42);
/// config.set_noise_type(NoiseType::PerlinFractal);
/// let noise = NoiseGenerator::new(config);
///
/// let a = noise.get_noise_2d(10.0, 20.0);
/// assert_eq!(a, noise.get_noise_2d(10.0, 20.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoiseGenerator {
    config: NoiseConfig,
}

impl NoiseGenerator {
    /// Wrap a configuration.
    #[must_use]
    pub const fn new(config: NoiseConfig) -> Self {
        Self { config }
    }

    /// The configuration every call reads.
    #[must_use]
    pub const fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Mutable access for changing parameters between calls.
    pub const fn config_mut(&mut self) -> &mut NoiseConfig {
        &mut self.config
    }

    #[inline]
    fn scale<const D: usize>(&self, point: [Float; D]) -> [Float; D] {
        let frequency = self.config.frequency();
        point.map(|c| c * frequency)
    }

    // ── Dispatch ────────────────────────────────────────────────────────────

    /// Evaluate the configured [`NoiseType`] at a 2D point.
    #[must_use]
    pub fn get_noise_2d(&self, x: Float, y: Float) -> Float {
        let c = &self.config;
        let [x, y] = self.scale([x, y]);
        match c.noise_type() {
            NoiseType::Value => value::single_value_2d(c.interp(), c.seed(), x, y),
            NoiseType::ValueFractal => fractal::fractal(c, [x, y], |seed, [x, y]| {
                value::single_value_2d(c.interp(), seed, x, y)
            }),
            NoiseType::Perlin => perlin::single_perlin_2d(c.interp(), c.seed(), x, y),
            NoiseType::PerlinFractal => fractal::fractal(c, [x, y], |seed, [x, y]| {
                perlin::single_perlin_2d(c.interp(), seed, x, y)
            }),
            NoiseType::Simplex => simplex::single_simplex_2d(c.seed(), x, y),
            NoiseType::SimplexFractal => fractal::fractal(c, [x, y], |seed, [x, y]| {
                simplex::single_simplex_2d(seed, x, y)
            }),
            NoiseType::Cellular => cellular::cellular_2d(c, x, y),
            NoiseType::WhiteNoise => white::white_noise_2d(c.seed(), x, y),
            NoiseType::Cubic => cubic::single_cubic_2d(c.seed(), x, y),
            NoiseType::CubicFractal => fractal::fractal(c, [x, y], |seed, [x, y]| {
                cubic::single_cubic_2d(seed, x, y)
            }),
        }
    }

    /// Evaluate the configured [`NoiseType`] at a 3D point.
    #[must_use]
    pub fn get_noise_3d(&self, x: Float, y: Float, z: Float) -> Float {
        let c = &self.config;
        let [x, y, z] = self.scale([x, y, z]);
        match c.noise_type() {
            NoiseType::Value => value::single_value_3d(c.interp(), c.seed(), x, y, z),
            NoiseType::ValueFractal => fractal::fractal(c, [x, y, z], |seed, [x, y, z]| {
                value::single_value_3d(c.interp(), seed, x, y, z)
            }),
            NoiseType::Perlin => perlin::single_perlin_3d(c.interp(), c.seed(), x, y, z),
            NoiseType::PerlinFractal => fractal::fractal(c, [x, y, z], |seed, [x, y, z]| {
                perlin::single_perlin_3d(c.interp(), seed, x, y, z)
            }),
            NoiseType::Simplex => simplex::single_simplex_3d(c.seed(), x, y, z),
            NoiseType::SimplexFractal => fractal::fractal(c, [x, y, z], |seed, [x, y, z]| {
                simplex::single_simplex_3d(seed, x, y, z)
            }),
            NoiseType::Cellular => cellular::cellular_3d(c, x, y, z),
            NoiseType::WhiteNoise => white::white_noise_3d(c.seed(), x, y, z),
            NoiseType::Cubic => cubic::single_cubic_3d(c.seed(), x, y, z),
            NoiseType::CubicFractal => fractal::fractal(c, [x, y, z], |seed, [x, y, z]| {
                cubic::single_cubic_3d(seed, x, y, z)
            }),
        }
    }

    // ── Value ───────────────────────────────────────────────────────────────

    /// Value noise at a 2D point.
    #[must_use]
    pub fn get_value_2d(&self, x: Float, y: Float) -> Float {
        let [x, y] = self.scale([x, y]);
        value::single_value_2d(self.config.interp(), self.config.seed(), x, y)
    }

    /// Value noise at a 3D point.
    #[must_use]
    pub fn get_value_3d(&self, x: Float, y: Float, z: Float) -> Float {
        let [x, y, z] = self.scale([x, y, z]);
        value::single_value_3d(self.config.interp(), self.config.seed(), x, y, z)
    }

    /// Fractal value noise at a 2D point.
    #[must_use]
    pub fn get_value_fractal_2d(&self, x: Float, y: Float) -> Float {
        let interp = self.config.interp();
        fractal::fractal(&self.config, self.scale([x, y]), |seed, [x, y]| {
            value::single_value_2d(interp, seed, x, y)
        })
    }

    /// Fractal value noise at a 3D point.
    #[must_use]
    pub fn get_value_fractal_3d(&self, x: Float, y: Float, z: Float) -> Float {
        let interp = self.config.interp();
        fractal::fractal(&self.config, self.scale([x, y, z]), |seed, [x, y, z]| {
            value::single_value_3d(interp, seed, x, y, z)
        })
    }

    // ── Perlin ──────────────────────────────────────────────────────────────

    /// Gradient noise at a 2D point.
    #[must_use]
    pub fn get_perlin_2d(&self, x: Float, y: Float) -> Float {
        let [x, y] = self.scale([x, y]);
        perlin::single_perlin_2d(self.config.interp(), self.config.seed(), x, y)
    }

    /// Gradient noise at a 3D point.
    #[must_use]
    pub fn get_perlin_3d(&self, x: Float, y: Float, z: Float) -> Float {
        let [x, y, z] = self.scale([x, y, z]);
        perlin::single_perlin_3d(self.config.interp(), self.config.seed(), x, y, z)
    }

    /// Fractal gradient noise at a 2D point.
    #[must_use]
    pub fn get_perlin_fractal_2d(&self, x: Float, y: Float) -> Float {
        let interp = self.config.interp();
        fractal::fractal(&self.config, self.scale([x, y]), |seed, [x, y]| {
            perlin::single_perlin_2d(interp, seed, x, y)
        })
    }

    /// Fractal gradient noise at a 3D point.
    #[must_use]
    pub fn get_perlin_fractal_3d(&self, x: Float, y: Float, z: Float) -> Float {
        let interp = self.config.interp();
        fractal::fractal(&self.config, self.scale([x, y, z]), |seed, [x, y, z]| {
            perlin::single_perlin_3d(interp, seed, x, y, z)
        })
    }

    // ── Simplex ─────────────────────────────────────────────────────────────

    /// Simplex noise at a 2D point.
    #[must_use]
    pub fn get_simplex_2d(&self, x: Float, y: Float) -> Float {
        let [x, y] = self.scale([x, y]);
        simplex::single_simplex_2d(self.config.seed(), x, y)
    }

    /// Simplex noise at a 3D point.
    #[must_use]
    pub fn get_simplex_3d(&self, x: Float, y: Float, z: Float) -> Float {
        let [x, y, z] = self.scale([x, y, z]);
        simplex::single_simplex_3d(self.config.seed(), x, y, z)
    }

    /// Simplex noise at a 4D point.
    #[must_use]
    pub fn get_simplex_4d(&self, x: Float, y: Float, z: Float, w: Float) -> Float {
        let [x, y, z, w] = self.scale([x, y, z, w]);
        simplex::single_simplex_4d(self.config.seed(), x, y, z, w)
    }

    /// Fractal simplex noise at a 2D point.
    #[must_use]
    pub fn get_simplex_fractal_2d(&self, x: Float, y: Float) -> Float {
        fractal::fractal(&self.config, self.scale([x, y]), |seed, [x, y]| {
            simplex::single_simplex_2d(seed, x, y)
        })
    }

    /// Fractal simplex noise at a 3D point.
    #[must_use]
    pub fn get_simplex_fractal_3d(&self, x: Float, y: Float, z: Float) -> Float {
        fractal::fractal(&self.config, self.scale([x, y, z]), |seed, [x, y, z]| {
            simplex::single_simplex_3d(seed, x, y, z)
        })
    }

    /// Fractal simplex noise at a 4D point.
    #[must_use]
    pub fn get_simplex_fractal_4d(&self, x: Float, y: Float, z: Float, w: Float) -> Float {
        fractal::fractal(&self.config, self.scale([x, y, z, w]), |seed, [x, y, z, w]| {
            simplex::single_simplex_4d(seed, x, y, z, w)
        })
    }

    // ── Cubic ───────────────────────────────────────────────────────────────

    /// Cubic noise at a 2D point.
    #[must_use]
    pub fn get_cubic_2d(&self, x: Float, y: Float) -> Float {
        let [x, y] = self.scale([x, y]);
        cubic::single_cubic_2d(self.config.seed(), x, y)
    }

    /// Cubic noise at a 3D point.
    #[must_use]
    pub fn get_cubic_3d(&self, x: Float, y: Float, z: Float) -> Float {
        let [x, y, z] = self.scale([x, y, z]);
        cubic::single_cubic_3d(self.config.seed(), x, y, z)
    }

    /// Fractal cubic noise at a 2D point.
    #[must_use]
    pub fn get_cubic_fractal_2d(&self, x: Float, y: Float) -> Float {
        fractal::fractal(&self.config, self.scale([x, y]), |seed, [x, y]| {
            cubic::single_cubic_2d(seed, x, y)
        })
    }

    /// Fractal cubic noise at a 3D point.
    #[must_use]
    pub fn get_cubic_fractal_3d(&self, x: Float, y: Float, z: Float) -> Float {
        fractal::fractal(&self.config, self.scale([x, y, z]), |seed, [x, y, z]| {
            cubic::single_cubic_3d(seed, x, y, z)
        })
    }

    // ── Cellular ────────────────────────────────────────────────────────────

    /// Cellular noise at a 2D point.
    #[must_use]
    pub fn get_cellular_2d(&self, x: Float, y: Float) -> Float {
        let [x, y] = self.scale([x, y]);
        cellular::cellular_2d(&self.config, x, y)
    }

    /// Cellular noise at a 3D point.
    #[must_use]
    pub fn get_cellular_3d(&self, x: Float, y: Float, z: Float) -> Float {
        let [x, y, z] = self.scale([x, y, z]);
        cellular::cellular_3d(&self.config, x, y, z)
    }

    // ── White noise ─────────────────────────────────────────────────────────

    /// White noise at a 2D point. Frequency is not applied.
    #[must_use]
    pub fn get_white_noise_2d(&self, x: Float, y: Float) -> Float {
        white::white_noise_2d(self.config.seed(), x, y)
    }

    /// White noise at a 3D point. Frequency is not applied.
    #[must_use]
    pub fn get_white_noise_3d(&self, x: Float, y: Float, z: Float) -> Float {
        white::white_noise_3d(self.config.seed(), x, y, z)
    }

    /// White noise at a 4D point. Frequency is not applied.
    #[must_use]
    pub fn get_white_noise_4d(&self, x: Float, y: Float, z: Float, w: Float) -> Float {
        white::white_noise_4d(self.config.seed(), x, y, z, w)
    }

    /// White noise at an integer 2D point.
    #[must_use]
    pub fn get_white_noise_int_2d(&self, x: i32, y: i32) -> Float {
        val_coord_2d(self.config.seed(), x, y)
    }

    /// White noise at an integer 3D point.
    #[must_use]
    pub fn get_white_noise_int_3d(&self, x: i32, y: i32, z: i32) -> Float {
        val_coord_3d(self.config.seed(), x, y, z)
    }

    /// White noise at an integer 4D point.
    #[must_use]
    pub fn get_white_noise_int_4d(&self, x: i32, y: i32, z: i32, w: i32) -> Float {
        val_coord_4d(self.config.seed(), x, y, z, w)
    }

    // ── Gradient perturb ────────────────────────────────────────────────────

    /// Displace a 2D point by one octave of the perturb field.
    #[must_use]
    pub fn gradient_perturb_2d(&self, point: Vector2) -> Vector2 {
        let c = &self.config;
        Vector2::from_array(warp::single_gradient_perturb_2d(
            c.interp(),
            c.seed(),
            c.gradient_perturb_amp(),
            c.frequency(),
            point.to_array(),
        ))
    }

    /// Displace a 3D point by one octave of the perturb field.
    #[must_use]
    pub fn gradient_perturb_3d(&self, point: Vector3) -> Vector3 {
        let c = &self.config;
        Vector3::from_array(warp::single_gradient_perturb_3d(
            c.interp(),
            c.seed(),
            c.gradient_perturb_amp(),
            c.frequency(),
            point.to_array(),
        ))
    }

    /// Displace a 2D point by every octave of the perturb field in turn.
    #[must_use]
    pub fn gradient_perturb_fractal_2d(&self, point: Vector2) -> Vector2 {
        Vector2::from_array(warp::gradient_perturb_fractal_2d(
            &self.config,
            point.to_array(),
        ))
    }

    /// Displace a 3D point by every octave of the perturb field in turn.
    #[must_use]
    pub fn gradient_perturb_fractal_3d(&self, point: Vector3) -> Vector3 {
        Vector3::from_array(warp::gradient_perturb_fractal_3d(
            &self.config,
            point.to_array(),
        ))
    }
}

impl NoiseSource for NoiseGenerator {
    fn sample_2d(&self, x: Float, y: Float) -> Float {
        self.get_noise_2d(x, y)
    }

    fn sample_3d(&self, x: Float, y: Float, z: Float) -> Float {
        self.get_noise_3d(x, y, z)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::{CellularReturnType, FractalType};

    fn generator(noise_type: NoiseType) -> NoiseGenerator {
        let mut config = NoiseConfig::new(1337);
        config.set_noise_type(noise_type);
        NoiseGenerator::new(config)
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let (x, y, z) = (123.4, -56.7, 8.9);
        assert_eq!(
            generator(NoiseType::Value).get_noise_2d(x, y),
            generator(NoiseType::Value).get_value_2d(x, y)
        );
        assert_eq!(
            generator(NoiseType::PerlinFractal).get_noise_3d(x, y, z),
            generator(NoiseType::PerlinFractal).get_perlin_fractal_3d(x, y, z)
        );
        assert_eq!(
            generator(NoiseType::Simplex).get_noise_2d(x, y),
            generator(NoiseType::Simplex).get_simplex_2d(x, y)
        );
        assert_eq!(
            generator(NoiseType::CubicFractal).get_noise_2d(x, y),
            generator(NoiseType::CubicFractal).get_cubic_fractal_2d(x, y)
        );
        assert_eq!(
            generator(NoiseType::Cellular).get_noise_3d(x, y, z),
            generator(NoiseType::Cellular).get_cellular_3d(x, y, z)
        );
    }

    #[test]
    fn white_noise_dispatch_applies_frequency() {
        let noise = generator(NoiseType::WhiteNoise);
        let f = noise.config().frequency();
        assert_eq!(
            noise.get_noise_2d(300.0, 700.0),
            noise.get_white_noise_2d(300.0 * f, 700.0 * f)
        );
    }

    #[test]
    fn white_noise_int_matches_value_hash() {
        let noise = generator(NoiseType::WhiteNoise);
        assert_eq!(noise.get_white_noise_int_3d(1, 2, 3), val_coord_3d(1337, 1, 2, 3));
    }

    #[test]
    fn rigid_multi_single_octave_inverts_magnitude() {
        let mut noise = generator(NoiseType::SimplexFractal);
        noise.config_mut().set_fractal_type(FractalType::RigidMulti);
        noise.config_mut().set_octaves(1);
        let direct = noise.get_simplex_2d(40.0, 80.0);
        let v = noise.get_noise_2d(40.0, 80.0);
        assert!((v - (1.0 - direct.abs())).abs() < 1e-6);
    }

    #[test]
    fn noise_lookup_samples_nested_source() {
        let mut inner = NoiseConfig::new(5);
        inner.set_noise_type(NoiseType::Value);
        inner.set_frequency(1.0);
        let inner: Arc<dyn NoiseSource> = Arc::new(NoiseGenerator::new(inner));

        let mut config = NoiseConfig::new(9);
        config.set_noise_type(NoiseType::Cellular);
        config.set_cellular_return_type(CellularReturnType::NoiseLookup);
        config.set_cellular_jitter(0.0);
        config.set_frequency(1.0);
        config.set_cellular_noise_lookup(Some(inner.clone()));
        let outer = NoiseGenerator::new(config);

        // With zero jitter the winning feature point is the nearest corner.
        let v = outer.get_noise_2d(3.1, 6.8);
        assert_eq!(v, inner.sample_2d(3.0, 7.0));
    }

    #[test]
    fn gradient_perturb_returns_new_point() {
        let noise = generator(NoiseType::Simplex);
        let p = Vector2::new(100.0, 200.0);
        let q = noise.gradient_perturb_2d(p);
        assert_ne!(p, q);
        assert!((q - p).length() <= noise.config().gradient_perturb_amp() + 1e-4);
    }

    #[test]
    fn generator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoiseGenerator>();
    }
}
