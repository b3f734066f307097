//! Serializable generator description and the validation that guards the core.
//!
//! Evaluation never checks its inputs. [`NoiseSettings::build`] is where bad
//! values are rejected before they can reach a [`NoiseConfig`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{
    CELLULAR_INDEX_MAX, CellularDistanceFunction, CellularReturnType, ConfigError, FractalType,
    Interp, NoiseConfig, NoiseType,
};
use crate::generator::{NoiseGenerator, NoiseSource};
use crate::math::Float;

/// Every [`NoiseConfig`] parameter in a form that can be read from a file.
///
/// Missing fields take the [`NoiseConfig::default`] values. A cellular lookup
/// source is described inline as a nested `lookup` table, so lookups form a
/// tree and can never cycle.
///
/// ```
/// use lattice_noise::{NoiseSettings, NoiseType};
///
/// let settings = NoiseSettings {
///     noise_type: NoiseType::Cellular,
///     seed: 7,
///     ..NoiseSettings::default()
/// };
/// let noise = settings.build().expect("defaults are valid");
/// assert_eq!(noise.config().seed(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Seed of the first octave.
    pub seed: i32,
    /// Coordinate multiplier.
    pub frequency: Float,
    /// Interpolation kernel.
    pub interp: Interp,
    /// Family used by `get_noise_*`.
    pub noise_type: NoiseType,
    /// Octave count of the fractal variants.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: Float,
    /// Amplitude multiplier between octaves.
    pub gain: Float,
    /// Octave combination rule.
    pub fractal_type: FractalType,
    /// Cellular distance metric.
    pub cellular_distance_function: CellularDistanceFunction,
    /// What cellular noise returns.
    pub cellular_return_type: CellularReturnType,
    /// Lower rank index for the two-edge return types.
    pub cellular_distance_index0: usize,
    /// Upper rank index for the two-edge return types.
    pub cellular_distance_index1: usize,
    /// Feature point displacement, in `[0, 1]`.
    pub cellular_jitter: Float,
    /// Gradient perturb amplitude.
    pub gradient_perturb_amp: Float,
    /// Source sampled by the `noise_lookup` cellular return type.
    pub lookup: Option<Box<NoiseSettings>>,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        let config = NoiseConfig::default();
        let (index0, index1) = config.cellular_distance_indices();
        Self {
            seed: config.seed(),
            frequency: config.frequency(),
            interp: config.interp(),
            noise_type: config.noise_type(),
            octaves: config.octaves(),
            lacunarity: config.lacunarity(),
            gain: config.gain(),
            fractal_type: config.fractal_type(),
            cellular_distance_function: config.cellular_distance_function(),
            cellular_return_type: config.cellular_return_type(),
            cellular_distance_index0: index0,
            cellular_distance_index1: index1,
            cellular_jitter: config.cellular_jitter(),
            gradient_perturb_amp: config.gradient_perturb_amp(),
            lookup: None,
        }
    }
}

impl NoiseSettings {
    /// Validate the settings (and any nested lookup) and build a generator.
    pub fn build(&self) -> Result<NoiseGenerator, ConfigError> {
        self.build_config()
            .inspect_err(|err| tracing::warn!("Rejected noise settings: {err}"))
            .map(NoiseGenerator::new)
    }

    fn build_config(&self) -> Result<NoiseConfig, ConfigError> {
        let (index0, index1) = (self.cellular_distance_index0, self.cellular_distance_index1);
        if index0 >= index1 || index1 > CELLULAR_INDEX_MAX {
            return Err(ConfigError::InvalidDistanceIndices(index0, index1));
        }

        let mut config = NoiseConfig::new(self.seed);
        config.set_frequency(self.frequency);
        config.set_interp(self.interp);
        config.set_noise_type(self.noise_type);
        config.set_octaves(self.octaves);
        config.set_lacunarity(self.lacunarity);
        config.set_gain(self.gain);
        config.set_fractal_type(self.fractal_type);
        config.set_cellular_distance_function(self.cellular_distance_function);
        config.set_cellular_return_type(self.cellular_return_type);
        config.set_cellular_distance_indices(index0, index1);
        config.set_cellular_jitter(self.cellular_jitter);
        config.set_gradient_perturb_amp(self.gradient_perturb_amp);

        if let Some(lookup) = &self.lookup {
            let source: Arc<dyn NoiseSource> =
                Arc::new(NoiseGenerator::new(lookup.build_config()?));
            config.set_cellular_noise_lookup(Some(source));
        }

        config.validate()?;
        tracing::debug!(?config, "Built noise configuration");
        Ok(config)
    }
}
